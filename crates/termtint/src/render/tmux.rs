use std::sync::Arc;

use super::Renderer;
use crate::error::EmptyPaletteError;
use crate::palette::Palettes;
use crate::sgr::codes;
use crate::style::{Attribute, Fidelity, Layer, Style};
use crate::termco::{Color, TerminalColor};

/// Get tmux's keyword for enabling the attribute. The keyword for disabling
/// the attribute adds the `no` prefix.
pub const fn tmux_keyword(attribute: Attribute) -> &'static str {
    use self::Attribute::*;

    match attribute {
        Bold => "bold",
        Dim => "dim",
        Italic => "italics",
        Underlined => "underscore",
        DoubleUnderlined => "double-underscore",
        Blinking => "blink",
        Inverse => "reverse",
        Hidden => "hidden",
        Strikethrough => "strikethrough",
        Overlined => "overline",
    }
}

/// Escape the text for tmux's format strings.
///
/// tmux treats `#` as the start of a directive or variable, so the text
/// doubles every `#`.
pub fn escape_tmux(text: &str) -> String {
    text.replace('#', "##")
}

const ANSI_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// A renderer for tmux's format strings, as used in the status line.
///
/// The renderer caps the style to its fidelity and then emits a `#[...]`
/// directive with the colors and enabled attributes, the text, and another
/// directive that restores the default colors and disables the attributes
/// again. The text is escaped with [`escape_tmux`].
///
/// ```
/// # use std::sync::Arc;
/// # use termtint::palette::{Palettes, XTERM_16};
/// # use termtint::render::{Renderer, TmuxRenderer};
/// # use termtint::style::{Fidelity, Style};
/// let renderer = TmuxRenderer::new(Arc::new(Palettes::xterm()), Fidelity::Auto);
/// let style = Style::builder().bold().foreground(XTERM_16[9]).build();
/// assert_eq!(
///     renderer.render("AB", &style)?,
///     "#[fg=brightred,bold]AB#[fg=default,nobold]"
/// );
/// # Ok::<(), termtint::error::EmptyPaletteError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TmuxRenderer {
    palettes: Arc<Palettes>,
    fidelity: Fidelity,
}

impl TmuxRenderer {
    /// Create a new tmux renderer.
    pub fn new(palettes: Arc<Palettes>, fidelity: Fidelity) -> Self {
        Self { palettes, fidelity }
    }
}

fn tmux_color(color: Color) -> Option<String> {
    match color {
        Color::NoOp => None,
        Color::Sixteen(c) => {
            let code = c.code(Layer::Foreground);
            Some(match code {
                codes::BLACK..=codes::WHITE => {
                    ANSI_NAMES[(code - codes::BLACK) as usize].to_string()
                }
                codes::GRAY..=codes::HI_WHITE => {
                    format!("bright{}", ANSI_NAMES[(code - codes::GRAY) as usize])
                }
                _ => c.rgb().to_string(),
            })
        }
        Color::TwoFiveSix(c) => Some(format!("colour{}", c.index())),
        Color::Rgb(c) => Some(c.rgb().to_string()),
    }
}

impl Renderer for TmuxRenderer {
    fn render(&self, text: &str, style: &Style) -> Result<String, EmptyPaletteError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let style = style.cap(self.fidelity, &self.palettes)?;
        let mut on = Vec::new();
        let mut off = Vec::new();

        for (key, color) in [("fg", style.foreground()), ("bg", style.background())] {
            if let Some(value) = tmux_color(color) {
                on.push(format!("{}={}", key, value));
                off.push(format!("{}=default", key));
            }
        }
        for attribute in style.format().enable().attributes() {
            on.push(tmux_keyword(attribute).to_string());
            off.push(format!("no{}", tmux_keyword(attribute)));
        }

        let text = escape_tmux(text);
        if on.is_empty() {
            return Ok(text);
        }

        Ok(format!("#[{}]{}#[{}]", on.join(","), text, off.join(",")))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::palette::XTERM_16;
    use crate::termco::{Color256, ColorRgb};

    fn renderer(fidelity: Fidelity) -> TmuxRenderer {
        TmuxRenderer::new(Arc::new(Palettes::xterm()), fidelity)
    }

    #[test]
    fn test_colors() {
        assert_eq!(tmux_color(Color::NoOp), None);
        assert_eq!(tmux_color(XTERM_16[1].into()).as_deref(), Some("red"));
        assert_eq!(tmux_color(XTERM_16[15].into()).as_deref(), Some("brightwhite"));
        assert_eq!(
            tmux_color(Color256::new(0xaf87ff, 141).into()).as_deref(),
            Some("colour141")
        );
        assert_eq!(
            tmux_color(ColorRgb::named(0x3aeba1, "teal").into()).as_deref(),
            Some("#3aeba1")
        );
    }

    #[test]
    fn test_render() -> Result<(), EmptyPaletteError> {
        let style = Style::builder()
            .underlined()
            .italic()
            .foreground(ColorRgb::named(0x3aeba1, "teal"))
            .background(XTERM_16[4])
            .build();

        assert_eq!(
            renderer(Fidelity::TrueColor).render("AB", &style)?,
            "#[fg=#3aeba1,bg=blue,italics,underscore]AB#[fg=default,bg=default,noitalics,nounderscore]"
        );
        assert_eq!(
            renderer(Fidelity::Xterm256).render("AB", &style)?,
            "#[fg=colour79,bg=blue,italics,underscore]AB#[fg=default,bg=default,noitalics,nounderscore]"
        );
        assert_eq!(renderer(Fidelity::NoAnsi).render("AB", &style)?, "AB");
        assert_eq!(renderer(Fidelity::TrueColor).render("", &style)?, "");
        assert_eq!(
            renderer(Fidelity::TrueColor).render("AB", &Style::default())?,
            "AB"
        );
        Ok(())
    }

    #[test]
    fn test_escape() -> Result<(), EmptyPaletteError> {
        assert_eq!(escape_tmux("#[fg=red]#{pane_id} ##"), "##[fg=red]##{pane_id} ####");
        assert_eq!(escape_tmux("plain"), "plain");

        let style = Style::builder().bold().build();
        assert_eq!(
            renderer(Fidelity::Xterm16).render("#[fg=red]1", &style)?,
            "#[bold]##[fg=red]1#[nobold]"
        );
        assert_eq!(renderer(Fidelity::NoAnsi).render("#1", &style)?, "##1");
        Ok(())
    }
}
