use super::Renderer;
use crate::error::EmptyPaletteError;
use crate::style::{Attribute, Style};
use crate::termco::Color;

/// A renderer for HTML.
///
/// The renderer wraps the escaped text in a `<span>` element whose inline
/// style has the CSS declarations for the style's colors and enabled
/// attributes. Browsers display arbitrary colors, so colors are never
/// downgraded.
///
/// ```
/// # use termtint::render::{HtmlRenderer, Renderer};
/// # use termtint::style::Style;
/// # use termtint::termco::ColorRgb;
/// let style = Style::builder()
///     .bold()
///     .foreground(ColorRgb::named(0xd72827, "brick"))
///     .build();
/// assert_eq!(
///     HtmlRenderer.render("<Wow!>", &style)?,
///     "<span style=\"color: #d72827; font-weight: 700\">&lt;Wow!&gt;</span>"
/// );
/// # Ok::<(), termtint::error::EmptyPaletteError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    /// Determine the CSS declarations for the style.
    pub fn declarations(&self, style: &Style) -> Vec<String> {
        let mut foreground = style.foreground();
        let mut background = style.background();
        let inverse = style.is_enabled(Attribute::Inverse);
        let mut filters = Vec::new();

        if inverse {
            if foreground.is_noop() && background.is_noop() {
                filters.push("invert(100%)");
            } else {
                std::mem::swap(&mut foreground, &mut background);
            }
        }

        let mut declarations = Vec::new();
        if let Some(hex) = css_color(foreground) {
            declarations.push(format!("color: {}", hex));
        }
        if let Some(hex) = css_color(background) {
            declarations.push(format!("background-color: {}", hex));
        }
        if style.is_enabled(Attribute::Bold) {
            declarations.push("font-weight: 700".to_string());
        }
        if style.is_enabled(Attribute::Dim) {
            filters.insert(0, "saturate(0.5) brightness(0.75)");
        }
        if !filters.is_empty() {
            declarations.push(format!("filter: {}", filters.join(" ")));
        }
        if style.is_enabled(Attribute::Italic) {
            declarations.push("font-style: italic".to_string());
        }

        let double = style.is_enabled(Attribute::DoubleUnderlined);
        let decorations: Vec<_> = [
            (style.is_enabled(Attribute::Underlined) || double, "underline"),
            (style.is_enabled(Attribute::Overlined), "overline"),
            (style.is_enabled(Attribute::Strikethrough), "line-through"),
            (style.is_enabled(Attribute::Blinking), "blink"),
        ]
        .into_iter()
        .filter_map(|(enabled, value)| enabled.then_some(value))
        .collect();
        if !decorations.is_empty() {
            declarations.push(format!("text-decoration: {}", decorations.join(" ")));
        }
        if double {
            declarations.push("text-decoration-style: double".to_string());
        }

        if style.is_enabled(Attribute::Hidden) {
            declarations.push("visibility: hidden".to_string());
        }

        declarations
    }
}

fn css_color(color: Color) -> Option<String> {
    color.rgb().map(|rgb| rgb.to_string())
}

/// Escape the text for use in HTML.
pub fn escape_html(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

impl Renderer for HtmlRenderer {
    fn render(&self, text: &str, style: &Style) -> Result<String, EmptyPaletteError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let declarations = self.declarations(style);
        let text = escape_html(text);
        if declarations.is_empty() {
            Ok(format!("<span>{}</span>", text))
        } else {
            Ok(format!(
                "<span style=\"{}\">{}</span>",
                declarations.join("; "),
                text
            ))
        }
    }
}
