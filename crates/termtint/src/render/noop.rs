use super::{Renderer, SgrRenderer};
use crate::error::EmptyPaletteError;
use crate::style::Style;

/// A renderer that ignores styles and passes text through.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoOpRenderer;

impl Renderer for NoOpRenderer {
    fn render(&self, text: &str, _style: &Style) -> Result<String, EmptyPaletteError> {
        Ok(text.to_string())
    }
}

// ----------------------------------------------------------------------------------------------------------

/// The visible stand-in for the escape character.
pub const ESCAPE_MARKER: &str = "ǝ";

/// A renderer for inspecting SGR output.
///
/// This renderer delegates to an [`SgrRenderer`] and then replaces every
/// escape character with [`ESCAPE_MARKER`], which makes the result safe to
/// print and easy to compare.
///
/// ```
/// # use std::sync::Arc;
/// # use termtint::palette::Palettes;
/// # use termtint::render::{DebugRenderer, Renderer, SgrRenderer};
/// # use termtint::style::{Fidelity, Style};
/// let sgr = SgrRenderer::new(Arc::new(Palettes::xterm()), Fidelity::Auto);
/// let style = Style::builder().italic().build();
/// assert_eq!(DebugRenderer::new(sgr).render("AB", &style)?, "ǝ[3mABǝ[23m");
/// # Ok::<(), termtint::error::EmptyPaletteError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DebugRenderer {
    inner: SgrRenderer,
}

impl DebugRenderer {
    /// Create a new debug renderer.
    pub fn new(inner: SgrRenderer) -> Self {
        Self { inner }
    }
}

impl Renderer for DebugRenderer {
    fn render(&self, text: &str, style: &Style) -> Result<String, EmptyPaletteError> {
        Ok(self
            .inner
            .render(text, style)?
            .replace('\x1b', ESCAPE_MARKER))
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use super::*;
    use crate::palette::Palettes;
    use crate::style::Fidelity;

    #[test]
    fn test_noop() -> Result<(), EmptyPaletteError> {
        let style = Style::builder().bold().blinking().build();
        assert_eq!(NoOpRenderer.render("A\nB", &style)?, "A\nB");
        assert_eq!(NoOpRenderer.render("", &style)?, "");
        Ok(())
    }

    #[test]
    fn test_debug() -> Result<(), EmptyPaletteError> {
        let sgr = SgrRenderer::new(Arc::new(Palettes::xterm()), Fidelity::Xterm16);
        let debug = DebugRenderer::new(sgr);
        let style = Style::builder().bold().build();

        assert_eq!(debug.render("A\nB", &style)?, "ǝ[1mA\nǝ[1mBǝ[22m");
        assert_eq!(debug.render("", &style)?, "");
        assert!(!debug.render("AB", &style)?.contains('\x1b'));
        Ok(())
    }
}
