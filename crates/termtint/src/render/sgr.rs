use std::sync::Arc;

use super::Renderer;
use crate::error::EmptyPaletteError;
use crate::palette::Palettes;
use crate::sgr::{ClosingRegistry, SgrSequence};
use crate::style::{Fidelity, Layer, Style};

/// A renderer for terminals, using SGR escape sequences.
///
/// The renderer caps the style to its fidelity, emits the opening sequence
/// for the enabled attributes and the colors, the text, and finally the
/// closing sequence computed by its [`ClosingRegistry`]. Since some consumers
/// reset the appearance at the end of each line, the opening sequence is
/// repeated after every newline in the text.
///
/// ```
/// # use std::sync::Arc;
/// # use termtint::palette::Palettes;
/// # use termtint::render::{Renderer, SgrRenderer};
/// # use termtint::style::{Fidelity, Style};
/// let renderer = SgrRenderer::new(Arc::new(Palettes::xterm()), Fidelity::Xterm16);
/// let style = Style::builder().bold().build();
/// assert_eq!(renderer.render("A\nB", &style)?, "\x1b[1mA\n\x1b[1mB\x1b[22m");
/// # Ok::<(), termtint::error::EmptyPaletteError>(())
/// ```
#[derive(Clone, Debug)]
pub struct SgrRenderer {
    palettes: Arc<Palettes>,
    fidelity: Fidelity,
    closing: ClosingRegistry,
}

impl SgrRenderer {
    /// Create a new SGR renderer with the standard closing pairs.
    pub fn new(palettes: Arc<Palettes>, fidelity: Fidelity) -> Self {
        Self::with_closing(palettes, fidelity, ClosingRegistry::standard())
    }

    /// Create a new SGR renderer with the given closing pairs.
    pub fn with_closing(
        palettes: Arc<Palettes>,
        fidelity: Fidelity,
        closing: ClosingRegistry,
    ) -> Self {
        Self {
            palettes,
            fidelity,
            closing,
        }
    }

    /// Get this renderer's fidelity.
    pub fn fidelity(&self) -> Fidelity {
        self.fidelity
    }

    /// Compute the opening sequence for the style, after capping it.
    ///
    /// The sequence comprises the enabled attributes in declaration order,
    /// followed by the foreground and background colors. Disabled attributes
    /// contribute nothing, since rendering always starts from the default
    /// appearance.
    ///
    /// # Errors
    ///
    /// If capping the style's colors uses an empty palette.
    pub fn opening(&self, style: &Style) -> Result<SgrSequence, EmptyPaletteError> {
        if self.fidelity == Fidelity::NoAnsi {
            return Ok(SgrSequence::empty());
        }

        let style = style.cap(self.fidelity, &self.palettes)?;
        let attributes = SgrSequence::new(
            style
                .format()
                .enable()
                .attributes()
                .map(|attribute| attribute.enable_sgr()),
        );

        Ok(attributes
            + style.foreground().to_sgr(Layer::Foreground)
            + style.background().to_sgr(Layer::Background))
    }
}

impl Renderer for SgrRenderer {
    fn render(&self, text: &str, style: &Style) -> Result<String, EmptyPaletteError> {
        if text.is_empty() {
            return Ok(String::new());
        }

        let opening = self.opening(style)?;
        if opening.is_empty() {
            return Ok(text.to_string());
        }

        let closing = self.closing.close(&opening);
        tracing::trace!(
            opening = opening.params().len(),
            closing = closing.params().len(),
            "rendering SGR"
        );

        let opening = opening.assemble();
        let reopened = format!("\n{}", opening);
        Ok(format!(
            "{}{}{}",
            opening,
            text.replace('\n', &reopened),
            closing
        ))
    }
}
