//! Rendering styled text for terminals, HTML, and tmux.
//!
//! A [`Renderer`] turns text and a [`Style`] into the encoding for one
//! backend. This module provides five of them:
//!
//!   * [`SgrRenderer`] for terminals, using SGR escape sequences and
//!     downgrading colors to the renderer's [`Fidelity`];
//!   * [`HtmlRenderer`] for `<span>` elements with inline CSS;
//!   * [`TmuxRenderer`] for tmux format strings;
//!   * [`NoOpRenderer`] for plain text;
//!   * [`DebugRenderer`] for inspecting SGR output with visible escapes.
//!
//! Rendering is a pure function of the text, the style, and the renderer's
//! configuration. [`RendererConfig`] picks backend and fidelity, e.g., from
//! an application's configuration file, and builds the matching
//! [`AnyRenderer`].
//!
//! ```
//! # use std::sync::Arc;
//! # use termtint::palette::{Palettes, XTERM_16};
//! # use termtint::render::{render, RendererConfig};
//! # use termtint::style::Style;
//! let config = RendererConfig {
//!     backend: "sgr".parse()?,
//!     fidelity: "true_color".parse()?,
//! };
//! let renderer = config.build(Arc::new(Palettes::xterm()));
//!
//! let style = Style::builder().foreground(XTERM_16[1]).build();
//! assert_eq!(render("AB", &style, &renderer)?, "\x1b[31mAB\x1b[39m");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod html;
mod noop;
mod sgr;
mod tmux;

use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{EmptyPaletteError, UnknownIdentifierError};
use crate::palette::Palettes;
use crate::style::{Fidelity, Style};

pub use html::{escape_html, HtmlRenderer};
pub use noop::{DebugRenderer, NoOpRenderer, ESCAPE_MARKER};
pub use sgr::SgrRenderer;
pub use tmux::{escape_tmux, tmux_keyword, TmuxRenderer};

/// The interface shared by all renderers.
pub trait Renderer {
    /// Render the text with the style.
    ///
    /// Empty text always renders as the empty string.
    ///
    /// # Errors
    ///
    /// If downgrading the style's colors uses an empty palette.
    fn render(&self, text: &str, style: &Style) -> Result<String, EmptyPaletteError>;
}

/// Render the text with the style and renderer.
///
/// # Errors
///
/// If downgrading the style's colors uses an empty palette.
pub fn render<R: Renderer + ?Sized>(
    text: &str,
    style: &Style,
    renderer: &R,
) -> Result<String, EmptyPaletteError> {
    renderer.render(text, style)
}

// ----------------------------------------------------------------------------------------------------------

/// A renderer for any of the backends.
#[derive(Clone, Debug)]
pub enum AnyRenderer {
    Sgr(SgrRenderer),
    Html(HtmlRenderer),
    Tmux(TmuxRenderer),
    NoOp(NoOpRenderer),
    Debug(DebugRenderer),
}

impl AnyRenderer {
    /// Get the backend.
    pub fn backend(&self) -> Backend {
        match self {
            Self::Sgr(_) => Backend::Sgr,
            Self::Html(_) => Backend::Html,
            Self::Tmux(_) => Backend::Tmux,
            Self::NoOp(_) => Backend::NoOp,
            Self::Debug(_) => Backend::Debug,
        }
    }
}

impl Renderer for AnyRenderer {
    fn render(&self, text: &str, style: &Style) -> Result<String, EmptyPaletteError> {
        match self {
            Self::Sgr(renderer) => renderer.render(text, style),
            Self::Html(renderer) => renderer.render(text, style),
            Self::Tmux(renderer) => renderer.render(text, style),
            Self::NoOp(renderer) => renderer.render(text, style),
            Self::Debug(renderer) => renderer.render(text, style),
        }
    }
}

// ----------------------------------------------------------------------------------------------------------

/// The rendering backend.
///
/// Backends parse from and display as snake case identifiers.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Backend {
    /// Terminals with SGR escape sequences
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "sgr"))]
    Sgr,
    /// HTML spans with inline CSS
    #[cfg_attr(feature = "serde", serde(rename = "html"))]
    Html,
    /// tmux format strings
    #[cfg_attr(feature = "serde", serde(rename = "tmux"))]
    Tmux,
    /// Plain text
    #[cfg_attr(feature = "serde", serde(rename = "noop"))]
    NoOp,
    /// SGR escape sequences with visible escape characters
    #[cfg_attr(feature = "serde", serde(rename = "debug"))]
    Debug,
}

impl Backend {
    /// All backends.
    pub const ALL: [Backend; 5] = [
        Self::Sgr,
        Self::Html,
        Self::Tmux,
        Self::NoOp,
        Self::Debug,
    ];

    /// Get the snake case identifier.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sgr => "sgr",
            Self::Html => "html",
            Self::Tmux => "tmux",
            Self::NoOp => "noop",
            Self::Debug => "debug",
        }
    }
}

impl std::str::FromStr for Backend {
    type Err = UnknownIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|backend| backend.name() == s)
            .ok_or_else(|| UnknownIdentifierError {
                kind: "backend",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ----------------------------------------------------------------------------------------------------------

/// The configuration of a renderer.
///
/// The fidelity applies to the SGR, tmux, and debug backends. HTML displays
/// all colors and plain text none.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct RendererConfig {
    pub backend: Backend,
    pub fidelity: Fidelity,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Sgr,
            fidelity: Fidelity::Auto,
        }
    }
}

impl RendererConfig {
    /// Build the configured renderer.
    pub fn build(&self, palettes: Arc<Palettes>) -> AnyRenderer {
        match self.backend {
            Backend::Sgr => AnyRenderer::Sgr(SgrRenderer::new(palettes, self.fidelity)),
            Backend::Html => AnyRenderer::Html(HtmlRenderer),
            Backend::Tmux => AnyRenderer::Tmux(TmuxRenderer::new(palettes, self.fidelity)),
            Backend::NoOp => AnyRenderer::NoOp(NoOpRenderer),
            Backend::Debug => {
                AnyRenderer::Debug(DebugRenderer::new(SgrRenderer::new(palettes, self.fidelity)))
            }
        }
    }
}
