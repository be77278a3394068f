//! Terminal-specific text formatting and styles.
//!
//! This module supports styling terminal appearance through [`Style`]s, which
//! combine a [`FormatUpdate`] with a foreground
//! [`Color`](crate::termco::Color) and a background
//! [`Color`](crate::termco::Color).
//!
//! It also defines [`Layer`] to distinguish between foreground and background
//! colors as well as [`Fidelity`] to capture a rendering target's level of
//! color support.
//!
//!
//! # The One-Two-Three of Styles
//!
//! The three steps for using styles are:
//!
//!  1. Assemble a style with [`Style::builder`], optionally inheriting from a
//!     parent style.
//!  2. Adjust the style to the target's fidelity level with [`Style::cap`],
//!     which downgrades colors to the closest color in a palette.
//!  3. Render text with the style, e.g., through an
//!     [`SgrRenderer`](crate::render::SgrRenderer).
//!
//! Renderers perform the second step on their own, so most code only ever
//! needs the first and third steps.
//!
//!
//! # Example
//!
//! ```
//! # use termtint::palette::Palettes;
//! # use termtint::style::{Fidelity, Style};
//! # use termtint::termco::ColorRgb;
//! let style = Style::builder()
//!     .bold()
//!     .foreground(ColorRgb::named(0xd72827, "brick"))
//!     .underlined()
//!     .build();
//!
//! let palettes = Palettes::xterm();
//! let capped = style.cap(Fidelity::Xterm16, &palettes)?;
//! assert_eq!(capped.foreground().fidelity(), Fidelity::Xterm16);
//! assert_eq!(capped.format(), style.format());
//! # Ok::<(), termtint::error::EmptyPaletteError>(())
//! ```

mod context;
mod format;
mod styling;

pub use context::{Fidelity, Layer};
pub use format::{Attribute, AttributeIter, Format, FormatUpdate};
pub use styling::{Style, StyleBuilder};
