//! SGR sequences and their closing counterparts.
//!
//! Terminals change the appearance of text through *select graphic rendition*
//! (SGR) escape sequences, which start with `ESC [`, continue with
//! semicolon-separated integer parameters, and end with `m`. This module
//! provides [`SgrSequence`] for building and assembling such sequences as well
//! as [`ClosingRegistry`] for computing the sequence that restores the
//! terminal's appearance after an arbitrary opening sequence. Constants for
//! individual parameters live in [`codes`].
//!
//! # Example
//!
//! ```
//! # use termtint::sgr::{ClosingRegistry, SgrParam, SgrSequence};
//! let opening = SgrSequence::build([
//!     SgrParam::Mnemonic("bold"),
//!     SgrParam::Mnemonic("underlined"),
//!     SgrParam::Int(31),
//! ])?;
//! let closing = ClosingRegistry::standard().close(&opening);
//!
//! assert_eq!(
//!     format!("{}Wow!{}", opening, closing),
//!     "\x1b[1;4;31mWow!\x1b[22;24;39m"
//! );
//! # Ok::<(), termtint::error::UnknownMnemonicError>(())
//! ```

mod closing;
pub mod codes;
mod sequence;

pub use closing::ClosingRegistry;
pub use sequence::{SgrParam, SgrSequence};
