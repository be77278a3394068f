//! Utility module with termtint's errors.

use thiserror::Error;

use crate::palette::PaletteKind;

/// An out-of-bounds error.
///
/// This error indicates a value that is out of bounds for some range. The
/// ranges used by this crate include:
///
///   * `0..=255` for the channels of 24-bit colors and the index values of
///     8-bit colors;
///   * `0..=0xffffff` for hexadecimal color values.
///
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{value} does not fit into range {}..={}", .expected.start(), .expected.end())]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

// ====================================================================================================================

/// A mnemonic that does not name a known SGR parameter.
///
/// Mnemonics are looked up case-insensitively, so `bold`, `Bold`, and `BOLD`
/// all name the same parameter. Anything else, e.g., `bolder`, results in
/// this error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("`{0}` is not a known SGR mnemonic")]
pub struct UnknownMnemonicError(pub String);

// ====================================================================================================================

/// A palette without colors.
///
/// Approximation searches the exact colors of a palette registry. Every
/// palette must hold at least one color before its first search. Encountering
/// this error indicates a missing registration at startup and hence a bug in
/// the calling code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("palette {kind} has no colors to approximate with")]
pub struct EmptyPaletteError {
    pub kind: PaletteKind,
}

// ====================================================================================================================

/// An erroneous color format.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorFormatError {
    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing hexadecimal digits, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    #[error("color format should have 3 or 6 hexadecimal digits")]
    MalformedHex,

    /// A color name that is not registered with any palette.
    #[error("`{0}` does not name a registered color")]
    UnknownName(String),
}

// ====================================================================================================================

/// An identifier that does not name a variant of a configuration enum.
///
/// Fidelity levels and renderer backends are parsed from their snake case
/// identifiers, e.g., `xterm_256` or `html`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("`{value}` is not a valid {kind} identifier")]
pub struct UnknownIdentifierError {
    pub kind: &'static str,
    pub value: String,
}
