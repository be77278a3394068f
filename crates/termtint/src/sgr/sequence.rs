use super::codes;
use crate::error::{OutOfBoundsError, UnknownMnemonicError};
use crate::style::Layer;

/// An argument for building SGR sequences.
///
/// Integers are used as is, mnemonics are looked up case-insensitively, and
/// nested sequences contribute their parameters in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SgrParam<'a> {
    Int(u8),
    Mnemonic(&'a str),
    Nested(SgrSequence),
}

impl From<u8> for SgrParam<'_> {
    fn from(value: u8) -> Self {
        Self::Int(value)
    }
}

impl<'a> From<&'a str> for SgrParam<'a> {
    fn from(value: &'a str) -> Self {
        Self::Mnemonic(value)
    }
}

impl From<SgrSequence> for SgrParam<'_> {
    fn from(value: SgrSequence) -> Self {
        Self::Nested(value)
    }
}

// ----------------------------------------------------------------------------------------------------------

/// A select graphic rendition (SGR) sequence.
///
/// A sequence is an ordered list of parameters that assembles to `ESC [`,
/// the parameters joined by semicolons, and the final `m`. Two sequences
/// differ from the usual rendition:
///
///   * The empty sequence assembles to the empty string. It changes nothing.
///   * The hard reset `[0]` assembles to `ESC [ m`, since 0 is the default
///     parameter anyway.
///
/// Concatenating sequences with `+` concatenates their parameters.
///
/// ```
/// # use termtint::sgr::{codes, SgrSequence};
/// let bold = SgrSequence::from(codes::BOLD);
/// let red = SgrSequence::build(["red".into()])?;
/// assert_eq!((bold + red).assemble(), "\x1b[1;31m");
/// assert_eq!(SgrSequence::empty().assemble(), "");
/// assert_eq!(SgrSequence::reset().assemble(), "\x1b[m");
/// # Ok::<(), termtint::error::UnknownMnemonicError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct SgrSequence {
    params: Vec<u8>,
}

impl SgrSequence {
    /// The final character of SGR sequences.
    pub const TERMINATOR: char = 'm';

    /// Create the empty sequence.
    pub const fn empty() -> Self {
        Self { params: Vec::new() }
    }

    /// Create the hard reset sequence.
    pub fn reset() -> Self {
        Self::from(codes::RESET)
    }

    /// Create a new sequence with the given parameters.
    pub fn new(params: impl IntoIterator<Item = u8>) -> Self {
        Self {
            params: params.into_iter().collect(),
        }
    }

    /// Build a new sequence from integers, mnemonics, and nested sequences.
    ///
    /// # Errors
    ///
    /// If a mnemonic does not name a known SGR parameter.
    pub fn build<'a>(
        params: impl IntoIterator<Item = SgrParam<'a>>,
    ) -> Result<Self, UnknownMnemonicError> {
        let mut result = Self::empty();
        for param in params {
            match param {
                SgrParam::Int(value) => result.params.push(value),
                SgrParam::Mnemonic(name) => result.params.push(
                    codes::lookup(name).ok_or_else(|| UnknownMnemonicError(name.to_string()))?,
                ),
                SgrParam::Nested(sequence) => result.params.extend(sequence.params),
            }
        }
        Ok(result)
    }

    /// Create the sequence selecting the 256-color with the given index.
    ///
    /// # Errors
    ///
    /// If the index is larger than 255.
    pub fn make_color_256(index: u32, layer: Layer) -> Result<Self, OutOfBoundsError> {
        Ok(Self::color_256(to_channel(index)?, layer))
    }

    /// Create the sequence selecting the 24-bit color with the given channels.
    ///
    /// # Errors
    ///
    /// If any channel is larger than 255.
    pub fn make_color_rgb(r: u32, g: u32, b: u32, layer: Layer) -> Result<Self, OutOfBoundsError> {
        Ok(Self::color_rgb(
            to_channel(r)?,
            to_channel(g)?,
            to_channel(b)?,
            layer,
        ))
    }

    pub(crate) fn color_256(index: u8, layer: Layer) -> Self {
        Self {
            params: vec![
                codes::COLOR_EXTENDED + layer.offset(),
                codes::EXTENDED_MODE_256,
                index,
            ],
        }
    }

    pub(crate) fn color_rgb(r: u8, g: u8, b: u8, layer: Layer) -> Self {
        Self {
            params: vec![
                codes::COLOR_EXTENDED + layer.offset(),
                codes::EXTENDED_MODE_RGB,
                r,
                g,
                b,
            ],
        }
    }

    /// Get the parameters.
    pub fn params(&self) -> &[u8] {
        &self.params
    }

    /// Determine whether this sequence has no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Determine whether this sequence is the hard reset.
    pub fn is_reset(&self) -> bool {
        self.params == [codes::RESET]
    }

    /// Assemble the sequence into its textual form.
    pub fn assemble(&self) -> String {
        format!("{}", self)
    }
}

fn to_channel(value: u32) -> Result<u8, OutOfBoundsError> {
    u8::try_from(value).map_err(|_| OutOfBoundsError::new(value as usize, 0..=255))
}

impl From<u8> for SgrSequence {
    fn from(value: u8) -> Self {
        Self {
            params: vec![value],
        }
    }
}

impl std::ops::Add for SgrSequence {
    type Output = SgrSequence;

    fn add(mut self, other: Self) -> Self::Output {
        self.params.extend(other.params);
        self
    }
}

impl std::ops::Add<&SgrSequence> for SgrSequence {
    type Output = SgrSequence;

    fn add(mut self, other: &SgrSequence) -> Self::Output {
        self.params.extend_from_slice(&other.params);
        self
    }
}

impl std::ops::AddAssign<&SgrSequence> for SgrSequence {
    fn add_assign(&mut self, other: &SgrSequence) {
        self.params.extend_from_slice(&other.params);
    }
}

impl std::fmt::Display for SgrSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.params.is_empty() {
            return Ok(());
        } else if self.is_reset() {
            return write!(f, "\x1b[{}", Self::TERMINATOR);
        }

        f.write_str("\x1b[")?;
        for (index, param) in self.params.iter().enumerate() {
            if 0 < index {
                f.write_str(";")?;
            }
            write!(f, "{}", param)?;
        }
        write!(f, "{}", Self::TERMINATOR)
    }
}
