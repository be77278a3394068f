//! Terminal color representations.
//!
//! This module offers a choice of [`Color16`], [`Color256`], and [`ColorRgb`]
//! as the color representations used by terminals. Each of them corresponds
//! to one capability tier, i.e., [`Fidelity`]. The closed sum [`Color`] wraps
//! all three and adds the [`Color::NoOp`] sentinel, which stands in for an
//! unset color and renders to nothing.
//!
//! Colors are identified by their hexadecimal value. The 16 and 256 color
//! variants additionally carry the SGR parameters that select them.

use crate::core::Rgb;
use crate::error::OutOfBoundsError;
use crate::sgr::{codes, SgrSequence};
use crate::style::{Fidelity, Layer};

/// The interface shared by all terminal colors.
pub trait TerminalColor {
    /// Get the color's 24-bit hexadecimal value.
    fn hex_value(&self) -> u32;

    /// Get the color's name, if it has one.
    fn name(&self) -> Option<&'static str>;

    /// Get the SGR sequence for selecting this color on the given layer.
    fn sgr(&self, layer: Layer) -> SgrSequence;

    /// Get the minimum fidelity that displays this color as is.
    fn fidelity(&self) -> Fidelity;

    /// Get the color's RGB coordinates.
    fn rgb(&self) -> Rgb {
        Rgb::from_hex_masked(self.hex_value())
    }
}

// ====================================================================================================================
// Color16
// ====================================================================================================================

/// One of the 16 extended ANSI colors.
///
/// Since terminals assign the actual color values through their themes, the
/// hexadecimal value is nominal. It serves approximation but is never written
/// to the terminal. Instead, the color is selected by one fixed SGR parameter
/// for each [`Layer`].
///
/// ```
/// # use termtint::termco::{Color16, TerminalColor};
/// # use termtint::style::Layer;
/// let red = Color16::new(0x800000, 31, 41);
/// assert_eq!(red.sgr(Layer::Foreground).params(), &[31]);
/// assert_eq!(red.sgr(Layer::Background).params(), &[41]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color16 {
    hex: u32,
    code_fg: u8,
    code_bg: u8,
    name: Option<&'static str>,
}

impl Color16 {
    /// Create a new 16-color with the given value and SGR parameters.
    pub const fn new(hex: u32, code_fg: u8, code_bg: u8) -> Self {
        Self {
            hex: hex & 0xff_ffff,
            code_fg,
            code_bg,
            name: None,
        }
    }

    /// Create a new 16-color with a name.
    pub const fn named(hex: u32, code_fg: u8, code_bg: u8, name: &'static str) -> Self {
        Self {
            hex: hex & 0xff_ffff,
            code_fg,
            code_bg,
            name: Some(name),
        }
    }

    /// Get the SGR parameter for the given layer.
    pub const fn code(&self, layer: Layer) -> u8 {
        match layer {
            Layer::Foreground => self.code_fg,
            Layer::Background => self.code_bg,
        }
    }
}

impl TerminalColor for Color16 {
    fn hex_value(&self) -> u32 {
        self.hex
    }

    fn name(&self) -> Option<&'static str> {
        self.name
    }

    fn sgr(&self, layer: Layer) -> SgrSequence {
        SgrSequence::from(self.code(layer))
    }

    fn fidelity(&self) -> Fidelity {
        Fidelity::Xterm16
    }
}

// ====================================================================================================================
// Color256
// ====================================================================================================================

/// One of the 256 indexed colors.
///
/// The first 16 indexed colors double as the 16 extended ANSI colors and
/// therefore have a [`Color16`] equivalent, which is used when downgrading to
/// [`Fidelity::Xterm16`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color256 {
    hex: u32,
    index: u8,
    color16: Option<Color16>,
    name: Option<&'static str>,
}

impl Color256 {
    /// Create a new 256-color.
    pub const fn new(hex: u32, index: u8) -> Self {
        Self {
            hex: hex & 0xff_ffff,
            index,
            color16: None,
            name: None,
        }
    }

    /// Create a new 256-color with its 16-color equivalent.
    pub const fn with_color16(hex: u32, index: u8, color16: Color16) -> Self {
        Self {
            hex: hex & 0xff_ffff,
            index,
            color16: Some(color16),
            name: color16.name,
        }
    }

    /// Create a new named 256-color.
    pub const fn named(hex: u32, index: u8, name: &'static str) -> Self {
        Self {
            hex: hex & 0xff_ffff,
            index,
            color16: None,
            name: Some(name),
        }
    }

    /// Get the palette index.
    pub const fn index(&self) -> u8 {
        self.index
    }

    /// Get the 16-color equivalent.
    pub const fn color16(&self) -> Option<Color16> {
        self.color16
    }
}

impl TerminalColor for Color256 {
    fn hex_value(&self) -> u32 {
        self.hex
    }

    fn name(&self) -> Option<&'static str> {
        self.name
    }

    fn sgr(&self, layer: Layer) -> SgrSequence {
        SgrSequence::color_256(self.index, layer)
    }

    fn fidelity(&self) -> Fidelity {
        Fidelity::Xterm256
    }
}

// ====================================================================================================================
// ColorRgb
// ====================================================================================================================

/// An arbitrary 24-bit color.
///
/// ```
/// # use termtint::termco::{ColorRgb, TerminalColor};
/// # use termtint::style::Layer;
/// let teal = ColorRgb::new(0x3aeba1)?;
/// assert_eq!(teal.sgr(Layer::Background).params(), &[48, 2, 58, 235, 161]);
/// assert!(ColorRgb::new(0x1000000).is_err());
/// # Ok::<(), termtint::error::OutOfBoundsError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorRgb {
    hex: u32,
    name: Option<&'static str>,
}

impl ColorRgb {
    /// Create a new 24-bit color.
    ///
    /// # Errors
    ///
    /// If the value is larger than `0xffffff`.
    pub fn new(hex: u32) -> Result<Self, OutOfBoundsError> {
        Rgb::from_hex(hex).map(Self::from)
    }

    /// Create a new named 24-bit color. Only the lower 24 bits are used.
    pub const fn named(hex: u32, name: &'static str) -> Self {
        Self {
            hex: hex & 0xff_ffff,
            name: Some(name),
        }
    }
}

impl From<Rgb> for ColorRgb {
    fn from(value: Rgb) -> Self {
        Self {
            hex: value.to_hex(),
            name: None,
        }
    }
}

impl TerminalColor for ColorRgb {
    fn hex_value(&self) -> u32 {
        self.hex
    }

    fn name(&self) -> Option<&'static str> {
        self.name
    }

    fn sgr(&self, layer: Layer) -> SgrSequence {
        let [r, g, b] = *self.rgb().as_ref();
        SgrSequence::color_rgb(r, g, b, layer)
    }

    fn fidelity(&self) -> Fidelity {
        Fidelity::TrueColor
    }
}

// ====================================================================================================================
// Color
// ====================================================================================================================

/// A terminal color.
///
/// This enumeration wraps the three terminal color representations. It also
/// includes [`Color::NoOp`], which represents the absence of a color and
/// renders to nothing. Styles use it for colors that have not been set, so
/// that renderers never need to check for missing colors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Color {
    #[default]
    NoOp,
    Sixteen(Color16),
    TwoFiveSix(Color256),
    Rgb(ColorRgb),
}

impl Color {
    /// Determine whether this color is the no-op color.
    pub const fn is_noop(&self) -> bool {
        matches!(self, Self::NoOp)
    }

    /// Get the hexadecimal value. The no-op color has none.
    pub fn hex_value(&self) -> Option<u32> {
        match self {
            Self::NoOp => None,
            Self::Sixteen(c) => Some(c.hex_value()),
            Self::TwoFiveSix(c) => Some(c.hex_value()),
            Self::Rgb(c) => Some(c.hex_value()),
        }
    }

    /// Get the name, if any.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::NoOp => None,
            Self::Sixteen(c) => c.name(),
            Self::TwoFiveSix(c) => c.name(),
            Self::Rgb(c) => c.name(),
        }
    }

    /// Get the SGR sequence for selecting this color on the given layer. The
    /// no-op color produces the empty sequence.
    pub fn to_sgr(&self, layer: Layer) -> SgrSequence {
        match self {
            Self::NoOp => SgrSequence::empty(),
            Self::Sixteen(c) => c.sgr(layer),
            Self::TwoFiveSix(c) => c.sgr(layer),
            Self::Rgb(c) => c.sgr(layer),
        }
    }

    /// Get the minimum fidelity for displaying this color as is. The no-op
    /// color requires no ANSI escapes at all.
    pub fn fidelity(&self) -> Fidelity {
        match self {
            Self::NoOp => Fidelity::NoAnsi,
            Self::Sixteen(c) => c.fidelity(),
            Self::TwoFiveSix(c) => c.fidelity(),
            Self::Rgb(c) => c.fidelity(),
        }
    }

    /// Get the RGB coordinates. The no-op color has none.
    pub fn rgb(&self) -> Option<Rgb> {
        self.hex_value().map(Rgb::from_hex_masked)
    }
}

impl From<Color16> for Color {
    fn from(value: Color16) -> Self {
        Self::Sixteen(value)
    }
}

impl From<Color256> for Color {
    fn from(value: Color256) -> Self {
        Self::TwoFiveSix(value)
    }
}

impl From<ColorRgb> for Color {
    fn from(value: ColorRgb) -> Self {
        Self::Rgb(value)
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Self::Rgb(value.into())
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rgb() {
            None => f.write_str("noop"),
            Some(rgb) => write!(f, "{}", rgb),
        }
    }
}

/// Create a named 16-color whose background parameter is offset from the
/// foreground parameter, as in the 30–37 and 90–97 ranges.
pub(crate) const fn ansi(hex: u32, code_fg: u8, name: &'static str) -> Color16 {
    Color16::named(hex, code_fg, code_fg + codes::BG_OFFSET, name)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::sgr::codes;

    #[test]
    fn test_color16() {
        let red = Color16::named(0x800000, codes::RED, codes::BG_RED, "red");
        assert_eq!(red.hex_value(), 0x800000);
        assert_eq!(red.name(), Some("red"));
        assert_eq!(red.sgr(Layer::Foreground).assemble(), "\x1b[31m");
        assert_eq!(red.sgr(Layer::Background).assemble(), "\x1b[41m");
        assert_eq!(Color::from(red).fidelity(), Fidelity::Xterm16);
        assert_eq!(ansi(0x800000, codes::RED, "red"), red);
    }

    #[test]
    fn test_color256() {
        let violet = Color256::new(0xaf87ff, 141);
        assert_eq!(violet.index(), 141);
        assert_eq!(violet.color16(), None);
        assert_eq!(violet.sgr(Layer::Foreground).assemble(), "\x1b[38;5;141m");
        assert_eq!(violet.sgr(Layer::Background).assemble(), "\x1b[48;5;141m");

        let maroon = Color16::named(0x800000, 31, 41, "red");
        let also_maroon = Color256::with_color16(0x800000, 1, maroon);
        assert_eq!(also_maroon.color16(), Some(maroon));
        assert_eq!(also_maroon.name(), Some("red"));
    }

    #[test]
    fn test_color_rgb() -> Result<(), OutOfBoundsError> {
        let teal = ColorRgb::new(0x3aeba1)?;
        assert_eq!(teal.rgb(), Rgb::new(0x3a, 0xeb, 0xa1));
        assert_eq!(teal.sgr(Layer::Foreground).assemble(), "\x1b[38;2;58;235;161m");
        assert_eq!(format!("{}", Color::from(teal)), "#3aeba1");

        let error = ColorRgb::new(0x1_000_000).unwrap_err();
        assert_eq!(error.expected, 0..=0xff_ffff);
        Ok(())
    }

    #[test]
    fn test_noop() {
        let noop = Color::default();
        assert!(noop.is_noop());
        assert_eq!(noop.hex_value(), None);
        assert!(noop.to_sgr(Layer::Foreground).is_empty());
        assert_eq!(noop.to_sgr(Layer::Background).assemble(), "");
        assert_eq!(noop.fidelity(), Fidelity::NoAnsi);
        assert_eq!(format!("{}", noop), "noop");
    }
}
