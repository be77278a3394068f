use super::data::{xterm_256, NAMED_RGB, XTERM_16};
use super::{PaletteKind, PaletteRegistry};
use crate::core::Rgb;
use crate::error::{ColorFormatError, EmptyPaletteError};
use crate::style::Fidelity;
use crate::termco::{Color, Color16, Color256, ColorRgb, TerminalColor};

/// The palettes for downgrading colors.
///
/// This struct bundles one registry each for the 16 extended ANSI colors, the
/// 256 indexed colors, and named 24-bit colors. [`Palettes::xterm`] creates
/// the registries with xterm's default colors and should be the starting
/// point for most applications. Since registries synchronize internally,
/// instances can be shared between threads and renderers with an
/// [`Arc`](std::sync::Arc).
#[derive(Debug)]
pub struct Palettes {
    sixteen: PaletteRegistry<Color16>,
    eight_bit: PaletteRegistry<Color256>,
    rgb: PaletteRegistry<ColorRgb>,
}

impl Default for Palettes {
    fn default() -> Self {
        Self::xterm()
    }
}

impl Palettes {
    /// Create new palettes without colors.
    ///
    /// The palettes need to be populated before use. Otherwise, downgrading
    /// colors fails with an [`EmptyPaletteError`].
    pub fn new() -> Self {
        Self {
            sixteen: PaletteRegistry::new(PaletteKind::Sixteen),
            eight_bit: PaletteRegistry::new(PaletteKind::TwoFiveSix),
            rgb: PaletteRegistry::new(PaletteKind::Rgb),
        }
    }

    /// Create new palettes with xterm's default colors and named RGB colors.
    pub fn xterm() -> Self {
        Self {
            sixteen: PaletteRegistry::with_colors(PaletteKind::Sixteen, XTERM_16),
            eight_bit: PaletteRegistry::with_colors(PaletteKind::TwoFiveSix, xterm_256()),
            rgb: PaletteRegistry::with_colors(PaletteKind::Rgb, NAMED_RGB),
        }
    }

    /// Get the registry for the 16 extended ANSI colors.
    pub fn sixteen(&self) -> &PaletteRegistry<Color16> {
        &self.sixteen
    }

    /// Get the registry for the 256 indexed colors.
    pub fn eight_bit(&self) -> &PaletteRegistry<Color256> {
        &self.eight_bit
    }

    /// Get the registry for named 24-bit colors.
    pub fn rgb(&self) -> &PaletteRegistry<ColorRgb> {
        &self.rgb
    }

    /// Cap the color by the given fidelity.
    ///
    /// This method ensures that a target with the fidelity level can render
    /// the resulting color:
    ///
    ///   * `NoAnsi` (fidelity)
    ///       * The no-op color (result)
    ///   * `Xterm16`
    ///       * Unmodified 16-colors
    ///       * 256-colors replaced by their 16-color equivalents, if any
    ///       * Other colors approximated with the 16-color palette
    ///   * `Xterm256`
    ///       * Unmodified 16-colors and 256-colors
    ///       * 24-bit colors approximated with the 256-color palette
    ///   * `TrueColor`, `Auto`
    ///       * Unmodified colors
    ///
    /// The no-op color always remains the no-op color.
    ///
    /// # Errors
    ///
    /// If an approximation uses an empty palette.
    pub fn cap(&self, color: &Color, fidelity: Fidelity) -> Result<Color, EmptyPaletteError> {
        let capped = match fidelity.resolve() {
            Fidelity::NoAnsi => Color::NoOp,
            Fidelity::Xterm16 => match color {
                Color::NoOp | Color::Sixteen(_) => *color,
                Color::TwoFiveSix(c) => match c.color16() {
                    Some(color16) => color16.into(),
                    None => self.sixteen.find_closest(c.hex_value())?.color.into(),
                },
                Color::Rgb(c) => self.sixteen.find_closest(c.hex_value())?.color.into(),
            },
            Fidelity::Xterm256 => match color {
                Color::Rgb(c) => self.eight_bit.find_closest(c.hex_value())?.color.into(),
                _ => *color,
            },
            Fidelity::TrueColor | Fidelity::Auto => *color,
        };

        Ok(capped)
    }

    /// Resolve the string to a color.
    ///
    /// The string may be a hexadecimal color in `#rrggbb`, `#rgb`, or
    /// `0xrrggbb` format or the name of a registered color. Names are matched
    /// case-insensitively, trying the 16-color, 256-color, and RGB palettes in
    /// that order. Hexadecimal colors always resolve to 24-bit colors.
    ///
    /// ```
    /// # use termtint::palette::Palettes;
    /// # use termtint::style::Fidelity;
    /// let palettes = Palettes::xterm();
    /// assert_eq!(palettes.resolve("#f80")?.hex_value(), Some(0xff8800));
    /// assert_eq!(palettes.resolve("0x3aeba1")?.hex_value(), Some(0x3aeba1));
    ///
    /// let red = palettes.resolve("Bright_Red")?;
    /// assert_eq!(red.fidelity(), Fidelity::Xterm16);
    /// assert_eq!(palettes.resolve("coral")?.hex_value(), Some(0xff7f50));
    /// assert!(palettes.resolve("#12345").is_err());
    /// # Ok::<(), termtint::error::ColorFormatError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// If the string is neither a well-formed hexadecimal color nor a
    /// registered name.
    pub fn resolve(&self, s: &str) -> Result<Color, ColorFormatError> {
        let s = s.trim();

        if let Some(digits) = s.strip_prefix('#') {
            return parse_hex(digits, true).map(Color::from);
        } else if let Some(digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            return parse_hex(digits, false).map(Color::from);
        }

        if let Some(color) = self.sixteen.find_by_name(s) {
            Ok(color.into())
        } else if let Some(color) = self.eight_bit.find_by_name(s) {
            Ok(color.into())
        } else if let Some(color) = self.rgb.find_by_name(s) {
            Ok(color.into())
        } else {
            Err(ColorFormatError::UnknownName(s.to_string()))
        }
    }
}

fn parse_hex(digits: &str, allow_short: bool) -> Result<Rgb, ColorFormatError> {
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ColorFormatError::MalformedHex);
    }

    let value =
        u32::from_str_radix(digits, 16).map_err(|_| ColorFormatError::MalformedHex)?;
    match digits.len() {
        6 => Ok(Rgb::from_hex_masked(value)),
        3 if allow_short => {
            let [_, _, high, low] = value.to_be_bytes();
            Ok(Rgb::new(17 * (high & 0xf), 17 * (low >> 4), 17 * (low & 0xf)))
        }
        _ => Err(ColorFormatError::MalformedHex),
    }
}
