use crate::error::OutOfBoundsError;

/// A 24-bit RGB color.
///
/// Each channel is an 8-bit integer, so instances are in gamut by
/// construction.
///
/// ```
/// # use termtint::core::Rgb;
/// let orange = Rgb::new(255, 135, 0);
/// assert_eq!(orange.to_hex(), 0xff8700);
/// assert_eq!(format!("{}", orange), "#ff8700");
/// assert_eq!(Rgb::from_hex(0xff8700)?, orange);
/// # Ok::<(), termtint::error::OutOfBoundsError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb([u8; 3]);

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new RGB color from its hexadecimal value.
    ///
    /// # Errors
    ///
    /// If the value is larger than `0xffffff`.
    pub fn from_hex(hex: u32) -> Result<Self, OutOfBoundsError> {
        if hex > 0xff_ffff {
            return Err(OutOfBoundsError::new(hex as usize, 0..=0xff_ffff));
        }
        Ok(Self::from_hex_masked(hex))
    }

    /// Create a new RGB color from the lower 24 bits of the value.
    pub(crate) const fn from_hex_masked(hex: u32) -> Self {
        Self([(hex >> 16) as u8, (hex >> 8) as u8, hex as u8])
    }

    /// Get the hexadecimal value.
    pub const fn to_hex(&self) -> u32 {
        ((self.0[0] as u32) << 16) | ((self.0[1] as u32) << 8) | self.0[2] as u32
    }

    /// Compute the squared Euclidian distance to the other color.
    ///
    /// The distance is computed in RGB channel space and hence is an exact
    /// integer.
    pub const fn distance(&self, other: &Self) -> u32 {
        let dr = self.0[0].abs_diff(other.0[0]) as u32;
        let dg = self.0[1].abs_diff(other.0[1]) as u32;
        let db = self.0[2].abs_diff(other.0[2]) as u32;
        dr * dr + dg * dg + db * db
    }
}

impl AsRef<[u8; 3]> for Rgb {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl std::ops::Index<usize> for Rgb {
    type Output = u8;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(value: Rgb) -> Self {
        value.0
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{:02x}{:02x}{:02x}", r, g, b)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color in HSV.
///
/// Hue ranges `0.0..360.0`, saturation and value range `0.0..=1.0`.
/// Achromatic colors have hue 0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    /// Create a new HSV color, normalizing the hue and clamping saturation and
    /// value.
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        let hue = hue.rem_euclid(360.0);
        Self {
            // rem_euclid may round up to the modulus itself
            hue: if hue >= 360.0 { 0.0 } else { hue },
            saturation: saturation.clamp(0.0, 1.0),
            value: value.clamp(0.0, 1.0),
        }
    }
}

impl std::fmt::Display for Hsv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "hsv({:.1} {:.1}% {:.1}%)",
            self.hue,
            self.saturation * 100.0,
            self.value * 100.0
        )
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The D65 reference white in XYZ, scaled so that `Y` is 100.
pub const D65: Xyz = Xyz {
    x: 95.047,
    y: 100.0,
    z: 108.883,
};

/// A color in CIE XYZ with the D65 white point.
///
/// Coordinates are scaled so that the reference white has `Y = 100` and are
/// clamped to `0.0..=D65`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// Create a new XYZ color, clamping the coordinates.
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self {
            x: x.clamp(0.0, D65.x),
            y: y.clamp(0.0, D65.y),
            z: z.clamp(0.0, D65.z),
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// A color in CIELAB.
///
/// Lightness ranges `0.0..=100.0`, the a and b axes `-128.0..=127.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color, clamping the coordinates.
    pub fn new(l: f64, a: f64, b: f64) -> Self {
        Self {
            l: l.clamp(0.0, 100.0),
            a: a.clamp(-128.0, 127.0),
            b: b.clamp(-128.0, 127.0),
        }
    }
}

impl std::fmt::Display for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "lab({:.2} {:.2} {:.2})", self.l, self.a, self.b)
    }
}
