use super::{Hsv, Lab, Rgb, Xyz, D65};

/// Scale the 8-bit channel to the unit range.
#[inline]
fn unit(channel: u8) -> f64 {
    channel as f64 / 255.0
}

/// Scale the unit-range value to an 8-bit channel, rounding and clamping.
#[inline]
fn channel(value: f64) -> u8 {
    (value * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Multiply the 3 by 3 matrix and 3-element vector with each other, producing a
/// new 3-element vector.
#[inline]
fn multiply(matrix: &[[f64; 3]; 3], vector: &[f64; 3]) -> [f64; 3] {
    let [row1, row2, row3] = matrix;

    [
        row1[0].mul_add(vector[0], row1[1].mul_add(vector[1], row1[2] * vector[2])),
        row2[0].mul_add(vector[0], row2[1].mul_add(vector[1], row2[2] * vector[2])),
        row3[0].mul_add(vector[0], row3[1].mul_add(vector[1], row3[2] * vector[2])),
    ]
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the hexadecimal value to RGB. Only the lower 24 bits are used.
pub fn hex_to_rgb(hex: u32) -> Rgb {
    Rgb::from_hex_masked(hex)
}

/// Convert the RGB color to its hexadecimal value.
pub fn rgb_to_hex(rgb: Rgb) -> u32 {
    rgb.to_hex()
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert RGB to HSV.
///
/// Hue is in degrees, saturation and value in the unit range. Grays have
/// saturation 0 and, by convention, hue 0 as well.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let [r, g, b] = *rgb.as_ref();
    let (r, g, b) = (unit(r), unit(g), unit(b));

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let saturation = if max == 0.0 { 0.0 } else { delta / max };
    if saturation == 0.0 {
        return Hsv::new(0.0, 0.0, max);
    }

    let hue = if max == r {
        ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsv::new(hue * 60.0, saturation, max)
}

/// Convert HSV to RGB.
///
/// Channels are rounded to the nearest integer. Converting an RGB color to HSV
/// and back yields the very same RGB color.
pub fn hsv_to_rgb(hsv: Hsv) -> Rgb {
    let Hsv {
        hue,
        saturation,
        value,
    } = Hsv::new(hsv.hue, hsv.saturation, hsv.value);

    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = value - chroma;

    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgb::new(channel(r + m), channel(g + m), channel(b + m))
}

/// Convert the hexadecimal value to HSV.
pub fn hex_to_hsv(hex: u32) -> Hsv {
    rgb_to_hsv(hex_to_rgb(hex))
}

/// Convert HSV to a hexadecimal value.
pub fn hsv_to_hex(hsv: Hsv) -> u32 {
    rgb_to_hex(hsv_to_rgb(hsv))
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert a gamma-corrected sRGB coordinate to linear sRGB.
#[inline]
fn linearize(value: f64) -> f64 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear sRGB coordinate to gamma-corrected sRGB.
#[inline]
fn delinearize(value: f64) -> f64 {
    if value <= 0.0031308 {
        value * 12.92
    } else {
        value.powf(1.0 / 2.4).mul_add(1.055, -0.055)
    }
}

// https://github.com/color-js/color.js/blob/a77e080a070039c534dda3965a769675aac5f75e/src/spaces/srgb-linear.js

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const LINEAR_SRGB_TO_XYZ: [[f64; 3]; 3] = [
    [ 0.41239079926595934, 0.357584339383878,   0.1804807884018343  ],
    [ 0.21263900587151027, 0.715168678767756,   0.07219231536073371 ],
    [ 0.01933081871559182, 0.11919477979462598, 0.9505321522496607  ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const XYZ_TO_LINEAR_SRGB: [[f64; 3]; 3] = [
    [  3.2409699419045226,  -1.537383177570094,   -0.4986107602930034  ],
    [ -0.9692436362808796,   1.8759675015077202,   0.04155505740717559 ],
    [  0.05563007969699366, -0.20397695888897652,  1.0569715142428786  ],
];

/// Convert RGB to XYZ.
pub fn rgb_to_xyz(rgb: Rgb) -> Xyz {
    let [r, g, b] = *rgb.as_ref();
    let linear = [linearize(unit(r)), linearize(unit(g)), linearize(unit(b))];
    let [x, y, z] = multiply(&LINEAR_SRGB_TO_XYZ, &linear);
    Xyz::new(x * 100.0, y * 100.0, z * 100.0)
}

/// Convert XYZ to RGB, rounding and clamping the channels.
pub fn xyz_to_rgb(xyz: Xyz) -> Rgb {
    let scaled = [xyz.x / 100.0, xyz.y / 100.0, xyz.z / 100.0];
    let [r, g, b] = multiply(&XYZ_TO_LINEAR_SRGB, &scaled);
    Rgb::new(
        channel(delinearize(r)),
        channel(delinearize(g)),
        channel(delinearize(b)),
    )
}

// --------------------------------------------------------------------------------------------------------------------

/// CIE's ϵ, i.e., 216/24389, below which Lab switches to a linear segment.
const EPSILON: f64 = 216.0 / 24389.0;
/// CIE's κ, i.e., 24389/27.
const KAPPA: f64 = 24389.0 / 27.0;

/// Convert XYZ to Lab.
pub fn xyz_to_lab(xyz: Xyz) -> Lab {
    #[inline]
    fn f(t: f64) -> f64 {
        if t > EPSILON {
            t.cbrt()
        } else {
            KAPPA.mul_add(t, 16.0) / 116.0
        }
    }

    let fx = f(xyz.x / D65.x);
    let fy = f(xyz.y / D65.y);
    let fz = f(xyz.z / D65.z);

    Lab::new(
        116.0f64.mul_add(fy, -16.0),
        500.0 * (fx - fy),
        200.0 * (fy - fz),
    )
}

/// Convert Lab to XYZ coordinates in unit scale, without clamping.
fn lab_to_unit_xyz(lab: Lab) -> [f64; 3] {
    let fy = (lab.l + 16.0) / 116.0;
    let fx = lab.a / 500.0 + fy;
    let fz = fy - lab.b / 200.0;

    let cube_x = fx.powi(3);
    let x = if cube_x > EPSILON {
        cube_x
    } else {
        116.0f64.mul_add(fx, -16.0) / KAPPA
    };

    let y = if lab.l > KAPPA * EPSILON {
        fy.powi(3)
    } else {
        lab.l / KAPPA
    };

    let cube_z = fz.powi(3);
    let z = if cube_z > EPSILON {
        cube_z
    } else {
        116.0f64.mul_add(fz, -16.0) / KAPPA
    };

    [x * D65.x / 100.0, y * D65.y / 100.0, z * D65.z / 100.0]
}

/// Convert Lab to XYZ.
pub fn lab_to_xyz(lab: Lab) -> Xyz {
    let [x, y, z] = lab_to_unit_xyz(lab);
    Xyz::new(x * 100.0, y * 100.0, z * 100.0)
}

/// Determine whether the Lab color is within the sRGB gamut, i.e., converts
/// to RGB channels that round into `0..=255` without clamping.
///
/// ```
/// # use termtint::core::{lab_in_gamut, rgb_to_lab, Lab, Rgb};
/// assert!(lab_in_gamut(rgb_to_lab(Rgb::new(0, 0, 255))));
/// assert!(lab_in_gamut(Lab::new(50.0, 0.0, 0.0)));
/// assert!(!lab_in_gamut(Lab::new(50.0, -120.0, 120.0)));
/// ```
pub fn lab_in_gamut(lab: Lab) -> bool {
    multiply(&XYZ_TO_LINEAR_SRGB, &lab_to_unit_xyz(lab))
        .iter()
        .all(|&c| (-0.5..=255.5).contains(&(delinearize(c) * 255.0)))
}

/// Convert RGB to Lab.
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// Convert Lab to RGB.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    xyz_to_rgb(lab_to_xyz(lab))
}

// --------------------------------------------------------------------------------------------------------------------

impl From<Rgb> for Hsv {
    fn from(value: Rgb) -> Self {
        rgb_to_hsv(value)
    }
}

impl From<Hsv> for Rgb {
    fn from(value: Hsv) -> Self {
        hsv_to_rgb(value)
    }
}

impl From<Rgb> for Xyz {
    fn from(value: Rgb) -> Self {
        rgb_to_xyz(value)
    }
}

impl From<Xyz> for Rgb {
    fn from(value: Xyz) -> Self {
        xyz_to_rgb(value)
    }
}

impl From<Xyz> for Lab {
    fn from(value: Xyz) -> Self {
        xyz_to_lab(value)
    }
}

impl From<Lab> for Xyz {
    fn from(value: Lab) -> Self {
        lab_to_xyz(value)
    }
}

impl From<Rgb> for Lab {
    fn from(value: Rgb) -> Self {
        rgb_to_lab(value)
    }
}

impl From<Lab> for Rgb {
    fn from(value: Lab) -> Self {
        lab_to_rgb(value)
    }
}
