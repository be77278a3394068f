//! Color spaces and the conversions between them.
//!
//! This module defines the 24-bit [`Rgb`] color used throughout the crate as
//! well as [`Hsv`], [`Xyz`], and [`Lab`]. The conversion functions are pure
//! and total. Their results are always clamped to the target space's range.
//!
//! ```
//! # use termtint::core::{hsv_to_rgb, rgb_to_hsv, Rgb};
//! let rgb = Rgb::new(0x3a, 0xeb, 0xa1);
//! let hsv = rgb_to_hsv(rgb);
//! assert!(hsv.hue > 150.0 && hsv.hue < 160.0);
//! assert_eq!(hsv_to_rgb(hsv), rgb);
//! ```

mod conversion;
mod equality;
mod space;

pub use conversion::{
    hex_to_hsv, hex_to_rgb, hsv_to_hex, hsv_to_rgb, lab_in_gamut, lab_to_rgb, lab_to_xyz,
    rgb_to_hex, rgb_to_hsv, rgb_to_lab, rgb_to_xyz, xyz_to_lab, xyz_to_rgb,
};
pub use space::{Hsv, Lab, Rgb, Xyz, D65};
