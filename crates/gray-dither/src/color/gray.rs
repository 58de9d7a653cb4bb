//! Grayscale conversion
//!
//! Maps a pixel to a single 8-bit brightness using the NTSC luminance
//! weights:
//!
//! ```text
//! Y = 0.299 * R + 0.587 * G + 0.114 * B
//! ```
//!
//! The weighted sum is truncated, not rounded. Alpha is ignored.

use rgb::{RGB8, RGBA8};

const WEIGHT_R: f64 = 0.299;
const WEIGHT_G: f64 = 0.587;
const WEIGHT_B: f64 = 0.114;

/// Perceptual brightness of a source pixel.
///
/// # Example
/// ```
/// use gray_dither::color::{luma, RGBA8};
///
/// assert_eq!(luma(RGBA8::new(0, 0, 0, 255)), 0);
/// assert_eq!(luma(RGBA8::new(255, 0, 0, 255)), 76);
/// ```
#[inline]
pub fn luma(pixel: RGBA8) -> u8 {
    weighted(pixel.r, pixel.g, pixel.b)
}

/// Perceptual brightness of an opaque color, e.g. a palette entry.
#[inline]
pub fn luma_rgb(color: RGB8) -> u8 {
    weighted(color.r, color.g, color.b)
}

#[inline]
fn weighted(r: u8, g: u8, b: u8) -> u8 {
    let y = WEIGHT_R * r as f64 + WEIGHT_G * g as f64 + WEIGHT_B * b as f64;
    // Weights sum to 1.0, so y never exceeds 255.0; `as` truncates.
    y as u8
}
