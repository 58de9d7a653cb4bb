//! Threshold quantization of gray values to palette indices.
//!
//! Band edges are fixed by the palette size alone:
//!
//! ```text
//! 2 levels:  [0,128) -> 0   [128,256) -> 1
//! 4 levels:  [0,64)  -> 0   [64,128)  -> 1   [128,192) -> 2   [192,256) -> 3
//! ```

use super::options::Reconstruction;
use crate::palette::{Levels, Palette};

const CANONICAL_TWO: [u8; 2] = [31, 223];
const CANONICAL_FOUR: [u8; 4] = [31, 95, 159, 223];

/// Result of quantizing one gray value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quantized {
    /// Palette index assigned to the pixel.
    pub index: u8,
    /// Intensity the error is measured against.
    pub reconstruction: u8,
}

impl Quantized {
    /// Signed quantization error for the input value `gray`.
    #[inline]
    pub fn error(&self, gray: u8) -> i32 {
        gray as i32 - self.reconstruction as i32
    }
}

/// Band index for `gray` under the given level count.
#[inline]
pub fn band(gray: u8, levels: Levels) -> u8 {
    match levels {
        Levels::Two => {
            if gray < 128 {
                0
            } else {
                1
            }
        }
        // 64-wide bands: the top two bits are the band.
        Levels::Four => gray >> 6,
    }
}

/// Maps gray values to palette indices for one palette.
///
/// Built once per frame task; holds the band policy and the resolved
/// reconstruction table so the per-pixel path is a lookup.
#[derive(Debug, Clone)]
pub struct Quantizer {
    levels: Levels,
    reconstruction: [u8; 4],
}

impl Quantizer {
    /// Build a quantizer for `palette`.
    pub fn new(palette: &Palette, mode: Reconstruction) -> Self {
        let levels = palette.levels();
        let mut reconstruction = [0u8; 4];
        match mode {
            Reconstruction::Canonical => {
                let table: &[u8] = match levels {
                    Levels::Two => &CANONICAL_TWO,
                    Levels::Four => &CANONICAL_FOUR,
                };
                reconstruction[..table.len()].copy_from_slice(table);
            }
            Reconstruction::PaletteLuma => {
                for (i, slot) in reconstruction.iter_mut().take(levels.count()).enumerate() {
                    *slot = palette.luma(i);
                }
            }
        }
        Self {
            levels,
            reconstruction,
        }
    }

    /// Quantize one gray value.
    #[inline]
    pub fn quantize(&self, gray: u8) -> Quantized {
        let index = band(gray, self.levels);
        Quantized {
            index,
            reconstruction: self.reconstruction[index as usize],
        }
    }
}
