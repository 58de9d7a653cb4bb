//! Palette struct with size-derived quantization levels.

use std::collections::HashSet;

use rgb::RGB8;

use super::error::PaletteError;
use crate::color::{luma_rgb, parse_hex};

/// Number of quantization bands a palette supports.
///
/// The quantizer's threshold table is chosen from this, never from the
/// palette's actual colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Levels {
    /// Split at 128.
    Two,
    /// Split at 64, 128 and 192.
    Four,
}

impl Levels {
    /// Number of palette entries for this level count.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Levels::Two => 2,
            Levels::Four => 4,
        }
    }

    fn for_len(len: usize) -> Option<Self> {
        match len {
            2 => Some(Levels::Two),
            4 => Some(Levels::Four),
            _ => None,
        }
    }
}

/// An ordered, validated set of output colors.
///
/// Palettes hold exactly 2 or 4 distinct colors. Index 0 is the darkest
/// band of the quantizer, the last index the brightest; the colors
/// themselves need not be sorted by brightness.
///
/// # Example
///
/// ```
/// use gray_dither::{Palette, RGB8};
///
/// let palette = Palette::new(&[RGB8::new(0, 0, 0), RGB8::new(255, 255, 255)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<RGB8>,
    levels: Levels,
}

impl Palette {
    /// Create a new palette.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` is empty ([`PaletteError::EmptyPalette`])
    /// - `colors` has a length other than 2 or 4 ([`PaletteError::UnsupportedSize`])
    /// - `colors` contains duplicates ([`PaletteError::DuplicateColor`])
    pub fn new(colors: &[RGB8]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let levels = Levels::for_len(colors.len())
            .ok_or(PaletteError::UnsupportedSize { len: colors.len() })?;

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert((color.r, color.g, color.b)) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
            levels,
        })
    }

    /// Create a palette from hex color strings.
    ///
    /// # Example
    ///
    /// ```
    /// use gray_dither::Palette;
    ///
    /// let palette = Palette::from_hex(&["#081820", "#346856", "#88c070", "#e0f8d0"]).unwrap();
    /// assert_eq!(palette.len(), 4);
    /// ```
    pub fn from_hex(colors: &[&str]) -> Result<Self, PaletteError> {
        let parsed = colors
            .iter()
            .map(|s| parse_hex(s).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&parsed)
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Quantization levels implied by the palette size.
    #[inline]
    pub fn levels(&self) -> Levels {
        self.levels
    }

    /// Color at the given index.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> RGB8 {
        self.colors[idx]
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[RGB8] {
        &self.colors
    }

    /// Perceptual brightness of the entry at `idx`.
    #[inline]
    pub fn luma(&self, idx: usize) -> u8 {
        luma_rgb(self.colors[idx])
    }

    /// Flat `[R, G, B, R, G, B, ...]` bytes, the layout GIF color tables use.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| [c.r, c.g, c.b]).collect()
    }
}
