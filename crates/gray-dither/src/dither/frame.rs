//! Single-frame dithering.

use super::grid::GrayGrid;
use super::kernel::{Kernel, FLOYD_STEINBERG};
use super::options::DitherOptions;
use super::quantize::Quantizer;
use crate::animation::SourceFrame;
use crate::output::DitheredFrame;
use crate::palette::Palette;

/// Dithers whole frames against one palette.
///
/// Holds only read-only state, so a single `FrameDitherer` can be shared by
/// reference across threads; every call builds and owns its own
/// [`GrayGrid`].
///
/// # Algorithm
///
/// 1. Convert every pixel to gray ([`luma`](crate::color::luma)).
/// 2. Scan row-major, top-to-bottom, left-to-right.
/// 3. For each pixel: quantize its current (error-adjusted) value, record
///    the palette index, and immediately diffuse `gray - reconstruction`
///    to the unvisited neighbors with the Floyd-Steinberg kernel.
///
/// The output is a pure function of the frame, palette and options.
///
/// # Example
///
/// ```
/// use gray_dither::{DitherOptions, FrameDitherer, Palette, SourceFrame, RGB8, RGBA8};
///
/// let palette = Palette::new(&[RGB8::new(0, 0, 0), RGB8::new(255, 255, 255)]).unwrap();
/// let ditherer = FrameDitherer::new(&palette, &DitherOptions::new());
///
/// let frame = SourceFrame::new(vec![RGBA8::new(0, 0, 0, 255); 4], 2, 2, 10).unwrap();
/// let out = ditherer.dither(&frame);
/// assert_eq!(out.indices(), &[0, 0, 0, 0]);
/// assert_eq!(out.delay(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct FrameDitherer {
    quantizer: Quantizer,
    kernel: &'static Kernel,
}

impl FrameDitherer {
    /// Create a ditherer for `palette`.
    pub fn new(palette: &Palette, options: &DitherOptions) -> Self {
        Self {
            quantizer: Quantizer::new(palette, options.reconstruction),
            kernel: &FLOYD_STEINBERG,
        }
    }

    /// Dither a source frame. The output keeps the frame's delay.
    pub fn dither(&self, frame: &SourceFrame) -> DitheredFrame {
        let grid = GrayGrid::from_pixels(frame.pixels(), frame.width(), frame.height());
        let indices = self.dither_grid(grid);
        DitheredFrame::new(indices, frame.width(), frame.height(), frame.delay())
    }

    /// Dither an already-converted gray grid, consuming it.
    ///
    /// Returns one palette index per cell, row-major.
    pub fn dither_grid(&self, mut grid: GrayGrid) -> Vec<u8> {
        let (width, height) = (grid.width(), grid.height());
        let mut indices = vec![0u8; width * height];

        for y in 0..height {
            for x in 0..width {
                let gray = grid.get(x, y);
                let q = self.quantizer.quantize(gray);
                indices[y * width + x] = q.index;
                grid.diffuse(x, y, q.error(gray), self.kernel);
            }
        }

        indices
    }
}
