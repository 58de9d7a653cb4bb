//! Working grayscale buffer for one frame.
//!
//! A [`GrayGrid`] is created from a source frame, mutated in place while the
//! frame is scanned, and dropped when the frame is done. It is never shared
//! between frames.

use rgb::RGBA8;

use super::kernel::Kernel;
use crate::color::luma;

/// Mutable width x height grid of 8-bit intensities, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayGrid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl GrayGrid {
    /// Convert RGBA pixels (row-major) to a grid of luma values.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height`.
    pub fn from_pixels(pixels: &[RGBA8], width: usize, height: usize) -> Self {
        debug_assert_eq!(pixels.len(), width * height);
        Self {
            cells: pixels.iter().map(|&p| luma(p)).collect(),
            width,
            height,
        }
    }

    /// Wrap existing gray values (row-major).
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `cells.len() == width * height`.
    pub fn from_gray(cells: Vec<u8>, width: usize, height: usize) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            cells,
            width,
            height,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Current value at (x, y).
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.width + x]
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Push `error` from (x, y) into the kernel's neighbors.
    ///
    /// Each neighbor becomes `clamp(value + error * weight / divisor, 0, 255)`,
    /// truncated. Neighbors outside the grid are skipped. Every neighbor is
    /// computed from the same `error`, so entry order does not matter.
    pub fn diffuse(&mut self, x: usize, y: usize, error: i32, kernel: &Kernel) {
        if error == 0 {
            return;
        }
        let divisor = kernel.divisor as f32;
        for &(dx, dy, weight) in kernel.entries {
            let nx = x as i64 + dx as i64;
            let ny = y as i64 + dy as i64;
            if nx < 0 || ny < 0 || nx as usize >= self.width || ny as usize >= self.height {
                continue;
            }
            let idx = ny as usize * self.width + nx as usize;
            self.cells[idx] = push_error(self.cells[idx], error, weight, divisor);
        }
    }
}

/// Add a weighted share of `error` to `value`, saturating to `0..=255`.
#[inline]
fn push_error(value: u8, error: i32, weight: u8, divisor: f32) -> u8 {
    let adjusted = value as f32 + error as f32 * (weight as f32 / divisor);
    // `as` truncates toward zero after the clamp.
    adjusted.clamp(0.0, 255.0) as u8
}
