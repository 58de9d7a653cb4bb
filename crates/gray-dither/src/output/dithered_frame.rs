//! DitheredFrame: palette indices plus frame timing.

use crate::palette::Palette;

/// One dithered frame.
///
/// Stores one `u8` palette index per pixel in row-major order, the frame
/// dimensions, and the delay (in centiseconds) before the next frame.
/// The palette itself lives on the [`Animation`](crate::Animation) so all
/// frames share one copy.
///
/// # Example
///
/// ```
/// use gray_dither::{DitheredFrame, Palette, RGB8};
///
/// let palette = Palette::new(&[RGB8::new(0, 0, 0), RGB8::new(255, 255, 255)]).unwrap();
/// let frame = DitheredFrame::new(vec![0, 1, 1, 0], 2, 2, 5);
///
/// assert_eq!(frame.indices(), &[0, 1, 1, 0]);
/// assert_eq!(frame.to_rgb(&palette).len(), 2 * 2 * 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DitheredFrame {
    indices: Vec<u8>,
    width: usize,
    height: usize,
    delay: u16,
}

impl DitheredFrame {
    /// Create a frame from dithered palette indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, delay: u16) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        Self {
            indices,
            width,
            height,
            delay,
        }
    }

    /// Palette indices, row-major.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Consume the frame, returning its index buffer.
    #[inline]
    pub fn into_indices(self) -> Vec<u8> {
        self.indices
    }

    /// Frame width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Frame height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Delay before the next frame, in centiseconds.
    #[inline]
    pub fn delay(&self) -> u16 {
        self.delay
    }

    /// Replace the delay.
    #[inline]
    pub fn with_delay(mut self, delay: u16) -> Self {
        self.delay = delay;
        self
    }

    /// Expand to `[R, G, B, ...]` bytes through `palette`.
    ///
    /// The returned buffer has length `width * height * 3`.
    pub fn to_rgb(&self, palette: &Palette) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            let c = palette.color(idx as usize);
            rgb.extend_from_slice(&[c.r, c.g, c.b]);
        }
        rgb
    }
}
