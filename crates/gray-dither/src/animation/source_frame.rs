//! Decoded input frames.

use std::fmt;

use rgb::RGBA8;

/// Error type for malformed source frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// Width or height is zero
    EmptyFrame {
        /// Frame width
        width: usize,
        /// Frame height
        height: usize,
    },
    /// Pixel buffer length does not match width * height
    DimensionMismatch {
        /// Frame width
        width: usize,
        /// Frame height
        height: usize,
        /// Pixels actually supplied
        len: usize,
    },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::EmptyFrame { width, height } => {
                write!(f, "frame has no pixels ({}x{})", width, height)
            }
            FrameError::DimensionMismatch { width, height, len } => {
                write!(
                    f,
                    "frame buffer has {} pixels, expected {} ({}x{})",
                    len,
                    width * height,
                    width,
                    height
                )
            }
        }
    }
}

impl std::error::Error for FrameError {}

/// One decoded animation frame: full-canvas RGBA pixels plus its delay.
///
/// Immutable once built; the ditherer only reads it.
#[derive(Debug, Clone)]
pub struct SourceFrame {
    pixels: Vec<RGBA8>,
    width: usize,
    height: usize,
    delay: u16,
}

impl SourceFrame {
    /// Create a frame from row-major pixels.
    ///
    /// `delay` is the time before the next frame, in centiseconds.
    ///
    /// # Errors
    ///
    /// - [`FrameError::EmptyFrame`] if either dimension is zero
    /// - [`FrameError::DimensionMismatch`] if `pixels.len() != width * height`
    pub fn new(
        pixels: Vec<RGBA8>,
        width: usize,
        height: usize,
        delay: u16,
    ) -> Result<Self, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::EmptyFrame { width, height });
        }
        if pixels.len() != width * height {
            return Err(FrameError::DimensionMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
            delay,
        })
    }

    /// Pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    /// Pixel at (x, y).
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> RGBA8 {
        self.pixels[y * self.width + x]
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

    /// Source delay in centiseconds.
    #[inline]
    pub fn delay(&self) -> u16 {
        self.delay
    }
}
