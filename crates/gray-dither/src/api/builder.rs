//! GrayDitherer builder -- the primary ergonomic entry point for the crate.
//!
//! [`GrayDitherer`] wraps single-frame and whole-animation dithering with
//! fluent configuration.

use std::sync::Arc;

use rgb::RGBA8;

use super::error::DitherError;
use crate::animation::{Animation, Coordinator, DelayPolicy, SourceFrame};
use crate::dither::{DitherOptions, FrameDitherer, Reconstruction};
use crate::output::DitheredFrame;
use crate::palette::Palette;

/// High-level dithering builder.
///
/// # Design
///
/// - Constructor requires a [`Palette`] (no invalid states)
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - Dithering methods take `&self`, so the builder is reusable
///
/// # Example
///
/// ```
/// use gray_dither::{DelayPolicy, GrayDitherer, Palette, SourceFrame, RGBA8};
///
/// let palette = Palette::from_hex(&["#000000", "#ffffff"]).unwrap();
/// let ditherer = GrayDitherer::new(palette)
///     .delay(DelayPolicy::Fixed(4))
///     .threads(2);
///
/// let frames = vec![
///     SourceFrame::new(vec![RGBA8::new(128, 128, 128, 255); 4], 2, 2, 10).unwrap(),
///     SourceFrame::new(vec![RGBA8::new(255, 255, 255, 255); 4], 2, 2, 10).unwrap(),
/// ];
/// let animation = ditherer.dither_animation(&frames).unwrap();
///
/// assert_eq!(animation.len(), 2);
/// assert_eq!(animation.delays(), vec![4, 4]);
/// ```
#[derive(Debug, Clone)]
pub struct GrayDitherer {
    palette: Arc<Palette>,
    dither_opts: DitherOptions,
    delay: DelayPolicy,
    threads: usize,
}

impl GrayDitherer {
    /// Create a new ditherer for `palette`.
    ///
    /// Defaults: canonical reconstruction, source delays preserved, worker
    /// pool sized to the hardware.
    pub fn new(palette: impl Into<Arc<Palette>>) -> Self {
        Self {
            palette: palette.into(),
            dither_opts: DitherOptions::new(),
            delay: DelayPolicy::Preserve,
            threads: 0,
        }
    }

    /// Set the reconstruction mode.
    #[inline]
    pub fn reconstruction(mut self, mode: Reconstruction) -> Self {
        self.dither_opts = self.dither_opts.reconstruction(mode);
        self
    }

    /// Set the output delay policy.
    #[inline]
    pub fn delay(mut self, policy: DelayPolicy) -> Self {
        self.delay = policy;
        self
    }

    /// Cap the worker pool at `threads` (0 = hardware parallelism).
    #[inline]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Dither one frame on the calling thread.
    ///
    /// The delay policy is applied as it would be inside an animation.
    pub fn dither_frame(&self, frame: &SourceFrame) -> DitheredFrame {
        let out = FrameDitherer::new(&self.palette, &self.dither_opts).dither(frame);
        let delay = self.delay.apply(frame.delay());
        out.with_delay(delay)
    }

    /// Dither raw row-major pixels as a single frame with zero delay.
    ///
    /// # Errors
    ///
    /// [`DitherError::Frame`] if the buffer does not match the dimensions.
    pub fn dither_pixels(
        &self,
        pixels: &[RGBA8],
        width: usize,
        height: usize,
    ) -> Result<DitheredFrame, DitherError> {
        let frame = SourceFrame::new(pixels.to_vec(), width, height, 0)?;
        Ok(self.dither_frame(&frame))
    }

    /// Dither all frames concurrently and assemble the animation.
    ///
    /// Either every frame is dithered or an error is returned; there is no
    /// partial result.
    ///
    /// # Errors
    ///
    /// [`DitherError::Animation`] for empty input, mismatched frame sizes,
    /// or a worker pool that fails to start.
    pub fn dither_animation(&self, frames: &[SourceFrame]) -> Result<Animation, DitherError> {
        let coordinator = Coordinator::new(
            self.palette.clone(),
            &self.dither_opts,
            self.delay,
            self.threads,
        )?;
        Ok(coordinator.run(frames)?)
    }
}
