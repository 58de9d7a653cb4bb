//! Dithering options and configuration.

/// Source of the reconstruction intensity the quantizer reports for each
/// band.
///
/// The reconstruction value is what quantization error is measured
/// against: `error = gray - reconstruction`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reconstruction {
    /// Fixed midpoints of the threshold bands on a canonical gray ramp,
    /// independent of the palette's colors.
    ///
    /// - 2 levels: 31, 223
    /// - 4 levels: 31, 95, 159, 223
    #[default]
    Canonical,

    /// The luma of the palette entry the pixel was mapped to.
    ///
    /// Error then tracks the palette's real brightness, which matters for
    /// palettes far from a neutral gray ramp (e.g. `aqua`, `retro`).
    PaletteLuma,
}

/// Configuration options for frame dithering.
///
/// # Example
///
/// ```
/// use gray_dither::{DitherOptions, Reconstruction};
///
/// let options = DitherOptions::new().reconstruction(Reconstruction::PaletteLuma);
/// assert_eq!(options.reconstruction, Reconstruction::PaletteLuma);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DitherOptions {
    /// How reconstruction values are chosen.
    ///
    /// Default: [`Reconstruction::Canonical`]
    pub reconstruction: Reconstruction,
}

impl DitherOptions {
    /// Create new dither options with default values.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reconstruction mode.
    #[inline]
    pub fn reconstruction(mut self, mode: Reconstruction) -> Self {
        self.reconstruction = mode;
        self
    }
}
