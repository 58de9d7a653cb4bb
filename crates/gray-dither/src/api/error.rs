//! Unified error type for the gray-dither public API.
//!
//! [`DitherError`] wraps all error types from the crate into a single enum
//! for convenient `?` propagation in application code.

use crate::animation::{AnimationError, FrameError};
use crate::palette::{PaletteError, ParseColorError};
use std::fmt;

/// Unified error type for the gray-dither public API.
///
/// # Example
///
/// ```
/// use gray_dither::{DitherError, Palette};
///
/// fn create_palette() -> Result<Palette, DitherError> {
///     let palette = Palette::from_hex(&["#000000", "#FFFFFF"])?;
///     Ok(palette)
/// }
/// ```
#[derive(Debug)]
pub enum DitherError {
    /// Palette validation or registry lookup error
    Palette(PaletteError),
    /// Color parsing error (invalid hex string)
    ParseColor(ParseColorError),
    /// Malformed source frame
    Frame(FrameError),
    /// Animation validation or worker pool error
    Animation(AnimationError),
}

impl fmt::Display for DitherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DitherError::Palette(err) => write!(f, "palette error: {}", err),
            DitherError::ParseColor(err) => write!(f, "color parse error: {}", err),
            DitherError::Frame(err) => write!(f, "frame error: {}", err),
            DitherError::Animation(err) => write!(f, "animation error: {}", err),
        }
    }
}

impl std::error::Error for DitherError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DitherError::Palette(err) => Some(err),
            DitherError::ParseColor(err) => Some(err),
            DitherError::Frame(err) => Some(err),
            DitherError::Animation(err) => Some(err),
        }
    }
}

impl From<PaletteError> for DitherError {
    fn from(err: PaletteError) -> Self {
        DitherError::Palette(err)
    }
}

impl From<ParseColorError> for DitherError {
    fn from(err: ParseColorError) -> Self {
        DitherError::ParseColor(err)
    }
}

impl From<FrameError> for DitherError {
    fn from(err: FrameError) -> Self {
        DitherError::Frame(err)
    }
}

impl From<AnimationError> for DitherError {
    fn from(err: AnimationError) -> Self {
        DitherError::Animation(err)
    }
}
