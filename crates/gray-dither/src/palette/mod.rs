//! Palette types and the palette registry
//!
//! This module provides the validated [`Palette`] type, the id-addressed
//! [`PaletteRegistry`], and error types for parsing and validation.

mod error;
mod palette;
mod registry;

pub use error::{PaletteError, ParseColorError};
pub use palette::{Levels, Palette};
pub use registry::{NamedPalette, PaletteRegistry, DEFAULT_PALETTE_ID};
