//! gray-dither: threshold-quantized Floyd-Steinberg dithering for animations
//!
//! This library reduces every frame of an animation to a 2- or 4-color
//! palette. Frames are converted to gray, quantized with a fixed threshold
//! table, and dithered with Floyd-Steinberg error diffusion. Frames are
//! independent and are dithered concurrently.
//!
//! # Quick Start
//!
//! The [`GrayDitherer`] builder is the primary entry point:
//!
//! ```
//! use gray_dither::{GrayDitherer, PaletteRegistry, SourceFrame, RGBA8};
//!
//! let registry = PaletteRegistry::builtin();
//! let gameboy = registry.resolve(Some(3)).unwrap();
//!
//! let ditherer = GrayDitherer::new(gameboy.palette.clone());
//! let frame = SourceFrame::new(vec![RGBA8::new(100, 100, 100, 255); 4], 2, 2, 5).unwrap();
//! let out = ditherer.dither_frame(&frame);
//!
//! assert_eq!(out.width(), 2);
//! assert_eq!(out.delay(), 5);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! SourceFrame (RGBA8)
//!     |
//!     v
//! GrayGrid                 luma = 0.299 R + 0.587 G + 0.114 B (truncated)
//!     |
//!     v
//! ╔══════════════════════════════════════════════╗
//! ║  Scan loop (row-major, left to right)        ║
//! ║                                              ║
//! ║  gray = grid[x, y]   (includes diffused err) ║
//! ║      |                                       ║
//! ║  Quantizer: band(gray) -> index              ║
//! ║             reconstruction[index]            ║
//! ║      |                                       ║
//! ║  error = gray - reconstruction               ║
//! ║      |                                       ║
//! ║  diffuse: east 7, SW 3, S 5, SE 1  (/16)     ║
//! ║           clamped to 0..=255                 ║
//! ╚══════════════════════════════════════════════╝
//!     |
//!     v
//! DitheredFrame (palette indices + delay)
//! ```
//!
//! # Quantization Bands
//!
//! Bands depend only on the palette size:
//!
//! | Palette | Bands                           | Reconstruction       |
//! |---------|---------------------------------|----------------------|
//! | 2       | `<128`, `>=128`                 | 31, 223              |
//! | 4       | `<64`, `<128`, `<192`, `>=192`  | 31, 95, 159, 223     |
//!
//! The reconstruction values are band midpoints on a neutral gray ramp and
//! ignore the palette's colors. [`Reconstruction::PaletteLuma`] switches to
//! the luma of each palette entry instead.
//!
//! # Concurrency
//!
//! [`Coordinator`] runs one task per frame on a rayon pool capped by
//! [`GrayDitherer::threads`]. Each task owns its working grid and returns its
//! frame by value; results are collected in input order.

pub mod animation;
pub mod api;
pub mod color;
pub mod dither;
pub mod output;
pub mod palette;

#[cfg(test)]
mod domain_tests;

pub use animation::{
    Animation, AnimationError, Coordinator, DelayPolicy, FrameError, SourceFrame,
};
pub use api::{DitherError, GrayDitherer};
pub use color::{RGB8, RGBA8};
pub use dither::{DitherOptions, FrameDitherer, GrayGrid, Reconstruction};
pub use output::DitheredFrame;
pub use palette::{
    Levels, NamedPalette, Palette, PaletteError, PaletteRegistry, ParseColorError,
    DEFAULT_PALETTE_ID,
};
