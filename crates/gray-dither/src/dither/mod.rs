//! Grayscale error diffusion dithering.
//!
//! # Architecture
//!
//! - [`Quantizer`] maps a gray value to a palette index and a
//!   reconstruction value using a fixed threshold table.
//! - [`GrayGrid`] is the per-frame working buffer; [`GrayGrid::diffuse`]
//!   pushes quantization error into unvisited neighbors.
//! - [`FrameDitherer`] runs both over one frame in scan order.
//!
//! Only the Floyd-Steinberg kernel ([`FLOYD_STEINBERG`]) is used.

mod frame;
mod grid;
mod kernel;
mod options;
mod quantize;

pub use frame::FrameDitherer;
pub use grid::GrayGrid;
pub use kernel::{Kernel, FLOYD_STEINBERG};
pub use options::{DitherOptions, Reconstruction};
pub use quantize::{band, Quantized, Quantizer};
