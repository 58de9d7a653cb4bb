//! Color types and conversions
//!
//! Source pixels and palette entries are plain 8-bit RGB(A) values from the
//! [`rgb`] crate. This module adds the two conversions the dither pipeline
//! needs: perceptual brightness ([`luma`]) and hex parsing for palette
//! definitions ([`parse_hex`]).

mod gray;
mod hex;

pub use gray::{luma, luma_rgb};
pub use hex::parse_hex;
pub use rgb::{RGB8, RGBA8};
