//! gifdither - animated GIF ditherer
//!
//! Command-line front end for the `gray-dither` library: GIF decoding and
//! encoding, YAML configuration and the run pipeline.
//! This library exposes modules for integration testing.

pub mod codec;
pub mod error;
pub mod models;
pub mod services;
