//! Output types for the dithering pipeline.
//!
//! [`DitheredFrame`] is the canonical per-frame output: palette indices,
//! dimensions and delay. RGB bytes are produced on demand with
//! [`DitheredFrame::to_rgb`].

mod dithered_frame;

pub use dithered_frame::DitheredFrame;
