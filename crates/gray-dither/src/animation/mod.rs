//! Animation-level types and the frame-parallel coordinator.
//!
//! - [`SourceFrame`]: one decoded input frame (read-only)
//! - [`Coordinator`]: dithers all frames concurrently on a bounded pool
//! - [`Animation`]: the ordered result, plus the palette it indexes into

mod coordinator;
mod sequence;
mod source_frame;

pub use coordinator::{AnimationError, Coordinator};
pub use sequence::{Animation, DelayPolicy};
pub use source_frame::{FrameError, SourceFrame};
