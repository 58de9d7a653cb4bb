//! The dithered animation and its timing policy.

use std::sync::Arc;

use crate::output::DitheredFrame;
use crate::palette::Palette;

/// How output frame delays are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelayPolicy {
    /// Keep each source frame's delay.
    #[default]
    Preserve,
    /// Use the same delay (centiseconds) for every frame.
    Fixed(u16),
}

impl DelayPolicy {
    /// Delay for an output frame whose source had `source_delay`.
    #[inline]
    pub fn apply(self, source_delay: u16) -> u16 {
        match self {
            DelayPolicy::Preserve => source_delay,
            DelayPolicy::Fixed(delay) => delay,
        }
    }
}

/// Dithered frames in input order, all indexing into one palette.
///
/// Frame `i` of an `Animation` always corresponds to input frame `i`.
#[derive(Debug, Clone)]
pub struct Animation {
    frames: Vec<DitheredFrame>,
    palette: Arc<Palette>,
    width: usize,
    height: usize,
}

impl Animation {
    pub(crate) fn new(
        frames: Vec<DitheredFrame>,
        palette: Arc<Palette>,
        width: usize,
        height: usize,
    ) -> Self {
        Self {
            frames,
            palette,
            width,
            height,
        }
    }

    /// Frames in input order.
    #[inline]
    pub fn frames(&self) -> &[DitheredFrame] {
        &self.frames
    }

    /// Per-frame delays in centiseconds, index-aligned with [`frames`](Self::frames).
    pub fn delays(&self) -> Vec<u16> {
        self.frames.iter().map(DitheredFrame::delay).collect()
    }

    /// Palette every frame indexes into.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Canvas width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the animation has no frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
