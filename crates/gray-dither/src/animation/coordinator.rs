//! Frame-parallel dithering of a whole animation.
//!
//! Every frame is an independent task: it owns its [`GrayGrid`] and returns
//! its [`DitheredFrame`] by value. Results come back through rayon's indexed
//! `collect`, which places task `i`'s output at position `i` no matter which
//! task finishes first. No result slot is ever shared.
//!
//! [`GrayGrid`]: crate::dither::GrayGrid

use std::fmt;
use std::sync::Arc;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

use super::sequence::{Animation, DelayPolicy};
use super::source_frame::SourceFrame;
use crate::dither::{DitherOptions, FrameDitherer};
use crate::output::DitheredFrame;
use crate::palette::Palette;

/// Error type for animation-level validation and scheduling.
#[derive(Debug)]
pub enum AnimationError {
    /// The animation has no frames
    NoFrames,
    /// A frame's size differs from the first frame's
    SizeMismatch {
        /// Index of the offending frame
        index: usize,
        /// Size of frame 0
        expected: (usize, usize),
        /// Size of the offending frame
        actual: (usize, usize),
    },
    /// The worker pool could not be started
    ThreadPool(ThreadPoolBuildError),
}

impl fmt::Display for AnimationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnimationError::NoFrames => write!(f, "animation has no frames"),
            AnimationError::SizeMismatch {
                index,
                expected,
                actual,
            } => write!(
                f,
                "frame {} is {}x{}, expected {}x{}",
                index, actual.0, actual.1, expected.0, expected.1
            ),
            AnimationError::ThreadPool(err) => {
                write!(f, "failed to start worker pool: {}", err)
            }
        }
    }
}

impl std::error::Error for AnimationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnimationError::ThreadPool(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ThreadPoolBuildError> for AnimationError {
    fn from(err: ThreadPoolBuildError) -> Self {
        AnimationError::ThreadPool(err)
    }
}

/// Fans frames out over a bounded worker pool and gathers them in order.
///
/// The pool has `threads` workers; `0` sizes it to the available hardware
/// parallelism.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gray_dither::{Coordinator, DelayPolicy, DitherOptions, PaletteRegistry, SourceFrame, RGBA8};
///
/// let palette = PaletteRegistry::builtin().resolve(None).unwrap().palette.clone();
/// let coordinator =
///     Coordinator::new(palette, &DitherOptions::new(), DelayPolicy::Preserve, 2).unwrap();
///
/// let frames: Vec<SourceFrame> = (0..3u8)
///     .map(|i| SourceFrame::new(vec![RGBA8::new(i * 100, 0, 0, 255); 4], 2, 2, i as u16).unwrap())
///     .collect();
/// let animation = coordinator.run(&frames).unwrap();
/// assert_eq!(animation.len(), 3);
/// assert_eq!(animation.delays(), vec![0, 1, 2]);
/// ```
pub struct Coordinator {
    palette: Arc<Palette>,
    ditherer: FrameDitherer,
    delay: DelayPolicy,
    pool: ThreadPool,
}

impl Coordinator {
    /// Create a coordinator with its own worker pool.
    ///
    /// # Errors
    ///
    /// [`AnimationError::ThreadPool`] if the pool cannot be started.
    pub fn new(
        palette: Arc<Palette>,
        options: &DitherOptions,
        delay: DelayPolicy,
        threads: usize,
    ) -> Result<Self, AnimationError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("dither-{i}"))
            .build()?;
        Ok(Self {
            ditherer: FrameDitherer::new(&palette, options),
            palette,
            delay,
            pool,
        })
    }

    /// Number of worker threads in the pool.
    #[inline]
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Dither every frame and assemble the animation.
    ///
    /// All frames are validated before any work is scheduled. Once running,
    /// frame tasks cannot fail; a panicking task propagates out of this call
    /// and no partial animation is returned.
    ///
    /// # Errors
    ///
    /// - [`AnimationError::NoFrames`] for an empty input
    /// - [`AnimationError::SizeMismatch`] if frames differ in size
    pub fn run(&self, frames: &[SourceFrame]) -> Result<Animation, AnimationError> {
        let (width, height) = validate(frames)?;

        let dithered: Vec<DitheredFrame> = self.pool.install(|| {
            frames
                .par_iter()
                .map(|frame| {
                    let out = self.ditherer.dither(frame);
                    let delay = self.delay.apply(frame.delay());
                    out.with_delay(delay)
                })
                .collect()
        });

        Ok(Animation::new(dithered, self.palette.clone(), width, height))
    }
}

fn validate(frames: &[SourceFrame]) -> Result<(usize, usize), AnimationError> {
    let first = frames.first().ok_or(AnimationError::NoFrames)?;
    let expected = (first.width(), first.height());
    for (index, frame) in frames.iter().enumerate().skip(1) {
        let actual = (frame.width(), frame.height());
        if actual != expected {
            return Err(AnimationError::SizeMismatch {
                index,
                expected,
                actual,
            });
        }
    }
    Ok(expected)
}
