pub mod dither_pipeline;

pub use dither_pipeline::{DitherJob, DitherPipeline, RunSummary};
