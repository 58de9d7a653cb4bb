use std::path::PathBuf;

use gray_dither::{DitherError, FrameError, PaletteError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid palette {id} ({name}): {source}")]
    InvalidPalette {
        id: u32,
        name: String,
        #[source]
        source: PaletteError,
    },

    #[error("Unknown palette id {0}")]
    UnknownPalette(u32),
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Not a .gif path: {}", .0.display())]
    NotGif(PathBuf),

    #[error("Could not open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("GIF decode error: {0}")]
    Decode(#[from] gif::DecodingError),

    #[error("GIF encode error: {0}")]
    Encode(#[from] gif::EncodingError),

    #[error("GIF contains no frames")]
    NoFrames,

    #[error("Image too large for GIF: {width}x{height}")]
    TooLarge { width: usize, height: usize },

    #[error("Invalid frame {index}: {source}")]
    Frame {
        index: usize,
        #[source]
        source: FrameError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error("Dither error: {0}")]
    Dither(#[from] DitherError),
}
