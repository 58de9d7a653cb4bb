use std::path::{Path, PathBuf};
use std::sync::Arc;

use gray_dither::{DelayPolicy, GrayDitherer, NamedPalette, PaletteRegistry, Reconstruction};

use crate::codec;
use crate::error::{CodecError, ConfigError, PipelineError};
use crate::models::{AppConfig, ReconstructionMode};

/// One input/output pair plus per-run overrides of the config.
#[derive(Debug, Clone, Default)]
pub struct DitherJob {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Palette id; falls back to the registry default
    pub palette: Option<u32>,
    /// Fixed delay in centiseconds; falls back to the config
    pub delay: Option<u16>,
    /// Worker count; falls back to the config
    pub threads: Option<usize>,
    pub reconstruction: Option<ReconstructionMode>,
}

impl DitherJob {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Default::default()
        }
    }
}

/// Result from a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub frames: usize,
    pub width: usize,
    pub height: usize,
    pub palette_id: u32,
    pub palette_name: String,
    /// Size of the written GIF
    pub bytes: usize,
}

/// Pipeline that orchestrates decode → dither → encode → write
pub struct DitherPipeline {
    config: Arc<AppConfig>,
    registry: PaletteRegistry,
}

impl DitherPipeline {
    pub fn new(config: Arc<AppConfig>) -> Result<Self, ConfigError> {
        let registry = config.build_registry()?;
        tracing::debug!(
            palettes = registry.len(),
            default_palette = registry.default_id(),
            "Palette registry ready"
        );
        Ok(Self { config, registry })
    }

    /// Dither `job.input` into `job.output`.
    ///
    /// Everything that can be rejected up front (paths, palette, source
    /// frames) is checked before any frame is dithered, and the output file
    /// is only written once the whole GIF has been encoded.
    pub fn run(&self, job: &DitherJob) -> Result<RunSummary, PipelineError> {
        require_gif_path(&job.input)?;
        require_gif_path(&job.output)?;

        let palette = self.resolve_palette(job.palette)?;
        let ditherer = self.ditherer(palette, job);

        let frames = codec::read_gif(&job.input)?;
        tracing::info!(
            input = %job.input.display(),
            frames = frames.len(),
            width = frames[0].width(),
            height = frames[0].height(),
            palette = %palette.name,
            "Dithering animation"
        );

        let animation = ditherer.dither_animation(&frames)?;
        for (index, frame) in animation.frames().iter().enumerate() {
            tracing::debug!(index, delay = frame.delay(), "Frame dithered");
        }

        let bytes = codec::encode_gif(&animation)?;
        std::fs::write(&job.output, &bytes).map_err(CodecError::Io)?;
        tracing::info!(
            output = %job.output.display(),
            bytes = bytes.len(),
            "GIF written"
        );

        Ok(RunSummary {
            frames: animation.len(),
            width: animation.width(),
            height: animation.height(),
            palette_id: palette.id,
            palette_name: palette.name.clone(),
            bytes: bytes.len(),
        })
    }

    /// The palettes available to jobs
    pub fn registry(&self) -> &PaletteRegistry {
        &self.registry
    }

    fn resolve_palette(&self, requested: Option<u32>) -> Result<&NamedPalette, ConfigError> {
        self.registry.resolve(requested).map_err(|_| {
            ConfigError::UnknownPalette(requested.unwrap_or_else(|| self.registry.default_id()))
        })
    }

    fn ditherer(&self, palette: &NamedPalette, job: &DitherJob) -> GrayDitherer {
        let delay = match job.delay {
            Some(delay) => DelayPolicy::Fixed(delay),
            None => self.config.delay_policy(),
        };

        let threads = job.threads.or(self.config.threads).unwrap_or(0);
        if job.threads == Some(0) || (job.threads.is_none() && self.config.threads == Some(0)) {
            tracing::warn!("Zero worker threads requested, using all cores");
        }

        let reconstruction: Reconstruction = job
            .reconstruction
            .unwrap_or(self.config.reconstruction)
            .into();

        GrayDitherer::new(palette.palette.clone())
            .reconstruction(reconstruction)
            .delay(delay)
            .threads(threads)
    }
}

/// Accept only paths with a `.gif` extension (any case).
fn require_gif_path(path: &Path) -> Result<(), CodecError> {
    let is_gif = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"));
    if is_gif {
        Ok(())
    } else {
        Err(CodecError::NotGif(path.to_path_buf()))
    }
}
