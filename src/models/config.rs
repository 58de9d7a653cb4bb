use std::path::Path;

use gray_dither::{DelayPolicy, Palette, PaletteRegistry, Reconstruction, DEFAULT_PALETTE_ID};
use serde::Deserialize;

use crate::error::ConfigError;

/// Application configuration loaded from a YAML file
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Palette id used when none is given on the command line
    #[serde(default = "default_palette")]
    pub default_palette: u32,

    /// Fixed output delay in centiseconds; absent keeps source delays
    #[serde(default)]
    pub delay: Option<u16>,

    /// Worker thread cap; absent or 0 uses all cores
    #[serde(default)]
    pub threads: Option<usize>,

    /// Reconstruction value source for error diffusion
    #[serde(default)]
    pub reconstruction: ReconstructionMode,

    /// Additional palettes on top of the built-ins
    #[serde(default)]
    pub palettes: Vec<PaletteConfig>,
}

fn default_palette() -> u32 {
    DEFAULT_PALETTE_ID
}

/// A user-defined palette
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct PaletteConfig {
    /// Selection id; must not collide with a built-in
    pub id: u32,

    /// Display name
    pub name: String,

    /// Hex colors, 2 or 4 of them, darkest band first
    pub colors: Vec<String>,
}

/// Config/CLI spelling of [`Reconstruction`]
#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReconstructionMode {
    /// Fixed band midpoints (31/95/159/223)
    #[default]
    Canonical,
    /// Luma of the chosen palette entry
    Palette,
}

impl From<ReconstructionMode> for Reconstruction {
    fn from(mode: ReconstructionMode) -> Self {
        match mode {
            ReconstructionMode::Canonical => Reconstruction::Canonical,
            ReconstructionMode::Palette => Reconstruction::PaletteLuma,
        }
    }
}

impl AppConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    ///
    /// A path that cannot be read or parsed is an error; there is no silent
    /// fallback once a file was asked for.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            palettes = config.palettes.len(),
            default_palette = config.default_palette,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        // An empty file deserializes as unit, not as a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Built-in palettes plus the configured ones, with the configured default.
    pub fn build_registry(&self) -> Result<PaletteRegistry, ConfigError> {
        let mut registry = PaletteRegistry::builtin();

        for entry in &self.palettes {
            let invalid = |source| ConfigError::InvalidPalette {
                id: entry.id,
                name: entry.name.clone(),
                source,
            };
            let colors: Vec<&str> = entry.colors.iter().map(String::as_str).collect();
            let palette = Palette::from_hex(&colors).map_err(invalid)?;
            registry
                .register(entry.id, entry.name.clone(), palette)
                .map_err(invalid)?;
        }

        registry
            .set_default(self.default_palette)
            .map_err(|_| ConfigError::UnknownPalette(self.default_palette))?;

        Ok(registry)
    }

    /// Delay policy implied by the `delay` setting.
    pub fn delay_policy(&self) -> DelayPolicy {
        match self.delay {
            Some(delay) => DelayPolicy::Fixed(delay),
            None => DelayPolicy::Preserve,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_palette: DEFAULT_PALETTE_ID,
            delay: None,
            threads: None,
            reconstruction: ReconstructionMode::Canonical,
            palettes: Vec::new(),
        }
    }
}
