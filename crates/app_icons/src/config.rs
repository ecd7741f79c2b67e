//! Generator configuration.
//!
//! Paths are always explicit: the config either comes from [`GeneratorConfig::default`],
//! from a JSON file the caller names, or from fields set directly.

use crate::generator::ResampleFilter;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Source image every icon is resampled from.
    #[serde(default = "default_source")]
    pub source: PathBuf,

    /// The `.appiconset` directory that receives the icons and `Contents.json`.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub filter: ResampleFilter,
}

fn default_source() -> PathBuf {
    PathBuf::from("client/public/images/app-icon.png")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("ios/App/App/Assets.xcassets/AppIcon.appiconset")
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            output_dir: default_output_dir(),
            filter: ResampleFilter::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn new(source: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            output_dir: output_dir.into(),
            filter: ResampleFilter::default(),
        }
    }

    /// Load config from a JSON file. Missing fields take their defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config at {}", path.display()))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }
}
