//! `Contents.json` for an Xcode app icon set.
//!
//! The manifest is derived entirely from the same [`IconSpec`] table that drives
//! image generation, so the declared size and scale of each file always match the
//! pixels that were written for it.

use crate::error::{IconError, Result};
use crate::icon_spec::{IconSpec, Idiom};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Fixed filename of the manifest inside the output directory.
pub const MANIFEST_FILE_NAME: &str = "Contents.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manifest {
    pub images: Vec<ManifestImage>,
    pub info: ManifestInfo,
}

/// Descriptor for one generated icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestImage {
    pub filename: String,
    pub idiom: Idiom,
    /// e.g. `"2x"`.
    pub scale: String,
    /// e.g. `"83.5x83.5"`.
    pub size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestInfo {
    pub author: String,
    pub version: u32,
}

impl Default for ManifestInfo {
    fn default() -> Self {
        Self {
            author: "xcode".to_string(),
            version: 1,
        }
    }
}

impl From<&IconSpec> for ManifestImage {
    fn from(spec: &IconSpec) -> Self {
        Self {
            filename: spec.filename.to_string(),
            idiom: spec.idiom,
            scale: spec.scale_label(),
            size: spec.size_label(),
        }
    }
}

impl Manifest {
    pub fn image(&self, filename: &str) -> Option<&ManifestImage> {
        self.images.iter().find(|image| image.filename == filename)
    }
}

/// Build the manifest for `specs`, one image entry per spec in table order.
pub fn build_manifest(specs: &[IconSpec]) -> Manifest {
    Manifest {
        images: specs.iter().map(ManifestImage::from).collect(),
        info: ManifestInfo::default(),
    }
}

/// Serialize `manifest` to `output_dir/Contents.json`, replacing any prior version.
///
/// Returns the path written.
pub fn write_manifest(manifest: &Manifest, output_dir: &Path) -> Result<PathBuf> {
    let path = output_dir.join(MANIFEST_FILE_NAME);
    let json =
        serde_json::to_string_pretty(manifest).map_err(|e| IconError::serialization(&path, e))?;
    std::fs::write(&path, json).map_err(|e| IconError::serialization(&path, e))?;
    log::info!("Wrote manifest with {} images to {}", manifest.images.len(), path.display());
    Ok(path)
}

/// Read the manifest previously written to `output_dir`.
pub fn read_manifest(output_dir: &Path) -> Result<Manifest> {
    let path = output_dir.join(MANIFEST_FILE_NAME);
    let contents =
        std::fs::read_to_string(&path).map_err(|e| IconError::serialization(&path, e))?;
    serde_json::from_str(&contents).map_err(|e| IconError::serialization(&path, e))
}
