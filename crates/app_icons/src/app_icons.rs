//! iOS app icon set generation.
//!
//! Resamples a single source image into every size listed in [`IOS_APP_ICONS`]
//! and writes the matching `Contents.json` so Xcode picks the set up as-is.

pub mod config;
pub mod error;
pub mod generator;
pub mod icon_spec;
pub mod manifest;

pub use config::GeneratorConfig;
pub use error::{IconError, Result};
pub use generator::{
    GeneratedIcon, GenerationReport, ResampleFilter, ensure_output_directory, generate,
    generate_with_filter, generate_with_progress, load_source, run, run_with_progress,
    run_with_specs, validate_specs,
};
pub use icon_spec::{IOS_APP_ICONS, IconSpec, Idiom};
pub use manifest::{
    MANIFEST_FILE_NAME, Manifest, ManifestImage, ManifestInfo, build_manifest, read_manifest,
    write_manifest,
};
