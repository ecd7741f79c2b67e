//! Resamples one source image into every size of an icon table.

use crate::config::GeneratorConfig;
use crate::error::{IconError, Result};
use crate::icon_spec::{IOS_APP_ICONS, IconSpec, Idiom};
use crate::manifest::{build_manifest, write_manifest};
use image::imageops::FilterType;
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Resampling filter used to scale the source image.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResampleFilter {
    #[default]
    Lanczos3,
    CatmullRom,
    Gaussian,
}

impl ResampleFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResampleFilter::Lanczos3 => "lanczos3",
            ResampleFilter::CatmullRom => "catmull-rom",
            ResampleFilter::Gaussian => "gaussian",
        }
    }
}

impl From<ResampleFilter> for FilterType {
    fn from(filter: ResampleFilter) -> Self {
        match filter {
            ResampleFilter::Lanczos3 => FilterType::Lanczos3,
            ResampleFilter::CatmullRom => FilterType::CatmullRom,
            ResampleFilter::Gaussian => FilterType::Gaussian,
        }
    }
}

impl fmt::Display for ResampleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResampleFilter {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lanczos3" | "lanczos" => Ok(ResampleFilter::Lanczos3),
            "catmull-rom" | "catmullrom" | "cubic" => Ok(ResampleFilter::CatmullRom),
            "gaussian" => Ok(ResampleFilter::Gaussian),
            other => Err(format!(
                "unknown filter '{other}' (expected lanczos3, catmull-rom or gaussian)"
            )),
        }
    }
}

/// One icon written by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedIcon {
    pub filename: String,
    pub idiom: Idiom,
    /// Edge length of the written square image.
    pub pixel_size: u32,
    pub path: PathBuf,
}

/// Outcome of a full [`run`].
#[derive(Debug, Clone)]
pub struct GenerationReport {
    pub icons: Vec<GeneratedIcon>,
    pub manifest_path: PathBuf,
}

/// Open and decode the source image, sniffing the format from its contents.
pub fn load_source(path: &Path) -> Result<DynamicImage> {
    let reader = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| IconError::source_not_found(path, e))?;
    let image = reader
        .decode()
        .map_err(|e| IconError::unsupported_format(path, e))?;

    let (width, height) = image.dimensions();
    log::debug!("Loaded {} ({width}x{height})", path.display());
    if width != height {
        log::warn!(
            "Source image {} is not square ({width}x{height}); icons will be stretched",
            path.display()
        );
    }
    Ok(image)
}

/// Create `path` and any missing parents. Succeeds if it already exists.
pub fn ensure_output_directory(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)
        .map_err(|e| IconError::filesystem(path, "Failed to create output directory", e))?;
    log::debug!("Output directory ready: {}", path.display());
    Ok(())
}

/// Write one resampled PNG per spec into `output_dir` using Lanczos resampling.
pub fn generate(
    source: &DynamicImage,
    specs: &[IconSpec],
    output_dir: &Path,
) -> Result<Vec<GeneratedIcon>> {
    generate_with_filter(source, specs, output_dir, ResampleFilter::default())
}

/// Like [`generate`], with an explicit resampling filter.
pub fn generate_with_filter(
    source: &DynamicImage,
    specs: &[IconSpec],
    output_dir: &Path,
    filter: ResampleFilter,
) -> Result<Vec<GeneratedIcon>> {
    generate_with_progress(source, specs, output_dir, filter, |_| {})
}

/// Like [`generate_with_filter`], calling `on_generated` right after each icon is saved.
///
/// Every entry is checked before anything is written. Entries are then processed
/// in table order and existing files are overwritten. The first failure aborts the
/// run; icons written before it are left in place.
pub fn generate_with_progress(
    source: &DynamicImage,
    specs: &[IconSpec],
    output_dir: &Path,
    filter: ResampleFilter,
    mut on_generated: impl FnMut(&GeneratedIcon),
) -> Result<Vec<GeneratedIcon>> {
    let pixel_sizes = validate_specs(specs)?;
    let (width, height) = source.dimensions();
    let mut generated = Vec::with_capacity(specs.len());

    for (spec, pixel_size) in specs.iter().zip(pixel_sizes) {
        if pixel_size > width.min(height) {
            log::warn!(
                "{} upscales the source to {pixel_size}px (source is {width}x{height})",
                spec.filename
            );
        }

        let resized = png_compatible(source.resize_exact(pixel_size, pixel_size, filter.into()));
        let path = output_dir.join(spec.filename);
        resized
            .save_with_format(&path, ImageFormat::Png)
            .map_err(|e| {
                IconError::filesystem_for_entry(&path, spec.filename, "Failed to write icon", e)
            })?;

        log::info!("Generated {} ({pixel_size}x{pixel_size})", spec.filename);
        let icon = GeneratedIcon {
            filename: spec.filename.to_string(),
            idiom: spec.idiom,
            pixel_size,
            path,
        };
        on_generated(&icon);
        generated.push(icon);
    }

    Ok(generated)
}

/// Resolve every entry's pixel size, rejecting entries that cannot be rendered.
pub fn validate_specs(specs: &[IconSpec]) -> Result<Vec<u32>> {
    specs
        .iter()
        .map(|spec| {
            spec.checked_pixel_size().ok_or_else(|| {
                IconError::invalid_entry(
                    spec.filename,
                    format!(
                        "{} points at {} resolves to no valid pixel size",
                        spec.size,
                        spec.scale_label()
                    ),
                )
            })
        })
        .collect()
}

/// PNG has no floating point color types.
fn png_compatible(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            DynamicImage::ImageRgba16(image.to_rgba16())
        }
        other => other,
    }
}

/// Generate the full iOS icon set and its manifest as described by `config`.
pub fn run(config: &GeneratorConfig) -> Result<GenerationReport> {
    run_with_specs(config, IOS_APP_ICONS)
}

/// Generate icons and a manifest for an arbitrary table.
pub fn run_with_specs(config: &GeneratorConfig, specs: &[IconSpec]) -> Result<GenerationReport> {
    run_with_progress(config, specs, |_| {})
}

/// Like [`run_with_specs`], reporting each icon as soon as it is on disk.
pub fn run_with_progress(
    config: &GeneratorConfig,
    specs: &[IconSpec],
    on_generated: impl FnMut(&GeneratedIcon),
) -> Result<GenerationReport> {
    validate_specs(specs)?;
    let source = load_source(&config.source)?;
    ensure_output_directory(&config.output_dir)?;
    let icons =
        generate_with_progress(&source, specs, &config.output_dir, config.filter, on_generated)?;
    let manifest = build_manifest(specs);
    let manifest_path = write_manifest(&manifest, &config.output_dir)?;
    Ok(GenerationReport {
        icons,
        manifest_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn test_filter_parsing() {
        assert_eq!("lanczos3".parse::<ResampleFilter>(), Ok(ResampleFilter::Lanczos3));
        assert_eq!("Catmull-Rom".parse::<ResampleFilter>(), Ok(ResampleFilter::CatmullRom));
        assert_eq!("gaussian".parse::<ResampleFilter>(), Ok(ResampleFilter::Gaussian));
        assert!("nearest".parse::<ResampleFilter>().is_err());
    }

    #[test]
    fn test_filter_round_trips_through_display() {
        for filter in [
            ResampleFilter::Lanczos3,
            ResampleFilter::CatmullRom,
            ResampleFilter::Gaussian,
        ] {
            assert_eq!(filter.to_string().parse::<ResampleFilter>(), Ok(filter));
        }
    }

    #[test]
    fn test_zero_pixel_entry_is_rejected_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([9, 9, 9, 255])));
        let specs = [
            IconSpec::new(4.0, 1, Idiom::Ipad, "ok.png"),
            IconSpec::new(0.2, 1, Idiom::Ipad, "z.png"),
        ];

        let err = generate(&source, &specs, dir.path()).unwrap_err();
        assert!(matches!(err, IconError::InvalidEntry { .. }), "got {err:?}");
        assert_eq!(err.entry(), Some("z.png"));
        assert!(!dir.path().join("ok.png").exists());
    }

    #[test]
    fn test_progress_reports_each_icon_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let source = DynamicImage::ImageRgba8(RgbaImage::from_pixel(8, 8, Rgba([9, 9, 9, 255])));
        let specs = &IOS_APP_ICONS[8..11];

        let mut seen = Vec::new();
        let icons = generate_with_progress(
            &source,
            specs,
            dir.path(),
            ResampleFilter::Lanczos3,
            |icon| {
                assert!(icon.path.is_file());
                seen.push(icon.filename.clone());
            },
        )
        .unwrap();

        let expected: Vec<String> = icons.iter().map(|icon| icon.filename.clone()).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn test_png_compatible_keeps_alpha() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(4, 4, Rgba([1, 2, 3, 0])));
        let converted = png_compatible(image);
        assert!(matches!(converted, DynamicImage::ImageRgba8(_)));

        let float = DynamicImage::ImageRgba32F(image::Rgba32FImage::new(2, 2));
        assert!(matches!(png_compatible(float), DynamicImage::ImageRgba16(_)));
    }
}
