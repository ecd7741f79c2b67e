//! Shared fixtures for integration tests.

#![allow(dead_code)]

use app_icons::GeneratorConfig;
use image::{Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Scratch directory holding a source image and an output directory.
pub struct TestFixture {
    dir: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write a square opaque PNG with a diagonal gradient.
    pub fn create_source(&self, name: &str, size: u32) -> PathBuf {
        let path = self.path(name);
        gradient(size, true)
            .save(&path)
            .expect("failed to write source image");
        path
    }

    /// Write a square PNG whose alpha varies across the image.
    pub fn create_translucent_source(&self, name: &str, size: u32) -> PathBuf {
        let path = self.path(name);
        gradient(size, false)
            .save(&path)
            .expect("failed to write source image");
        path
    }

    pub fn output_dir(&self) -> PathBuf {
        self.path("AppIcon.appiconset")
    }

    pub fn config(&self, source: &Path) -> GeneratorConfig {
        GeneratorConfig::new(source, self.output_dir())
    }
}

fn gradient(size: u32, opaque: bool) -> RgbaImage {
    RgbaImage::from_fn(size, size, |x, y| {
        let r = (x * 255 / size) as u8;
        let g = (y * 255 / size) as u8;
        let a = if opaque { 255 } else { ((x + y) % 256) as u8 };
        Rgba([r, g, 96, a])
    })
}
