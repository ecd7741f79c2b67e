//! The fixed table of iOS app icon variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device class an icon variant targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Idiom {
    #[serde(rename = "iphone")]
    Iphone,
    #[serde(rename = "ipad")]
    Ipad,
    /// App Store listing artwork.
    #[serde(rename = "ios-marketing")]
    IosMarketing,
}

impl Idiom {
    pub fn as_str(&self) -> &'static str {
        match self {
            Idiom::Iphone => "iphone",
            Idiom::Ipad => "ipad",
            Idiom::IosMarketing => "ios-marketing",
        }
    }
}

impl fmt::Display for Idiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One icon variant: a nominal size in points rendered at an integer scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconSpec {
    /// Nominal edge length in logical points.
    pub size: f64,
    /// Display density multiplier (1 to 3).
    pub scale: u32,
    pub idiom: Idiom,
    /// Output filename, unique across the table.
    pub filename: &'static str,
}

impl IconSpec {
    pub const fn new(size: f64, scale: u32, idiom: Idiom, filename: &'static str) -> Self {
        Self {
            size,
            scale,
            idiom,
            filename,
        }
    }

    /// Edge length of the generated square image in pixels.
    ///
    /// Saturates for products outside `u32`; use [`Self::checked_pixel_size`] for
    /// entries that did not come from [`IOS_APP_ICONS`].
    pub fn pixel_size(&self) -> u32 {
        (self.size * f64::from(self.scale)).round() as u32
    }

    /// Like [`Self::pixel_size`], but `None` when the entry would not produce a
    /// writable image (zero, non-finite or wider than `u32::MAX` pixels).
    pub fn checked_pixel_size(&self) -> Option<u32> {
        let pixels = (self.size * f64::from(self.scale)).round();
        if pixels.is_finite() && pixels >= 1.0 && pixels <= f64::from(u32::MAX) {
            Some(pixels as u32)
        } else {
            None
        }
    }

    /// Manifest `size` value, e.g. `"20x20"` or `"83.5x83.5"`.
    pub fn size_label(&self) -> String {
        let size = if self.size.fract() == 0.0 {
            format!("{}", self.size as u64)
        } else {
            format!("{}", self.size)
        };
        format!("{size}x{size}")
    }

    /// Manifest `scale` value, e.g. `"2x"`.
    pub fn scale_label(&self) -> String {
        format!("{}x", self.scale)
    }
}

/// Every icon an iOS app icon set needs, in asset catalog order.
pub const IOS_APP_ICONS: &[IconSpec] = &[
    // iPhone
    IconSpec::new(20.0, 2, Idiom::Iphone, "AppIcon-20x20@2x.png"),
    IconSpec::new(20.0, 3, Idiom::Iphone, "AppIcon-20x20@3x.png"),
    IconSpec::new(29.0, 2, Idiom::Iphone, "AppIcon-29x29@2x.png"),
    IconSpec::new(29.0, 3, Idiom::Iphone, "AppIcon-29x29@3x.png"),
    IconSpec::new(40.0, 2, Idiom::Iphone, "AppIcon-40x40@2x.png"),
    IconSpec::new(40.0, 3, Idiom::Iphone, "AppIcon-40x40@3x.png"),
    IconSpec::new(60.0, 2, Idiom::Iphone, "AppIcon-60x60@2x.png"),
    IconSpec::new(60.0, 3, Idiom::Iphone, "AppIcon-60x60@3x.png"),
    // iPad
    IconSpec::new(20.0, 1, Idiom::Ipad, "AppIcon-20x20@1x.png"),
    IconSpec::new(20.0, 2, Idiom::Ipad, "AppIcon-20x20@2x-ipad.png"),
    IconSpec::new(29.0, 1, Idiom::Ipad, "AppIcon-29x29@1x.png"),
    IconSpec::new(29.0, 2, Idiom::Ipad, "AppIcon-29x29@2x-ipad.png"),
    IconSpec::new(40.0, 1, Idiom::Ipad, "AppIcon-40x40@1x.png"),
    IconSpec::new(40.0, 2, Idiom::Ipad, "AppIcon-40x40@2x-ipad.png"),
    IconSpec::new(76.0, 1, Idiom::Ipad, "AppIcon-76x76@1x.png"),
    IconSpec::new(76.0, 2, Idiom::Ipad, "AppIcon-76x76@2x.png"),
    IconSpec::new(83.5, 2, Idiom::Ipad, "AppIcon-83.5x83.5@2x.png"),
    // App Store
    IconSpec::new(1024.0, 1, Idiom::IosMarketing, "AppIcon-1024x1024@1x.png"),
];
