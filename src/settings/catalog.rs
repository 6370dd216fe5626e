//! Static option catalogs for the display settings.
//!
//! Each table maps a symbolic tag to the concrete engine parameters the
//! facade pushes when that option is selected. The tables are built at
//! compile time and never change; lookups are first-match-wins linear scans.

use serde::{Deserialize, Serialize};

/// Quality preset names, lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Low,
    Medium,
    High,
    Ultra,
}

/// A named window resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolutionOption {
    pub tag: &'static str,
    pub width: u32,
    pub height: u32,
}

/// A named target refresh rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshRateOption {
    pub tag: &'static str,
    pub hertz: u32,
}

/// A named antialiasing mode with its MSAA sample count (1 = off).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AntialiasOption {
    pub tag: &'static str,
    pub samples: u32,
}

/// Concrete engine parameters behind a quality level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityOption {
    pub level: QualityLevel,
    /// Directional shadow map resolution in texels per side.
    pub shadow_map_size: usize,
    /// Whether the directional light casts shadows at all.
    pub shadows: bool,
}

pub const RESOLUTIONS: &[ResolutionOption] = &[
    ResolutionOption { tag: "720p", width: 1280, height: 720 },
    ResolutionOption { tag: "900p", width: 1600, height: 900 },
    ResolutionOption { tag: "1080p", width: 1920, height: 1080 },
    ResolutionOption { tag: "1440p", width: 2560, height: 1440 },
    ResolutionOption { tag: "2160p", width: 3840, height: 2160 },
];

pub const REFRESH_RATES: &[RefreshRateOption] = &[
    RefreshRateOption { tag: "60hz", hertz: 60 },
    RefreshRateOption { tag: "75hz", hertz: 75 },
    RefreshRateOption { tag: "120hz", hertz: 120 },
    RefreshRateOption { tag: "144hz", hertz: 144 },
    RefreshRateOption { tag: "240hz", hertz: 240 },
];

pub const ANTIALIAS_MODES: &[AntialiasOption] = &[
    AntialiasOption { tag: "off", samples: 1 },
    AntialiasOption { tag: "msaa2x", samples: 2 },
    AntialiasOption { tag: "msaa4x", samples: 4 },
    AntialiasOption { tag: "msaa8x", samples: 8 },
];

pub const QUALITY_PRESETS: &[QualityOption] = &[
    QualityOption { level: QualityLevel::Low, shadow_map_size: 1024, shadows: false },
    QualityOption { level: QualityLevel::Medium, shadow_map_size: 2048, shadows: true },
    QualityOption { level: QualityLevel::High, shadow_map_size: 4096, shadows: true },
    QualityOption { level: QualityLevel::Ultra, shadow_map_size: 8192, shadows: true },
];

/// Find a resolution by tag (first match wins).
#[must_use]
pub fn resolution(tag: &str) -> Option<&'static ResolutionOption> {
    RESOLUTIONS.iter().find(|o| o.tag == tag)
}

/// Find a refresh rate by tag (first match wins).
#[must_use]
pub fn refresh_rate(tag: &str) -> Option<&'static RefreshRateOption> {
    REFRESH_RATES.iter().find(|o| o.tag == tag)
}

/// Find an antialiasing mode by tag (first match wins).
#[must_use]
pub fn antialias(tag: &str) -> Option<&'static AntialiasOption> {
    ANTIALIAS_MODES.iter().find(|o| o.tag == tag)
}

/// Resolve a quality level to its preset parameters.
///
/// # Panics
/// Panics if the preset table is missing a level; the table is expected to
/// cover every `QualityLevel` variant.
#[must_use]
pub fn quality(level: QualityLevel) -> &'static QualityOption {
    QUALITY_PRESETS
        .iter()
        .find(|o| o.level == level)
        .expect("quality preset table covers every level")
}
