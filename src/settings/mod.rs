//! Settings records, sparse updates and defaults.
//!
//! `Settings` is the resource holding the current configuration. Display
//! fields are only ever changed through a [`DisplayPatch`] routed into
//! [`apply::apply_display_patches`], which merges the patch, pushes the
//! assigned fields to the engine and notifies subscribers via
//! [`SettingsChanged`]. Initial values come from a RON file under
//! `data/settings/` (see `loader`).

use bevy::prelude::{Event, Resource};
use serde::{Deserialize, Serialize};

pub mod apply;
pub mod catalog;
pub mod loader;

pub use catalog::{AntialiasOption, QualityLevel, RefreshRateOption, ResolutionOption};

/// The currently applied graphics configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySettings {
    pub quality: QualityLevel,
    pub resolution: ResolutionOption,
    pub refresh: RefreshRateOption,
    pub fullscreen: bool,
    pub vsync: bool, // Fifo when on, AutoNoVsync when off
    pub antialiasing: AntialiasOption,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            quality: QualityLevel::High,
            resolution: *catalog::resolution("1080p").expect("default resolution is in the catalog"),
            refresh: *catalog::refresh_rate("60hz").expect("default refresh rate is in the catalog"),
            fullscreen: false,
            vsync: true,
            antialiasing: *catalog::antialias("msaa4x").expect("default antialias mode is in the catalog"),
        }
    }
}

impl DisplaySettings {
    /// Field-wise merge: assigned patch fields overwrite, unassigned fields
    /// leave the stored value untouched.
    pub fn merge(&mut self, patch: &DisplayPatch) {
        if let Some(quality) = patch.quality {
            self.quality = quality;
        }
        if let Some(resolution) = patch.resolution {
            self.resolution = resolution;
        }
        if let Some(refresh) = patch.refresh {
            self.refresh = refresh;
        }
        if let Some(fullscreen) = patch.fullscreen {
            self.fullscreen = fullscreen;
        }
        if let Some(vsync) = patch.vsync {
            self.vsync = vsync;
        }
        if let Some(antialiasing) = patch.antialiasing {
            self.antialiasing = antialiasing;
        }
    }

    /// A patch with every field assigned from these settings.
    #[must_use]
    pub fn as_patch(&self) -> DisplayPatch {
        DisplayPatch {
            quality: Some(self.quality),
            resolution: Some(self.resolution),
            refresh: Some(self.refresh),
            fullscreen: Some(self.fullscreen),
            vsync: Some(self.vsync),
            antialiasing: Some(self.antialiasing),
        }
    }
}

/// A sparse display-settings update. `None` fields are unassigned and never
/// overwrite stored state during a merge.
///
/// Constructors build single-field patches; tag-taking constructors resolve
/// the tag through the catalog and panic on unknown tags, since a tag that
/// is absent from the catalog can only come from a coding mistake.
#[derive(Event, Debug, Clone, Copy, Default, PartialEq)]
pub struct DisplayPatch {
    pub quality: Option<QualityLevel>,
    pub resolution: Option<ResolutionOption>,
    pub refresh: Option<RefreshRateOption>,
    pub fullscreen: Option<bool>,
    pub vsync: Option<bool>,
    pub antialiasing: Option<AntialiasOption>,
}

impl DisplayPatch {
    #[must_use]
    pub fn quality(level: QualityLevel) -> Self {
        Self { quality: Some(level), ..Self::default() }
    }

    /// # Panics
    /// Panics if `tag` is not in the resolution catalog.
    #[must_use]
    pub fn resolution(tag: &str) -> Self {
        let option = catalog::resolution(tag)
            .unwrap_or_else(|| panic!("unknown resolution tag '{tag}'"));
        Self { resolution: Some(*option), ..Self::default() }
    }

    /// # Panics
    /// Panics if `tag` is not in the refresh-rate catalog.
    #[must_use]
    pub fn refresh_rate(tag: &str) -> Self {
        let option = catalog::refresh_rate(tag)
            .unwrap_or_else(|| panic!("unknown refresh rate tag '{tag}'"));
        Self { refresh: Some(*option), ..Self::default() }
    }

    #[must_use]
    pub fn fullscreen(on: bool) -> Self {
        Self { fullscreen: Some(on), ..Self::default() }
    }

    #[must_use]
    pub fn vsync(on: bool) -> Self {
        Self { vsync: Some(on), ..Self::default() }
    }

    /// # Panics
    /// Panics if `tag` is not in the antialias catalog.
    #[must_use]
    pub fn antialias(tag: &str) -> Self {
        let option = catalog::antialias(tag)
            .unwrap_or_else(|| panic!("unknown antialias tag '{tag}'"));
        Self { antialiasing: Some(*option), ..Self::default() }
    }

    /// A patch assigning every field its default value. Used by the
    /// reset-to-defaults operation; never leaves a field unassigned.
    #[must_use]
    pub fn all_defaults() -> Self {
        DisplaySettings::default().as_patch()
    }

    /// True when no field is assigned. Empty patches are dropped without
    /// touching the engine or notifying subscribers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Mouse-look settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ControlsSettings {
    #[serde(default)]
    pub invert_x: bool, // Invert mouse X axis
    #[serde(default)]
    pub invert_y: bool, // Invert mouse Y axis
    #[serde(default = "ControlsSettings::default_sensitivity")]
    pub mouse_sensitivity: f32, // Degrees per mouse count per second
    #[serde(default = "ControlsSettings::default_max_pitch")]
    pub max_pitch_degrees: f32, // Pitch is clamped to +/- this angle
}

impl ControlsSettings {
    fn default_sensitivity() -> f32 { 40.0 }
    fn default_max_pitch() -> f32 { 85.0 }
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            invert_x: false,
            invert_y: false,
            mouse_sensitivity: Self::default_sensitivity(),
            max_pitch_degrees: Self::default_max_pitch(),
        }
    }
}

/// Top-level settings resource.
#[derive(Resource, Debug, Clone, Default)]
pub struct Settings {
    pub display: DisplaySettings,
    pub controls: ControlsSettings,
}

impl Settings {
    #[must_use]
    pub fn defaults() -> Self {
        Settings::default()
    }
}

/// Notification sent after a patch has been merged and pushed to the engine.
/// Carries the full post-merge configuration so subscribers never have to
/// re-read the resource mid-frame.
#[derive(Event, Debug, Clone, Copy)]
pub struct SettingsChanged {
    pub display: DisplaySettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_leaves_settings_unchanged() {
        let mut settings = DisplaySettings::default();
        let before = settings;
        settings.merge(&DisplayPatch::default());
        assert_eq!(settings, before);
    }

    #[test]
    fn single_field_patch_changes_only_that_field() {
        let mut settings = DisplaySettings::default();
        let before = settings;
        settings.merge(&DisplayPatch::resolution("1440p"));

        assert_eq!(settings.resolution.tag, "1440p");
        assert_eq!(settings.quality, before.quality);
        assert_eq!(settings.refresh, before.refresh);
        assert_eq!(settings.fullscreen, before.fullscreen);
        assert_eq!(settings.vsync, before.vsync);
        assert_eq!(settings.antialiasing, before.antialiasing);
    }

    #[test]
    fn later_patches_win_for_assigned_fields() {
        let mut settings = DisplaySettings::default();
        settings.merge(&DisplayPatch::vsync(false));
        settings.merge(&DisplayPatch::vsync(true));
        assert!(settings.vsync);
    }

    #[test]
    fn all_defaults_leaves_no_field_unassigned() {
        let patch = DisplayPatch::all_defaults();
        assert!(patch.quality.is_some());
        assert!(patch.resolution.is_some());
        assert!(patch.refresh.is_some());
        assert!(patch.fullscreen.is_some());
        assert!(patch.vsync.is_some());
        assert!(patch.antialiasing.is_some());
    }

    #[test]
    fn empty_patch_reports_empty() {
        assert!(DisplayPatch::default().is_empty());
        assert!(!DisplayPatch::fullscreen(true).is_empty());
    }

    #[test]
    #[should_panic(expected = "unknown resolution tag")]
    fn unknown_resolution_tag_fails_fast() {
        let _ = DisplayPatch::resolution("480i");
    }
}
