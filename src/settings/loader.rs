//! Settings file loading and hot-reloading.
//!
//! Settings are read from RON files in the `data/settings` directory; the
//! first file that parses and resolves wins. An empty or missing directory
//! yields the defaults, while a present-but-invalid file is a configuration
//! error surfaced as [`SettingsError`] so startup can fail fast. A notify
//! watcher flags file changes and a frame system reloads them, routing the
//! display fields through the normal patch/apply path.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use notify::{Config, RecommendedWatcher, RecursiveMode, Watcher};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::catalog::{self, QualityLevel};
use crate::settings::{ControlsSettings, DisplayPatch, DisplaySettings, Settings};

/// Directory scanned for settings RON files.
pub const SETTINGS_DIR: &str = "data/settings";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("unknown {field} tag '{tag}' in settings file")]
    UnknownTag { field: &'static str, tag: String },
}

/// On-disk shape of the settings file. Display options are stored as catalog
/// tags and resolved to concrete parameters at load time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub controls: ControlsSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "DisplayConfig::default_quality")]
    pub quality: QualityLevel,
    #[serde(default = "DisplayConfig::default_resolution")]
    pub resolution: String, // Catalog tag, e.g. "1080p"
    #[serde(default = "DisplayConfig::default_refresh_rate")]
    pub refresh_rate: String, // Catalog tag, e.g. "60hz"
    #[serde(default)]
    pub fullscreen: bool,
    #[serde(default = "DisplayConfig::default_vsync")]
    pub vsync: bool,
    #[serde(default = "DisplayConfig::default_antialiasing")]
    pub antialiasing: String, // Catalog tag, e.g. "msaa4x"
}

impl DisplayConfig {
    fn default_quality() -> QualityLevel { QualityLevel::High }
    fn default_resolution() -> String { "1080p".to_string() }
    fn default_refresh_rate() -> String { "60hz".to_string() }
    fn default_vsync() -> bool { true }
    fn default_antialiasing() -> String { "msaa4x".to_string() }

    /// Resolve the stored tags against the catalogs.
    ///
    /// # Errors
    /// Returns `SettingsError::UnknownTag` naming the offending field when a
    /// tag has no catalog entry.
    pub fn resolve(&self) -> Result<DisplaySettings, SettingsError> {
        let resolution = catalog::resolution(&self.resolution).ok_or_else(|| {
            SettingsError::UnknownTag { field: "resolution", tag: self.resolution.clone() }
        })?;
        let refresh = catalog::refresh_rate(&self.refresh_rate).ok_or_else(|| {
            SettingsError::UnknownTag { field: "refresh_rate", tag: self.refresh_rate.clone() }
        })?;
        let antialiasing = catalog::antialias(&self.antialiasing).ok_or_else(|| {
            SettingsError::UnknownTag { field: "antialiasing", tag: self.antialiasing.clone() }
        })?;

        Ok(DisplaySettings {
            quality: self.quality,
            resolution: *resolution,
            refresh: *refresh,
            fullscreen: self.fullscreen,
            vsync: self.vsync,
            antialiasing: *antialiasing,
        })
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            quality: Self::default_quality(),
            resolution: Self::default_resolution(),
            refresh_rate: Self::default_refresh_rate(),
            fullscreen: false,
            vsync: Self::default_vsync(),
            antialiasing: Self::default_antialiasing(),
        }
    }
}

impl SettingsFile {
    /// # Errors
    /// Returns an error when any display tag is unknown.
    pub fn resolve(&self) -> Result<Settings, SettingsError> {
        Ok(Settings {
            display: self.display.resolve()?,
            controls: self.controls.clone(),
        })
    }
}

/// Load settings from `path` (directory). The first `.ron` file that parses
/// and resolves wins; if the directory is missing or holds no RON files the
/// defaults are used.
///
/// # Errors
/// Returns an error when a RON file exists but cannot be read, parsed or
/// resolved against the catalogs.
pub fn load_settings_from_dir(path: &str) -> Result<Settings, SettingsError> {
    let Ok(entries) = std::fs::read_dir(path) else {
        return Ok(Settings::defaults());
    };

    for entry in entries.flatten() {
        let file_path = entry.path();
        if !file_path.is_file() || file_path.extension().and_then(|e| e.to_str()) != Some("ron") {
            continue;
        }
        let content = std::fs::read_to_string(&file_path)
            .map_err(|source| SettingsError::Read { path: file_path.clone(), source })?;
        let file: SettingsFile = ron::from_str(&content)
            .map_err(|source| SettingsError::Parse { path: file_path, source })?;
        return file.resolve();
    }

    Ok(Settings::defaults())
}

/// File-watcher resource for settings hot-reload.
#[derive(Resource)]
pub struct SettingsWatcher {
    changed: Arc<Mutex<bool>>, // Set by the notify thread, drained each frame.
    _watcher: Option<RecommendedWatcher>, // Handle kept to prevent immediate drop.
}

impl SettingsWatcher {
    /// A watcher with no active OS backend; used as a fallback when watcher
    /// creation fails so the app still runs without hot-reload.
    #[must_use]
    pub fn stub() -> Self {
        SettingsWatcher {
            changed: Arc::new(Mutex::new(false)),
            _watcher: None,
        }
    }

    /// Drain the change flag, recovering from a poisoned mutex.
    fn take_change(&self) -> bool {
        let mut flag = match self.changed.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        std::mem::take(&mut *flag)
    }
}

/// Watch the settings directory and flag create/modify events.
///
/// # Errors
/// Returns a `notify::Error` when the OS watcher cannot be created or the
/// path cannot be registered.
pub fn setup_settings_watcher(path: &str) -> Result<SettingsWatcher, notify::Error> {
    let changed = Arc::new(Mutex::new(false));
    let flag = changed.clone();

    let mut watcher: RecommendedWatcher = Watcher::new(
        move |res: Result<notify::Event, notify::Error>| match res {
            Ok(event) => {
                if matches!(
                    event.kind,
                    notify::EventKind::Modify(_) | notify::EventKind::Create(_)
                ) {
                    match flag.lock() {
                        Ok(mut guard) => *guard = true,
                        Err(poisoned) => *poisoned.into_inner() = true,
                    }
                }
            }
            Err(e) => eprintln!("settings watch error: {e:?}"),
        },
        Config::default(),
    )?;

    watcher.watch(Path::new(path), RecursiveMode::NonRecursive)?;
    Ok(SettingsWatcher { changed, _watcher: Some(watcher) })
}

/// Reload settings when the watcher flags a change.
///
/// Controls are replaced directly; display fields are routed through the
/// patch/apply path so the engine pushes and the change notification stay in
/// one place. A reload failure keeps the current settings.
#[allow(clippy::needless_pass_by_value)]
pub fn check_settings_changes(
    watcher: Res<SettingsWatcher>,
    mut settings: ResMut<Settings>,
    mut patches: EventWriter<DisplayPatch>,
) {
    if !watcher.take_change() {
        return;
    }

    info!("settings changed, reloading...");
    match load_settings_from_dir(SETTINGS_DIR) {
        Ok(loaded) => {
            settings.controls = loaded.controls;
            patches.send(loaded.display.as_patch());
        }
        Err(e) => error!("settings reload failed, keeping current settings: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_falls_back_to_defaults() {
        let settings = load_settings_from_dir("data/does-not-exist").unwrap();
        assert_eq!(settings.display, DisplaySettings::default());
    }

    #[test]
    fn partial_file_fills_missing_fields_with_defaults() {
        let file: SettingsFile =
            ron::from_str("(display: (resolution: \"720p\", vsync: false))").unwrap();
        let settings = file.resolve().unwrap();

        assert_eq!(settings.display.resolution.width, 1280);
        assert!(!settings.display.vsync);
        assert_eq!(settings.display.refresh.hertz, 60);
        assert_eq!(settings.controls.max_pitch_degrees, 85.0);
    }

    #[test]
    fn unknown_tag_is_a_configuration_error() {
        let config = DisplayConfig {
            refresh_rate: "50hz".to_string(),
            ..DisplayConfig::default()
        };
        match config.resolve() {
            Err(SettingsError::UnknownTag { field, tag }) => {
                assert_eq!(field, "refresh_rate");
                assert_eq!(tag, "50hz");
            }
            other => panic!("expected UnknownTag, got {other:?}"),
        }
    }

    #[test]
    fn resolved_tags_keep_their_names() {
        let file = SettingsFile::default();
        let settings = file.resolve().unwrap();
        assert_eq!(settings.display.resolution.tag, "1080p");
        assert_eq!(settings.display.antialiasing.tag, "msaa4x");
    }
}
