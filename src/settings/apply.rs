//! The merge-and-apply routine for display patches.
//!
//! Every runtime mutation of the display settings flows through
//! [`apply_display_patches`]: hotkeys and the config hot-reload both emit
//! [`DisplayPatch`] events rather than writing the resource directly. The
//! system merges each patch into the cached settings, pushes only the
//! assigned fields into the engine's configuration surfaces and then emits
//! a [`SettingsChanged`] notification.

use std::time::Duration;

use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;
use bevy::window::{PresentMode, PrimaryWindow, WindowMode};
use bevy::winit::{UpdateMode, WinitSettings};

use crate::settings::catalog::{self, AntialiasOption, RefreshRateOption};
use crate::settings::{DisplayPatch, Settings, SettingsChanged};

/// Map an antialias option onto the engine's MSAA resource.
///
/// # Panics
/// Panics on a sample count outside {1, 2, 4, 8}; the catalog only carries
/// counts the renderer supports, so anything else is a coding mistake.
#[must_use]
pub fn msaa_for(option: AntialiasOption) -> Msaa {
    match option.samples {
        1 => Msaa::Off,
        2 => Msaa::Sample2,
        4 => Msaa::Sample4,
        8 => Msaa::Sample8,
        n => panic!("unsupported MSAA sample count {n}"),
    }
}

/// Frame pacing for the focused window, derived from a refresh-rate option.
///
/// Bevy exposes no display-mode refresh switch, so the refresh rate is
/// applied as the event loop's wait interval between frames.
#[must_use]
pub fn frame_pacing(option: RefreshRateOption) -> UpdateMode {
    UpdateMode::reactive(Duration::from_secs_f64(1.0 / f64::from(option.hertz)))
}

/// Merge incoming display patches and push the assigned fields to the engine.
///
/// Unassigned fields touch neither the stored settings nor the engine. Empty
/// patches are dropped entirely, with no notification.
///
/// # Example
/// ```ignore
/// app.add_systems(Update, vantage::settings::apply::apply_display_patches);
/// ```
#[allow(clippy::needless_pass_by_value, clippy::cast_precision_loss)]
pub fn apply_display_patches(
    mut patches: EventReader<DisplayPatch>,
    mut settings: ResMut<Settings>,
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mut msaa: ResMut<Msaa>,
    mut shadow_map: ResMut<DirectionalLightShadowMap>,
    mut winit_settings: ResMut<WinitSettings>,
    mut lights: Query<&mut DirectionalLight>,
    mut changed: EventWriter<SettingsChanged>,
) {
    for patch in patches.read() {
        if patch.is_empty() {
            continue;
        }

        settings.display.merge(patch);

        for mut window in windows.iter_mut() {
            if let Some(resolution) = patch.resolution {
                window.resolution.set(resolution.width as f32, resolution.height as f32);
            }
            if let Some(fullscreen) = patch.fullscreen {
                window.mode = if fullscreen {
                    WindowMode::BorderlessFullscreen
                } else {
                    WindowMode::Windowed
                };
            }
            if let Some(vsync) = patch.vsync {
                window.present_mode = if vsync {
                    PresentMode::Fifo
                } else {
                    PresentMode::AutoNoVsync
                };
            }
        }

        if let Some(refresh) = patch.refresh {
            winit_settings.focused_mode = frame_pacing(refresh);
        }

        if let Some(antialiasing) = patch.antialiasing {
            *msaa = msaa_for(antialiasing);
        }

        if let Some(level) = patch.quality {
            let preset = catalog::quality(level);
            shadow_map.size = preset.shadow_map_size;
            for mut light in lights.iter_mut() {
                light.shadows_enabled = preset.shadows;
            }
        }

        info!("applied display patch: {patch:?}");
        changed.send(SettingsChanged { display: settings.display });
    }
}

/// Announce the loaded configuration once at startup so subscribers render
/// the initial state through the same notification path as later changes.
#[allow(clippy::needless_pass_by_value)]
pub fn announce_initial_settings(
    settings: Res<Settings>,
    mut changed: EventWriter<SettingsChanged>,
) {
    changed.send(SettingsChanged { display: settings.display });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::QualityLevel;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_event::<DisplayPatch>();
        app.add_event::<SettingsChanged>();
        app.insert_resource(Settings::default());
        app.insert_resource(Msaa::Sample4);
        app.insert_resource(DirectionalLightShadowMap::default());
        app.insert_resource(WinitSettings::default());
        app.world_mut().spawn((Window::default(), PrimaryWindow));
        app.add_systems(Update, apply_display_patches);
        app
    }

    fn primary_window(app: &mut App) -> Window {
        let mut query = app
            .world_mut()
            .query_filtered::<&Window, With<PrimaryWindow>>();
        query.single(app.world()).clone()
    }

    #[test]
    fn vsync_patch_pushes_only_the_present_mode() {
        let mut app = test_app();
        let untouched = primary_window(&mut app).resolution.clone();

        app.world_mut().send_event(DisplayPatch::vsync(false));
        app.update();

        let window = primary_window(&mut app);
        assert_eq!(window.present_mode, PresentMode::AutoNoVsync);
        assert_eq!(window.resolution, untouched);
        assert!(!app.world().resource::<Settings>().display.vsync);
        assert_eq!(app.world().resource::<Msaa>().samples(), 4);
    }

    #[test]
    fn empty_patch_is_dropped_without_notification() {
        let mut app = test_app();
        let before = app.world().resource::<Settings>().display;

        app.world_mut().send_event(DisplayPatch::default());
        app.update();

        assert_eq!(app.world().resource::<Settings>().display, before);
        assert!(app.world().resource::<Events<SettingsChanged>>().is_empty());
    }

    #[test]
    fn applied_patch_notifies_subscribers() {
        let mut app = test_app();
        app.world_mut().send_event(DisplayPatch::fullscreen(true));
        app.update();

        let events = app.world().resource::<Events<SettingsChanged>>();
        let mut cursor = events.get_reader();
        let received: Vec<_> = cursor.read(events).collect();
        assert_eq!(received.len(), 1);
        assert!(received[0].display.fullscreen);
    }

    #[test]
    fn antialias_patch_replaces_the_msaa_resource() {
        let mut app = test_app();
        app.world_mut().send_event(DisplayPatch::antialias("off"));
        app.update();

        assert_eq!(app.world().resource::<Msaa>().samples(), 1);
    }

    #[test]
    fn quality_patch_resizes_the_shadow_map() {
        let mut app = test_app();
        app.world_mut()
            .send_event(DisplayPatch::quality(QualityLevel::Ultra));
        app.update();

        let expected = catalog::quality(QualityLevel::Ultra).shadow_map_size;
        assert_eq!(
            app.world().resource::<DirectionalLightShadowMap>().size,
            expected
        );
    }

    #[test]
    fn frame_pacing_waits_one_refresh_interval() {
        let pacing = frame_pacing(*catalog::refresh_rate("120hz").unwrap());
        match pacing {
            UpdateMode::Reactive { wait, .. } => {
                assert_eq!(wait, Duration::from_secs_f64(1.0 / 120.0));
            }
            UpdateMode::Continuous => panic!("expected reactive pacing"),
        }
    }
}
