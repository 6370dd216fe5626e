use bevy::diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin};
use bevy::pbr::DirectionalLightShadowMap;
use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowMode, WindowPlugin};
use bevy::winit::WinitSettings;

use vantage::player::{camera_look, cursor_grab, validate_scene};
use vantage::settings::apply::{
    announce_initial_settings, apply_display_patches, frame_pacing, msaa_for,
};
use vantage::settings::loader as settings_loader;
use vantage::settings::{catalog, DisplayPatch, SettingsChanged};
use vantage::ui::{
    setup_settings_overlay, spawn_settings_overlay, toggle_settings_overlay,
    update_settings_overlay,
};

mod app;
use app::{display_hotkeys, setup_scene};

#[allow(clippy::cast_precision_loss)]
fn main() {
    let settings = settings_loader::load_settings_from_dir(settings_loader::SETTINGS_DIR)
        .unwrap_or_else(|e| panic!("settings configuration error: {e}"));
    let settings_watcher = settings_loader::setup_settings_watcher(settings_loader::SETTINGS_DIR)
        .unwrap_or_else(|_| settings_loader::SettingsWatcher::stub());

    let display = settings.display;
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Vantage".to_string(),
            position: WindowPosition::Centered(MonitorSelection::Primary),
            resolution: (display.resolution.width as f32, display.resolution.height as f32)
                .into(),
            mode: if display.fullscreen {
                WindowMode::BorderlessFullscreen
            } else {
                WindowMode::Windowed
            },
            present_mode: if display.vsync {
                PresentMode::Fifo
            } else {
                PresentMode::AutoNoVsync
            },
            ..default()
        }),
        ..default()
    }))
    .add_plugins(FrameTimeDiagnosticsPlugin)
    .add_plugins(LogDiagnosticsPlugin::default());

    app.insert_resource(msaa_for(display.antialiasing));
    app.insert_resource(DirectionalLightShadowMap {
        size: catalog::quality(display.quality).shadow_map_size,
    });
    app.insert_resource(WinitSettings {
        focused_mode: frame_pacing(display.refresh),
        ..default()
    });
    app.insert_resource(settings);
    app.insert_resource(settings_watcher);

    app.add_event::<DisplayPatch>();
    app.add_event::<SettingsChanged>();

    app.add_systems(Startup, setup_settings_overlay);
    app.add_systems(Startup, spawn_settings_overlay);
    app.add_systems(Startup, setup_scene);
    app.add_systems(Startup, announce_initial_settings);
    app.add_systems(PostStartup, validate_scene);

    app.add_systems(Update, settings_loader::check_settings_changes);
    app.add_systems(Update, display_hotkeys);
    app.add_systems(Update, apply_display_patches);
    app.add_systems(Update, toggle_settings_overlay);
    app.add_systems(Update, update_settings_overlay);
    app.add_systems(Update, camera_look);
    app.add_systems(Update, cursor_grab);

    app.run();
}
