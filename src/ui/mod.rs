//! Settings overlay.
//!
//! A small text block in the top-left corner showing the currently applied
//! graphics configuration. It subscribes to [`SettingsChanged`] events, so
//! it redraws only when the facade actually applied something. F1 toggles
//! visibility.

use bevy::prelude::*;

use crate::settings::{DisplaySettings, SettingsChanged};

/// Visibility state for the settings overlay.
#[derive(Resource)]
pub struct SettingsOverlayState {
    pub visible: bool,
}

impl Default for SettingsOverlayState {
    fn default() -> Self {
        Self { visible: true }
    }
}

#[derive(Component)]
pub struct SettingsOverlayText;

/// Insert the overlay state resource.
pub fn setup_settings_overlay(mut commands: Commands) {
    commands.insert_resource(SettingsOverlayState::default());
}

/// Spawn the overlay text element.
pub fn spawn_settings_overlay(mut commands: Commands) {
    commands.spawn((
        TextBundle {
            text: Text::from_section(
                "",
                TextStyle {
                    font_size: 18.0,
                    color: Color::srgb(1.0, 1.0, 0.0),
                    ..default()
                },
            ),
            style: Style {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                ..default()
            },
            ..default()
        },
        SettingsOverlayText,
    ));
}

/// Toggle the overlay when F1 is pressed.
#[allow(clippy::needless_pass_by_value)]
pub fn toggle_settings_overlay(
    mut state: ResMut<SettingsOverlayState>,
    input: Res<ButtonInput<KeyCode>>,
) {
    if input.just_pressed(KeyCode::F1) {
        state.visible = !state.visible;
    }
}

fn overlay_text(display: &DisplaySettings) -> String {
    format!(
        "Quality: {:?}\nResolution: {} ({}x{})\nRefresh: {} Hz\nFullscreen: {}\nVSync: {}\nAntialias: {}",
        display.quality,
        display.resolution.tag,
        display.resolution.width,
        display.resolution.height,
        display.refresh.hertz,
        if display.fullscreen { "on" } else { "off" },
        if display.vsync { "on" } else { "off" },
        display.antialiasing.tag,
    )
}

/// Redraw the overlay on settings changes or visibility toggles.
///
/// The latest notified configuration is cached locally so toggling the
/// overlay back on does not need a fresh event.
#[allow(clippy::needless_pass_by_value)]
pub fn update_settings_overlay(
    mut events: EventReader<SettingsChanged>,
    state: Res<SettingsOverlayState>,
    mut cached: Local<Option<DisplaySettings>>,
    mut query: Query<&mut Text, With<SettingsOverlayText>>,
) {
    let dirty = !events.is_empty() || state.is_changed();
    for ev in events.read() {
        *cached = Some(ev.display);
    }
    if !dirty {
        return;
    }

    let Ok(mut text) = query.get_single_mut() else { return };

    if !state.visible {
        text.sections[0].value = String::new();
        return;
    }
    if let Some(display) = cached.as_ref() {
        text.sections[0].value = overlay_text(display);
    }
}
