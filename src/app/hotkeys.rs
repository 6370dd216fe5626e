//! Function-key shortcuts driving the settings facade.
//!
//! Every shortcut emits a sparse [`DisplayPatch`]; nothing here mutates the
//! settings resource directly.
//!
//! - F5 cycles quality, F6 resolution, F7 refresh rate, F8 antialiasing
//! - F10 toggles vsync, F11 toggles fullscreen
//! - F12 resets everything to defaults

use bevy::prelude::*;
use vantage::settings::catalog::{ANTIALIAS_MODES, QUALITY_PRESETS, REFRESH_RATES, RESOLUTIONS};
use vantage::settings::{DisplayPatch, Settings};

#[allow(clippy::needless_pass_by_value)]
pub fn display_hotkeys(
    input: Res<ButtonInput<KeyCode>>,
    settings: Res<Settings>,
    mut patches: EventWriter<DisplayPatch>,
) {
    let display = settings.display;

    if input.just_pressed(KeyCode::F5) {
        let idx = QUALITY_PRESETS
            .iter()
            .position(|o| o.level == display.quality)
            .unwrap_or(0);
        let next = &QUALITY_PRESETS[(idx + 1) % QUALITY_PRESETS.len()];
        patches.send(DisplayPatch::quality(next.level));
    }

    if input.just_pressed(KeyCode::F6) {
        let idx = RESOLUTIONS
            .iter()
            .position(|o| o.tag == display.resolution.tag)
            .unwrap_or(0);
        let next = &RESOLUTIONS[(idx + 1) % RESOLUTIONS.len()];
        patches.send(DisplayPatch::resolution(next.tag));
    }

    if input.just_pressed(KeyCode::F7) {
        let idx = REFRESH_RATES
            .iter()
            .position(|o| o.tag == display.refresh.tag)
            .unwrap_or(0);
        let next = &REFRESH_RATES[(idx + 1) % REFRESH_RATES.len()];
        patches.send(DisplayPatch::refresh_rate(next.tag));
    }

    if input.just_pressed(KeyCode::F8) {
        let idx = ANTIALIAS_MODES
            .iter()
            .position(|o| o.tag == display.antialiasing.tag)
            .unwrap_or(0);
        let next = &ANTIALIAS_MODES[(idx + 1) % ANTIALIAS_MODES.len()];
        patches.send(DisplayPatch::antialias(next.tag));
    }

    if input.just_pressed(KeyCode::F10) {
        patches.send(DisplayPatch::vsync(!display.vsync));
    }

    if input.just_pressed(KeyCode::F11) {
        patches.send(DisplayPatch::fullscreen(!display.fullscreen));
    }

    if input.just_pressed(KeyCode::F12) {
        patches.send(DisplayPatch::all_defaults());
    }
}
