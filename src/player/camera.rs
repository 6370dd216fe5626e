//! Mouse-look and cursor helpers.
//!
//! `camera_look` accumulates the frame's mouse motion, integrates it into
//! the camera's yaw/pitch and keeps the camera glued to its anchor point.
//! `cursor_grab` toggles cursor lock/visibility; mouse-look is inert while
//! the cursor is visible.

use bevy::input::mouse::MouseMotion;
use bevy::prelude::*;
use bevy::window::{CursorGrabMode, PrimaryWindow};

use crate::player::CameraAnchor;
use crate::settings::Settings;

/// Look orientation in degrees.
///
/// - `yaw`: rotation around the Y axis, wrapped to `[0, 360)`.
/// - `pitch`: rotation around the X axis, clamped to a configured range.
#[derive(Component, Default)]
pub struct PlayerLook {
    pub yaw: f32,
    pub pitch: f32,
}

impl PlayerLook {
    /// Integrate a pre-scaled mouse delta (degrees) into the look angles.
    ///
    /// The vertical delta is subtracted (moving the mouse up looks up) and
    /// pitch is clamped to `±max_pitch_deg`; the horizontal delta is added
    /// and yaw re-wrapped into `[0, 360)`.
    ///
    /// Public so benchmarks and tests exercise the same integration the
    /// look system runs.
    pub fn apply_delta(&mut self, delta: Vec2, max_pitch_deg: f32) {
        self.pitch = (self.pitch - delta.y).clamp(-max_pitch_deg, max_pitch_deg);
        self.yaw = (self.yaw + delta.x).rem_euclid(360.0);
    }

    /// The camera rotation for the current angles: yaw around Y, pitch
    /// around X, no roll.
    #[must_use]
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            0.0,
        )
    }
}

/// Apply mouse-look to the camera and reposition it at its anchor.
///
/// # Arguments
/// * `windows` - query for the primary window (used to check cursor visibility)
/// * `motion_events` - mouse motion events for this update
/// * `time` - delta time used to scale the input
/// * `settings` - sensitivity, invert flags and the pitch clamp range
/// * `query` - the camera's `(Transform, PlayerLook)`
/// * `anchors` - the tracked anchor the camera is pinned to
#[allow(clippy::needless_pass_by_value)]
pub fn camera_look(
    windows: Query<&Window, With<PrimaryWindow>>,
    motion_events: Res<Events<MouseMotion>>, // use Events iterator for current update (Bevy 0.14)
    time: Res<Time>,
    settings: Res<Settings>,
    mut query: Query<(&mut Transform, &mut PlayerLook), With<Camera3d>>,
    anchors: Query<(&GlobalTransform, &CameraAnchor), Without<Camera3d>>,
) {
    let mut delta = Vec2::ZERO;
    for ev in motion_events.iter_current_update_events() {
        let mut axis = ev.delta;
        if settings.controls.invert_x {
            axis.x = -axis.x;
        }
        if settings.controls.invert_y {
            axis.y = -axis.y;
        }
        delta += axis;
    }

    let Ok(window) = windows.get_single() else { return };
    let grabbed = !window.cursor.visible;

    let scale = settings.controls.mouse_sensitivity * time.delta_seconds();
    let max_pitch = settings.controls.max_pitch_degrees;

    for (mut transform, mut look) in &mut query {
        if grabbed && delta != Vec2::ZERO {
            look.apply_delta(delta * scale, max_pitch);
        }
        transform.rotation = look.rotation();

        // pin the camera to its anchor every frame, even without input
        if let Ok((anchor_transform, anchor)) = anchors.get_single() {
            transform.translation = anchor_transform.translation() + anchor.eye_offset;
        }
    }
}

/// Toggle cursor grab and visibility.
///
/// Left-click locks and hides the cursor; Escape releases it.
#[allow(clippy::needless_pass_by_value)]
pub fn cursor_grab(
    mut windows: Query<&mut Window, With<PrimaryWindow>>,
    mouse: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
) {
    let Ok(mut window) = windows.get_single_mut() else { return };

    if mouse.just_pressed(MouseButton::Left) {
        window.cursor.grab_mode = CursorGrabMode::Locked;
        window.cursor.visible = false;
    }

    if keyboard.just_pressed(KeyCode::Escape) {
        window.cursor.grab_mode = CursorGrabMode::None;
        window.cursor.visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_PITCH: f32 = 85.0;

    #[test]
    fn pitch_stays_clamped_under_extreme_input() {
        let mut look = PlayerLook::default();
        look.apply_delta(Vec2::new(0.0, -100_000.0), MAX_PITCH);
        assert_eq!(look.pitch, MAX_PITCH);

        look.apply_delta(Vec2::new(0.0, 100_000.0), MAX_PITCH);
        assert_eq!(look.pitch, -MAX_PITCH);
    }

    #[test]
    fn vertical_delta_is_inverted() {
        let mut look = PlayerLook::default();
        // mouse moved down (positive y) -> pitch decreases
        look.apply_delta(Vec2::new(0.0, 10.0), MAX_PITCH);
        assert!(look.pitch < 0.0);
    }

    #[test]
    fn yaw_wraps_after_many_increments() {
        let mut look = PlayerLook::default();
        for _ in 0..1_000 {
            look.apply_delta(Vec2::new(97.3, 0.0), MAX_PITCH);
            assert!((0.0..360.0).contains(&look.yaw), "yaw {} out of range", look.yaw);
        }
    }

    #[test]
    fn yaw_wraps_for_negative_deltas() {
        let mut look = PlayerLook::default();
        look.apply_delta(Vec2::new(-10.0, 0.0), MAX_PITCH);
        assert!((0.0..360.0).contains(&look.yaw));
        assert_eq!(look.yaw, 350.0);
    }

    #[test]
    fn zero_delta_is_a_no_op() {
        let mut look = PlayerLook { yaw: 123.0, pitch: -12.0 };
        look.apply_delta(Vec2::ZERO, MAX_PITCH);
        assert_eq!(look.yaw, 123.0);
        assert_eq!(look.pitch, -12.0);
    }
}
