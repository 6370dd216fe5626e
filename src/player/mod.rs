//! Player-side components and systems (camera look, cursor grab).
//!
//! # Example:
//!
//! ```ignore
//! // spawn the camera and the anchor it follows
//! commands.spawn((Camera3dBundle::default(), PlayerLook::default()));
//! commands.spawn((SpatialBundle::default(), CameraAnchor::default()));
//! // register systems
//! app.add_systems(Update, camera_look);
//! app.add_systems(Update, cursor_grab);
//! ```
pub mod camera;

use bevy::prelude::*;

pub use camera::*;

/// The point the camera is repositioned to every frame.
#[derive(Component)]
pub struct CameraAnchor {
    /// Offset from the anchor's translation to the camera eye.
    pub eye_offset: Vec3,
}

impl Default for CameraAnchor {
    fn default() -> Self {
        Self { eye_offset: Vec3::new(0.0, 1.7, 0.0) }
    }
}

/// Verify the scene carries the references the look controller needs.
///
/// Runs once after startup and panics on a missing camera or anchor; a scene
/// wired up wrong should stop the app immediately rather than render a
/// camera that silently never moves.
#[allow(clippy::needless_pass_by_value)]
pub fn validate_scene(
    cameras: Query<(), (With<Camera3d>, With<PlayerLook>)>,
    anchors: Query<(), With<CameraAnchor>>,
) {
    if cameras.is_empty() {
        error!("scene validation failed: no camera with look state");
        panic!("scene is missing a Camera3d with a PlayerLook component");
    }
    if anchors.is_empty() {
        error!("scene validation failed: no camera anchor");
        panic!("scene is missing a CameraAnchor entity");
    }
}
