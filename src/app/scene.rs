//! Demo scene setup: ground, a few shadow casters, a light, the camera and
//! its anchor. The scene exists so quality and antialiasing changes have
//! something visible to act on.

use bevy::prelude::*;
use vantage::player::{CameraAnchor, PlayerLook};
use vantage::settings::{catalog, Settings};

/// Spawn the demo world.
///
/// The directional light starts with the shadow toggle of the loaded quality
/// preset; later quality patches update it through the facade.
#[allow(clippy::needless_pass_by_value)]
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<Settings>,
) {
    commands.spawn(PbrBundle {
        mesh: meshes.add(Plane3d::default().mesh().size(60.0, 60.0)),
        material: materials.add(Color::srgb(0.35, 0.45, 0.35)),
        ..default()
    });

    let pillar = meshes.add(Cuboid::new(1.0, 3.0, 1.0));
    let pillar_material = materials.add(Color::srgb(0.7, 0.6, 0.5));
    for (x, z) in [(-4.0, -6.0), (0.0, -8.0), (4.0, -6.0), (2.0, -12.0), (-3.0, -11.0)] {
        commands.spawn(PbrBundle {
            mesh: pillar.clone(),
            material: pillar_material.clone(),
            transform: Transform::from_xyz(x, 1.5, z),
            ..default()
        });
    }

    let preset = catalog::quality(settings.display.quality);
    commands.spawn(DirectionalLightBundle {
        directional_light: DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: preset.shadows,
            ..default()
        },
        transform: Transform::from_xyz(12.0, 20.0, 8.0).looking_at(Vec3::ZERO, Vec3::Y),
        ..default()
    });

    let anchor = CameraAnchor::default();
    let eye = anchor.eye_offset;
    commands.spawn((SpatialBundle::default(), anchor));
    commands.spawn((
        Camera3dBundle {
            transform: Transform::from_translation(eye),
            ..default()
        },
        PlayerLook::default(),
    ));
}
