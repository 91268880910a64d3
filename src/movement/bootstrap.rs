//! Movement domain: skater spawning with its motor, rig and board wired in.

use std::f32::consts::FRAC_PI_2;

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::FollowCamera;
use crate::effects::SlowMotion;
use crate::movement::{
    CharacterMotor, FloorContact, GameLayer, LocomotionState, MotorTuning, Skater, SkaterParts,
};

/// Where the skater appears at the top of the course
pub const SKATER_SPAWN: Vec3 = Vec3::new(0.0, 150.0, 300.0);

pub(crate) fn spawn_skater(
    mut commands: Commands,
    tuning: Res<MotorTuning>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    existing: Query<Entity, With<Skater>>,
) {
    if !existing.is_empty() {
        info!("Skater already exists, skipping spawn");
        return;
    }

    let radius = tuning.capsule_radius;
    let segment = (tuning.capsule_half_height - radius).max(0.0) * 2.0;

    // Rider visual; receives the slope orientation
    let rig = commands
        .spawn((
            Mesh3d(meshes.add(Capsule3d::new(radius, segment))),
            MeshMaterial3d(materials.add(Color::srgb(0.85, 0.35, 0.25))),
            Transform::default(),
        ))
        .id();

    // Board sits under the feet, turned so its right vector points backward
    let board = commands
        .spawn((
            Mesh3d(meshes.add(Cuboid::new(20.0, 4.0, 80.0))),
            MeshMaterial3d(materials.add(Color::srgb(0.2, 0.2, 0.22))),
            Transform::from_xyz(0.0, -tuning.capsule_half_height + 2.0, 0.0)
                .with_rotation(Quat::from_rotation_y(-FRAC_PI_2)),
        ))
        .id();

    let motor = CharacterMotor::from_tuning(&tuning);
    let mass = motor.mass;

    let skater = commands
        .spawn((
            // Identity & locomotion
            (
                Skater,
                LocomotionState::default(),
                FloorContact::default(),
                SlowMotion::default(),
                motor,
                SkaterParts { rig, board },
            ),
            Transform::from_translation(SKATER_SPAWN),
            Visibility::default(),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::capsule(radius, segment),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                Mass(mass),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Skater, [GameLayer::Ground, GameLayer::Sensor]),
            ),
        ))
        .add_children(&[rig, board])
        .id();

    commands.spawn((
        Camera3d::default(),
        FollowCamera::new(skater),
        Transform::from_translation(SKATER_SPAWN + Vec3::new(0.0, 100.0, 400.0))
            .looking_at(SKATER_SPAWN, Vec3::Y),
    ));

    info!(
        "Spawned skater: mass={}, max_walk_speed={}, jump_z_velocity={}",
        mass, tuning.max_walk_speed, tuning.jump_z_velocity
    );
}
