//! Course domain: spawning ground slabs and scoring obstacles.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::content::{CourseDef, ScoringDef};
use crate::core::RunConfig;
use crate::course::layout::{
    CourseGeometry, RUNOUT_LENGTH, SLAB_THICKNESS, START_PLATFORM_LENGTH, obstacle_layout,
};
use crate::movement::{GameLayer, Ground};
use crate::scoring::PointGiver;

/// Marker for everything spawned as part of the course
#[derive(Component, Debug)]
pub struct CoursePiece;

const OBSTACLE_SIZE: Vec3 = Vec3::new(160.0, 30.0, 30.0);
/// Trigger volume above the bar; jumping through it scores
const TRIGGER_SIZE: Vec3 = Vec3::new(160.0, 220.0, 80.0);

pub(crate) fn spawn_course(
    mut commands: Commands,
    def: Res<CourseDef>,
    scoring: Res<ScoringDef>,
    run_config: Res<RunConfig>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let geometry = CourseGeometry::from_def(&def);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Skater]);
    let ground_material = materials.add(Color::srgb(0.45, 0.5, 0.45));
    let ramp_material = materials.add(Color::srgb(0.55, 0.5, 0.4));

    let slabs = [
        (
            geometry.start_center(),
            Quat::IDENTITY,
            Vec3::new(def.ramp_width, SLAB_THICKNESS, START_PLATFORM_LENGTH),
            ground_material.clone(),
        ),
        (
            geometry.ramp_center,
            geometry.ramp_rotation,
            geometry.ramp_size,
            ramp_material,
        ),
        (
            geometry.runout_center(),
            Quat::IDENTITY,
            Vec3::new(def.ramp_width * 2.0, SLAB_THICKNESS, RUNOUT_LENGTH),
            ground_material,
        ),
    ];

    for (center, rotation, size, material) in slabs {
        commands.spawn((
            Ground,
            CoursePiece,
            Mesh3d(meshes.add(Cuboid::new(size.x, size.y, size.z))),
            MeshMaterial3d(material),
            Transform::from_translation(center).with_rotation(rotation),
            RigidBody::Static,
            Collider::cuboid(size.x, size.y, size.z),
            ground_layers,
        ));
    }

    let obstacle_mesh = meshes.add(Cuboid::new(OBSTACLE_SIZE.x, OBSTACLE_SIZE.y, OBSTACLE_SIZE.z));
    let obstacle_material = materials.add(Color::srgb(0.9, 0.75, 0.2));
    let positions = obstacle_layout(run_config.seed, &def, &geometry);

    for position in &positions {
        commands.spawn((
            CoursePiece,
            PointGiver {
                points: scoring.points_per_obstacle,
            },
            Mesh3d(obstacle_mesh.clone()),
            MeshMaterial3d(obstacle_material.clone()),
            Transform::from_translation(*position + Vec3::Y * OBSTACLE_SIZE.y * 0.5),
            RigidBody::Static,
            Collider::cuboid(TRIGGER_SIZE.x, TRIGGER_SIZE.y, TRIGGER_SIZE.z),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Skater]),
        ));
    }

    info!(
        "Spawned course: ramp {}deg x {}cm, {} obstacles (seed {})",
        def.ramp_angle_degrees,
        def.ramp_length,
        positions.len(),
        run_config.seed
    );
}
