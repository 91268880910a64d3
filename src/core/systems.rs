//! Core domain: scene setup and per-frame camera work.

use bevy::prelude::*;

use crate::core::resources::RunConfig;

pub(crate) fn log_run_start(run_config: Res<RunConfig>) {
    info!("Starting skate session with seed: {}", run_config.seed);
}

pub(crate) fn setup_lighting(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: 8_000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(400.0, 1_000.0, 300.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
