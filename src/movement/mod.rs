//! Movement domain: slope locomotion, input routing and the character motor.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod motor;
mod resources;
pub mod slope;
mod systems;

pub use components::{FloorContact, GameLayer, Ground, LocomotionState, Skater, SkaterParts};
pub use motor::CharacterMotor;
pub use resources::{InputPhase, LocomotionTuning, MotorTuning, MovementInput};

use bevy::prelude::*;

use crate::movement::bootstrap::spawn_skater;
use crate::movement::systems::{
    adjust_rotation_to_slope, apply_skate_speed, apply_sliding_force, detect_floor,
    integrate_motor, read_input, route_look_input, route_move_input,
};

/// Ordering for the per-frame skating pipeline
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    Input,
    Locomotion,
    Motor,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<MotorTuning>()
            .init_resource::<MovementInput>()
            .configure_sets(
                Update,
                (
                    MovementSet::Input,
                    MovementSet::Locomotion,
                    MovementSet::Motor,
                )
                    .chain(),
            )
            .add_systems(Startup, spawn_skater)
            .add_systems(
                Update,
                (read_input, route_move_input, route_look_input)
                    .chain()
                    .in_set(MovementSet::Input),
            )
            .add_systems(
                Update,
                (
                    detect_floor,
                    apply_skate_speed,
                    apply_sliding_force,
                    adjust_rotation_to_slope,
                )
                    .chain()
                    .in_set(MovementSet::Locomotion),
            )
            .add_systems(Update, integrate_motor.in_set(MovementSet::Motor));

        #[cfg(feature = "dev-tools")]
        app.add_systems(
            Update,
            dev::draw_slope_gizmos.after(MovementSet::Locomotion),
        );
    }
}
