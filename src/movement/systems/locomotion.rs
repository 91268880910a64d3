//! Movement domain: per-frame slope locomotion.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::slope::{self, is_on_slope, slope_target_rotation};
use crate::movement::{
    CharacterMotor, FloorContact, LocomotionState, LocomotionTuning, Skater, SkaterParts,
};

/// Smooths the skate speed and pushes the board along its right vector.
pub(crate) fn apply_skate_speed(
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&mut LocomotionState, &mut CharacterMotor, &SkaterParts), With<Skater>>,
    boards: Query<&GlobalTransform>,
) {
    for (mut state, mut motor, parts) in &mut query {
        let mut speed = slope::smooth_speed(
            state.current_speed,
            state.target_speed,
            tuning.speed_smoothing,
        );
        if tuning.clamp_speed_non_positive {
            speed = speed.min(0.0);
        }
        state.current_speed = speed;

        let Ok(board) = boards.get(parts.board) else {
            continue;
        };
        motor.add_movement_input(board.right().as_vec3(), state.current_speed);
    }
}

/// Pulls the skater down the slope unless boosting.
pub(crate) fn apply_sliding_force(
    tuning: Res<LocomotionTuning>,
    mut query: Query<(&LocomotionState, &mut CharacterMotor, &FloorContact), With<Skater>>,
) {
    for (state, mut motor, floor) in &mut query {
        // No slide while airborne, even if the last normal was tilted
        if state.is_boosting || !floor.grounded {
            continue;
        }

        let Some(force) = slope::slide_force(
            floor.normal,
            tuning.gravity,
            motor.mass,
            tuning.slide_force_multiplier,
        ) else {
            continue;
        };

        motor.braking_deceleration_walking = tuning.slide_braking_deceleration;
        motor.ground_friction = tuning.slide_ground_friction;
        motor.add_force(force);
    }
}

/// Tilts the rider's rig to match the slope under the board.
pub(crate) fn adjust_rotation_to_slope(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    skaters: Query<(&Transform, &LinearVelocity, &FloorContact, &SkaterParts), With<Skater>>,
    mut rigs: Query<&mut Transform, Without<Skater>>,
) {
    let dt = time.delta_secs();

    for (body, velocity, floor, parts) in &skaters {
        if !floor.grounded || !is_on_slope(floor.normal) {
            continue;
        }

        let Ok(mut rig) = rigs.get_mut(parts.rig) else {
            continue;
        };

        let target = slope_target_rotation(
            floor.normal,
            body.forward().as_vec3(),
            velocity.0,
            tuning.pitch_offset_degrees,
        );

        // The rig is parented to the body, so work in world space
        let current = body.rotation * rig.rotation;
        let next = slope::interp_rotation(current, target, dt, tuning.rotation_interp_speed);
        rig.rotation = body.rotation.inverse() * next;
    }
}
