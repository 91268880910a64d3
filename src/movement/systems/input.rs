//! Movement domain: input sampling and routing for skating.

use bevy::input::mouse::AccumulatedMouseMotion;
use bevy::prelude::*;

use crate::core::FollowCamera;
use crate::movement::{
    CharacterMotor, InputPhase, LocomotionState, LocomotionTuning, MovementInput, Skater,
    SkaterParts,
};

const LOOK_SENSITIVITY: f32 = 0.1;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut input: ResMut<MovementInput>,
) {
    input.previous_axis = input.axis;

    // Strafe axis
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    // Pushing off is the negative forward axis
    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y += 1.0;
    }

    input.axis = Vec2::new(x, y);
    input.look = mouse_motion.delta * LOOK_SENSITIVITY;
    input.jump_just_pressed = keyboard.just_pressed(KeyCode::Space);
    input.jump_just_released = keyboard.just_released(KeyCode::Space);
}

/// Dispatches the sampled input to every skater's locomotion state.
pub(crate) fn route_move_input(
    input: Res<MovementInput>,
    tuning: Res<LocomotionTuning>,
    mut skaters: Query<(&mut LocomotionState, &mut CharacterMotor, &SkaterParts), With<Skater>>,
    boards: Query<&GlobalTransform>,
) {
    let phase = input.move_phase();

    for (mut state, mut motor, parts) in &mut skaters {
        match phase {
            InputPhase::Idle => {}
            InputPhase::Started | InputPhase::Triggered => {
                if phase == InputPhase::Started {
                    state.on_move_start(input.axis, &mut motor, &tuning);
                }
                if let Ok(board) = boards.get(parts.board) {
                    state.on_move(input.axis, &mut motor, board.forward().as_vec3(), &tuning);
                }
            }
            InputPhase::Completed => {
                state.on_move_stop();
                debug!("Move stopped: boosting cleared");
            }
        }

        if input.jump_just_pressed {
            state.on_jump_start(&mut motor);
            debug!("Jump started");
        }
        if input.jump_just_released {
            state.on_jump_stop(&mut motor);
        }
    }
}

pub(crate) fn route_look_input(
    input: Res<MovementInput>,
    mut cameras: Query<&mut FollowCamera>,
) {
    if input.look == Vec2::ZERO {
        return;
    }
    for mut camera in &mut cameras {
        camera.on_look_axis(input.look);
    }
}
