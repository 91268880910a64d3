//! Movement domain: components and physics layers for skating.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{CharacterMotor, LocomotionTuning};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors and ramps the skater can stand on
    Ground,
    /// The skater's body
    Skater,
    /// Scoring volumes - should not block movement
    Sensor,
}

/// Marker for the skateboarding agent
#[derive(Component, Debug)]
pub struct Skater;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Handles to the skater's child entities, wired at spawn time.
#[derive(Component, Debug, Clone, Copy)]
pub struct SkaterParts {
    /// Visual rig that receives the slope orientation
    pub rig: Entity,
    /// Skateboard whose right vector is the direction of travel
    pub board: Entity,
}

/// Floor under the skater, refreshed every frame by the floor probe.
#[derive(Component, Debug, Clone, Copy)]
pub struct FloorContact {
    pub normal: Vec3,
    pub grounded: bool,
    pub distance: f32,
    pub entity: Option<Entity>,
}

impl Default for FloorContact {
    fn default() -> Self {
        Self::airborne()
    }
}

impl FloorContact {
    pub fn airborne() -> Self {
        Self {
            normal: Vec3::Y,
            grounded: false,
            distance: f32::INFINITY,
            entity: None,
        }
    }

    pub fn grounded(normal: Vec3, distance: f32, entity: Entity) -> Self {
        Self {
            normal,
            grounded: true,
            distance,
            entity: Some(entity),
        }
    }
}

#[derive(Component, Debug, Default, Clone)]
pub struct LocomotionState {
    /// Smoothed speed along the board, signed
    pub current_speed: f32,
    pub target_speed: f32,
    pub is_boosting: bool,
    pub is_jumping: bool,
    pub move_forward: f32,
    pub move_right: f32,
}

impl LocomotionState {
    /// Move action started. Backward input boosts; any forward/back input
    /// stiffens braking so the board holds its line.
    pub fn on_move_start(
        &mut self,
        axis: Vec2,
        motor: &mut CharacterMotor,
        tuning: &LocomotionTuning,
    ) {
        if axis.y == 0.0 {
            return;
        }
        if axis.y < 0.0 {
            self.is_boosting = true;
        }
        motor.braking_deceleration_walking = tuning.boost_braking_deceleration;
        motor.ground_friction = tuning.boost_ground_friction;
    }

    /// Move action held.
    pub fn on_move(
        &mut self,
        axis: Vec2,
        motor: &mut CharacterMotor,
        board_forward: Vec3,
        tuning: &LocomotionTuning,
    ) {
        self.target_speed = axis.y;
        motor.add_movement_input(board_forward, axis.x * tuning.lateral_input_scale);
        self.move_forward = axis.y;
        self.move_right = axis.x;
    }

    /// Move action released.
    pub fn on_move_stop(&mut self) {
        self.target_speed = 0.0;
        self.is_boosting = false;
    }

    pub fn on_jump_start(&mut self, motor: &mut CharacterMotor) {
        self.is_jumping = true;
        motor.jump();
    }

    pub fn on_jump_stop(&mut self, motor: &mut CharacterMotor) {
        motor.stop_jumping();
    }

    /// Last raw move axis as (forward, right).
    pub fn user_inputs(&self) -> Vec2 {
        Vec2::new(self.move_forward, self.move_right)
    }
}
