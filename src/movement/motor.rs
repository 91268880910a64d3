//! Movement domain: the character motor that turns accumulated input and
//! forces into velocity.
//!
//! Requests (`add_movement_input`, `add_force`, `jump`) accumulate during the
//! frame and are consumed by `integrate_motor`.

use std::f32::consts::{PI, TAU};

use bevy::prelude::*;

use crate::movement::MotorTuning;

#[derive(Component, Debug, Clone)]
pub struct CharacterMotor {
    pub mass: f32,
    pub max_walk_speed: f32,
    pub min_analog_walk_speed: f32,
    pub max_acceleration: f32,
    pub braking_deceleration_walking: f32,
    pub braking_deceleration_falling: f32,
    pub ground_friction: f32,
    pub air_control: f32,
    pub jump_z_velocity: f32,
    pub rotation_rate_degrees: f32,
    pending_input: Vec3,
    pending_force: Vec3,
    jump_requested: bool,
}

impl CharacterMotor {
    pub fn from_tuning(tuning: &MotorTuning) -> Self {
        Self {
            mass: tuning.mass,
            max_walk_speed: tuning.max_walk_speed,
            min_analog_walk_speed: tuning.min_analog_walk_speed,
            max_acceleration: tuning.max_acceleration,
            braking_deceleration_walking: tuning.braking_deceleration_walking,
            braking_deceleration_falling: tuning.braking_deceleration_falling,
            ground_friction: tuning.ground_friction,
            air_control: tuning.air_control,
            jump_z_velocity: tuning.jump_z_velocity,
            rotation_rate_degrees: tuning.rotation_rate_degrees,
            pending_input: Vec3::ZERO,
            pending_force: Vec3::ZERO,
            jump_requested: false,
        }
    }

    pub fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.pending_input += direction * scale;
    }

    pub fn add_force(&mut self, force: Vec3) {
        self.pending_force += force;
    }

    pub fn jump(&mut self) {
        self.jump_requested = true;
    }

    pub fn stop_jumping(&mut self) {
        self.jump_requested = false;
    }

    pub fn pending_input(&self) -> Vec3 {
        self.pending_input
    }

    pub fn pending_force(&self) -> Vec3 {
        self.pending_force
    }

    pub fn jump_requested(&self) -> bool {
        self.jump_requested
    }

    /// Drains accumulated input and force for this frame.
    pub fn consume(&mut self) -> (Vec3, Vec3) {
        let input = std::mem::take(&mut self.pending_input);
        let force = std::mem::take(&mut self.pending_force);
        (input, force)
    }

    /// Consumes a pending jump if the motor is allowed to jump right now.
    pub fn take_jump(&mut self, grounded: bool) -> bool {
        if self.jump_requested && grounded {
            self.jump_requested = false;
            true
        } else {
            false
        }
    }
}

/// Inputs to one planar velocity step.
#[derive(Debug, Clone, Copy)]
pub struct PlanarStep {
    pub input: Vec3,
    pub force: Vec3,
    pub grounded: bool,
    pub dt: f32,
}

/// Advances the horizontal velocity by one step.
///
/// Only the x/z components of `velocity`, `input` and `force` are used; the
/// vertical component is left to the physics solver.
pub fn step_planar_velocity(motor: &CharacterMotor, velocity: Vec3, step: PlanarStep) -> Vec3 {
    let dt = step.dt;
    if dt <= 0.0 {
        return velocity;
    }

    let mut planar = Vec3::new(velocity.x, 0.0, velocity.z);
    let input = Vec3::new(step.input.x, 0.0, step.input.z).clamp_length_max(1.0);
    let force = Vec3::new(step.force.x, 0.0, step.force.z);

    if motor.mass > 0.0 {
        planar += force / motor.mass * dt;
    }

    let (friction, braking) = if step.grounded {
        (motor.ground_friction, motor.braking_deceleration_walking)
    } else {
        (0.0, motor.braking_deceleration_falling)
    };

    if input == Vec3::ZERO {
        return brake(planar, friction, braking, dt);
    }

    let control = if step.grounded { 1.0 } else { motor.air_control };
    let analog = input.length();
    let max_speed = (motor.max_walk_speed * analog).max(motor.min_analog_walk_speed);
    let speed_before = planar.length();

    // steer existing velocity toward the input direction
    let direction = input / analog;
    planar -= (planar - direction * speed_before) * (dt * friction).min(1.0);
    planar += input * motor.max_acceleration * control * dt;

    planar.clamp_length_max(max_speed.max(speed_before))
}

fn brake(planar: Vec3, friction: f32, deceleration: f32, dt: f32) -> Vec3 {
    if planar == Vec3::ZERO {
        return planar;
    }
    let reverse = -friction * planar - planar.normalize() * deceleration;
    let next = planar + reverse * dt;
    // braking never reverses the direction of travel
    if next.dot(planar) <= 0.0 {
        Vec3::ZERO
    } else {
        next
    }
}

/// Yaw (radians about +Y) of a direction, measured from -Z.
pub fn yaw_of(direction: Vec3) -> f32 {
    (-direction.x).atan2(-direction.z)
}

/// Turns `current` toward the horizontal direction of `velocity` by at most
/// `rate_degrees * dt`.
pub fn orient_to_movement(current: Quat, velocity: Vec3, rate_degrees: f32, dt: f32) -> Quat {
    let planar = Vec3::new(velocity.x, 0.0, velocity.z);
    if planar.length_squared() <= 1.0e-4 {
        return current;
    }
    let current_yaw = yaw_of(current * Vec3::NEG_Z);
    let desired_yaw = yaw_of(planar);
    let delta = (desired_yaw - current_yaw + PI).rem_euclid(TAU) - PI;
    let max_step = rate_degrees.to_radians() * dt;
    Quat::from_rotation_y(current_yaw + delta.clamp(-max_step, max_step))
}
