//! Movement domain: tuning and input resources.

use bevy::prelude::*;

/// Slope locomotion constants.
#[derive(Resource, Debug, Clone)]
pub struct LocomotionTuning {
    /// Per-tick exponential smoothing applied to the skate speed
    pub speed_smoothing: f32,
    /// Keep the smoothed speed at or below zero (pushing is the negative axis)
    pub clamp_speed_non_positive: bool,
    pub slide_force_multiplier: f32,
    pub gravity: Vec3,
    /// Pitch added to the slope orientation, in degrees
    pub pitch_offset_degrees: f32,
    pub rotation_interp_speed: f32,
    /// Scale applied to strafe input along the board's forward axis
    pub lateral_input_scale: f32,
    pub boost_braking_deceleration: f32,
    pub boost_ground_friction: f32,
    pub slide_braking_deceleration: f32,
    pub slide_ground_friction: f32,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            speed_smoothing: 0.01,
            clamp_speed_non_positive: true,
            slide_force_multiplier: 300.0,
            gravity: Vec3::new(0.0, -980.0, 0.0),
            pitch_offset_degrees: 150.0,
            rotation_interp_speed: 2.5,
            lateral_input_scale: 0.02,
            boost_braking_deceleration: 3000.0,
            boost_ground_friction: 8.0,
            slide_braking_deceleration: 100.0,
            slide_ground_friction: 1.0,
        }
    }
}

/// Character motor defaults applied when a skater is spawned.
#[derive(Resource, Debug, Clone)]
pub struct MotorTuning {
    pub mass: f32,
    pub max_walk_speed: f32,
    pub min_analog_walk_speed: f32,
    pub max_acceleration: f32,
    pub braking_deceleration_walking: f32,
    pub braking_deceleration_falling: f32,
    pub ground_friction: f32,
    pub air_control: f32,
    pub jump_z_velocity: f32,
    /// Yaw turn rate toward the direction of travel, degrees per second
    pub rotation_rate_degrees: f32,
    pub capsule_radius: f32,
    pub capsule_half_height: f32,
    /// Extra ray length below the capsule used to find the floor
    pub floor_probe_distance: f32,
}

impl Default for MotorTuning {
    fn default() -> Self {
        Self {
            mass: 100.0,
            max_walk_speed: 500.0,
            min_analog_walk_speed: 20.0,
            max_acceleration: 2048.0,
            braking_deceleration_walking: 2000.0,
            braking_deceleration_falling: 1500.0,
            ground_friction: 8.0,
            air_control: 0.35,
            jump_z_velocity: 700.0,
            rotation_rate_degrees: 500.0,
            capsule_radius: 42.0,
            capsule_half_height: 96.0,
            floor_probe_distance: 16.0,
        }
    }
}

/// Raw input sampled once per frame.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// x = strafe, y = forward/back
    pub axis: Vec2,
    /// Look delta (yaw, pitch)
    pub look: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    /// Axis from the previous frame, used to derive move phases
    pub previous_axis: Vec2,
}

/// Phase of the move action this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputPhase {
    Idle,
    Started,
    Triggered,
    Completed,
}

impl MovementInput {
    pub fn move_phase(&self) -> InputPhase {
        match (self.previous_axis != Vec2::ZERO, self.axis != Vec2::ZERO) {
            (false, false) => InputPhase::Idle,
            (false, true) => InputPhase::Started,
            (true, true) => InputPhase::Triggered,
            (true, false) => InputPhase::Completed,
        }
    }
}
