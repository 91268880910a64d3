//! Data definitions for the skate tuning RON file.
//!
//! These structs mirror the structure in assets/data/skate_tuning.ron and are
//! used for deserialization. Every section falls back to the built-in values
//! when omitted.

use std::time::Duration;

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::effects::SlowMotionTuning;
use crate::movement::{LocomotionTuning, MotorTuning};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SkateTuningFile {
    pub schema_version: u32,
    #[serde(default)]
    pub locomotion: LocomotionDef,
    #[serde(default)]
    pub motor: MotorDef,
    #[serde(default)]
    pub scoring: ScoringDef,
    #[serde(default)]
    pub course: CourseDef,
}

impl Default for SkateTuningFile {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            locomotion: LocomotionDef::default(),
            motor: MotorDef::default(),
            scoring: ScoringDef::default(),
            course: CourseDef::default(),
        }
    }
}

// ============================================================================
// Locomotion
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionDef {
    pub speed_smoothing: f32,
    pub clamp_speed_non_positive: bool,
    pub slide_force_multiplier: f32,
    /// Downward gravity magnitude in cm/s^2
    pub gravity: f32,
    pub pitch_offset_degrees: f32,
    pub rotation_interp_speed: f32,
    pub lateral_input_scale: f32,
    pub boost_braking_deceleration: f32,
    pub boost_ground_friction: f32,
    pub slide_braking_deceleration: f32,
    pub slide_ground_friction: f32,
}

impl Default for LocomotionDef {
    fn default() -> Self {
        let tuning = LocomotionTuning::default();
        Self {
            speed_smoothing: tuning.speed_smoothing,
            clamp_speed_non_positive: tuning.clamp_speed_non_positive,
            slide_force_multiplier: tuning.slide_force_multiplier,
            gravity: -tuning.gravity.y,
            pitch_offset_degrees: tuning.pitch_offset_degrees,
            rotation_interp_speed: tuning.rotation_interp_speed,
            lateral_input_scale: tuning.lateral_input_scale,
            boost_braking_deceleration: tuning.boost_braking_deceleration,
            boost_ground_friction: tuning.boost_ground_friction,
            slide_braking_deceleration: tuning.slide_braking_deceleration,
            slide_ground_friction: tuning.slide_ground_friction,
        }
    }
}

impl LocomotionDef {
    pub fn to_tuning(&self) -> LocomotionTuning {
        LocomotionTuning {
            speed_smoothing: self.speed_smoothing,
            clamp_speed_non_positive: self.clamp_speed_non_positive,
            slide_force_multiplier: self.slide_force_multiplier,
            gravity: Vec3::NEG_Y * self.gravity,
            pitch_offset_degrees: self.pitch_offset_degrees,
            rotation_interp_speed: self.rotation_interp_speed,
            lateral_input_scale: self.lateral_input_scale,
            boost_braking_deceleration: self.boost_braking_deceleration,
            boost_ground_friction: self.boost_ground_friction,
            slide_braking_deceleration: self.slide_braking_deceleration,
            slide_ground_friction: self.slide_ground_friction,
        }
    }
}

// ============================================================================
// Character motor
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct MotorDef {
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
    pub capsule_radius: f32,
    pub capsule_half_height: f32,
    pub floor_probe_distance: f32,
}

impl Default for MotorDef {
    fn default() -> Self {
        let tuning = MotorTuning::default();
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
            capsule_radius: tuning.capsule_radius,
            capsule_half_height: tuning.capsule_half_height,
            floor_probe_distance: tuning.floor_probe_distance,
        }
    }
}

impl MotorDef {
    pub fn to_tuning(&self) -> MotorTuning {
        MotorTuning {
            mass: self.mass,
            max_walk_speed: self.max_walk_speed,
            min_analog_walk_speed: self.min_analog_walk_speed,
            max_acceleration: self.max_acceleration,
            braking_deceleration_walking: self.braking_deceleration_walking,
            braking_deceleration_falling: self.braking_deceleration_falling,
            ground_friction: self.ground_friction,
            air_control: self.air_control,
            jump_z_velocity: self.jump_z_velocity,
            rotation_rate_degrees: self.rotation_rate_degrees,
            capsule_radius: self.capsule_radius,
            capsule_half_height: self.capsule_half_height,
            floor_probe_distance: self.floor_probe_distance,
        }
    }
}

// ============================================================================
// Scoring and slow motion
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringDef {
    pub points_per_obstacle: i32,
    pub slow_motion_scale: f32,
    pub slow_motion_seconds: f32,
}

impl Default for ScoringDef {
    fn default() -> Self {
        let slow_motion = SlowMotionTuning::default();
        Self {
            points_per_obstacle: 10,
            slow_motion_scale: slow_motion.time_scale,
            slow_motion_seconds: slow_motion.duration.as_secs_f32(),
        }
    }
}

impl ScoringDef {
    /// Non-finite or negative seconds collapse to zero.
    pub fn slow_motion_tuning(&self) -> SlowMotionTuning {
        let seconds = if self.slow_motion_seconds.is_finite() {
            self.slow_motion_seconds.max(0.0)
        } else {
            0.0
        };
        SlowMotionTuning {
            time_scale: self.slow_motion_scale,
            duration: Duration::from_secs_f32(seconds),
        }
    }
}

// ============================================================================
// Course layout
// ============================================================================

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct CourseDef {
    /// Fixed layout seed; a random one is rolled when absent
    pub seed: Option<u64>,
    pub obstacle_count: u32,
    pub ramp_angle_degrees: f32,
    pub ramp_length: f32,
    pub ramp_width: f32,
    /// Lateral spread of obstacles either side of the run-out centre line
    pub obstacle_spread: f32,
}

impl Default for CourseDef {
    fn default() -> Self {
        Self {
            seed: None,
            obstacle_count: 6,
            ramp_angle_degrees: 20.0,
            ramp_length: 2_000.0,
            ramp_width: 800.0,
            obstacle_spread: 250.0,
        }
    }
}
