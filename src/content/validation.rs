//! Validation for tuning values that would break the simulation.

use super::data::{SCHEMA_VERSION, SkateTuningFile};

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub section: &'static str,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}: {}", self.section, self.field, self.message)
    }
}

/// Helper macro for checking a value satisfies a condition
macro_rules! check {
    ($errors:expr, $cond:expr, $section:expr, $field:expr, $($msg:tt)+) => {
        if !$cond {
            $errors.push(ValidationError {
                section: $section,
                field: $field,
                message: format!($($msg)+),
            });
        }
    };
}

/// Upper bound on spawned obstacles
pub const MAX_OBSTACLES: u32 = 256;

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

/// Validate all tuning sections.
/// Returns a list of validation errors, empty if every value is usable.
pub fn validate_tuning(file: &SkateTuningFile) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check!(
        errors,
        file.schema_version == SCHEMA_VERSION,
        "file",
        "schema_version",
        "expected {}, found {}",
        SCHEMA_VERSION,
        file.schema_version
    );

    // Locomotion
    let loco = &file.locomotion;
    check!(
        errors,
        loco.speed_smoothing > 0.0 && loco.speed_smoothing <= 1.0,
        "locomotion",
        "speed_smoothing",
        "must be in (0, 1], found {}",
        loco.speed_smoothing
    );
    check!(
        errors,
        loco.rotation_interp_speed >= 0.0,
        "locomotion",
        "rotation_interp_speed",
        "must not be negative, found {}",
        loco.rotation_interp_speed
    );
    check!(
        errors,
        loco.gravity.is_finite(),
        "locomotion",
        "gravity",
        "must be finite"
    );
    check!(
        errors,
        non_negative(loco.slide_force_multiplier),
        "locomotion",
        "slide_force_multiplier",
        "must be finite and not negative, found {}",
        loco.slide_force_multiplier
    );
    check!(
        errors,
        loco.pitch_offset_degrees.is_finite(),
        "locomotion",
        "pitch_offset_degrees",
        "must be finite, found {}",
        loco.pitch_offset_degrees
    );
    check!(
        errors,
        loco.lateral_input_scale.is_finite(),
        "locomotion",
        "lateral_input_scale",
        "must be finite, found {}",
        loco.lateral_input_scale
    );
    for (field, value) in [
        ("boost_braking_deceleration", loco.boost_braking_deceleration),
        ("boost_ground_friction", loco.boost_ground_friction),
        ("slide_braking_deceleration", loco.slide_braking_deceleration),
        ("slide_ground_friction", loco.slide_ground_friction),
    ] {
        check!(
            errors,
            non_negative(value),
            "locomotion",
            field,
            "must be finite and not negative, found {}",
            value
        );
    }

    // Motor
    let motor = &file.motor;
    check!(
        errors,
        motor.mass.is_finite() && motor.mass > 0.0,
        "motor",
        "mass",
        "must be positive, found {}",
        motor.mass
    );
    check!(
        errors,
        motor.max_walk_speed.is_finite() && motor.max_walk_speed > 0.0,
        "motor",
        "max_walk_speed",
        "must be positive, found {}",
        motor.max_walk_speed
    );
    check!(
        errors,
        motor.capsule_radius > 0.0
            && motor.capsule_half_height.is_finite()
            && motor.capsule_half_height >= motor.capsule_radius,
        "motor",
        "capsule_half_height",
        "must be at least the radius ({}), found {}",
        motor.capsule_radius,
        motor.capsule_half_height
    );
    check!(
        errors,
        (0.0..=1.0).contains(&motor.air_control),
        "motor",
        "air_control",
        "must be in [0, 1], found {}",
        motor.air_control
    );
    check!(
        errors,
        motor.jump_z_velocity.is_finite(),
        "motor",
        "jump_z_velocity",
        "must be finite, found {}",
        motor.jump_z_velocity
    );
    for (field, value) in [
        ("min_analog_walk_speed", motor.min_analog_walk_speed),
        ("max_acceleration", motor.max_acceleration),
        ("braking_deceleration_walking", motor.braking_deceleration_walking),
        ("braking_deceleration_falling", motor.braking_deceleration_falling),
        ("ground_friction", motor.ground_friction),
        ("rotation_rate_degrees", motor.rotation_rate_degrees),
        ("floor_probe_distance", motor.floor_probe_distance),
    ] {
        check!(
            errors,
            non_negative(value),
            "motor",
            field,
            "must be finite and not negative, found {}",
            value
        );
    }

    // Scoring
    let scoring = &file.scoring;
    check!(
        errors,
        scoring.slow_motion_scale > 0.0 && scoring.slow_motion_scale <= 1.0,
        "scoring",
        "slow_motion_scale",
        "must be in (0, 1], found {}",
        scoring.slow_motion_scale
    );
    check!(
        errors,
        scoring.slow_motion_seconds.is_finite() && scoring.slow_motion_seconds > 0.0,
        "scoring",
        "slow_motion_seconds",
        "must be positive, found {}",
        scoring.slow_motion_seconds
    );

    // Course
    let course = &file.course;
    check!(
        errors,
        course.ramp_angle_degrees > 0.0 && course.ramp_angle_degrees < 90.0,
        "course",
        "ramp_angle_degrees",
        "must be in (0, 90), found {}",
        course.ramp_angle_degrees
    );
    check!(
        errors,
        course.ramp_length.is_finite()
            && course.ramp_length > 0.0
            && course.ramp_width.is_finite()
            && course.ramp_width > 0.0,
        "course",
        "ramp_length",
        "ramp dimensions must be finite and positive"
    );
    check!(
        errors,
        non_negative(course.obstacle_spread),
        "course",
        "obstacle_spread",
        "must be finite and not negative, found {}",
        course.obstacle_spread
    );
    check!(
        errors,
        course.obstacle_count <= MAX_OBSTACLES,
        "course",
        "obstacle_count",
        "must be at most {}, found {}",
        MAX_OBSTACLES,
        course.obstacle_count
    );

    errors
}
