//! Movement domain: slope-following math used by the locomotion systems.
//!
//! Everything here is a pure function over `bevy::math` types so the systems
//! stay thin and the numbers can be checked without an `App`.

use bevy::math::EulerRot;
use bevy::prelude::*;

/// Floor normals with a vertical component at or above this count as flat.
pub const FLAT_NORMAL_Y: f32 = 1.0;

/// One exponential smoothing step from `current` toward `target`.
///
/// The factor is applied per call, not per second.
pub fn smooth_speed(current: f32, target: f32, factor: f32) -> f32 {
    current + (target - current) * factor
}

/// Returns true when the floor normal deviates from straight up.
pub fn is_on_slope(normal: Vec3) -> bool {
    normal.y < FLAT_NORMAL_Y
}

/// Direction gravity pulls along the slope plane, or zero on flat ground.
pub fn slide_direction(normal: Vec3, gravity: Vec3) -> Vec3 {
    let parallel = gravity - normal * gravity.dot(normal);
    parallel.normalize_or_zero()
}

/// Sliding force for a body of `mass` standing on a surface with `normal`.
///
/// Returns `None` on flat ground.
pub fn slide_force(normal: Vec3, gravity: Vec3, mass: f32, multiplier: f32) -> Option<Vec3> {
    if !is_on_slope(normal) {
        return None;
    }
    Some(slide_direction(normal, gravity) * mass * multiplier)
}

/// Orientation whose up axis is `normal` and whose forward axis follows
/// `forward` as closely as the slope allows.
pub fn slope_orientation(normal: Vec3, forward: Vec3) -> Quat {
    let up = normal.normalize_or(Vec3::Y);
    let mut right = forward.cross(up);
    if right.length_squared() <= f32::EPSILON {
        // forward is parallel to the normal
        right = up.any_orthonormal_vector();
    }
    let right = right.normalize();
    let back = right.cross(up);
    Quat::from_mat3(&Mat3::from_cols(right, up, back))
}

/// Whether travel heads the same way the skater faces once projected onto
/// the slope plane. A stationary skater is never ascending.
pub fn is_moving_up_slope(forward: Vec3, velocity: Vec3, normal: Vec3) -> bool {
    let direction = velocity.normalize_or_zero();
    let projected = direction.reject_from_normalized(normal.normalize_or(Vec3::Y));
    forward.dot(projected) > 0.0
}

/// Adds (ascending) or subtracts the pitch offset in degrees.
pub fn apply_pitch_offset(rotation: Quat, offset_degrees: f32, ascending: bool) -> Quat {
    let (yaw, pitch, roll) = rotation.to_euler(EulerRot::YXZ);
    let offset = if ascending {
        offset_degrees.to_radians()
    } else {
        -offset_degrees.to_radians()
    };
    Quat::from_euler(EulerRot::YXZ, yaw, pitch + offset, roll)
}

/// Moves `current` toward `target` at `speed` scaled by `dt`.
///
/// A non-positive speed snaps straight to the target.
pub fn interp_rotation(current: Quat, target: Quat, dt: f32, speed: f32) -> Quat {
    if speed <= 0.0 {
        return target;
    }
    let alpha = (dt * speed).clamp(0.0, 1.0);
    current.slerp(target, alpha).normalize()
}

/// Target orientation for the rider on a slope, including the pitch offset.
pub fn slope_target_rotation(
    normal: Vec3,
    forward: Vec3,
    velocity: Vec3,
    pitch_offset_degrees: f32,
) -> Quat {
    let aligned = slope_orientation(normal, forward);
    let ascending = is_moving_up_slope(forward, velocity, normal);
    apply_pitch_offset(aligned, pitch_offset_degrees, ascending)
}
