//! Core domain: spring-arm follow camera.

use bevy::prelude::*;

const MIN_PITCH_DEGREES: f32 = -80.0;
const MAX_PITCH_DEGREES: f32 = 60.0;

/// Camera boom trailing a target entity. Yaw and pitch come from look input
/// and are independent of the target's own rotation.
#[derive(Component, Debug, Clone)]
pub struct FollowCamera {
    pub target: Entity,
    pub arm_length: f32,
    /// Height of the boom pivot above the target origin
    pub pivot_height: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl FollowCamera {
    pub fn new(target: Entity) -> Self {
        Self {
            target,
            arm_length: 400.0,
            pivot_height: 60.0,
            yaw: 0.0,
            pitch: -15.0_f32.to_radians(),
        }
    }

    /// Applies a look delta in degrees: x turns, y tilts.
    pub fn on_look_axis(&mut self, look: Vec2) {
        self.yaw -= look.x.to_radians();
        self.pitch = (self.pitch - look.y.to_radians()).clamp(
            MIN_PITCH_DEGREES.to_radians(),
            MAX_PITCH_DEGREES.to_radians(),
        );
    }

    pub fn boom_rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// Camera position for a target at `target_position`.
    pub fn eye(&self, target_position: Vec3) -> Vec3 {
        let pivot = target_position + Vec3::Y * self.pivot_height;
        pivot + self.boom_rotation() * Vec3::Z * self.arm_length
    }
}

pub(crate) fn follow_target(
    targets: Query<&Transform, Without<FollowCamera>>,
    mut cameras: Query<(&FollowCamera, &mut Transform)>,
) {
    for (camera, mut transform) in &mut cameras {
        let Ok(target) = targets.get(camera.target) else {
            continue;
        };
        let pivot = target.translation + Vec3::Y * camera.pivot_height;
        *transform = Transform::from_translation(camera.eye(target.translation))
            .looking_at(pivot, Vec3::Y);
    }
}
