//! Course domain: ramp geometry and seeded obstacle placement.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::CourseDef;

pub const SLAB_THICKNESS: f32 = 40.0;
pub const START_PLATFORM_LENGTH: f32 = 600.0;
pub const RUNOUT_LENGTH: f32 = 4_000.0;
/// Gap between consecutive obstacles along the run-out
pub const OBSTACLE_SPACING: f32 = 450.0;
/// Clear distance after the ramp foot before the first obstacle
pub const OBSTACLE_LEAD_IN: f32 = 500.0;

/// Derived placement for the start platform, ramp and run-out.
///
/// The top edge of the ramp sits at the origin and the ramp descends toward -Z.
#[derive(Debug, Clone, Copy)]
pub struct CourseGeometry {
    pub ramp_rotation: Quat,
    pub ramp_center: Vec3,
    pub ramp_size: Vec3,
    /// Height lost from top to foot
    pub drop: f32,
    /// Horizontal distance from top to foot
    pub run: f32,
}

impl CourseGeometry {
    pub fn from_def(def: &CourseDef) -> Self {
        let angle = def.ramp_angle_degrees.to_radians();
        let drop = def.ramp_length * angle.sin();
        let run = def.ramp_length * angle.cos();

        let ramp_rotation = Quat::from_rotation_x(-angle);
        let normal = ramp_rotation * Vec3::Y;
        let surface_mid = Vec3::new(0.0, -drop * 0.5, -run * 0.5);

        Self {
            ramp_rotation,
            ramp_center: surface_mid - normal * SLAB_THICKNESS * 0.5,
            ramp_size: Vec3::new(def.ramp_width, SLAB_THICKNESS, def.ramp_length),
            drop,
            run,
        }
    }

    pub fn ramp_normal(&self) -> Vec3 {
        self.ramp_rotation * Vec3::Y
    }

    /// Centre of the flat platform the skater starts on
    pub fn start_center(&self) -> Vec3 {
        Vec3::new(0.0, -SLAB_THICKNESS * 0.5, START_PLATFORM_LENGTH * 0.5)
    }

    /// Centre of the flat run-out at the foot of the ramp
    pub fn runout_center(&self) -> Vec3 {
        Vec3::new(
            0.0,
            -self.drop - SLAB_THICKNESS * 0.5,
            -self.run - RUNOUT_LENGTH * 0.5,
        )
    }

    /// Height of the run-out surface
    pub fn runout_height(&self) -> f32 {
        -self.drop
    }
}

/// Ground-level obstacle positions along the run-out, deterministic per seed.
pub fn obstacle_layout(seed: u64, def: &CourseDef, geometry: &CourseGeometry) -> Vec<Vec3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let spread = def.obstacle_spread.abs();
    let first_z = -geometry.run - OBSTACLE_LEAD_IN;

    (0..def.obstacle_count)
        .map(|i| {
            let jitter = rng.random_range(0.0..OBSTACLE_SPACING * 0.5);
            let x = rng.random_range(-spread..=spread);
            let z = first_z - i as f32 * OBSTACLE_SPACING - jitter;
            Vec3::new(x, geometry.runout_height(), z)
        })
        .collect()
}
