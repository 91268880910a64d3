//! Course domain: tests for ramp geometry and obstacle layout.

use bevy::prelude::*;

use super::layout::{OBSTACLE_LEAD_IN, OBSTACLE_SPACING};
use super::{CourseGeometry, obstacle_layout};
use crate::content::CourseDef;
use crate::movement::slope::{is_on_slope, slide_direction};

const EPS: f32 = 1.0e-3;

#[test]
fn test_ramp_normal_matches_angle() {
    let def = CourseDef::default();
    let geometry = CourseGeometry::from_def(&def);
    let normal = geometry.ramp_normal();

    assert!((normal.angle_between(Vec3::Y).to_degrees() - def.ramp_angle_degrees).abs() < EPS);
    assert!(is_on_slope(normal));
}

#[test]
fn test_ramp_slides_toward_runout() {
    let geometry = CourseGeometry::from_def(&CourseDef::default());
    let down = slide_direction(geometry.ramp_normal(), Vec3::new(0.0, -980.0, 0.0));
    assert!(down.z < 0.0);
    assert!(down.y < 0.0);
}

#[test]
fn test_ramp_surface_joins_platform_and_runout() {
    let def = CourseDef::default();
    let geometry = CourseGeometry::from_def(&def);
    let normal = geometry.ramp_normal();
    let surface_mid = geometry.ramp_center + normal * 20.0;
    let along = geometry.ramp_rotation * Vec3::NEG_Z * def.ramp_length * 0.5;

    // top edge at the origin, foot level with the run-out
    assert!((surface_mid - along).abs_diff_eq(Vec3::ZERO, 0.1));
    let foot = surface_mid + along;
    assert!((foot.y - geometry.runout_height()).abs() < 0.1);
    assert!((foot.z + geometry.run).abs() < 0.1);
}

#[test]
fn test_layout_is_deterministic_per_seed() {
    let def = CourseDef::default();
    let geometry = CourseGeometry::from_def(&def);

    let first = obstacle_layout(7, &def, &geometry);
    let again = obstacle_layout(7, &def, &geometry);
    let other = obstacle_layout(8, &def, &geometry);

    assert_eq!(first, again);
    assert_ne!(first, other);
}

#[test]
fn test_layout_stays_on_runout() {
    let def = CourseDef {
        obstacle_count: 12,
        ..default()
    };
    let geometry = CourseGeometry::from_def(&def);
    let positions = obstacle_layout(1234, &def, &geometry);

    assert_eq!(positions.len(), 12);
    let mut previous_z = -geometry.run - OBSTACLE_LEAD_IN + 1.0;
    for position in positions {
        assert!(position.x.abs() <= def.obstacle_spread);
        assert_eq!(position.y, geometry.runout_height());
        assert!(position.z < previous_z);
        assert!(previous_z - position.z < OBSTACLE_SPACING * 1.5 + 1.0);
        previous_z = position.z;
    }
}

#[test]
fn test_zero_obstacles() {
    let def = CourseDef {
        obstacle_count: 0,
        ..default()
    };
    let geometry = CourseGeometry::from_def(&def);
    assert!(obstacle_layout(1, &def, &geometry).is_empty());
}
