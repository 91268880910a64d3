//! Movement domain: debug-only gizmos for floor and slide vectors.

use bevy::prelude::*;

use crate::movement::slope::{is_on_slope, slide_direction};
use crate::movement::{FloorContact, LocomotionState, LocomotionTuning, Skater};

const GIZMO_LENGTH: f32 = 80.0;

pub(crate) fn draw_slope_gizmos(
    mut gizmos: Gizmos,
    tuning: Res<LocomotionTuning>,
    query: Query<(&Transform, &FloorContact, &LocomotionState), With<Skater>>,
) {
    for (transform, floor, state) in &query {
        if !floor.grounded {
            continue;
        }
        let feet = transform.translation - Vec3::Y * floor.distance;

        gizmos.arrow(
            feet,
            feet + floor.normal * GIZMO_LENGTH,
            Color::srgb(0.3, 0.6, 1.0),
        );

        if is_on_slope(floor.normal) {
            let color = if state.is_boosting {
                Color::srgb(0.5, 0.5, 0.5)
            } else {
                Color::srgb(1.0, 0.8, 0.2)
            };
            gizmos.arrow(
                feet,
                feet + slide_direction(floor.normal, tuning.gravity) * GIZMO_LENGTH,
                color,
            );
        }
    }
}
