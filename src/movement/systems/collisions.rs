//! Movement domain: floor detection.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::{FloorContact, GameLayer, LocomotionState, MotorTuning, Skater};

pub(crate) fn detect_floor(
    spatial_query: SpatialQuery,
    tuning: Res<MotorTuning>,
    mut query: Query<(&Transform, &mut FloorContact, &mut LocomotionState), With<Skater>>,
) {
    // Filter to only hit Ground layer entities (not obstacles or sensors)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, mut floor, mut state) in &mut query {
        // Cast from the capsule centre down past the feet
        let hit = spatial_query.cast_ray(
            transform.translation,
            Dir3::NEG_Y,
            tuning.capsule_half_height + tuning.floor_probe_distance,
            true,
            &ground_filter,
        );

        let reading = match hit {
            Some(hit) => FloorContact::grounded(hit.normal, hit.distance, hit.entity),
            None => FloorContact::airborne(),
        };

        match apply_floor_reading(&mut floor, &mut state, reading) {
            Some(FloorTransition::Landed) => debug!(
                "Landed: normal={:?}, distance={:.1}",
                floor.normal, floor.distance
            ),
            Some(FloorTransition::LeftGround) => {
                debug!("Left ground: jumping={}", state.is_jumping)
            }
            None => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FloorTransition {
    Landed,
    LeftGround,
}

/// Stores a new floor reading. Landing ends the jump.
pub(crate) fn apply_floor_reading(
    floor: &mut FloorContact,
    state: &mut LocomotionState,
    reading: FloorContact,
) -> Option<FloorTransition> {
    let was_grounded = floor.grounded;
    *floor = reading;

    match (was_grounded, floor.grounded) {
        (false, true) => {
            state.is_jumping = false;
            Some(FloorTransition::Landed)
        }
        (true, false) => Some(FloorTransition::LeftGround),
        _ => None,
    }
}
