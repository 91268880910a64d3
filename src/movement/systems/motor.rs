//! Movement domain: applies motor requests to the physics body.

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::movement::motor::{PlanarStep, orient_to_movement, step_planar_velocity};
use crate::movement::{CharacterMotor, FloorContact, Skater};

pub(crate) fn integrate_motor(
    time: Res<Time>,
    mut query: Query<
        (
            &mut CharacterMotor,
            &mut LinearVelocity,
            &mut Transform,
            &FloorContact,
        ),
        With<Skater>,
    >,
) {
    let dt = time.delta_secs();

    for (mut motor, mut velocity, mut transform, floor) in &mut query {
        let (input, force) = motor.consume();

        let planar = step_planar_velocity(
            &motor,
            velocity.0,
            PlanarStep {
                input,
                force,
                grounded: floor.grounded,
                dt,
            },
        );
        velocity.x = planar.x;
        velocity.z = planar.z;

        if motor.take_jump(floor.grounded) {
            velocity.y = motor.jump_z_velocity;
            debug!("Jump: vertical velocity set to {}", motor.jump_z_velocity);
        }

        transform.rotation =
            orient_to_movement(transform.rotation, velocity.0, motor.rotation_rate_degrees, dt);
    }
}
