//! Movement domain: system modules for skating updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod locomotion;
pub(crate) mod motor;

pub(crate) use collisions::detect_floor;
pub(crate) use input::{read_input, route_look_input, route_move_input};
pub(crate) use locomotion::{adjust_rotation_to_slope, apply_skate_speed, apply_sliding_force};
pub(crate) use motor::integrate_motor;
