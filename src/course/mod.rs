//! Course domain: the ramp and scoring obstacles the skater rides through.

mod layout;
mod spawn;
#[cfg(test)]
mod tests;

pub use layout::{CourseGeometry, obstacle_layout};

use bevy::prelude::*;

use crate::course::spawn::spawn_course;

pub struct CoursePlugin;

impl Plugin for CoursePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_course);
    }
}
