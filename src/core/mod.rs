//! Core domain: run configuration, lighting and the follow camera.

mod camera;
mod resources;
mod systems;

pub use camera::FollowCamera;
pub use resources::RunConfig;

use bevy::prelude::*;

use crate::core::camera::follow_target;
use crate::core::systems::{log_run_start, setup_lighting};
use crate::movement::MovementSet;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RunConfig>()
            .add_systems(Startup, (log_run_start, setup_lighting))
            .add_systems(Update, follow_target.after(MovementSet::Motor));
    }
}
