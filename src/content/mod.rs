//! Content domain: data-driven tuning loaded from RON at startup.

mod data;
mod loader;
mod validation;

pub use data::{CourseDef, ScoringDef, SkateTuningFile};
pub use loader::{load_tuning_file, parse_tuning};
pub use validation::validate_tuning;

use std::path::Path;

use avian3d::prelude::*;
use bevy::prelude::*;

use crate::core::RunConfig;

/// Tuning file relative to the working directory
pub const TUNING_PATH: &str = "assets/data/skate_tuning.ron";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CourseDef>()
            .init_resource::<ScoringDef>()
            .add_systems(PreStartup, load_tuning);
    }
}

/// Loads tuning and replaces the built-in resources. Any load or validation
/// error keeps the defaults.
pub(crate) fn load_tuning(mut commands: Commands) {
    let tuning = match load_tuning_file(Path::new(TUNING_PATH)) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using built-in tuning", e);
            return;
        }
    };

    let errors = validate_tuning(&tuning);
    if !errors.is_empty() {
        for error in &errors {
            error!("Tuning validation: {}", error);
        }
        error!(
            "{} has {} invalid values; using built-in tuning",
            TUNING_PATH,
            errors.len()
        );
        return;
    }

    insert_tuning(&mut commands, &tuning);
    info!(
        "Loaded tuning from {}: smoothing={}, pitch_offset={}, interp_speed={}",
        TUNING_PATH,
        tuning.locomotion.speed_smoothing,
        tuning.locomotion.pitch_offset_degrees,
        tuning.locomotion.rotation_interp_speed
    );
}

pub(crate) fn insert_tuning(commands: &mut Commands, tuning: &SkateTuningFile) {
    let locomotion = tuning.locomotion.to_tuning();
    // physics and the slide model share one gravity
    commands.insert_resource(Gravity(locomotion.gravity));
    commands.insert_resource(locomotion);
    commands.insert_resource(tuning.motor.to_tuning());
    commands.insert_resource(tuning.scoring.slow_motion_tuning());
    commands.insert_resource(tuning.scoring.clone());
    commands.insert_resource(tuning.course.clone());
    if let Some(seed) = tuning.course.seed {
        commands.insert_resource(RunConfig::with_seed(seed));
    }
}
