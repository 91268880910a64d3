mod content;
mod core;
mod course;
mod effects;
mod movement;
mod scoring;
mod ui;

use avian3d::prelude::*;
use bevy::prelude::*;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Skateboarding Sim".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(movement::LocomotionTuning::default().gravity))
        .add_plugins((
            core::CorePlugin,
            content::ContentPlugin,
            movement::MovementPlugin,
            effects::EffectsPlugin,
            scoring::ScoringPlugin,
            course::CoursePlugin,
            ui::UiPlugin,
        ))
        .run();
}
