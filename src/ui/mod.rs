//! UI domain: in-run HUD elements.

mod hud_score;

use bevy::prelude::*;

use crate::ui::hud_score::{flash_awards, spawn_score_hud, update_score_text};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_score_hud)
            .add_systems(Update, (update_score_text, flash_awards));
    }
}
