//! Scoring domain: score counter and point-giving obstacles.

mod events;
mod obstacles;
mod score;
#[cfg(test)]
mod tests;

pub use events::PointsAwardedEvent;
pub use obstacles::{PointGiver, ScoreGiver};
pub use score::ScoreState;

use bevy::prelude::*;

use crate::effects::SlowMotionSet;
use crate::scoring::obstacles::award_points_on_overlap;

pub struct ScoringPlugin;

impl Plugin for ScoringPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ScoreState>()
            .add_message::<PointsAwardedEvent>()
            .add_systems(Update, award_points_on_overlap.before(SlowMotionSet));
    }
}
