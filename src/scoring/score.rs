//! Scoring domain: the session score counter.

use bevy::prelude::*;

/// Points earned this session. Negative totals are allowed.
#[derive(Resource, Debug, Default)]
pub struct ScoreState {
    points: i32,
}

impl ScoreState {
    pub fn add_points(&mut self, delta: i32) {
        self.points = self.points.saturating_add(delta);
    }

    pub fn points(&self) -> i32 {
        self.points
    }
}
