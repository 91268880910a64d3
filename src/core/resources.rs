//! Core domain: shared resources for run configuration.

use bevy::prelude::*;
use rand::Rng;

#[derive(Resource, Debug)]
pub struct RunConfig {
    /// Seed used to lay out the course
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

impl RunConfig {
    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }
}
