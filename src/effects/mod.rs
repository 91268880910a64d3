//! Effects domain: transient gameplay effects such as slow motion.

mod slow_motion;
#[cfg(test)]
mod tests;

pub use slow_motion::{SlowMotion, SlowMotionTransition, SlowMotionTuning};

use bevy::prelude::*;

use crate::effects::slow_motion::{apply_time_dilation, tick_slow_motion};

/// Slow-motion countdown and clock dilation. Triggers should run before it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct SlowMotionSet;

pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SlowMotionTuning>()
            .add_systems(
                Update,
                (tick_slow_motion, apply_time_dilation)
                    .chain()
                    .in_set(SlowMotionSet),
            );
    }
}
