//! Effects domain: the slow-motion state machine and time dilation.

use std::time::Duration;

use bevy::prelude::*;

/// Slow-motion strength and length.
#[derive(Resource, Debug, Clone)]
pub struct SlowMotionTuning {
    /// Virtual time speed while slowed (1.0 = normal)
    pub time_scale: f32,
    /// Wall-clock length of the effect
    pub duration: Duration,
}

impl Default for SlowMotionTuning {
    fn default() -> Self {
        Self {
            time_scale: 0.3,
            duration: Duration::from_millis(500),
        }
    }
}

/// Per-skater slow-motion state, advanced once per frame with real time.
#[derive(Component, Debug, Clone, Default)]
pub enum SlowMotion {
    #[default]
    Normal,
    Active {
        timer: Timer,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlowMotionTransition {
    Entered,
    /// Triggered again while active; the countdown starts over
    Restarted,
    Ended,
}

impl SlowMotion {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active { .. })
    }

    pub fn remaining(&self) -> Duration {
        match self {
            Self::Normal => Duration::ZERO,
            Self::Active { timer } => timer.remaining(),
        }
    }

    pub fn trigger(&mut self, duration: Duration) -> SlowMotionTransition {
        if let Self::Active { timer } = self {
            timer.set_duration(duration);
            timer.reset();
            return SlowMotionTransition::Restarted;
        }
        *self = Self::Active {
            timer: Timer::new(duration, TimerMode::Once),
        };
        SlowMotionTransition::Entered
    }

    pub fn advance(&mut self, delta: Duration) -> Option<SlowMotionTransition> {
        let Self::Active { timer } = self else {
            return None;
        };
        if timer.tick(delta).is_finished() {
            *self = Self::Normal;
            Some(SlowMotionTransition::Ended)
        } else {
            None
        }
    }
}

pub(crate) fn tick_slow_motion(time: Res<Time<Real>>, mut query: Query<(Entity, &mut SlowMotion)>) {
    for (entity, mut slow_motion) in &mut query {
        if slow_motion.advance(time.delta()) == Some(SlowMotionTransition::Ended) {
            info!("Slow motion ended for {:?}", entity);
        }
    }
}

/// Sets the virtual clock speed from the skaters' slow-motion states.
pub(crate) fn apply_time_dilation(
    tuning: Res<SlowMotionTuning>,
    query: Query<&SlowMotion>,
    mut virtual_time: ResMut<Time<Virtual>>,
) {
    let scale = if query.iter().any(SlowMotion::is_active) {
        tuning.time_scale
    } else {
        1.0
    };

    if virtual_time.relative_speed() != scale {
        virtual_time.set_relative_speed(scale);
        debug!("Time dilation set to {}", scale);
    }
}
