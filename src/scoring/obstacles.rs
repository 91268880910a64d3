//! Scoring domain: obstacles that award points when jumped.

use avian3d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::effects::{SlowMotion, SlowMotionTransition, SlowMotionTuning};
use crate::movement::{LocomotionState, Skater};
use crate::scoring::events::PointsAwardedEvent;
use crate::scoring::score::ScoreState;

/// Anything that can hand points to an agent.
pub trait ScoreGiver {
    /// Adds this giver's points to `score` and returns how many were given.
    fn give_points(&self, agent: Entity, score: &mut ScoreState) -> i32;
}

/// Sensor volume worth a fixed number of points.
#[derive(Component, Debug, Clone)]
pub struct PointGiver {
    pub points: i32,
}

impl Default for PointGiver {
    fn default() -> Self {
        Self { points: 10 }
    }
}

impl ScoreGiver for PointGiver {
    fn give_points(&self, _agent: Entity, score: &mut ScoreState) -> i32 {
        score.add_points(self.points);
        self.points
    }
}

/// Awards points when a jumping skater starts overlapping a point giver,
/// then kicks off slow motion for that skater.
pub(crate) fn award_points_on_overlap(
    mut collision_events: MessageReader<CollisionStart>,
    mut awarded_events: MessageWriter<PointsAwardedEvent>,
    mut score: ResMut<ScoreState>,
    slow_motion_tuning: Res<SlowMotionTuning>,
    givers: Query<&PointGiver>,
    mut skaters: Query<(&LocomotionState, &mut SlowMotion), With<Skater>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (obstacle, agent) in pairs {
            if obstacle == agent {
                continue;
            }

            let Ok(giver) = givers.get(obstacle) else {
                continue;
            };

            // Only skaters score, and only mid-jump
            let Ok((state, mut slow_motion)) = skaters.get_mut(agent) else {
                continue;
            };
            if !state.is_jumping {
                debug!("Skater touched obstacle {:?} without jumping", obstacle);
                continue;
            }

            let points = giver.give_points(agent, &mut score);
            awarded_events.write(PointsAwardedEvent {
                agent,
                obstacle,
                points,
                total: score.points(),
            });
            info!(
                "Awarded {} points for clearing {:?}. Total: {}",
                points,
                obstacle,
                score.points()
            );

            match slow_motion.trigger(slow_motion_tuning.duration) {
                SlowMotionTransition::Restarted => {
                    debug!("Slow motion restarted for {:?}", agent)
                }
                _ => info!(
                    "Slow motion x{} for {:?}",
                    slow_motion_tuning.time_scale, slow_motion_tuning.duration
                ),
            }
        }
    }
}
