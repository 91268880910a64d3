//! Scoring domain: scoring events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Event fired when an obstacle hands out points
#[derive(Debug)]
pub struct PointsAwardedEvent {
    pub agent: Entity,
    pub obstacle: Entity,
    pub points: i32,
    /// Score after the award
    pub total: i32,
}

impl Message for PointsAwardedEvent {}
