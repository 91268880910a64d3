//! Scoring domain: tests for the score counter and overlap scoring.

use avian3d::prelude::*;
use bevy::prelude::*;

use super::obstacles::award_points_on_overlap;
use super::{PointGiver, PointsAwardedEvent, ScoreGiver, ScoreState, ScoringPlugin};
use crate::effects::{EffectsPlugin, SlowMotion, SlowMotionTuning};
use crate::movement::{LocomotionState, Skater};

#[test]
fn test_score_accumulates_exactly() {
    let mut score = ScoreState::default();
    for _ in 0..3 {
        score.add_points(10);
    }
    assert_eq!(score.points(), 30);
}

#[test]
fn test_score_allows_negative_totals() {
    let mut score = ScoreState::default();
    score.add_points(5);
    score.add_points(-20);
    assert_eq!(score.points(), -15);
}

#[test]
fn test_point_giver_gives_its_points() {
    let mut score = ScoreState::default();
    let giver = PointGiver { points: 25 };
    assert_eq!(giver.give_points(Entity::PLACEHOLDER, &mut score), 25);
    assert_eq!(score.points(), 25);
    assert_eq!(PointGiver::default().points, 10);
}

fn scoring_app() -> App {
    let mut app = App::new();
    app.init_resource::<ScoreState>()
        .init_resource::<SlowMotionTuning>()
        .add_message::<CollisionStart>()
        .add_message::<PointsAwardedEvent>()
        .add_systems(Update, award_points_on_overlap);
    app
}

fn overlap(app: &mut App, collider1: Entity, collider2: Entity) {
    app.world_mut().write_message(CollisionStart {
        collider1,
        collider2,
        body1: Some(collider1),
        body2: Some(collider2),
    });
    app.update();
}

fn spawn_skater(app: &mut App, is_jumping: bool) -> Entity {
    app.world_mut()
        .spawn((
            Skater,
            LocomotionState {
                is_jumping,
                ..default()
            },
            SlowMotion::default(),
        ))
        .id()
}

#[test]
fn test_jumping_skater_scores_and_slows_time() {
    let mut app = scoring_app();
    let obstacle = app.world_mut().spawn(PointGiver::default()).id();
    let skater = spawn_skater(&mut app, true);

    overlap(&mut app, obstacle, skater);

    assert_eq!(app.world().resource::<ScoreState>().points(), 10);
    let slow_motion = app.world().get::<SlowMotion>(skater).unwrap();
    assert!(slow_motion.is_active());
}

#[test]
fn test_collider_order_does_not_matter() {
    let mut app = scoring_app();
    let obstacle = app.world_mut().spawn(PointGiver { points: 7 }).id();
    let skater = spawn_skater(&mut app, true);

    overlap(&mut app, skater, obstacle);
    overlap(&mut app, obstacle, skater);

    assert_eq!(app.world().resource::<ScoreState>().points(), 14);
}

#[test]
fn test_grounded_skater_does_not_score() {
    let mut app = scoring_app();
    let obstacle = app.world_mut().spawn(PointGiver::default()).id();
    let skater = spawn_skater(&mut app, false);

    overlap(&mut app, obstacle, skater);

    assert_eq!(app.world().resource::<ScoreState>().points(), 0);
    assert!(!app.world().get::<SlowMotion>(skater).unwrap().is_active());
}

#[test]
fn test_non_skater_does_not_score() {
    let mut app = scoring_app();
    let obstacle = app.world_mut().spawn(PointGiver::default()).id();
    let crate_prop = app
        .world_mut()
        .spawn(LocomotionState {
            is_jumping: true,
            ..default()
        })
        .id();

    overlap(&mut app, obstacle, crate_prop);

    assert_eq!(app.world().resource::<ScoreState>().points(), 0);
}

#[test]
fn test_score_slows_time_in_the_same_frame() {
    let mut app = App::new();
    app.init_resource::<Time<Real>>()
        .init_resource::<Time<Virtual>>()
        .add_message::<CollisionStart>()
        .add_plugins((EffectsPlugin, ScoringPlugin));

    let obstacle = app.world_mut().spawn(PointGiver::default()).id();
    let skater = spawn_skater(&mut app, true);
    overlap(&mut app, obstacle, skater);

    assert!(app.world().get::<SlowMotion>(skater).unwrap().is_active());
    assert_eq!(app.world().resource::<Time<Virtual>>().relative_speed(), 0.3);
}
