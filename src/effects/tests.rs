//! Effects domain: tests for the slow-motion state machine.

use std::time::Duration;

use bevy::prelude::*;

use super::slow_motion::apply_time_dilation;
use super::{SlowMotion, SlowMotionTransition, SlowMotionTuning};

const HALF_SECOND: Duration = Duration::from_millis(500);

#[test]
fn test_trigger_enters_then_restarts() {
    let mut state = SlowMotion::default();
    assert!(!state.is_active());

    assert_eq!(state.trigger(HALF_SECOND), SlowMotionTransition::Entered);
    assert!(state.is_active());

    state.advance(Duration::from_millis(300));
    assert_eq!(state.remaining(), Duration::from_millis(200));

    // a second trigger resets the countdown to the full duration
    assert_eq!(state.trigger(HALF_SECOND), SlowMotionTransition::Restarted);
    assert_eq!(state.remaining(), HALF_SECOND);
}

#[test]
fn test_advance_ends_after_duration() {
    let mut state = SlowMotion::default();
    state.trigger(HALF_SECOND);

    assert_eq!(state.advance(Duration::from_millis(499)), None);
    assert!(state.is_active());
    assert_eq!(
        state.advance(Duration::from_millis(1)),
        Some(SlowMotionTransition::Ended)
    );
    assert!(!state.is_active());
    assert_eq!(state.remaining(), Duration::ZERO);
}

#[test]
fn test_restart_uses_latest_duration() {
    let mut state = SlowMotion::default();
    state.trigger(HALF_SECOND);
    state.advance(Duration::from_millis(100));

    state.trigger(Duration::from_secs(2));
    assert_eq!(state.remaining(), Duration::from_secs(2));
    assert_eq!(state.advance(Duration::from_millis(1_999)), None);
    assert_eq!(
        state.advance(Duration::from_millis(1)),
        Some(SlowMotionTransition::Ended)
    );
}

#[test]
fn test_zero_duration_ends_on_next_tick() {
    let mut state = SlowMotion::default();
    assert_eq!(state.trigger(Duration::ZERO), SlowMotionTransition::Entered);
    assert_eq!(
        state.advance(Duration::from_millis(16)),
        Some(SlowMotionTransition::Ended)
    );
}

#[test]
fn test_advance_while_normal_is_noop() {
    let mut state = SlowMotion::Normal;
    assert_eq!(state.advance(Duration::from_secs(5)), None);
    assert!(!state.is_active());
}

#[test]
fn test_time_dilation_follows_state() {
    let mut app = App::new();
    app.init_resource::<Time<Virtual>>()
        .init_resource::<SlowMotionTuning>()
        .add_systems(Update, apply_time_dilation);

    let skater = app
        .world_mut()
        .spawn(SlowMotion::Active {
            timer: Timer::new(HALF_SECOND, TimerMode::Once),
        })
        .id();
    app.update();
    assert_eq!(app.world().resource::<Time<Virtual>>().relative_speed(), 0.3);

    *app.world_mut().get_mut::<SlowMotion>(skater).unwrap() = SlowMotion::Normal;
    app.update();
    assert_eq!(app.world().resource::<Time<Virtual>>().relative_speed(), 1.0);
}
