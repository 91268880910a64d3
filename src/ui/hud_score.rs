//! UI domain: running score and the flash shown for each award.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::scoring::{PointsAwardedEvent, ScoreState};

const HUD_MARGIN: f32 = 16.0;
/// How long an award stays on screen, in wall-clock seconds
const AWARD_FLASH_SECONDS: f32 = 1.5;

/// Marker for the score total text
#[derive(Component)]
pub struct ScoreText;

/// Last award, cleared once its timer runs out.
#[derive(Component)]
pub struct AwardFlash {
    timer: Timer,
}

impl AwardFlash {
    fn idle() -> Self {
        let mut timer = Timer::from_seconds(AWARD_FLASH_SECONDS, TimerMode::Once);
        timer.tick(timer.duration());
        Self { timer }
    }
}

pub(crate) fn spawn_score_hud(mut commands: Commands) {
    commands
        .spawn(Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_MARGIN),
            top: Val::Px(HUD_MARGIN),
            flex_direction: FlexDirection::Column,
            align_items: AlignItems::FlexEnd,
            row_gap: Val::Px(4.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                ScoreText,
                Text::new("Score 0"),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));

            parent.spawn((
                AwardFlash::idle(),
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.8, 0.2)),
            ));
        });
}

pub(crate) fn update_score_text(
    score: Res<ScoreState>,
    mut query: Query<&mut Text, With<ScoreText>>,
) {
    if !score.is_changed() {
        return;
    }
    for mut text in &mut query {
        **text = format!("Score {}", score.points());
    }
}

/// Shows the most recent award and hides it after a short while.
pub(crate) fn flash_awards(
    time: Res<Time<Real>>,
    mut awards: MessageReader<PointsAwardedEvent>,
    mut query: Query<(&mut AwardFlash, &mut Text)>,
) {
    let latest = awards.read().last().map(|event| event.points);

    for (mut flash, mut text) in &mut query {
        if let Some(points) = latest {
            **text = format!("{:+}", points);
            flash.timer.reset();
        } else if flash.timer.tick(time.delta()).just_finished() {
            text.0.clear();
        }
    }
}
