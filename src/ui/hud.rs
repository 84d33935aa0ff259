//! UI domain: score and lives readout.

use bevy::prelude::*;

use crate::core::SessionState;

pub(crate) const HUD_PADDING: f32 = 16.0;
pub(crate) const HUD_FONT_SIZE: f32 = 24.0;

/// Marker for the score text element
#[derive(Component)]
pub struct ScoreText;

/// Marker for the lives text element
#[derive(Component)]
pub struct LivesText;

pub(crate) fn spawn_hud(mut commands: Commands, session: Res<SessionState>) {
    commands.spawn((
        ScoreText,
        Text::new(format!("SCORE: {}", session.score)),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.95, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            ..default()
        },
    ));

    commands.spawn((
        LivesText,
        Text::new(format!("LIVES: {}", session.lives)),
        TextFont {
            font_size: HUD_FONT_SIZE,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.95, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(HUD_PADDING),
            top: Val::Px(HUD_PADDING),
            ..default()
        },
    ));
}

pub(crate) fn update_hud(
    session: Res<SessionState>,
    mut score_query: Query<&mut Text, (With<ScoreText>, Without<LivesText>)>,
    mut lives_query: Query<&mut Text, (With<LivesText>, Without<ScoreText>)>,
) {
    if !session.is_changed() {
        return;
    }

    for mut text in &mut score_query {
        *text = Text::new(format!("SCORE: {}", session.score));
    }
    for mut text in &mut lives_query {
        *text = Text::new(format!("LIVES: {}", session.lives));
    }
}
