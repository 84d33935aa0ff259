//! UI domain: terminal overlays for game over and level completion.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::{GameOverEvent, LevelCompletedEvent};

/// Marker for either full-screen overlay
#[derive(Component)]
pub struct TerminalOverlay;

pub(crate) fn show_game_over(
    mut commands: Commands,
    mut events: MessageReader<GameOverEvent>,
    existing: Query<Entity, With<TerminalOverlay>>,
) {
    for event in events.read() {
        // The first terminal overlay wins; the session cannot end twice.
        if !existing.is_empty() {
            return;
        }
        spawn_overlay(
            &mut commands,
            "GAME OVER",
            Color::srgb(0.85, 0.2, 0.2),
            event.final_score,
        );
        return;
    }
}

pub(crate) fn show_level_complete(
    mut commands: Commands,
    mut events: MessageReader<LevelCompletedEvent>,
    existing: Query<Entity, With<TerminalOverlay>>,
) {
    for event in events.read() {
        if !existing.is_empty() {
            return;
        }
        spawn_overlay(
            &mut commands,
            "LEVEL COMPLETE",
            Color::srgb(0.95, 0.85, 0.3),
            event.score,
        );
        return;
    }
}

fn spawn_overlay(commands: &mut Commands, title: &str, title_color: Color, score: u32) {
    // Full screen dark backdrop
    commands
        .spawn((
            TerminalOverlay,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.75)),
            ZIndex(100),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(title),
                TextFont {
                    font_size: 64.0,
                    ..default()
                },
                TextColor(title_color),
                Node {
                    margin: UiRect::bottom(Val::Px(30.0)),
                    ..default()
                },
            ));

            parent.spawn((
                Text::new(format!("FINAL SCORE: {score}")),
                TextFont {
                    font_size: 28.0,
                    ..default()
                },
                TextColor(Color::srgb(0.85, 0.85, 0.85)),
            ));
        });
}
