//! Core domain: session setup and lifecycle systems.

use bevy::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::core::resources::{SessionConfig, SessionRng, SessionState};
use crate::movement::Player;
use crate::world::{WORLD_HEIGHT, WORLD_WIDTH};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Track the player horizontally, clamped so the view never leaves the world.
pub(crate) fn follow_player(
    window_query: Query<&Window>,
    player_query: Query<&Transform, With<Player>>,
    mut camera_query: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player) = player_query.single() else {
        return;
    };
    let Ok(mut camera) = camera_query.single_mut() else {
        return;
    };

    let half_view = window_query
        .single()
        .map(|w| w.width() / 2.0)
        .unwrap_or(512.0);

    camera.translation.x = player
        .translation
        .x
        .clamp(half_view, WORLD_WIDTH - half_view);
    camera.translation.y = WORLD_HEIGHT / 2.0;
}

/// Initialize session counters and the seeded RNG from config.
pub(crate) fn initialize_session(
    mut commands: Commands,
    config: Res<SessionConfig>,
    mut session: ResMut<SessionState>,
) {
    *session = SessionState::new(config.starting_lives);
    commands.insert_resource(SessionRng(ChaCha8Rng::seed_from_u64(config.seed)));

    info!(
        "Session started: seed={}, lives={}",
        config.seed, config.starting_lives
    );
}
