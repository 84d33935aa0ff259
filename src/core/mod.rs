//! Core domain: session state, lifecycle events, and plugin wiring.

mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use events::{CheckpointResetEvent, GameOverEvent, LevelCompletedEvent};
pub use resources::{SessionConfig, SessionRng, SessionState, session_active};

use bevy::prelude::*;

use crate::core::systems::{follow_player, initialize_session, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SessionConfig>()
            .init_resource::<SessionState>()
            .add_message::<CheckpointResetEvent>()
            .add_message::<LevelCompletedEvent>()
            .add_message::<GameOverEvent>()
            .add_systems(Startup, (setup_camera, initialize_session))
            .add_systems(Update, follow_player);
    }
}
