//! Movement domain: player ability state machine and plugin wiring.

mod bootstrap;
mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Facing, GameLayer, MovementState, Player};
pub use events::{DashEndedEvent, DashStartedEvent};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::session_active;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{
    apply_dash, apply_horizontal_movement, apply_jump, detect_ground, read_input,
    update_dash_timers, update_facing,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_message::<DashStartedEvent>()
            .add_message::<DashEndedEvent>()
            .add_systems(PostStartup, spawn_player)
            .add_systems(
                Update,
                (
                    read_input,
                    detect_ground,
                    update_dash_timers,
                    apply_horizontal_movement,
                    apply_jump,
                    apply_dash,
                    update_facing,
                )
                    .chain()
                    .run_if(session_active),
            );
    }
}
