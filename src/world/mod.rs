//! World domain: level geometry, checkpoint rule, and goal marker.

mod components;
mod data;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{GoalMarker, OriginPlatform, Platform, SpawnPoint};
pub use data::{LevelDef, LevelLoadError, PlatformDef, load_parkour_level};

use bevy::prelude::*;

use crate::core::session_active;
use crate::world::systems::{checkpoint_reset, collect_goal, spawn_level};

pub const WORLD_WIDTH: f32 = 4000.0;
pub const WORLD_HEIGHT: f32 = 600.0;
pub const WORLD_GRAVITY: f32 = 900.0;
/// Horizontal margin enemies are clamped inside.
pub const WORLD_EDGE_MARGIN: f32 = 16.0;
pub const PLATFORM_THICKNESS: f32 = 20.0;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_level).add_systems(
            Update,
            (checkpoint_reset, collect_goal).run_if(session_active),
        );
    }
}
