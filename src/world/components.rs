//! World domain: platform and goal components.

use bevy::prelude::*;

/// A static platform surface. Half extents are kept on the component so the
/// enemy AI can run its ledge lookahead against the platform list without
/// touching the collision engine.
#[derive(Component, Debug, Clone, Copy)]
pub struct Platform {
    pub half_extents: Vec2,
}

impl Platform {
    /// World y of the walkable top surface.
    pub fn surface_y(&self, center_y: f32) -> f32 {
        center_y + self.half_extents.y
    }
}

/// Marks the level's single origin/ground surface. Grounded contact with this
/// platform rolls the player back to the spawn point instead of counting as a
/// normal landing.
#[derive(Component, Debug)]
pub struct OriginPlatform;

/// The non-hostile pickup at the far end of the level. Player overlap sets the
/// one-way level-complete flag.
#[derive(Component, Debug)]
pub struct GoalMarker;

/// Spawn coordinates the checkpoint reset teleports the player to.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnPoint(pub Vec2);
