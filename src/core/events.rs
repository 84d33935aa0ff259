//! Core domain: session lifecycle events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Fired when the player touches the origin platform and is rolled back to
/// the spawn point. Never costs a life.
#[derive(Debug)]
pub struct CheckpointResetEvent {
    pub spawn_point: Vec2,
}

impl Message for CheckpointResetEvent {}

/// Fired once when the player collects the goal marker.
#[derive(Debug)]
pub struct LevelCompletedEvent {
    pub score: u32,
}

impl Message for LevelCompletedEvent {}

/// Fired once when lives reach zero.
#[derive(Debug)]
pub struct GameOverEvent {
    pub final_score: u32,
}

impl Message for GameOverEvent {}
