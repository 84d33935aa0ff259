//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::combat::components::AttackVector;

/// A hit landed on an enemy. Consumed by the damage applier; the score
/// awarded on a lethal result rides along so the kill path needs no lookup.
#[derive(Debug)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: i32,
    pub knockback: Vec2,
    pub vector: AttackVector,
    pub score_on_kill: u32,
}

impl Message for DamageEvent {}

/// An enemy's health crossed to zero or below.
#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
    pub score: u32,
}

impl Message for DeathEvent {}

/// Emitted after a dead enemy is despawned and the score applied.
#[derive(Debug)]
pub struct EnemyKilledEvent {
    pub enemy: Entity,
    pub score: u32,
}

impl Message for EnemyKilledEvent {}

/// Emitted when enemy contact costs the player a life.
#[derive(Debug)]
pub struct PlayerDamagedEvent {
    pub lives_remaining: u32,
}

impl Message for PlayerDamagedEvent {}
