//! Combat domain: enemy AI, damage resolution, and spawning.

pub mod ai;
mod components;
mod events;
mod resources;
mod spawn;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    AttackVector, Enemy, EnemyAI, FireCooldowns, Health, Invulnerable, Projectile, ProjectileKind,
    ProjectileLifetime,
};
pub use events::{DamageEvent, DeathEvent, EnemyKilledEvent, PlayerDamagedEvent};
pub use resources::{
    CombatInput, CombatTuning, EnemyTuning, ProjectileConfig, ProjectileTuning, SpawnState,
    SpawnTuning,
};
pub use spawn::EnemyBundle;

use bevy::prelude::*;

use crate::combat::ai::update_enemy_ai;
use crate::combat::spawn::{goal_reinforcements, initial_spawns, periodic_spawns};
use crate::combat::systems::{
    apply_damage, expire_projectiles, fire_projectiles, player_enemy_contact, process_deaths,
    projectile_hits, read_combat_input, update_combat_timers, update_enemy_flash,
    update_player_tint,
};
use crate::core::session_active;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatInput>()
            .init_resource::<ProjectileTuning>()
            .init_resource::<CombatTuning>()
            .init_resource::<EnemyTuning>()
            .init_resource::<SpawnTuning>()
            .init_resource::<SpawnState>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_message::<EnemyKilledEvent>()
            .add_message::<PlayerDamagedEvent>()
            .add_systems(PostStartup, initial_spawns)
            .add_systems(
                Update,
                (
                    read_combat_input,
                    update_combat_timers,
                    fire_projectiles,
                    update_enemy_ai,
                    projectile_hits,
                    player_enemy_contact,
                    apply_damage,
                    process_deaths,
                    periodic_spawns,
                    goal_reinforcements,
                    expire_projectiles,
                )
                    .chain()
                    .run_if(session_active),
            )
            .add_systems(Update, (update_player_tint, update_enemy_flash));
    }
}
