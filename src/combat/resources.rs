//! Combat domain: tuning and input resources.

use bevy::prelude::*;

use crate::combat::components::ProjectileKind;

/// Per-tier projectile configuration.
#[derive(Debug, Clone)]
pub struct ProjectileConfig {
    pub damage: i32,
    pub speed: f32,
    pub cooldown: f32,
    pub knockback: f32,
    pub kill_score: u32,
    /// Live projectiles of this tier are capped; a blocked fire request is
    /// silently dropped.
    pub pool_cap: usize,
    pub size: f32,
}

#[derive(Resource, Debug, Clone)]
pub struct ProjectileTuning {
    pub light: ProjectileConfig,
    pub heavy: ProjectileConfig,
    /// Flight time before a projectile despawns on its own.
    pub lifetime: f32,
}

impl Default for ProjectileTuning {
    fn default() -> Self {
        Self {
            light: ProjectileConfig {
                damage: 1,
                speed: 720.0,
                cooldown: 0.15,
                knockback: 120.0,
                kill_score: 100,
                pool_cap: 30,
                size: 6.0,
            },
            heavy: ProjectileConfig {
                damage: 3,
                speed: 520.0,
                cooldown: 1.2,
                knockback: 260.0,
                kill_score: 150,
                pool_cap: 8,
                size: 18.0,
            },
            lifetime: 2.0,
        }
    }
}

impl ProjectileTuning {
    pub fn config(&self, kind: ProjectileKind) -> &ProjectileConfig {
        match kind {
            ProjectileKind::Light => &self.light,
            ProjectileKind::Heavy => &self.heavy,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct CombatTuning {
    /// Invulnerability window after a damaging hit.
    pub hit_iframes: f32,
    /// Invulnerability window after a checkpoint reset.
    pub reset_iframes: f32,
    pub dash_damage: i32,
    pub dash_kill_score: u32,
    /// Upward knockback dealt by a dash hit.
    pub dash_knockback: f32,
    /// Knockback the player receives from enemy contact (x away, y up).
    pub contact_knockback: Vec2,
    /// Duration of the enemy hit-flash tint.
    pub hit_flash_time: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            hit_iframes: 1.0,
            reset_iframes: 0.7,
            dash_damage: 2,
            dash_kill_score: 100,
            dash_knockback: 160.0,
            contact_knockback: Vec2::new(200.0, 180.0),
            hit_flash_time: 0.12,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct EnemyTuning {
    /// Pursuit activates inside this horizontal distance...
    pub pursuit_range: f32,
    /// ...and outside this dead-zone band around the player.
    pub dead_zone: f32,
    pub flee_range: f32,
    /// Enemies at or below this health flee instead of fighting.
    pub flee_health: i32,
    /// Added to patrol speed while pursuing or fleeing.
    pub speed_bonus: f32,
    /// Velocity smoothing factor for pursuit (per tick).
    pub pursuit_lerp: f32,
    pub wall_hop_impulse: f32,
    /// Lookahead distance past the body edge for the ledge probe.
    pub ledge_probe_ahead: f32,
    /// Probe depth below the feet.
    pub ledge_probe_down: f32,
    /// Vertical band a platform surface must fall in to count as support.
    pub ledge_band: f32,
    pub health_min: i32,
    pub health_max: i32,
    pub patrol_speed_min: f32,
    pub patrol_speed_max: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            pursuit_range: 1200.0,
            dead_zone: 60.0,
            flee_range: 300.0,
            flee_health: 1,
            speed_bonus: 120.0,
            pursuit_lerp: 0.08,
            wall_hop_impulse: 300.0,
            ledge_probe_ahead: 6.0,
            ledge_probe_down: 8.0,
            ledge_band: 32.0,
            health_min: 2,
            health_max: 4,
            patrol_speed_min: 50.0,
            patrol_speed_max: 100.0,
        }
    }
}

#[derive(Resource, Debug, Clone)]
pub struct SpawnTuning {
    /// Seconds between spawn attempts.
    pub interval: f32,
    /// Live-enemy cap.
    pub max_alive: usize,
    /// Enemies placed when the level starts.
    pub initial_spawns: usize,
    /// Reinforcements spawned when the goal is collected.
    pub goal_bonus_spawns: usize,
    /// Spawn height above the chosen platform so the enemy falls onto it.
    pub drop_height: f32,
}

impl Default for SpawnTuning {
    fn default() -> Self {
        Self {
            interval: 3.0,
            max_alive: 6,
            initial_spawns: 2,
            goal_bonus_spawns: 3,
            drop_height: 40.0,
        }
    }
}

/// Time accumulator gating periodic enemy spawns.
#[derive(Resource, Debug, Default)]
pub struct SpawnState {
    pub accumulator: f32,
}

#[derive(Resource, Debug, Default)]
pub struct CombatInput {
    pub fire_light: bool,
    pub fire_heavy: bool,
}
