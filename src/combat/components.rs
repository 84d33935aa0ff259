//! Combat domain: components for health, projectiles, and enemy state.

use bevy::prelude::*;

/// Integer health for damageable entities. Only the combat resolver ever
/// decreases it.
#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
}

impl Health {
    pub fn new(amount: i32) -> Self {
        Self { current: amount }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.current -= amount;
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }
}

/// Invulnerability window - contact damage to the holder is suppressed while
/// the timer runs. Independent of the dash overlay.
#[derive(Component, Debug, Default)]
pub struct Invulnerable {
    pub timer: f32,
}

impl Invulnerable {
    pub fn is_invulnerable(&self) -> bool {
        self.timer > 0.0
    }
}

#[derive(Component, Debug)]
pub struct Enemy;

/// Per-enemy AI state. `patrol_direction` is the only decision the controller
/// remembers; everything else is recomputed from live distance and health.
#[derive(Component, Debug)]
pub struct EnemyAI {
    pub patrol_direction: f32,
    pub patrol_speed: f32,
}

/// The two projectile tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectileKind {
    Light,
    Heavy,
}

#[derive(Component, Debug)]
pub struct Projectile {
    pub kind: ProjectileKind,
}

/// Remaining flight time before a projectile despawns on timeout.
#[derive(Component, Debug)]
pub struct ProjectileLifetime(pub f32);

/// Player fire cooldowns for the two projectile tiers.
#[derive(Component, Debug, Default)]
pub struct FireCooldowns {
    pub light_timer: f32,
    pub heavy_timer: f32,
}

impl FireCooldowns {
    pub fn ready(&self, kind: ProjectileKind) -> bool {
        match kind {
            ProjectileKind::Light => self.light_timer <= 0.0,
            ProjectileKind::Heavy => self.heavy_timer <= 0.0,
        }
    }

    pub fn trigger(&mut self, kind: ProjectileKind, cooldown: f32) {
        match kind {
            ProjectileKind::Light => self.light_timer = cooldown,
            ProjectileKind::Heavy => self.heavy_timer = cooldown,
        }
    }
}

/// Remaining time of the hit-flash tint on an enemy sprite.
#[derive(Component, Debug)]
pub struct HitFlash(pub f32);

/// Which of the three attack vectors produced a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackVector {
    Light,
    Heavy,
    Dash,
}
