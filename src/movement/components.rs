//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Static surfaces (platforms, world walls)
    Ground,
    /// Player character
    Player,
    /// Enemy characters
    Enemy,
    /// Player projectiles (both tiers)
    Projectile,
    /// Non-hostile pickups (goal marker)
    Pickup,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// Player ability state. Dash and invulnerability are independent overlays on
/// top of the grounded/airborne state, driven by their own timers.
#[derive(Component, Debug, Default)]
pub struct MovementState {
    pub on_ground: bool,
    /// Entity of the surface the grounded ray hit this tick.
    pub ground_entity: Option<Entity>,
    pub facing: Facing,
    pub jumps_remaining: u8,
    pub is_dashing: bool,
    pub dash_direction: f32,
    pub dash_timer: f32,
    pub dash_cooldown_timer: f32,
}

impl MovementState {
    /// Consume one jump charge. Returns false when the budget is spent.
    pub fn try_jump(&mut self) -> bool {
        if self.jumps_remaining == 0 {
            return false;
        }
        self.jumps_remaining -= 1;
        true
    }

    /// Grounded-contact event: the sole path that restores the jump budget.
    pub fn land(&mut self, max_jumps: u8) {
        self.jumps_remaining = max_jumps;
    }

    pub fn can_dash(&self) -> bool {
        !self.is_dashing && self.dash_cooldown_timer <= 0.0
    }

    /// Enter the dash window in the current facing direction.
    pub fn begin_dash(&mut self, duration: f32, cooldown: f32) {
        self.is_dashing = true;
        self.dash_direction = self.facing.sign();
        self.dash_timer = duration;
        self.dash_cooldown_timer = cooldown;
    }

    /// Tick the dash window. Returns true on the tick the dash expires.
    pub fn tick_dash(&mut self, dt: f32) -> bool {
        if !self.is_dashing {
            return false;
        }
        self.dash_timer -= dt;
        if self.dash_timer <= 0.0 {
            self.is_dashing = false;
            return true;
        }
        false
    }
}
