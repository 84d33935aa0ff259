//! Movement domain: tuning and input resources.

use bevy::prelude::*;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub run_speed: f32,
    pub jump_impulse: f32,
    /// Jump budget restored on every grounded contact (triple jump).
    pub max_jumps: u8,
    pub dash_speed: f32,
    pub dash_time: f32,
    pub dash_cooldown: f32,
    /// Fraction of run speed kept when the dash window expires.
    pub dash_exit_factor: f32,
    /// Length of the grounded probe below the feet.
    pub ground_ray_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            run_speed: 220.0,
            jump_impulse: 420.0,
            max_jumps: 3,
            dash_speed: 700.0,
            dash_time: 0.16,
            dash_cooldown: 0.8,
            dash_exit_factor: 0.35,
            ground_ray_distance: 4.0,
        }
    }
}

#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    pub axis_x: f32,
    pub jump_just_pressed: bool,
    pub dash_just_pressed: bool,
}
