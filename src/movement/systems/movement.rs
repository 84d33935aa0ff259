//! Movement domain: locomotion systems for abilities and velocity requests.

use avian2d::prelude::*;
use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::movement::events::{DashEndedEvent, DashStartedEvent};
use crate::movement::{Facing, MovementInput, MovementState, MovementTuning, Player};

/// Tick the dash window and cooldown. When the window expires, horizontal
/// velocity decays to a fraction of run speed in the dash direction.
pub(crate) fn update_dash_timers(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut dash_ended: MessageWriter<DashEndedEvent>,
    mut query: Query<(Entity, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (entity, mut state, mut velocity) in &mut query {
        if state.dash_cooldown_timer > 0.0 {
            state.dash_cooldown_timer -= dt;
        }

        if state.tick_dash(dt) {
            velocity.x = state.dash_direction * tuning.run_speed * tuning.dash_exit_factor;
            dash_ended.write(DashEndedEvent { player: entity });
        }
    }
}

pub(crate) fn apply_horizontal_movement(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (state, mut velocity) in &mut query {
        // Left/right input is ignored for the whole dash window.
        if state.is_dashing {
            continue;
        }

        velocity.x = input.axis_x * tuning.run_speed;
    }
}

/// Jump requests spend one charge from the budget, grounded or not. A request
/// with an empty budget changes nothing.
pub(crate) fn apply_jump(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    if !input.jump_just_pressed {
        return;
    }

    for (mut state, mut velocity) in &mut query {
        if state.try_jump() {
            velocity.y = tuning.jump_impulse;
            debug!("Jump: {} charges remaining", state.jumps_remaining);
        }
    }
}

pub(crate) fn apply_dash(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut dash_started: MessageWriter<DashStartedEvent>,
    mut query: Query<(Entity, &mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    for (entity, mut state, mut velocity) in &mut query {
        if input.dash_just_pressed && state.can_dash() {
            state.begin_dash(tuning.dash_time, tuning.dash_cooldown);
            dash_started.write(DashStartedEvent {
                player: entity,
                direction: state.dash_direction,
            });
        }

        // Hold dash speed for the whole window.
        if state.is_dashing {
            velocity.x = state.dash_direction * tuning.dash_speed;
        }
    }
}

/// Facing follows the sign of horizontal velocity and keeps the last nonzero
/// sign while standing still.
pub(crate) fn update_facing(mut query: Query<(&mut MovementState, &LinearVelocity), With<Player>>) {
    for (mut state, velocity) in &mut query {
        if velocity.x > 0.1 {
            state.facing = Facing::Right;
        } else if velocity.x < -0.1 {
            state.facing = Facing::Left;
        }
    }
}
