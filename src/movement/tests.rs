//! Movement domain: tests for the jump budget and dash window.

use super::{Facing, MovementState};

fn grounded_state(max_jumps: u8) -> MovementState {
    MovementState {
        on_ground: true,
        jumps_remaining: max_jumps,
        ..Default::default()
    }
}

// -----------------------------------------------------------------------------
// Jump budget
// -----------------------------------------------------------------------------

#[test]
fn test_jump_consumes_one_charge() {
    let mut state = grounded_state(3);

    assert!(state.try_jump());
    assert_eq!(state.jumps_remaining, 2);
}

#[test]
fn test_triple_jump_exhausts_budget() {
    let mut state = grounded_state(3);

    assert!(state.try_jump());
    assert!(state.try_jump());
    assert!(state.try_jump());
    assert!(!state.try_jump());
    assert_eq!(state.jumps_remaining, 0);
}

#[test]
fn test_empty_budget_jump_is_a_no_op() {
    let mut state = grounded_state(0);

    assert!(!state.try_jump());
    assert_eq!(state.jumps_remaining, 0);
}

#[test]
fn test_landing_restores_full_budget() {
    let mut state = grounded_state(3);
    state.try_jump();
    state.try_jump();

    state.land(3);
    assert_eq!(state.jumps_remaining, 3);
}

#[test]
fn test_budget_never_exceeds_max_across_landings() {
    let mut state = grounded_state(3);

    for _ in 0..5 {
        state.land(3);
        assert_eq!(state.jumps_remaining, 3);
    }
}

// -----------------------------------------------------------------------------
// Dash window
// -----------------------------------------------------------------------------

#[test]
fn test_dash_enters_window_in_facing_direction() {
    let mut state = MovementState {
        facing: Facing::Left,
        ..Default::default()
    };

    assert!(state.can_dash());
    state.begin_dash(0.16, 0.8);

    assert!(state.is_dashing);
    assert_eq!(state.dash_direction, -1.0);
}

#[test]
fn test_dash_blocked_during_cooldown() {
    let mut state = MovementState::default();
    state.begin_dash(0.16, 0.8);

    // Window expires but the cooldown is still running.
    assert!(state.tick_dash(0.2));
    assert!(!state.is_dashing);
    assert!(state.dash_cooldown_timer > 0.0);
    assert!(!state.can_dash());
}

#[test]
fn test_dash_cannot_retrigger_every_tick() {
    let mut state = MovementState::default();
    state.begin_dash(0.16, 0.8);

    // Requests while dashing or cooling down never re-enter the window.
    for _ in 0..10 {
        state.tick_dash(0.016);
        state.dash_cooldown_timer -= 0.016;
        assert!(!state.can_dash());
    }
}

#[test]
fn test_dash_expiry_reported_once() {
    let mut state = MovementState::default();
    state.begin_dash(0.16, 0.8);

    assert!(!state.tick_dash(0.1));
    assert!(state.tick_dash(0.1));
    assert!(!state.tick_dash(0.1));
}
