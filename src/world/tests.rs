//! World domain: tests for level data and platform helpers.

use super::systems::apply_checkpoint;
use super::{Platform, load_parkour_level};
use crate::combat::Invulnerable;
use crate::core::SessionState;
use crate::movement::MovementState;
use bevy::prelude::{Vec2, Vec3};

#[test]
fn test_parkour_level_parses() {
    let level = load_parkour_level().expect("built-in level must parse");
    assert!(level.platforms.len() >= 10);
}

#[test]
fn test_parkour_level_has_exactly_one_origin() {
    let level = load_parkour_level().unwrap();
    assert_eq!(level.origin_count(), 1);
}

#[test]
fn test_origin_is_first_platform() {
    let level = load_parkour_level().unwrap();
    assert!(level.platforms[0].origin);
}

#[test]
fn test_goal_sits_at_far_end() {
    let level = load_parkour_level().unwrap();
    assert!(level.goal.x > 3500.0);
}

#[test]
fn test_spawn_point_above_origin_surface() {
    let level = load_parkour_level().unwrap();
    let origin = &level.platforms[0];
    assert!(level.spawn_point.y > origin.y);
}

#[test]
fn test_platform_surface_y() {
    let platform = Platform {
        half_extents: Vec2::new(48.0, 10.0),
    };
    assert_eq!(platform.surface_y(140.0), 150.0);
}

#[test]
fn test_checkpoint_rolls_back_without_touching_lives() {
    let session = SessionState::new(3);
    let mut translation = Vec3::new(2200.0, 30.0, 0.0);
    let mut velocity = Vec2::new(-80.0, -300.0);
    let mut state = MovementState {
        on_ground: true,
        jumps_remaining: 0,
        ..Default::default()
    };
    let mut invuln = Invulnerable::default();

    apply_checkpoint(
        &mut translation,
        &mut velocity,
        &mut state,
        &mut invuln,
        Vec2::new(150.0, 150.0),
        3,
        0.7,
    );

    assert_eq!(translation.truncate(), Vec2::new(150.0, 150.0));
    assert_eq!(velocity, Vec2::ZERO);
    assert_eq!(state.jumps_remaining, 3);
    assert!(state.ground_entity.is_none());
    assert!(invuln.is_invulnerable());
    // The reset is free: lives never enter the rule.
    assert_eq!(session.lives, 3);
}
