//! Combat domain: tests for AI decisions, damage arithmetic, and cooldowns.

use bevy::prelude::Vec2;

use super::ai::{AiCommand, command_velocity, decide, has_ground_ahead, ledge_adjust};
use super::spawn::spawn_due;
use super::systems::{ContactOutcome, resolve_contact};
use super::{
    EnemyAI, EnemyTuning, FireCooldowns, Health, ProjectileKind, ProjectileTuning, SpawnState,
    SpawnTuning,
};

fn tuning() -> EnemyTuning {
    EnemyTuning::default()
}

// -----------------------------------------------------------------------------
// AI decision priority
// -----------------------------------------------------------------------------

#[test]
fn test_low_health_enemy_flees_away_from_player() {
    // Player 200 to the right; flee must go left.
    let cmd = decide(200.0, 1, &tuning());
    assert_eq!(cmd, AiCommand::Flee { direction: -1.0 });

    // Player 200 to the left; flee must go right.
    let cmd = decide(-200.0, 1, &tuning());
    assert_eq!(cmd, AiCommand::Flee { direction: 1.0 });
}

#[test]
fn test_flee_takes_priority_over_pursuit() {
    // Distance is inside both the flee and pursuit ranges.
    let cmd = decide(150.0, 1, &tuning());
    assert!(matches!(cmd, AiCommand::Flee { .. }));
}

#[test]
fn test_healthy_enemy_pursues_within_range() {
    let cmd = decide(800.0, 3, &tuning());
    assert_eq!(cmd, AiCommand::Pursue { direction: 1.0 });

    let cmd = decide(-800.0, 3, &tuning());
    assert_eq!(cmd, AiCommand::Pursue { direction: -1.0 });
}

#[test]
fn test_dead_zone_holds_position() {
    let cmd = decide(30.0, 3, &tuning());
    assert_eq!(cmd, AiCommand::Hold);
}

#[test]
fn test_out_of_range_enemy_patrols() {
    let cmd = decide(2000.0, 3, &tuning());
    assert_eq!(cmd, AiCommand::Patrol);
}

#[test]
fn test_low_health_far_from_player_still_patrols() {
    // Flee only applies inside the flee range.
    let cmd = decide(2000.0, 1, &tuning());
    assert_eq!(cmd, AiCommand::Patrol);
}

// -----------------------------------------------------------------------------
// Steering
// -----------------------------------------------------------------------------

fn patrolling_ai(direction: f32, speed: f32) -> EnemyAI {
    EnemyAI {
        patrol_direction: direction,
        patrol_speed: speed,
    }
}

#[test]
fn test_flee_velocity_survives_ledge_inversion() {
    // Low-health enemy at a right-hand ledge edge, player to the left: the
    // ledge turns the patrol around, but the tick still moves away from the
    // player.
    let tuning = tuning();
    let mut ai = patrolling_ai(1.0, 60.0);

    let cmd = decide(-100.0, 1, &tuning);
    assert_eq!(cmd, AiCommand::Flee { direction: 1.0 });

    let vx = command_velocity(cmd, &mut ai, 0.0, &tuning);
    let vx = ledge_adjust(cmd, &mut ai, vx, true, false);

    assert!(vx > 0.0);
    assert_eq!(vx, 60.0 + tuning.speed_bonus);
    // Patrol direction still turns for later ticks.
    assert_eq!(ai.patrol_direction, -1.0);
}

#[test]
fn test_patrol_turns_around_at_ledge() {
    let tuning = tuning();
    let mut ai = patrolling_ai(1.0, 60.0);

    let vx = command_velocity(AiCommand::Patrol, &mut ai, 0.0, &tuning);
    assert_eq!(vx, 60.0);

    let vx = ledge_adjust(AiCommand::Patrol, &mut ai, vx, true, false);
    assert_eq!(vx, -60.0);
    assert_eq!(ai.patrol_direction, -1.0);
}

#[test]
fn test_ledge_ignored_while_airborne_or_supported() {
    let tuning = tuning();
    let mut ai = patrolling_ai(1.0, 60.0);
    let vx = command_velocity(AiCommand::Patrol, &mut ai, 0.0, &tuning);

    assert_eq!(ledge_adjust(AiCommand::Patrol, &mut ai, vx, false, false), vx);
    assert_eq!(ledge_adjust(AiCommand::Patrol, &mut ai, vx, true, true), vx);
    assert_eq!(ai.patrol_direction, 1.0);
}

#[test]
fn test_pursuit_smooths_velocity_and_commits_direction() {
    let tuning = tuning();
    let mut ai = patrolling_ai(-1.0, 60.0);

    let vx = command_velocity(AiCommand::Pursue { direction: 1.0 }, &mut ai, 0.0, &tuning);
    let target = 60.0 + tuning.speed_bonus;
    assert!((vx - target * tuning.pursuit_lerp).abs() < 1e-4);
    assert_eq!(ai.patrol_direction, 1.0);
}

// -----------------------------------------------------------------------------
// Ledge lookahead
// -----------------------------------------------------------------------------

#[test]
fn test_ground_ahead_found_on_platform() {
    // Platform centered at x=100, surface at y=150.
    let platforms = [(Vec2::new(100.0, 140.0), Vec2::new(48.0, 10.0))];
    assert!(has_ground_ahead(Vec2::new(120.0, 145.0), 32.0, &platforms));
}

#[test]
fn test_no_ground_past_platform_edge() {
    let platforms = [(Vec2::new(100.0, 140.0), Vec2::new(48.0, 10.0))];
    assert!(!has_ground_ahead(Vec2::new(160.0, 145.0), 32.0, &platforms));
}

#[test]
fn test_platform_far_below_is_not_support() {
    let platforms = [(Vec2::new(100.0, 16.0), Vec2::new(2000.0, 10.0))];
    assert!(!has_ground_ahead(Vec2::new(100.0, 145.0), 32.0, &platforms));
}

// -----------------------------------------------------------------------------
// Damage arithmetic
// -----------------------------------------------------------------------------

#[test]
fn test_light_hits_deal_one_damage() {
    let tuning = ProjectileTuning::default();
    let mut health = Health::new(3);

    health.take_damage(tuning.light.damage);
    assert_eq!(health.current, 2);
    assert!(!health.is_dead());
}

#[test]
fn test_enemy_with_two_health_dies_to_one_heavy() {
    let tuning = ProjectileTuning::default();
    let mut health = Health::new(2);

    health.take_damage(tuning.heavy.damage);
    assert!(health.is_dead());
}

#[test]
fn test_enemy_with_two_health_dies_to_two_lights() {
    let tuning = ProjectileTuning::default();
    let mut health = Health::new(2);

    health.take_damage(tuning.light.damage);
    assert!(!health.is_dead());
    health.take_damage(tuning.light.damage);
    assert!(health.is_dead());
}

#[test]
fn test_three_lights_kill_three_health_enemy() {
    // health 3 -> 2 -> 1 -> dead, death exactly on the final hit.
    let tuning = ProjectileTuning::default();
    let mut health = Health::new(3);

    for expected in [2, 1] {
        health.take_damage(tuning.light.damage);
        assert_eq!(health.current, expected);
        assert!(!health.is_dead());
    }
    health.take_damage(tuning.light.damage);
    assert!(health.is_dead());
}

#[test]
fn test_kill_scores_per_vector() {
    let projectiles = ProjectileTuning::default();
    let combat = super::CombatTuning::default();

    assert_eq!(projectiles.light.kill_score, 100);
    assert_eq!(projectiles.heavy.kill_score, 150);
    assert_eq!(combat.dash_kill_score, 100);
    assert_eq!(combat.dash_damage, 2);
}

// -----------------------------------------------------------------------------
// Contact resolution
// -----------------------------------------------------------------------------

#[test]
fn test_dashing_contact_never_costs_a_life() {
    // Dash outranks everything, including an active grace window.
    assert_eq!(resolve_contact(true, false), ContactOutcome::DashHit);
    assert_eq!(resolve_contact(true, true), ContactOutcome::DashHit);
}

#[test]
fn test_invulnerable_contact_is_absorbed() {
    assert_eq!(resolve_contact(false, true), ContactOutcome::Ignored);
}

#[test]
fn test_unguarded_contact_costs_a_life() {
    assert_eq!(resolve_contact(false, false), ContactOutcome::LifeLost);
}

// -----------------------------------------------------------------------------
// Spawn gating
// -----------------------------------------------------------------------------

#[test]
fn test_spawn_timer_banks_time_while_at_cap() {
    let mut state = SpawnState::default();

    // Interval elapses at the live cap: no spawn, but the timer keeps its
    // banked time.
    assert!(!spawn_due(&mut state, 3.5, 3.0, 6, 6));

    // A slot frees up: the next tick spawns immediately.
    assert!(spawn_due(&mut state, 0.016, 3.0, 5, 6));

    // The timer restarted after the spawn.
    assert!(!spawn_due(&mut state, 0.016, 3.0, 5, 6));
}

#[test]
fn test_spawn_waits_out_the_interval() {
    let mut state = SpawnState::default();
    assert!(!spawn_due(&mut state, 1.0, 3.0, 0, 6));
    assert!(!spawn_due(&mut state, 1.0, 3.0, 0, 6));
    assert!(spawn_due(&mut state, 1.5, 3.0, 0, 6));
}

#[test]
fn test_spawn_counts() {
    let tuning = SpawnTuning::default();
    assert_eq!(tuning.initial_spawns, 2);
    assert_eq!(tuning.max_alive, 6);
    assert_eq!(tuning.goal_bonus_spawns, 3);
}

// -----------------------------------------------------------------------------
// Fire cooldowns
// -----------------------------------------------------------------------------

#[test]
fn test_fire_cooldowns_gate_per_tier() {
    let mut cooldowns = FireCooldowns::default();
    assert!(cooldowns.ready(ProjectileKind::Light));
    assert!(cooldowns.ready(ProjectileKind::Heavy));

    cooldowns.trigger(ProjectileKind::Heavy, 1.2);
    assert!(cooldowns.ready(ProjectileKind::Light));
    assert!(!cooldowns.ready(ProjectileKind::Heavy));
}
