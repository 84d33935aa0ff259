//! Combat domain: per-tick enemy behavior decisions.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::components::{Enemy, EnemyAI, Health};
use crate::combat::resources::EnemyTuning;
use crate::movement::{GameLayer, Player};
use crate::world::{Platform, WORLD_EDGE_MARGIN, WORLD_WIDTH};

/// Horizontal command selected for one enemy on one tick. Priority order:
/// flee, pursue, hold, patrol - first match wins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AiCommand {
    /// Move directly away from the player at boosted speed.
    Flee { direction: f32 },
    /// Close in on the player, smoothing velocity toward the target.
    Pursue { direction: f32 },
    /// Inside the dead-zone: stand still to avoid overlap jitter.
    Hold,
    /// Default patrol in the remembered direction.
    Patrol,
}

/// Select a command from live distance and health. `dx` is player x minus
/// enemy x.
pub fn decide(dx: f32, health: i32, tuning: &EnemyTuning) -> AiCommand {
    let abs_dx = dx.abs();
    let toward = if dx > 0.0 { 1.0 } else { -1.0 };

    if health <= tuning.flee_health && abs_dx < tuning.flee_range {
        return AiCommand::Flee { direction: -toward };
    }
    if abs_dx < tuning.pursuit_range && abs_dx > tuning.dead_zone {
        return AiCommand::Pursue { direction: toward };
    }
    if abs_dx <= tuning.dead_zone {
        return AiCommand::Hold;
    }
    AiCommand::Patrol
}

/// One-step lookahead: is there any platform surface under the probe point?
/// Platforms are (center, half_extents) pairs.
pub fn has_ground_ahead(probe: Vec2, band: f32, platforms: &[(Vec2, Vec2)]) -> bool {
    platforms.iter().any(|(center, half)| {
        let surface_y = center.y + half.y;
        (center.x - probe.x).abs() < half.x && (surface_y - probe.y).abs() < band
    })
}

/// Horizontal velocity for the tick's command. Pursue smooths from the
/// current velocity and commits the patrol direction toward the player.
pub fn command_velocity(
    cmd: AiCommand,
    ai: &mut EnemyAI,
    current_vx: f32,
    tuning: &EnemyTuning,
) -> f32 {
    match cmd {
        AiCommand::Flee { direction } => direction * (ai.patrol_speed + tuning.speed_bonus),
        AiCommand::Pursue { direction } => {
            ai.patrol_direction = direction;
            let target = direction * (ai.patrol_speed + tuning.speed_bonus);
            current_vx + (target - current_vx) * tuning.pursuit_lerp
        }
        AiCommand::Hold => 0.0,
        AiCommand::Patrol => ai.patrol_direction * ai.patrol_speed,
    }
}

/// Ledge correction after the command. A grounded enemy with no support
/// ahead turns its patrol around, but the tick's velocity is only replaced
/// for non-flee commands: a fleeing enemy never moves toward the player,
/// even off a ledge.
pub fn ledge_adjust(
    cmd: AiCommand,
    ai: &mut EnemyAI,
    vx: f32,
    grounded: bool,
    supported_ahead: bool,
) -> f32 {
    if !grounded || supported_ahead {
        return vx;
    }
    ai.patrol_direction = -ai.patrol_direction;
    if matches!(cmd, AiCommand::Flee { .. }) {
        return vx;
    }
    ai.patrol_direction * ai.patrol_speed
}

/// Drive every enemy for this tick: pick a command, apply ledge avoidance and
/// wall hops, and clamp to the world's horizontal extent.
pub(crate) fn update_enemy_ai(
    tuning: Res<EnemyTuning>,
    spatial_query: SpatialQuery,
    player_query: Query<&Transform, With<Player>>,
    platform_query: Query<(&Transform, &Platform), Without<Enemy>>,
    mut enemy_query: Query<
        (
            &mut Transform,
            &Collider,
            &mut LinearVelocity,
            &mut EnemyAI,
            &Health,
        ),
        (With<Enemy>, Without<Player>, Without<Platform>),
    >,
) {
    let Ok(player_transform) = player_query.single() else {
        return;
    };
    let player_x = player_transform.translation.x;

    let platforms: Vec<(Vec2, Vec2)> = platform_query
        .iter()
        .map(|(t, p)| (t.translation.truncate(), p.half_extents))
        .collect();

    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (mut transform, collider, mut velocity, mut ai, health) in &mut enemy_query {
        let pos = transform.translation.truncate();
        let (half_width, half_height) = match collider.shape_scaled().as_cuboid() {
            Some(c) => (c.half_extents.x, c.half_extents.y),
            None => (10.0, 10.0),
        };

        let feet = pos - Vec2::new(0.0, half_height);
        let on_ground = spatial_query
            .cast_ray(feet, Dir2::NEG_Y, 4.0, true, &ground_filter)
            .is_some();

        let dx = player_x - pos.x;
        let cmd = decide(dx, health.current, &tuning);
        let vx = command_velocity(cmd, &mut ai, velocity.x, &tuning);

        // Ledge probe in the (possibly just-committed) patrol direction.
        let probe = Vec2::new(
            pos.x + ai.patrol_direction * (half_width + tuning.ledge_probe_ahead),
            feet.y - tuning.ledge_probe_down,
        );
        let supported = has_ground_ahead(probe, tuning.ledge_band, &platforms);
        velocity.x = ledge_adjust(cmd, &mut ai, vx, on_ground, supported);

        // Wall hop when grounded and blocked horizontally.
        if on_ground {
            let side = if velocity.x >= 0.0 { Dir2::X } else { Dir2::NEG_X };
            let blocked = spatial_query
                .cast_ray(pos, side, half_width + 2.0, true, &ground_filter)
                .is_some();
            if blocked {
                velocity.y = tuning.wall_hop_impulse;
            }
        }

        // Hard world-extent clamp.
        let clamped = transform
            .translation
            .x
            .clamp(WORLD_EDGE_MARGIN, WORLD_WIDTH - WORLD_EDGE_MARGIN);
        transform.translation.x = clamped;
    }
}
