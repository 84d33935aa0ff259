//! World domain: level spawning, checkpoint reset, and goal collection.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{CombatTuning, Invulnerable};
use crate::core::{CheckpointResetEvent, LevelCompletedEvent, SessionState};
use crate::movement::{GameLayer, MovementState, MovementTuning, Player};
use crate::world::components::{GoalMarker, OriginPlatform, Platform, SpawnPoint};
use crate::world::data::load_parkour_level;
use crate::world::{PLATFORM_THICKNESS, WORLD_HEIGHT, WORLD_WIDTH};

pub(crate) fn spawn_level(mut commands: Commands) {
    let level = match load_parkour_level() {
        Ok(level) => level,
        Err(e) => {
            error!("{}", e);
            return;
        }
    };

    commands.insert_resource(SpawnPoint(Vec2::new(
        level.spawn_point.x,
        level.spawn_point.y,
    )));

    for def in &level.platforms {
        let half_extents = Vec2::new(def.width / 2.0, PLATFORM_THICKNESS / 2.0);
        let mut platform = commands.spawn((
            Platform { half_extents },
            Sprite {
                color: Color::srgb(0.45, 0.3, 0.2),
                custom_size: Some(half_extents * 2.0),
                ..default()
            },
            Transform::from_xyz(def.x, def.y, 0.0),
            RigidBody::Static,
            Collider::rectangle(half_extents.x * 2.0, half_extents.y * 2.0),
            CollisionLayers::new(
                GameLayer::Ground,
                [GameLayer::Player, GameLayer::Enemy, GameLayer::Projectile],
            ),
        ));

        // The origin surface stays a physical trigger but is not drawn.
        if def.origin {
            platform.insert((OriginPlatform, Visibility::Hidden));
        }
    }

    // Side walls keep everything inside the world's horizontal extent.
    for x in [-10.0, WORLD_WIDTH + 10.0] {
        commands.spawn((
            Transform::from_xyz(x, WORLD_HEIGHT / 2.0, 0.0),
            RigidBody::Static,
            Collider::rectangle(20.0, WORLD_HEIGHT * 2.0),
            CollisionLayers::new(
                GameLayer::Ground,
                [GameLayer::Player, GameLayer::Enemy, GameLayer::Projectile],
            ),
        ));
    }

    commands.spawn((
        GoalMarker,
        Sprite {
            color: Color::srgb(1.0, 0.85, 0.2),
            custom_size: Some(Vec2::splat(18.0)),
            ..default()
        },
        Transform::from_xyz(level.goal.x, level.goal.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(18.0, 18.0),
        Sensor,
        CollisionEventsEnabled,
        CollisionLayers::new(GameLayer::Pickup, [GameLayer::Player]),
    ));

    info!(
        "Level spawned: {} platforms, goal at ({}, {})",
        level.platforms.len(),
        level.goal.x,
        level.goal.y
    );
}

/// Roll the player back: teleport to the spawn point, zero velocity, restore
/// the jump budget, start the reset grace window. Lives are not part of the
/// rule.
pub(crate) fn apply_checkpoint(
    translation: &mut Vec3,
    velocity: &mut Vec2,
    state: &mut MovementState,
    invuln: &mut Invulnerable,
    spawn: Vec2,
    max_jumps: u8,
    grace: f32,
) {
    translation.x = spawn.x;
    translation.y = spawn.y;
    *velocity = Vec2::ZERO;
    state.land(max_jumps);
    state.on_ground = false;
    state.ground_entity = None;
    invuln.timer = grace;
}

/// Checkpoint rule: a grounded contact with the origin platform rolls the
/// player back to the spawn point. The platform is matched by entity identity
/// against the grounded ray hit, never by coordinate proximity. Lives are
/// untouched.
pub(crate) fn checkpoint_reset(
    spawn_point: Option<Res<SpawnPoint>>,
    tuning: Res<MovementTuning>,
    combat_tuning: Res<CombatTuning>,
    origin_query: Query<Entity, With<OriginPlatform>>,
    mut player_query: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut MovementState,
            &mut Invulnerable,
        ),
        With<Player>,
    >,
    mut reset_events: MessageWriter<CheckpointResetEvent>,
) {
    let Some(spawn_point) = spawn_point else {
        return;
    };
    let Ok(origin) = origin_query.single() else {
        return;
    };

    for (mut transform, mut velocity, mut state, mut invuln) in &mut player_query {
        if !state.on_ground || state.ground_entity != Some(origin) {
            continue;
        }

        apply_checkpoint(
            &mut transform.translation,
            &mut velocity.0,
            &mut state,
            &mut invuln,
            spawn_point.0,
            tuning.max_jumps,
            combat_tuning.reset_iframes,
        );

        reset_events.write(CheckpointResetEvent {
            spawn_point: spawn_point.0,
        });

        debug!("Checkpoint reset to {:?}", spawn_point.0);
    }
}

/// Goal pickup: player overlap removes the marker, sets the one-way
/// level-complete flag, and hands the run back at the spawn point. The
/// session loop keeps running.
pub(crate) fn collect_goal(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut session: ResMut<SessionState>,
    mut completed_events: MessageWriter<LevelCompletedEvent>,
    spawn_point: Option<Res<SpawnPoint>>,
    goal_query: Query<Entity, With<GoalMarker>>,
    mut player_query: Query<(&mut Transform, &mut LinearVelocity), With<Player>>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (goal_entity, player_entity) in pairs {
            if goal_query.get(goal_entity).is_err() {
                continue;
            }
            let Ok((mut transform, mut velocity)) = player_query.get_mut(player_entity) else {
                continue;
            };

            // Liveness guard: a queued duplicate overlap must not fire twice.
            if session.level_complete {
                continue;
            }

            commands.entity(goal_entity).despawn();
            session.complete_level();

            if let Some(spawn_point) = spawn_point.as_ref() {
                transform.translation.x = spawn_point.0.x;
                transform.translation.y = spawn_point.0.y;
                velocity.x = 0.0;
                velocity.y = 0.0;
            }

            completed_events.write(LevelCompletedEvent {
                score: session.score,
            });

            info!("Level complete, score={}", session.score);
        }
    }
}
