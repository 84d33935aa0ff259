//! Combat domain: enemy spawning.

use avian2d::prelude::*;
use bevy::ecs::message::MessageReader;
use bevy::prelude::*;
use rand::Rng;

use crate::combat::components::{Enemy, EnemyAI, Health};
use crate::combat::resources::{EnemyTuning, SpawnState, SpawnTuning};
use crate::core::{LevelCompletedEvent, SessionRng};
use crate::movement::GameLayer;
use crate::world::{OriginPlatform, Platform};

pub(crate) const ENEMY_SIZE: Vec2 = Vec2::new(20.0, 20.0);
pub(crate) const ENEMY_BASE_COLOR: Color = Color::srgb(0.85, 0.25, 0.25);

#[derive(Bundle)]
pub struct EnemyBundle {
    pub enemy: Enemy,
    pub health: Health,
    pub ai: EnemyAI,
    pub sprite: Sprite,
    pub transform: Transform,
    pub rigid_body: RigidBody,
    pub collider: Collider,
    pub collision_events: CollisionEventsEnabled,
    pub collision_layers: CollisionLayers,
    pub velocity: LinearVelocity,
    pub friction: Friction,
    pub locked_axes: LockedAxes,
}

impl EnemyBundle {
    pub fn new(position: Vec2, health: i32, patrol_speed: f32, patrol_direction: f32) -> Self {
        Self {
            enemy: Enemy,
            health: Health::new(health),
            ai: EnemyAI {
                patrol_direction,
                patrol_speed,
            },
            sprite: Sprite {
                color: ENEMY_BASE_COLOR,
                custom_size: Some(ENEMY_SIZE),
                ..default()
            },
            transform: Transform::from_xyz(position.x, position.y, 0.0),
            rigid_body: RigidBody::Dynamic,
            collider: Collider::rectangle(ENEMY_SIZE.x, ENEMY_SIZE.y),
            collision_events: CollisionEventsEnabled,
            collision_layers: CollisionLayers::new(
                GameLayer::Enemy,
                [GameLayer::Ground, GameLayer::Player, GameLayer::Projectile],
            ),
            velocity: LinearVelocity(Vec2::new(patrol_direction * patrol_speed, 0.0)),
            friction: Friction::new(0.0),
            locked_axes: LockedAxes::ROTATION_LOCKED,
        }
    }
}

/// Roll stats and spawn one enemy above the given platform.
fn spawn_on_platform(
    commands: &mut Commands,
    rng: &mut SessionRng,
    tuning: &EnemyTuning,
    spawn_tuning: &SpawnTuning,
    platform_pos: Vec2,
    platform: &Platform,
) {
    let health = rng.0.random_range(tuning.health_min..=tuning.health_max);
    let patrol_speed = rng
        .0
        .random_range(tuning.patrol_speed_min..=tuning.patrol_speed_max);
    let patrol_direction = if rng.0.random_bool(0.5) { 1.0 } else { -1.0 };

    let position = Vec2::new(
        platform_pos.x,
        platform.surface_y(platform_pos.y) + spawn_tuning.drop_height,
    );

    commands.spawn(EnemyBundle::new(
        position,
        health,
        patrol_speed,
        patrol_direction,
    ));

    debug!(
        "Enemy spawned at {:?}: health={}, patrol_speed={:.0}",
        position, health, patrol_speed
    );
}

/// Pick a random non-origin platform, or None if the level has none.
fn pick_platform<'a>(
    rng: &mut SessionRng,
    platforms: &'a [(Vec2, &'a Platform)],
) -> Option<&'a (Vec2, &'a Platform)> {
    if platforms.is_empty() {
        return None;
    }
    let index = rng.0.random_range(0..platforms.len());
    platforms.get(index)
}

fn candidate_platforms<'a>(
    platform_query: &'a Query<(&Transform, &Platform), Without<OriginPlatform>>,
) -> Vec<(Vec2, &'a Platform)> {
    platform_query
        .iter()
        .map(|(t, p)| (t.translation.truncate(), p))
        .collect()
}

/// Place the level's starting enemies.
pub(crate) fn initial_spawns(
    mut commands: Commands,
    tuning: Res<EnemyTuning>,
    spawn_tuning: Res<SpawnTuning>,
    mut rng: ResMut<SessionRng>,
    platform_query: Query<(&Transform, &Platform), Without<OriginPlatform>>,
) {
    let platforms = candidate_platforms(&platform_query);

    for _ in 0..spawn_tuning.initial_spawns {
        if let Some(&(pos, platform)) = pick_platform(&mut rng, &platforms) {
            spawn_on_platform(&mut commands, &mut rng, &tuning, &spawn_tuning, pos, platform);
        }
    }
}

/// Gate a periodic spawn attempt. The timer keeps accumulating while at the
/// live cap, so a freed slot is refilled on the next tick instead of waiting
/// out a fresh interval.
pub(crate) fn spawn_due(
    state: &mut SpawnState,
    dt: f32,
    interval: f32,
    alive: usize,
    cap: usize,
) -> bool {
    state.accumulator += dt;
    if state.accumulator < interval || alive >= cap {
        return false;
    }
    state.accumulator = 0.0;
    true
}

/// Accumulator-gated periodic spawning, capped at the live-enemy limit.
/// Origin-platform spawns are excluded by construction.
pub(crate) fn periodic_spawns(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<EnemyTuning>,
    spawn_tuning: Res<SpawnTuning>,
    mut spawn_state: ResMut<SpawnState>,
    mut rng: ResMut<SessionRng>,
    platform_query: Query<(&Transform, &Platform), Without<OriginPlatform>>,
    alive_query: Query<(), With<Enemy>>,
) {
    if !spawn_due(
        &mut spawn_state,
        time.delta_secs(),
        spawn_tuning.interval,
        alive_query.iter().count(),
        spawn_tuning.max_alive,
    ) {
        return;
    }

    let platforms = candidate_platforms(&platform_query);
    if let Some(&(pos, platform)) = pick_platform(&mut rng, &platforms) {
        spawn_on_platform(&mut commands, &mut rng, &tuning, &spawn_tuning, pos, platform);
    }
}

/// Collecting the goal floods in reinforcements; the session keeps running
/// after completion.
pub(crate) fn goal_reinforcements(
    mut commands: Commands,
    mut events: MessageReader<LevelCompletedEvent>,
    tuning: Res<EnemyTuning>,
    spawn_tuning: Res<SpawnTuning>,
    mut rng: ResMut<SessionRng>,
    platform_query: Query<(&Transform, &Platform), Without<OriginPlatform>>,
) {
    for _ in events.read() {
        let platforms = candidate_platforms(&platform_query);
        for _ in 0..spawn_tuning.goal_bonus_spawns {
            if let Some(&(pos, platform)) = pick_platform(&mut rng, &platforms) {
                spawn_on_platform(&mut commands, &mut rng, &tuning, &spawn_tuning, pos, platform);
            }
        }
    }
}
