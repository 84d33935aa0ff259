//! Movement domain: player bootstrap.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::combat::{FireCooldowns, Invulnerable};
use crate::movement::{GameLayer, MovementState, MovementTuning, Player};
use crate::world::SpawnPoint;

pub(crate) const PLAYER_SIZE: Vec2 = Vec2::new(30.0, 36.0);

pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Res<MovementTuning>,
    spawn_point: Option<Res<SpawnPoint>>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        return;
    }

    let Some(spawn_point) = spawn_point else {
        warn!("No spawn point registered, player not spawned");
        return;
    };

    commands.spawn((
        // Identity & abilities
        (
            Player,
            MovementState {
                jumps_remaining: tuning.max_jumps,
                ..default()
            },
            Invulnerable::default(),
            FireCooldowns::default(),
        ),
        // Rendering
        Sprite {
            color: Color::srgb(0.35, 0.8, 0.35),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(spawn_point.0.x, spawn_point.0.y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Enemy, GameLayer::Pickup],
            ),
        ),
    ));

    info!("Player spawned at {:?}", spawn_point.0);
}
