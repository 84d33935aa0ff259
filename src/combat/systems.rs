//! Combat domain: firing, damage resolution, and death processing.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{
    AttackVector, Enemy, FireCooldowns, Health, HitFlash, Invulnerable, Projectile, ProjectileKind,
    ProjectileLifetime,
};
use crate::combat::events::{DamageEvent, DeathEvent, EnemyKilledEvent, PlayerDamagedEvent};
use crate::combat::resources::{CombatInput, CombatTuning, ProjectileTuning};
use crate::movement::{GameLayer, MovementState, Player};

pub(crate) fn read_combat_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut input: ResMut<CombatInput>,
) {
    input.fire_light = keyboard.just_pressed(KeyCode::KeyZ) || keyboard.just_pressed(KeyCode::KeyJ);
    input.fire_heavy = keyboard.just_pressed(KeyCode::KeyX) || keyboard.just_pressed(KeyCode::KeyK);
}

pub(crate) fn update_combat_timers(
    time: Res<Time>,
    mut query: Query<(&mut Invulnerable, Option<&mut FireCooldowns>)>,
) {
    let dt = time.delta_secs();

    for (mut invuln, cooldowns) in &mut query {
        if invuln.timer > 0.0 {
            invuln.timer -= dt;
        }
        if let Some(mut cooldowns) = cooldowns {
            if cooldowns.light_timer > 0.0 {
                cooldowns.light_timer -= dt;
            }
            if cooldowns.heavy_timer > 0.0 {
                cooldowns.heavy_timer -= dt;
            }
        }
    }
}

/// Spawn projectiles for this tick's fire requests. A request during cooldown
/// or with a full pool is dropped silently.
pub(crate) fn fire_projectiles(
    mut commands: Commands,
    input: Res<CombatInput>,
    tuning: Res<ProjectileTuning>,
    live_query: Query<&Projectile>,
    mut player_query: Query<(&Transform, &Collider, &MovementState, &mut FireCooldowns), With<Player>>,
) {
    let Ok((transform, collider, state, mut cooldowns)) = player_query.single_mut() else {
        return;
    };

    let requests = [
        (input.fire_light, ProjectileKind::Light),
        (input.fire_heavy, ProjectileKind::Heavy),
    ];

    for (requested, kind) in requests {
        if !requested || !cooldowns.ready(kind) {
            continue;
        }

        let config = tuning.config(kind);
        let live = live_query.iter().filter(|p| p.kind == kind).count();
        if live >= config.pool_cap {
            debug!("Projectile pool full, fire request dropped: {:?}", kind);
            continue;
        }

        let half_width = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.x,
            None => 15.0,
        };
        let dir = state.facing.sign();
        let muzzle = transform.translation.truncate()
            + Vec2::new(dir * (half_width + 8.0 + config.size / 2.0), 0.0);

        let color = match kind {
            ProjectileKind::Light => Color::srgb(1.0, 1.0, 0.7),
            ProjectileKind::Heavy => Color::srgb(1.0, 0.6, 0.15),
        };

        commands.spawn((
            Projectile { kind },
            ProjectileLifetime(tuning.lifetime),
            Sprite {
                color,
                custom_size: Some(Vec2::splat(config.size)),
                ..default()
            },
            Transform::from_xyz(muzzle.x, muzzle.y, 0.0),
            RigidBody::Kinematic,
            Collider::rectangle(config.size, config.size),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Projectile, [GameLayer::Ground, GameLayer::Enemy]),
            LinearVelocity(Vec2::new(dir * config.speed, 0.0)),
        ));

        cooldowns.trigger(kind, config.cooldown);
    }
}

pub(crate) fn expire_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut ProjectileLifetime)>,
) {
    let dt = time.delta_secs();
    for (entity, mut lifetime) in &mut query {
        lifetime.0 -= dt;
        if lifetime.0 <= 0.0 {
            commands.entity(entity).despawn();
        }
    }
}

/// Resolve projectile overlaps. A projectile never survives a hit: platform
/// contact destroys it, enemy contact destroys it and applies its damage
/// exactly once.
pub(crate) fn projectile_hits(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    tuning: Res<ProjectileTuning>,
    projectile_query: Query<&Projectile>,
    enemy_query: Query<&Transform, With<Enemy>>,
    player_query: Query<&Transform, With<Player>>,
) {
    let player_x = player_query
        .single()
        .map(|t| t.translation.x)
        .unwrap_or(0.0);

    // One-shot guard: a projectile overlapping two targets on the same tick
    // must only spend itself once.
    let mut spent: Vec<Entity> = Vec::new();

    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (projectile_entity, other) in pairs {
            let Ok(projectile) = projectile_query.get(projectile_entity) else {
                continue;
            };
            if spent.contains(&projectile_entity) {
                continue;
            }
            spent.push(projectile_entity);
            commands.entity(projectile_entity).despawn();

            // Anything that is not an enemy is a surface; the projectile
            // just dies there.
            let Ok(enemy_transform) = enemy_query.get(other) else {
                continue;
            };

            let config = tuning.config(projectile.kind);
            // Knockback pushes away from the player's side.
            let away = if enemy_transform.translation.x < player_x {
                -1.0
            } else {
                1.0
            };

            let vector = match projectile.kind {
                ProjectileKind::Light => AttackVector::Light,
                ProjectileKind::Heavy => AttackVector::Heavy,
            };

            damage_events.write(DamageEvent {
                target: other,
                amount: config.damage,
                knockback: Vec2::new(away * config.knockback, 0.0),
                vector,
                score_on_kill: config.kill_score,
            });
        }
    }
}

/// How a player-enemy overlap resolves for the player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// The player's body is the weapon; the enemy takes the melee hit and
    /// the player pays nothing.
    DashHit,
    /// An active grace window absorbs the contact.
    Ignored,
    /// Unguarded contact: one life, knockback, fresh grace window.
    LifeLost,
}

/// Ordering of the contact rules: dash outranks invulnerability, which
/// outranks the life deduction.
pub fn resolve_contact(is_dashing: bool, invulnerable: bool) -> ContactOutcome {
    if is_dashing {
        ContactOutcome::DashHit
    } else if invulnerable {
        ContactOutcome::Ignored
    } else {
        ContactOutcome::LifeLost
    }
}

/// Resolve player-enemy contact per `resolve_contact`; only an unguarded
/// player pays a life.
pub(crate) fn player_enemy_contact(
    mut collision_events: MessageReader<CollisionStart>,
    mut damage_events: MessageWriter<DamageEvent>,
    mut player_damaged: MessageWriter<PlayerDamagedEvent>,
    mut game_over_events: MessageWriter<crate::core::GameOverEvent>,
    tuning: Res<CombatTuning>,
    mut session: ResMut<crate::core::SessionState>,
    mut player_query: Query<
        (
            &Transform,
            &MovementState,
            &mut Invulnerable,
            &mut LinearVelocity,
        ),
        With<Player>,
    >,
    enemy_query: Query<&Transform, (With<Enemy>, Without<Player>)>,
) {
    for event in collision_events.read() {
        let pairs = [
            (event.collider1, event.collider2),
            (event.collider2, event.collider1),
        ];

        for (player_entity, enemy_entity) in pairs {
            let Ok((transform, state, mut invuln, mut velocity)) =
                player_query.get_mut(player_entity)
            else {
                continue;
            };
            let Ok(enemy_transform) = enemy_query.get(enemy_entity) else {
                continue;
            };

            match resolve_contact(state.is_dashing, invuln.is_invulnerable()) {
                ContactOutcome::DashHit => {
                    damage_events.write(DamageEvent {
                        target: enemy_entity,
                        amount: tuning.dash_damage,
                        knockback: Vec2::new(0.0, tuning.dash_knockback),
                        vector: AttackVector::Dash,
                        score_on_kill: tuning.dash_kill_score,
                    });
                    continue;
                }
                ContactOutcome::Ignored => continue,
                ContactOutcome::LifeLost => {}
            }

            let away = if transform.translation.x < enemy_transform.translation.x {
                -1.0
            } else {
                1.0
            };
            velocity.x = away * tuning.contact_knockback.x;
            velocity.y = tuning.contact_knockback.y;
            invuln.timer = tuning.hit_iframes;

            let ended = session.lose_life();
            player_damaged.write(PlayerDamagedEvent {
                lives_remaining: session.lives,
            });
            info!("Player hit, lives={}", session.lives);

            if ended {
                velocity.x = 0.0;
                velocity.y = 0.0;
                game_over_events.write(crate::core::GameOverEvent {
                    final_score: session.score,
                });
                info!("Game over, final score={}", session.score);
            }
        }
    }
}

/// Apply queued damage to enemies that are still alive and report lethal
/// results. Acting on an already-destroyed entity is a no-op.
pub(crate) fn apply_damage(
    mut commands: Commands,
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    tuning: Res<CombatTuning>,
    mut query: Query<(&mut Health, &mut LinearVelocity, &mut Sprite), With<Enemy>>,
) {
    for event in damage_events.read() {
        let Ok((mut health, mut velocity, mut sprite)) = query.get_mut(event.target) else {
            continue;
        };
        // A target killed earlier this tick absorbs nothing further.
        if health.is_dead() {
            continue;
        }

        health.take_damage(event.amount);
        if event.knockback.x != 0.0 {
            velocity.x = event.knockback.x;
        }
        if event.knockback.y != 0.0 {
            velocity.y = event.knockback.y;
        }
        sprite.color = Color::srgb(1.0, 0.5, 0.5);
        commands
            .entity(event.target)
            .insert(HitFlash(tuning.hit_flash_time));

        debug!(
            "{:?} hit for {}: health now {}",
            event.vector, event.amount, health.current
        );

        if health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
                score: event.score_on_kill,
            });
        }
    }
}

/// Destroy dead enemies before the next tick and bank their score.
pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut killed_events: MessageWriter<EnemyKilledEvent>,
    mut session: ResMut<crate::core::SessionState>,
    enemy_query: Query<(), With<Enemy>>,
) {
    for event in death_events.read() {
        if enemy_query.get(event.entity).is_err() {
            continue;
        }

        commands.entity(event.entity).despawn();
        session.add_score(event.score);
        killed_events.write(EnemyKilledEvent {
            enemy: event.entity,
            score: event.score,
        });
    }
}

/// Restore the enemy's base tint once the hit flash expires.
pub(crate) fn update_enemy_flash(
    mut commands: Commands,
    time: Res<Time>,
    mut query: Query<(Entity, &mut HitFlash, &mut Sprite), With<Enemy>>,
) {
    let dt = time.delta_secs();
    for (entity, mut flash, mut sprite) in &mut query {
        flash.0 -= dt;
        if flash.0 <= 0.0 {
            sprite.color = crate::combat::spawn::ENEMY_BASE_COLOR;
            commands.entity(entity).remove::<HitFlash>();
        }
    }
}

const PLAYER_BASE_COLOR: Color = Color::srgb(0.35, 0.8, 0.35);
const PLAYER_DASH_TINT: Color = Color::srgb(1.0, 1.0, 0.65);
const PLAYER_INVULN_TINT: Color = Color::srgb(1.0, 0.45, 0.45);

/// Cosmetic tint for the dash and invulnerability overlays.
pub(crate) fn update_player_tint(
    mut query: Query<(&MovementState, &Invulnerable, &mut Sprite), With<Player>>,
) {
    for (state, invuln, mut sprite) in &mut query {
        sprite.color = if state.is_dashing {
            PLAYER_DASH_TINT
        } else if invuln.is_invulnerable() {
            PLAYER_INVULN_TINT
        } else {
            PLAYER_BASE_COLOR
        };
    }
}
