//! Enemy AI behavior systems.

use bevy::prelude::*;

use super::components::*;
use crate::combat::Invulnerability;
use crate::core::{DamageEvent, DamageKind, GameConfig, SoundCue};
use crate::movement::{move_body, Body, Heading, Obstacle};
use crate::player::Player;

/// Measure distance and direction from every living enemy to the player.
pub fn sense_player(
    player_query: Query<&Body, With<Player>>,
    mut enemy_query: Query<
        (&Body, &mut EnemySenses),
        (With<Enemy>, Without<Player>, Without<DeathTimer>),
    >,
) {
    let Ok(player_body) = player_query.get_single() else {
        return;
    };
    let target = player_body.center();

    for (body, mut senses) in enemy_query.iter_mut() {
        let offset = target - body.center();
        senses.distance = offset.length();
        senses.direction = offset.normalize_or_zero();
    }
}

/// Choose idle/move/attack from the sensed distance.
///
/// An enemy in attack range whose attack is still cooling down keeps
/// walking instead of standing in the attack pose.
pub fn update_ai_state(
    time: Res<Time>,
    mut enemy_query: Query<
        (&EnemySenses, &EnemyStats, &AttackTimer, &mut AiState),
        (With<Enemy>, Without<DeathTimer>),
    >,
) {
    let now = time.elapsed();

    for (senses, stats, attack_timer, mut ai_state) in enemy_query.iter_mut() {
        let mut next =
            AiState::from_distance(senses.distance, stats.notice_radius, stats.attack_radius);
        if next == AiState::Attack && !attack_timer.0.is_ready(now) {
            next = AiState::Move;
        }
        if *ai_state != next {
            *ai_state = next;
        }
    }
}

/// Hit the player once per attack cooldown.
pub fn enemy_attack(
    time: Res<Time>,
    player_query: Query<Entity, With<Player>>,
    mut enemy_query: Query<
        (Entity, &EnemyStats, &AiState, &mut AttackTimer),
        (With<Enemy>, Without<DeathTimer>),
    >,
    mut damage_events: EventWriter<DamageEvent>,
    mut sounds: EventWriter<SoundCue>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };
    let now = time.elapsed();

    for (entity, stats, ai_state, mut attack_timer) in enemy_query.iter_mut() {
        if *ai_state != AiState::Attack || !attack_timer.0.is_ready(now) {
            continue;
        }

        attack_timer.0.start(now);
        damage_events.send(DamageEvent {
            target: player,
            source: entity,
            amount: stats.damage,
            kind: DamageKind::Monster(stats.attack_type),
        });
        sounds.send(SoundCue::MonsterAttack(stats.attack_type));
    }
}

/// Walk toward the player, or get pushed back while recovering from a hit.
pub fn move_enemies(
    time: Res<Time>,
    config: Res<GameConfig>,
    obstacles: Query<&Body, (With<Obstacle>, Without<Enemy>)>,
    mut enemy_query: Query<
        (
            &mut Body,
            &mut Heading,
            &EnemySenses,
            &EnemyStats,
            &AiState,
            &Knockback,
            &Invulnerability,
        ),
        (With<Enemy>, Without<DeathTimer>),
    >,
) {
    let now = time.elapsed();
    let walls: Vec<Rect> = obstacles.iter().map(|obstacle| obstacle.hitbox).collect();

    for (mut body, mut heading, senses, stats, ai_state, knockback, invulnerability) in
        enemy_query.iter_mut()
    {
        heading.0 = if !invulnerability.is_vulnerable(now) {
            knockback.0
        } else if *ai_state == AiState::Move {
            senses.direction
        } else {
            Vec2::ZERO
        };

        if heading.0 == Vec2::ZERO {
            continue;
        }

        let distance = stats.speed * config.movement_scale * time.delta_secs();
        move_body(&mut body, heading.0, distance, &walls);
    }
}

/// Despawn enemies once their death sequence has played out.
pub fn despawn_dead_enemies(
    mut commands: Commands,
    time: Res<Time>,
    query: Query<(Entity, &DeathTimer)>,
) {
    let now = time.elapsed();

    for (entity, death_timer) in query.iter() {
        if death_timer.0.has_elapsed(now) {
            commands.entity(entity).despawn_recursive();
        }
    }
}
