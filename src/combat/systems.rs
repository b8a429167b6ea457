//! Combat systems - hitbox collision pass and damage application.

use bevy::prelude::*;
use std::collections::HashSet;
use std::time::Duration;

use super::components::*;
use super::data::{SpellTable, WeaponTable};
use crate::core::{DamageEvent, DamageKind, EnemyDefeated, GameConfig, SoundCue};
use crate::effects::{spawn_leaf_particles, spawn_particle};
use crate::enemies::{DeathTimer, Enemy, EnemyStats, Knockback};
use crate::movement::{overlaps, Body};
use crate::player::{PlayerCombat, PlayerStats};

/// Damage a hitbox of `source` deals for the attacker's current loadout.
pub fn attack_damage(
    source: AttackSource,
    stats: &PlayerStats,
    combat: &PlayerCombat,
    weapons: &WeaponTable,
    spells: &SpellTable,
) -> f32 {
    match source {
        AttackSource::Weapon => stats.current.attack + weapons.get(combat.weapon_index).damage,
        AttackSource::Spell => stats.current.magic + spells.get(combat.spell_index).strength,
    }
}

/// Test every attack hitbox against every attackable target.
///
/// Foliage is cut on the first overlap. Creatures get a damage event for
/// every overlapping hitbox on every frame; invulnerability decides
/// whether it lands.
pub fn resolve_attack_hits(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    weapons: Res<WeaponTable>,
    spells: Res<SpellTable>,
    hitboxes: Query<(&Body, &AttackHitbox)>,
    targets: Query<(Entity, &Body, &Attackable)>,
    attackers: Query<(&PlayerStats, &PlayerCombat)>,
    mut damage_events: EventWriter<DamageEvent>,
) {
    let now = time.elapsed();
    let mut cut = HashSet::new();

    for (hitbox_body, hitbox) in hitboxes.iter() {
        for (target, target_body, attackable) in targets.iter() {
            if target == hitbox.owner || !overlaps(&hitbox_body.rect, &target_body.rect) {
                continue;
            }

            match attackable {
                Attackable::Foliage => {
                    if !cut.insert(target) {
                        continue;
                    }
                    spawn_leaf_particles(
                        &mut commands,
                        target_body.rect.center(),
                        config.effects.leaf_count,
                        now,
                        config.particle_lifetime(),
                    );
                    commands.entity(target).despawn_recursive();
                }
                Attackable::Creature => {
                    let Ok((stats, combat)) = attackers.get(hitbox.owner) else {
                        continue;
                    };
                    let kind = match hitbox.source {
                        AttackSource::Weapon => DamageKind::Weapon,
                        AttackSource::Spell => DamageKind::Spell,
                    };
                    let amount = attack_damage(hitbox.source, stats, combat, &weapons, &spells);
                    damage_events.send(DamageEvent {
                        target,
                        source: hitbox.owner,
                        amount,
                        kind,
                    });
                }
            }
        }
    }
}

/// Apply queued damage to vulnerable targets.
///
/// Enemies are knocked back and start their death sequence at zero health.
/// The player only loses health; the level decides when that ends the game.
pub fn apply_damage(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut damage_events: EventReader<DamageEvent>,
    mut targets: Query<
        (
            &Body,
            &mut Health,
            &mut Invulnerability,
            Option<&Enemy>,
            Option<&EnemyStats>,
            Option<&mut Knockback>,
        ),
        Without<DeathTimer>,
    >,
    sources: Query<&Body>,
    mut defeated_events: EventWriter<EnemyDefeated>,
    mut sounds: EventWriter<SoundCue>,
) {
    let now = time.elapsed();
    let lifetime = config.particle_lifetime();

    for event in damage_events.read() {
        let Ok((body, mut health, mut invulnerability, enemy, enemy_stats, knockback)) =
            targets.get_mut(event.target)
        else {
            continue;
        };

        if !invulnerability.is_vulnerable(now) {
            continue;
        }

        health.take_damage(event.amount);
        invulnerability.trigger(now);
        let center = body.center();
        spawn_particle(&mut commands, event.kind.particle(), center, now, lifetime);

        let Some(enemy) = enemy else {
            debug!("Player took {} damage, {} left", event.amount, health.current);
            continue;
        };

        sounds.send(SoundCue::Hit);
        if let (Some(mut knockback), Ok(source)) = (knockback, sources.get(event.source)) {
            knockback.0 = (center - source.center()).normalize_or_zero();
        }

        if health.is_dead() {
            let death =
                DeathTimer::started(now, Duration::from_millis(config.enemy.death_duration_ms));
            commands
                .entity(event.target)
                .insert(death)
                .remove::<Attackable>();
            let particle = format!("particles/{}", enemy.archetype.name());
            spawn_particle(&mut commands, particle, center, now, lifetime);
            sounds.send(SoundCue::Death);
            defeated_events.send(EnemyDefeated {
                archetype: enemy.archetype,
                exp: enemy_stats.map_or(0, |stats| stats.exp),
            });
            info!("{} defeated", enemy.archetype.name());
        }
    }
}
