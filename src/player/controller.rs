//! Player controller - input, cooldowns, status, movement, and regen.
//!
//! Systems run chained in this order every frame while playing.

use bevy::prelude::*;

use super::components::*;
use super::input::Action;
use crate::combat::{Energy, SpellTable, WeaponTable};
use crate::core::{AttackEnded, AttackStarted, GameConfig, SoundCue, SpellCast};
use crate::movement::{move_body, Body, Heading, Obstacle};

/// Read actions into heading, facing, attacks, casts, and switches.
///
/// Nothing is read while an attack window is open.
pub fn player_input(
    time: Res<Time>,
    actions: Res<ButtonInput<Action>>,
    weapons: Res<WeaponTable>,
    spells: Res<SpellTable>,
    mut query: Query<
        (
            Entity,
            &mut Heading,
            &mut PlayerStatus,
            &mut PlayerCombat,
            &mut Energy,
            &PlayerStats,
        ),
        With<Player>,
    >,
    mut attack_events: EventWriter<AttackStarted>,
    mut cast_events: EventWriter<SpellCast>,
    mut sounds: EventWriter<SoundCue>,
) {
    let Ok((entity, mut heading, mut status, mut combat, mut energy, stats)) =
        query.get_single_mut()
    else {
        return;
    };

    if combat.attacking {
        return;
    }

    let now = time.elapsed();

    // Vertical first so a diagonal press ends up facing sideways
    if actions.pressed(Action::Up) {
        heading.y = -1.0;
        status.facing = Facing::Up;
        status.activity = Activity::Moving;
    } else if actions.pressed(Action::Down) {
        heading.y = 1.0;
        status.facing = Facing::Down;
        status.activity = Activity::Moving;
    } else {
        heading.y = 0.0;
    }

    if actions.pressed(Action::Right) {
        heading.x = 1.0;
        status.facing = Facing::Right;
        status.activity = Activity::Moving;
    } else if actions.pressed(Action::Left) {
        heading.x = -1.0;
        status.facing = Facing::Left;
        status.activity = Activity::Moving;
    } else {
        heading.x = 0.0;
    }

    if actions.just_pressed(Action::Attack) {
        let weapon = weapons.get(combat.weapon_index);
        combat.begin_attack(now, weapon.cooldown());
        attack_events.send(AttackStarted { attacker: entity });
        sounds.send(SoundCue::Sword);
        debug!("Attack with {}", weapon.name);
    }

    // Attack and cast pressed together both fire and share one window
    if actions.just_pressed(Action::Cast) {
        let spell = spells.get(combat.spell_index);
        if energy.spend(spell.cost) {
            let weapon_cooldown = weapons.get(combat.weapon_index).cooldown();
            combat.begin_attack(now, weapon_cooldown);
            cast_events.send(SpellCast {
                caster: entity,
                spell: spell.kind,
                strength: spell.strength + stats.current.magic,
                cost: spell.cost,
            });
            debug!("Cast {} for {} energy", spell.name, spell.cost);
        } else {
            debug!("Not enough energy for {}", spell.name);
        }
    }

    if actions.just_pressed(Action::SwitchWeapon) && combat.weapon_switch.is_ready(now) {
        combat.weapon_switch.start(now);
        combat.weapon_index = next_index(combat.weapon_index, weapons.len());
        debug!("Switched to {}", weapons.get(combat.weapon_index).name);
    }

    if actions.just_pressed(Action::SwitchSpell) && combat.spell_switch.is_ready(now) {
        combat.spell_switch.start(now);
        combat.spell_index = next_index(combat.spell_index, spells.len());
        debug!("Switched to {}", spells.get(combat.spell_index).name);
    }
}

/// Buy stat upgrades with experience.
pub fn upgrade_stats(
    actions: Res<ButtonInput<Action>>,
    mut query: Query<(&mut PlayerStats, &mut Experience), With<Player>>,
) {
    let Ok((mut stats, mut exp)) = query.get_single_mut() else {
        return;
    };

    for kind in StatKind::ALL {
        if !actions.just_pressed(Action::Upgrade(kind)) {
            continue;
        }
        match stats.try_upgrade(kind, &mut exp) {
            Some(value) => info!("Upgraded {:?} to {:.1}, {} exp left", kind, value, exp.0),
            None => debug!("Cannot upgrade {:?}", kind),
        }
    }
}

/// Cyclic advance through a table of `len` entries.
fn next_index(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index + 1) % len
    }
}

/// Close the attack window once it has elapsed.
pub fn player_cooldowns(
    time: Res<Time>,
    mut query: Query<(Entity, &mut PlayerCombat), With<Player>>,
    mut ended_events: EventWriter<AttackEnded>,
) {
    let now = time.elapsed();

    for (entity, mut combat) in query.iter_mut() {
        if combat.finish_attack(now) {
            ended_events.send(AttackEnded { attacker: entity });
        }
    }
}

/// Derive idle/attack status from movement and the attack flag.
pub fn update_player_status(
    mut query: Query<(&mut Heading, &mut PlayerStatus, &PlayerCombat), With<Player>>,
) {
    for (mut heading, mut status, combat) in query.iter_mut() {
        status.refresh(&mut heading.0, combat.attacking);
    }
}

/// Move the player through the shared collision routine.
pub fn move_player(
    time: Res<Time>,
    config: Res<GameConfig>,
    obstacles: Query<&Body, (With<Obstacle>, Without<Player>)>,
    mut query: Query<(&mut Body, &Heading, &PlayerStats), With<Player>>,
) {
    let Ok((mut body, heading, stats)) = query.get_single_mut() else {
        return;
    };

    if heading.0 == Vec2::ZERO {
        return;
    }

    let walls: Vec<Rect> = obstacles.iter().map(|obstacle| obstacle.hitbox).collect();
    let distance = stats.current.speed * config.movement_scale * time.delta_secs();
    move_body(&mut body, heading.0, distance, &walls);
}

/// Passive energy regeneration scaled by the magic stat.
pub fn regenerate_energy(
    time: Res<Time>,
    config: Res<GameConfig>,
    mut query: Query<(&mut Energy, &PlayerStats), With<Player>>,
) {
    for (mut energy, stats) in query.iter_mut() {
        energy.maximum = stats.current.energy;
        let amount =
            config.player.energy_regen_per_magic * stats.current.magic * time.delta_secs();
        energy.regenerate(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_wraps() {
        assert_eq!(next_index(0, 5), 1);
        assert_eq!(next_index(4, 5), 0);
        assert_eq!(next_index(1, 2), 0);
        assert_eq!(next_index(3, 0), 0);
    }
}
