//! Weapon swing hitboxes, spawned on attack start and cleared on attack end.

use bevy::prelude::*;

use super::components::{AttackHitbox, AttackSource};
use super::data::{WeaponDef, WeaponTable};
use crate::core::{AttackEnded, AttackStarted, GameConfig};
use crate::movement::Body;
use crate::player::{Facing, PlayerCombat, PlayerStatus};
use crate::rendering::Appearance;

/// Where the weapon sits relative to the wielder's visual rect.
///
/// Sideways swings are pushed down by `side_offset.1`, vertical swings are
/// pushed sideways by `side_offset.0`.
pub fn weapon_rect(
    owner: Rect,
    facing: Facing,
    weapon: &WeaponDef,
    side_offset: (f32, f32),
) -> Rect {
    let center = owner.center();
    let horizontal = Vec2::new(weapon.length, weapon.width);
    let vertical = Vec2::new(weapon.width, weapon.length);

    let (min, size) = match facing {
        Facing::Right => (
            Vec2::new(owner.max.x, center.y + side_offset.1 - horizontal.y / 2.0),
            horizontal,
        ),
        Facing::Left => (
            Vec2::new(owner.min.x - horizontal.x, center.y + side_offset.1 - horizontal.y / 2.0),
            horizontal,
        ),
        Facing::Down => (
            Vec2::new(center.x + side_offset.0 - vertical.x / 2.0, owner.max.y),
            vertical,
        ),
        Facing::Up => (
            Vec2::new(center.x + side_offset.0 - vertical.x / 2.0, owner.min.y - vertical.y),
            vertical,
        ),
    };

    Rect::from_corners(min, min + size)
}

/// Spawn the equipped weapon in front of the attacker.
pub fn spawn_weapon(
    mut commands: Commands,
    config: Res<GameConfig>,
    weapons: Res<WeaponTable>,
    mut attack_events: EventReader<AttackStarted>,
    attackers: Query<(&Body, &PlayerStatus, &PlayerCombat)>,
) {
    for event in attack_events.read() {
        let Ok((body, status, combat)) = attackers.get(event.attacker) else {
            continue;
        };

        let weapon = weapons.get(combat.weapon_index);
        let rect = weapon_rect(body.rect, status.facing, weapon, config.player.weapon_side_offset);

        commands.spawn((
            AttackHitbox {
                owner: event.attacker,
                source: AttackSource::Weapon,
            },
            Body::new(rect, (0.0, 0.0)),
            Appearance::clip(format!("weapons/{}/{}", weapon.name, status.facing.name())),
        ));
    }
}

/// Remove every hitbox owned by an attacker whose window closed.
pub fn despawn_attack_hitboxes(
    mut commands: Commands,
    mut ended_events: EventReader<AttackEnded>,
    hitboxes: Query<(Entity, &AttackHitbox)>,
) {
    for event in ended_events.read() {
        for (entity, hitbox) in hitboxes.iter() {
            if hitbox.owner == event.attacker {
                commands.entity(entity).despawn_recursive();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sword() -> WeaponDef {
        WeaponDef {
            name: "sword".to_string(),
            cooldown_ms: 100,
            damage: 15.0,
            length: 40.0,
            width: 20.0,
        }
    }

    fn player_rect() -> Rect {
        Rect::from_corners(Vec2::new(100.0, 100.0), Vec2::new(164.0, 164.0))
    }

    #[test]
    fn right_swing_starts_at_right_edge() {
        let rect = weapon_rect(player_rect(), Facing::Right, &sword(), (-10.0, 16.0));
        assert_eq!(rect.min.x, 164.0);
        assert_eq!(rect.width(), 40.0);
        assert_eq!(rect.height(), 20.0);
        assert_eq!(rect.center().y, 132.0 + 16.0);
    }

    #[test]
    fn left_swing_mirrors_right() {
        let rect = weapon_rect(player_rect(), Facing::Left, &sword(), (-10.0, 16.0));
        assert_eq!(rect.max.x, 100.0);
        assert_eq!(rect.center().y, 148.0);
    }

    #[test]
    fn vertical_swings_are_rotated() {
        let down = weapon_rect(player_rect(), Facing::Down, &sword(), (-10.0, 16.0));
        assert_eq!(down.min.y, 164.0);
        assert_eq!(down.width(), 20.0);
        assert_eq!(down.height(), 40.0);
        assert_eq!(down.center().x, 122.0);

        let up = weapon_rect(player_rect(), Facing::Up, &sword(), (-10.0, 16.0));
        assert_eq!(up.max.y, 100.0);
        assert_eq!(up.center().x, 122.0);
    }
}
