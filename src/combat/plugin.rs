//! Combat plugin - weapon swings, spells, hit detection, and damage.

use bevy::prelude::*;

use super::data::{SpellTable, WeaponTable};
use super::{magic, systems, weapons};
use crate::core::GameSet;

/// Combat plugin - handles all combat systems.
pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WeaponTable>()
            .init_resource::<SpellTable>()
            // Attack events from the player controller
            .add_systems(
                Update,
                (
                    weapons::despawn_attack_hitboxes,
                    weapons::spawn_weapon,
                    magic::cast_spells,
                )
                    .chain()
                    .in_set(GameSet::Attacks),
            )
            // Collision pass, then damage
            .add_systems(
                Update,
                (systems::resolve_attack_hits, systems::apply_damage)
                    .chain()
                    .in_set(GameSet::Combat),
            );
    }
}
