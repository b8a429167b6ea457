//! Combat module - weapons, spells, hitboxes, and damage.

mod components;
mod data;
mod magic;
mod plugin;
mod systems;
mod weapons;

pub use components::*;
pub use data::{SpellDef, SpellKind, SpellTable, WeaponDef, WeaponTable};
pub use magic::flame_centers;
pub use plugin::CombatPlugin;
pub use systems::attack_damage;
pub use weapons::weapon_rect;
