//! Enemies module - archetypes, AI state machine, and spawning.

mod ai;
mod components;
mod data;
mod plugin;
mod spawning;

pub use components::*;
pub use data::{Archetype, MonsterDef, MonsterRegistry};
pub use plugin::EnemyPlugin;
pub use spawning::spawn_enemy;
