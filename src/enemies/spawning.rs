//! Enemy construction.

use bevy::prelude::*;

use super::components::*;
use super::data::{Archetype, MonsterDef};
use crate::combat::{Attackable, Health, Invulnerability};
use crate::core::GameConfig;
use crate::movement::{Body, Heading};
use crate::rendering::Appearance;

/// Spawn one enemy with its visual top-left corner at `top_left`.
pub fn spawn_enemy(
    commands: &mut Commands,
    archetype: Archetype,
    def: &MonsterDef,
    top_left: Vec2,
    config: &GameConfig,
) -> Entity {
    let tuning = &config.enemy;
    let size = Vec2::new(def.size.0, def.size.1);

    commands
        .spawn((
            Enemy { archetype },
            AiState::default(),
            EnemySenses::default(),
            def.to_stats(),
            AttackTimer::from_millis(tuning.attack_cooldown_ms),
            Knockback::default(),
            Body::from_top_left(top_left, size, tuning.hitbox_inflate),
            Heading::default(),
            Health::new(def.health),
            Invulnerability::from_millis(tuning.invulnerability_ms),
            Attackable::Creature,
            Appearance::sheet(format!("monsters/{}", archetype.name())),
        ))
        .id()
}
