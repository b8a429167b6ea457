//! Enemy plugin - registers all enemy systems.

use bevy::prelude::*;

use super::ai;
use super::data::MonsterRegistry;
use crate::core::GameSet;

/// Enemy plugin - handles enemy AI, attacks, movement, and removal.
pub struct EnemyPlugin;

impl Plugin for EnemyPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MonsterRegistry>()
            .add_systems(
                Update,
                (
                    ai::sense_player,
                    ai::update_ai_state,
                    ai::enemy_attack,
                    ai::move_enemies,
                )
                    .chain()
                    .in_set(GameSet::Enemies),
            )
            .add_systems(Update, ai::despawn_dead_enemies.in_set(GameSet::Bookkeeping));
    }
}
