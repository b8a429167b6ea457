//! Player construction.

use bevy::prelude::*;

use super::components::*;
use crate::combat::{Energy, Health, Invulnerability};
use crate::core::GameConfig;
use crate::movement::{Body, Heading};
use crate::rendering::Appearance;

/// Spawn the player with its visual top-left corner at `top_left`.
///
/// Health and energy start at the configured fraction of their stat. Heals
/// may take health past the health stat, up to the stat's cap.
pub fn spawn_player(commands: &mut Commands, top_left: Vec2, config: &GameConfig) -> Entity {
    let tuning = &config.player;
    let stats = PlayerStats::default();
    let size = Vec2::splat(config.tile_size);

    commands
        .spawn((
            Player,
            PlayerStatus::default(),
            Body::from_top_left(top_left, size, tuning.hitbox_inflate),
            Heading::default(),
            Health::with_current(
                stats.current.health * tuning.starting_health_ratio,
                stats.max.health,
            ),
            Energy::with_current(
                stats.current.energy * tuning.starting_energy_ratio,
                stats.current.energy,
            ),
            Experience(tuning.starting_exp),
            PlayerCombat::new(tuning),
            Invulnerability::from_millis(tuning.invulnerability_ms),
            stats,
            Appearance::sheet("player"),
        ))
        .id()
}
