//! Grove Brawler - a top-down action game in Bevy.
//!
//! A tile map is loaded, the player and a handful of monsters are spawned,
//! and each frame runs one fixed pass: the player acts, enemies react, then
//! attack hitboxes are tested against everything attackable.
//!
//! # Architecture
//!
//! The game is organized into plugins, each handling a specific aspect:
//!
//! - **Core**: Game states, global events, config, frame order
//! - **Movement**: Bodies, headings, and axis-separated obstacle collision
//! - **Player**: Input mapping and the controller state machine
//! - **Enemies**: Archetypes, AI state machine, death sequence
//! - **Combat**: Weapon and spell hitboxes, hit resolution, damage
//! - **Effects**: Short-lived particles
//! - **World**: Map layers, level construction, end conditions
//! - **Rendering**: Sprites, follow camera, depth sorting
//! - **Audio**: Sound cues and music
//! - **UI**: HUD and end-of-level banner
//!
//! `SimulationPlugin` is everything up to and including the world; it runs
//! headless. `GamePlugin` adds data loading and presentation.

pub mod audio;
pub mod combat;
pub mod core;
pub mod effects;
pub mod enemies;
pub mod movement;
pub mod player;
pub mod rendering;
pub mod ui;
pub mod world;

use bevy::prelude::*;
use std::path::Path;

/// Gameplay without windowing, images, or audio.
///
/// Needs `StatesPlugin` and a `Time` resource. Insert a `world::MapLayout`
/// before the first update to build a level.
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Core systems (must be first)
            .add_plugins(core::CorePlugin)
            .add_plugins(player::PlayerPlugin)
            .add_plugins(combat::CombatPlugin)
            .add_plugins(enemies::EnemyPlugin)
            .add_plugins(effects::EffectsPlugin)
            .add_plugins(world::WorldPlugin);
    }
}

/// Main game plugin: loads data from disk, then adds the simulation and
/// every presentation plugin.
///
/// Expects `DefaultPlugins` (with Bevy audio disabled), kira's
/// `AudioPlugin`, and an `AnimationCatalog` resource.
pub struct GamePlugin {
    pub config: core::GameConfig,
}

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        let config = &self.config;
        let data_dir = Path::new(&config.paths.data_dir);

        app.insert_resource(config.clone())
            .insert_resource(combat::WeaponTable::load(&data_dir.join("weapons.ron")))
            .insert_resource(combat::SpellTable::load(&data_dir.join("spells.ron")))
            .insert_resource(enemies::MonsterRegistry::load(&data_dir.join("monsters.ron")))
            .insert_resource(world::MapLayout::load(
                Path::new(&config.paths.map_dir),
                &config.paths.map_name,
            ))
            .add_plugins(SimulationPlugin)

            // Presentation
            .add_plugins(rendering::RenderingPlugin)
            .add_plugins(audio::GameAudioPlugin)
            .add_plugins(ui::UiPlugin);
    }
}
