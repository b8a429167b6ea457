//! Game configuration loaded from an external RON file.
//!
//! Allows tweaking tuning values without recompilation. Every field has a
//! default, so a partial file only overrides what it names.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::time::Duration;

/// Default location of the configuration file.
pub const CONFIG_PATH: &str = "assets/data/game_config.ron";

/// Window settings.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Grove Brawler".to_string(),
            width: 1280.0,
            height: 720.0,
        }
    }
}

/// Where the map layers and data tables live.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding `<map>_<Layer>.csv` files
    pub map_dir: String,
    /// Map identifier
    pub map_name: String,
    /// Directory holding the RON stat tables
    pub data_dir: String,
    /// Root of the sprite folders, relative to the asset root
    pub graphics_dir: String,
    /// Bevy asset root on disk
    pub asset_root: String,
    /// Background image, relative to the asset root
    pub floor_image: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            map_dir: "assets/map".to_string(),
            map_name: "map".to_string(),
            data_dir: "assets/data".to_string(),
            graphics_dir: "graphics".to_string(),
            asset_root: "assets".to_string(),
            floor_image: "graphics/tilemap/ground.png".to_string(),
        }
    }
}

/// Player tuning.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct PlayerTuning {
    /// Base attack window before the weapon's own cooldown is added
    pub attack_cooldown_ms: u64,
    /// Minimum time between weapon or spell switches
    pub switch_cooldown_ms: u64,
    pub invulnerability_ms: u64,
    /// Energy regained per second for each point of magic
    pub energy_regen_per_magic: f32,
    /// Fraction of the health stat the player starts with
    pub starting_health_ratio: f32,
    /// Fraction of the energy stat the player starts with
    pub starting_energy_ratio: f32,
    pub starting_exp: u32,
    /// Collision box inflation (negative shrinks)
    pub hitbox_inflate: (f32, f32),
    /// Weapon hitbox offset along the facing's perpendicular axis
    pub weapon_side_offset: (f32, f32),
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            attack_cooldown_ms: 400,
            switch_cooldown_ms: 200,
            invulnerability_ms: 500,
            energy_regen_per_magic: 0.6,
            starting_health_ratio: 0.5,
            starting_energy_ratio: 0.8,
            starting_exp: 0,
            hitbox_inflate: (-6.0, -26.0),
            weapon_side_offset: (-10.0, 16.0),
        }
    }
}

/// Tuning shared by every enemy archetype.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub attack_cooldown_ms: u64,
    pub invulnerability_ms: u64,
    /// How long a dead enemy stays in the world before it is removed
    pub death_duration_ms: u64,
    pub hitbox_inflate: (f32, f32),
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            attack_cooldown_ms: 400,
            invulnerability_ms: 300,
            death_duration_ms: 400,
            hitbox_inflate: (0.0, -10.0),
        }
    }
}

/// Particle and animation tuning.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct EffectsTuning {
    pub particle_lifetime_ms: u64,
    /// Inclusive range of leaf particles spawned when grass is cut
    pub leaf_count: (u32, u32),
    /// Frames per second for looping character animations
    pub animation_fps: f32,
}

impl Default for EffectsTuning {
    fn default() -> Self {
        Self {
            particle_lifetime_ms: 400,
            leaf_count: (3, 6),
            animation_fps: 9.0,
        }
    }
}

/// Sound volumes and the background track.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct AudioTuning {
    pub effects_volume: f64,
    pub music_volume: f64,
    /// Looping track, relative to the asset root
    pub music: String,
}

impl Default for AudioTuning {
    fn default() -> Self {
        Self {
            effects_volume: 0.4,
            music_volume: 0.5,
            music: "audio/main.ogg".to_string(),
        }
    }
}

/// Game configuration loaded from assets/data/game_config.ron.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub window: WindowConfig,
    pub paths: PathsConfig,
    /// Edge length of one map cell in pixels
    pub tile_size: f32,
    /// Pixels per second for each point of a speed stat
    pub movement_scale: f32,
    pub player: PlayerTuning,
    pub enemy: EnemyTuning,
    pub effects: EffectsTuning,
    pub audio: AudioTuning,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            paths: PathsConfig::default(),
            tile_size: 64.0,
            movement_scale: 60.0,
            player: PlayerTuning::default(),
            enemy: EnemyTuning::default(),
            effects: EffectsTuning::default(),
            audio: AudioTuning::default(),
        }
    }
}

impl GameConfig {
    /// Load config from the default RON file.
    pub fn load() -> Self {
        Self::load_from(CONFIG_PATH)
    }

    /// Load config from a RON file, falling back to defaults.
    pub fn load_from(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded game config from {}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse {}: {}. Using defaults.", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Could not read {}: {}. Using defaults.", path, e);
                Self::default()
            }
        }
    }

    pub fn particle_lifetime(&self) -> Duration {
        Duration::from_millis(self.effects.particle_lifetime_ms)
    }
}
