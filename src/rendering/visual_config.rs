//! Visual configuration loaded from external RON file.
//!
//! Colours for the background and the HUD, tweakable without recompiling.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;

/// Default location of the visual configuration.
pub const VISUAL_CONFIG_PATH: &str = "assets/data/visual_config.ron";

/// Visual configuration loaded from assets/data/visual_config.ron.
#[derive(Resource, Clone, Debug, Deserialize)]
#[serde(default)]
pub struct VisualConfig {
    pub clear_color: (f32, f32, f32),
    // HUD
    pub health_color: (f32, f32, f32),
    pub energy_color: (f32, f32, f32),
    pub bar_background: (f32, f32, f32),
    pub text_color: (f32, f32, f32),
    pub banner_color: (f32, f32, f32),
}

impl Default for VisualConfig {
    fn default() -> Self {
        Self {
            clear_color: (0.44, 0.76, 0.86),
            health_color: (0.8, 0.2, 0.2),
            energy_color: (0.2, 0.4, 0.9),
            bar_background: (0.13, 0.13, 0.13),
            text_color: (0.93, 0.93, 0.93),
            banner_color: (0.0, 0.0, 0.0),
        }
    }
}

impl VisualConfig {
    /// Load visual config from RON file.
    pub fn load() -> Self {
        Self::load_from(VISUAL_CONFIG_PATH)
    }

    pub fn load_from(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(config) => {
                    info!("Loaded visual config from {}", path);
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
}

/// Build a colour from an RGB triple.
pub fn rgb(color: (f32, f32, f32)) -> Color {
    Color::srgb(color.0, color.1, color.2)
}
