//! Render-facing data attached by gameplay code.
//!
//! Gameplay only says what an entity looks like. Whether a sprite exists
//! for it is decided by the presentation layer, so headless runs carry
//! these components without ever drawing.

use bevy::prelude::*;

/// Which animation clip an entity shows.
#[derive(Component, Debug, Clone, PartialEq, Eq)]
pub enum Appearance {
    /// A clip played in a loop
    Clip(String),
    /// One fixed frame of a clip
    Still { clip: String, frame: usize },
    /// A character sheet; the clip under it follows the entity's state
    Sheet(String),
}

impl Appearance {
    pub fn clip(clip: impl Into<String>) -> Self {
        Appearance::Clip(clip.into())
    }

    pub fn variant(clip: impl Into<String>, frame: usize) -> Self {
        Appearance::Still {
            clip: clip.into(),
            frame,
        }
    }

    pub fn sheet(base: impl Into<String>) -> Self {
        Appearance::Sheet(base.into())
    }
}

/// Marker for the static floor image.
#[derive(Component, Debug)]
pub struct Floor;
