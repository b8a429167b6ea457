//! Game state definitions that control the overall flow of the game.
//!
//! Gameplay systems only run while `Playing`. Both other states are terminal:
//! nothing transitions out of them, so once reached the world is frozen and
//! only the presentation layer keeps running.

use bevy::prelude::*;

/// Outcome of the current level.
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum GameState {
    /// Active gameplay - input, AI, and combat run every frame
    #[default]
    Playing,
    /// Player health dropped to zero
    GameOver,
    /// Every spawned enemy has been killed
    Won,
}
