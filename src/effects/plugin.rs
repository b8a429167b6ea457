//! Effects plugin - particle expiry.

use bevy::prelude::*;

use super::particles::expire_particles;
use crate::core::GameSet;

/// Removes finished particles in every game state.
pub struct EffectsPlugin;

impl Plugin for EffectsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, expire_particles.in_set(GameSet::Effects));
    }
}
