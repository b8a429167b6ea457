//! Effects module - short-lived particle animations.

mod particles;
mod plugin;

pub use particles::{spawn_leaf_particles, spawn_particle, ParticleEffect};
pub use plugin::EffectsPlugin;
