//! Particle entities: an animation clip at a point that expires on its own.

use bevy::prelude::*;
use rand::Rng;
use std::time::Duration;

use crate::core::Cooldown;
use crate::movement::Body;
use crate::rendering::Appearance;

/// Particle footprint used for placement and depth sorting.
const PARTICLE_SIZE: f32 = 64.0;

/// Number of leaf clips a grass cut picks from.
const LEAF_CLIPS: usize = 6;

/// A one-shot animation that is removed when its lifetime runs out.
#[derive(Component, Debug, Clone, Copy)]
pub struct ParticleEffect {
    pub lifetime: Cooldown,
}

impl ParticleEffect {
    pub fn started(now: Duration, lifetime: Duration) -> Self {
        let mut timer = Cooldown::new(lifetime);
        timer.start(now);
        Self { lifetime: timer }
    }

    pub fn is_expired(&self, now: Duration) -> bool {
        self.lifetime.has_elapsed(now)
    }
}

/// Spawn a particle playing `clip` centred on `center` (map space).
pub fn spawn_particle(
    commands: &mut Commands,
    clip: impl Into<String>,
    center: Vec2,
    now: Duration,
    lifetime: Duration,
) -> Entity {
    let rect = Rect::from_center_size(center, Vec2::splat(PARTICLE_SIZE));
    commands
        .spawn((
            ParticleEffect::started(now, lifetime),
            Body::new(rect, (0.0, 0.0)),
            Appearance::clip(clip),
        ))
        .id()
}

/// Scatter a random handful of leaves where grass was cut.
///
/// Returns how many were spawned.
pub fn spawn_leaf_particles(
    commands: &mut Commands,
    center: Vec2,
    count: (u32, u32),
    now: Duration,
    lifetime: Duration,
) -> u32 {
    let mut rng = rand::thread_rng();
    let (low, high) = (count.0.min(count.1), count.0.max(count.1));
    let leaves = rng.gen_range(low..=high);

    for _ in 0..leaves {
        let clip = format!("particles/leaf{}", rng.gen_range(1..=LEAF_CLIPS));
        spawn_particle(commands, clip, center, now, lifetime);
    }

    leaves
}

/// Remove particles whose lifetime has elapsed.
pub fn expire_particles(
    mut commands: Commands,
    time: Res<Time>,
    query: Query<(Entity, &ParticleEffect)>,
) {
    let now = time.elapsed();

    for (entity, particle) in query.iter() {
        if particle.is_expired(now) {
            commands.entity(entity).despawn_recursive();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn particle_expires_after_lifetime() {
        let particle =
            ParticleEffect::started(Duration::from_millis(100), Duration::from_millis(400));
        assert!(!particle.is_expired(Duration::from_millis(499)));
        assert!(particle.is_expired(Duration::from_millis(500)));
    }

    #[test]
    fn leaf_count_stays_in_range() {
        let mut world = World::new();
        for _ in 0..50 {
            let mut queue = bevy::ecs::world::CommandQueue::default();
            let mut commands = Commands::new(&mut queue, &world);
            let spawned =
                spawn_leaf_particles(&mut commands, Vec2::ZERO, (3, 6), Duration::ZERO, Duration::ZERO);
            assert!((3..=6).contains(&spawned));
            queue.apply(&mut world);
        }

        let count = world.query::<&ParticleEffect>().iter(&world).count();
        assert!((150..=300).contains(&count));
    }
}
