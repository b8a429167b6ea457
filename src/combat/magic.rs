//! Spell effects. Energy is already spent when the cast event arrives.

use bevy::prelude::*;

use super::components::{AttackHitbox, AttackSource, Health};
use super::data::SpellKind;
use crate::core::{GameConfig, SoundCue, SpellCast};
use crate::effects::spawn_particle;
use crate::movement::Body;
use crate::player::{Facing, PlayerStatus};
use crate::rendering::Appearance;

/// Number of flame tiles projected along the facing.
pub const FLAME_REACH: u32 = 5;

/// Centres of the flame tiles, one tile apart starting one tile out.
pub fn flame_centers(origin: Vec2, facing: Facing, tile_size: f32) -> Vec<Vec2> {
    (1..=FLAME_REACH)
        .map(|i| origin + facing.vector() * i as f32 * tile_size)
        .collect()
}

/// Resolve heal and flame casts.
pub fn cast_spells(
    mut commands: Commands,
    time: Res<Time>,
    config: Res<GameConfig>,
    mut cast_events: EventReader<SpellCast>,
    mut casters: Query<(&Body, &PlayerStatus, &mut Health)>,
    mut sounds: EventWriter<SoundCue>,
) {
    let now = time.elapsed();
    let lifetime = config.particle_lifetime();

    for event in cast_events.read() {
        let Ok((body, status, mut health)) = casters.get_mut(event.caster) else {
            continue;
        };
        let center = body.rect.center();

        match event.spell {
            SpellKind::Heal => {
                let healed = health.heal(event.strength);
                spawn_particle(&mut commands, "particles/aura", center, now, lifetime);
                spawn_particle(&mut commands, "particles/heal", center, now, lifetime);
                sounds.send(SoundCue::Heal);
                debug!("Healed {} for {} energy", healed, event.cost);
            }
            SpellKind::Flame => {
                let size = Vec2::splat(config.tile_size);
                for flame in flame_centers(center, status.facing, config.tile_size) {
                    commands.spawn((
                        AttackHitbox {
                            owner: event.caster,
                            source: AttackSource::Spell,
                        },
                        Body::new(Rect::from_center_size(flame, size), (0.0, 0.0)),
                        Appearance::clip("particles/flame"),
                    ));
                }
                sounds.send(SoundCue::Flame);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flame_runs_five_tiles_along_facing() {
        let centers = flame_centers(Vec2::new(100.0, 100.0), Facing::Up, 64.0);
        assert_eq!(centers.len(), 5);
        assert_eq!(centers[0], Vec2::new(100.0, 36.0));
        assert_eq!(centers[4], Vec2::new(100.0, 100.0 - 320.0));
    }
}
