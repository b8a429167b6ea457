//! Monster archetype table loaded from a RON file.

use bevy::prelude::*;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use super::components::EnemyStats;
use crate::core::AttackType;
use crate::world::read_ron;

/// The four monster kinds a map can spawn.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Archetype {
    Squid,
    Raccoon,
    Spirit,
    Bamboo,
}

impl Archetype {
    pub const ALL: [Archetype; 4] = [
        Archetype::Squid,
        Archetype::Raccoon,
        Archetype::Spirit,
        Archetype::Bamboo,
    ];

    /// Name used for sprite folders and death particles.
    pub fn name(&self) -> &'static str {
        match self {
            Archetype::Squid => "squid",
            Archetype::Raccoon => "raccoon",
            Archetype::Spirit => "spirit",
            Archetype::Bamboo => "bamboo",
        }
    }

    /// Archetype for a map entity code, if it is a monster code.
    pub fn from_spawn_code(code: u32) -> Option<Self> {
        match code {
            390 => Some(Archetype::Bamboo),
            391 => Some(Archetype::Spirit),
            392 => Some(Archetype::Raccoon),
            393 => Some(Archetype::Squid),
            _ => None,
        }
    }
}

/// Fixed stats for one archetype.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct MonsterDef {
    pub health: f32,
    pub exp: u32,
    pub damage: f32,
    pub attack_type: AttackType,
    /// Pixels per 1/60 s, like the player's speed stat
    pub speed: f32,
    pub attack_radius: f32,
    pub notice_radius: f32,
    /// Visual size in pixels
    #[serde(default = "default_size")]
    pub size: (f32, f32),
}

fn default_size() -> (f32, f32) {
    (64.0, 64.0)
}

impl MonsterDef {
    pub fn to_stats(&self) -> EnemyStats {
        EnemyStats {
            damage: self.damage,
            attack_type: self.attack_type,
            speed: self.speed,
            attack_radius: self.attack_radius,
            notice_radius: self.notice_radius,
            exp: self.exp,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn monster(
    health: f32,
    exp: u32,
    damage: f32,
    attack_type: AttackType,
    speed: f32,
    attack_radius: f32,
    notice_radius: f32,
    size: (f32, f32),
) -> MonsterDef {
    MonsterDef {
        health,
        exp,
        damage,
        attack_type,
        speed,
        attack_radius,
        notice_radius,
        size,
    }
}

/// Resource holding every archetype's stats.
#[derive(Resource, Clone, Debug, Deserialize)]
pub struct MonsterRegistry {
    pub monsters: HashMap<Archetype, MonsterDef>,
}

impl Default for MonsterRegistry {
    fn default() -> Self {
        let monsters = HashMap::from([
            (
                Archetype::Squid,
                monster(100.0, 100, 20.0, AttackType::Slash, 3.0, 80.0, 360.0, (64.0, 64.0)),
            ),
            (
                Archetype::Raccoon,
                monster(300.0, 250, 40.0, AttackType::Claw, 2.0, 120.0, 400.0, (128.0, 128.0)),
            ),
            (
                Archetype::Spirit,
                monster(100.0, 110, 8.0, AttackType::Thunder, 4.0, 60.0, 350.0, (64.0, 64.0)),
            ),
            (
                Archetype::Bamboo,
                monster(70.0, 120, 6.0, AttackType::LeafAttack, 3.0, 50.0, 300.0, (64.0, 64.0)),
            ),
        ]);
        Self { monsters }
    }
}

impl MonsterRegistry {
    pub fn get(&self, archetype: Archetype) -> Option<&MonsterDef> {
        self.monsters.get(&archetype)
    }

    /// Load from a RON file. Archetypes missing from the file keep their
    /// built-in stats.
    pub fn load(path: &Path) -> Self {
        let mut registry = Self::default();

        match read_ron::<MonsterRegistry>(path) {
            Ok(loaded) => {
                info!("Loaded {} monster definitions from {:?}", loaded.monsters.len(), path);
                registry.monsters.extend(loaded.monsters);
            }
            Err(e) => warn!("{}. Using built-in monster table.", e),
        }

        registry
    }
}
