//! Weapon and spell tables loaded from RON files.
//!
//! Both tables are ordered: the player cycles through them by index. Lookups
//! with a bad index fall back to a zeroed entry instead of failing.

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::world::read_ron;

/// Weapon definition.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct WeaponDef {
    pub name: String,
    /// Added to the player's base attack window
    pub cooldown_ms: u64,
    pub damage: f32,
    /// Hitbox length along the facing direction
    pub length: f32,
    /// Hitbox width across the facing direction
    pub width: f32,
}

impl WeaponDef {
    pub fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }
}

/// Spell behaviours.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SpellKind {
    /// Projects a line of flame hitboxes along the facing
    Flame,
    /// Restores health
    Heal,
}

/// Spell definition.
#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SpellDef {
    pub name: String,
    pub kind: SpellKind,
    pub strength: f32,
    pub cost: f32,
}

static FALLBACK_WEAPON: WeaponDef = WeaponDef {
    name: String::new(),
    cooldown_ms: 0,
    damage: 0.0,
    length: 0.0,
    width: 0.0,
};

static FALLBACK_SPELL: SpellDef = SpellDef {
    name: String::new(),
    kind: SpellKind::Heal,
    strength: 0.0,
    cost: 0.0,
};

fn weapon(name: &str, cooldown_ms: u64, damage: f32, length: f32, width: f32) -> WeaponDef {
    WeaponDef {
        name: name.to_string(),
        cooldown_ms,
        damage,
        length,
        width,
    }
}

/// Resource holding the ordered weapon list.
#[derive(Resource, Clone, Debug, Deserialize)]
pub struct WeaponTable {
    pub weapons: Vec<WeaponDef>,
}

impl Default for WeaponTable {
    fn default() -> Self {
        Self {
            weapons: vec![
                weapon("sword", 100, 15.0, 40.0, 20.0),
                weapon("lance", 400, 30.0, 64.0, 16.0),
                weapon("axe", 300, 20.0, 44.0, 28.0),
                weapon("rapier", 50, 8.0, 48.0, 12.0),
                weapon("sai", 80, 10.0, 32.0, 20.0),
            ],
        }
    }
}

impl WeaponTable {
    /// Weapon at `index`, or a zeroed weapon if out of range.
    pub fn get(&self, index: usize) -> &WeaponDef {
        self.weapons.get(index).unwrap_or(&FALLBACK_WEAPON)
    }

    pub fn len(&self) -> usize {
        self.weapons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weapons.is_empty()
    }

    /// Load from a RON file, keeping the built-in table on failure.
    pub fn load(path: &Path) -> Self {
        load_table(path, "weapon").unwrap_or_default()
    }
}

/// Resource holding the ordered spell list.
#[derive(Resource, Clone, Debug, Deserialize)]
pub struct SpellTable {
    pub spells: Vec<SpellDef>,
}

impl Default for SpellTable {
    fn default() -> Self {
        Self {
            spells: vec![
                SpellDef {
                    name: "flame".to_string(),
                    kind: SpellKind::Flame,
                    strength: 5.0,
                    cost: 20.0,
                },
                SpellDef {
                    name: "heal".to_string(),
                    kind: SpellKind::Heal,
                    strength: 20.0,
                    cost: 10.0,
                },
            ],
        }
    }
}

impl SpellTable {
    /// Spell at `index`, or a zero-cost no-op heal if out of range.
    pub fn get(&self, index: usize) -> &SpellDef {
        self.spells.get(index).unwrap_or(&FALLBACK_SPELL)
    }

    pub fn len(&self) -> usize {
        self.spells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Load from a RON file, keeping the built-in table on failure.
    pub fn load(path: &Path) -> Self {
        load_table(path, "spell").unwrap_or_default()
    }
}

fn load_table<T: DeserializeOwned>(path: &Path, label: &str) -> Option<T> {
    match read_ron(path) {
        Ok(table) => {
            info!("Loaded {} table from {:?}", label, path);
            Some(table)
        }
        Err(e) => {
            warn!("{}. Using built-in {} table.", e, label);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_tables_match_reference_values() {
        let weapons = WeaponTable::default();
        assert_eq!(weapons.len(), 5);
        assert_eq!(weapons.get(0).name, "sword");
        assert_eq!(weapons.get(0).damage, 15.0);
        assert_eq!(weapons.get(1).cooldown(), Duration::from_millis(400));

        let spells = SpellTable::default();
        assert_eq!(spells.get(0).kind, SpellKind::Flame);
        assert_eq!(spells.get(1).cost, 10.0);
    }

    #[test]
    fn out_of_range_lookup_is_harmless() {
        let weapons = WeaponTable { weapons: Vec::new() };
        assert!(weapons.is_empty());
        assert_eq!(weapons.get(7).damage, 0.0);

        let spells = SpellTable { spells: Vec::new() };
        assert_eq!(spells.get(3).cost, 0.0);
    }

    #[test]
    fn parses_ron_table() {
        let table: SpellTable = ron::from_str(
            r#"(spells: [(name: "spark", kind: flame, strength: 9.0, cost: 4.0)])"#,
        )
        .unwrap();
        assert_eq!(table.get(0).name, "spark");
        assert_eq!(table.get(0).kind, SpellKind::Flame);
    }

    #[test]
    fn missing_file_keeps_builtin() {
        let table = WeaponTable::load(Path::new("does/not/exist.ron"));
        assert_eq!(table.len(), 5);
    }
}
