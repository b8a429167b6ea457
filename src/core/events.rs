//! Global events used for cross-system communication.
//!
//! Entities never call back into the level. The player controller and the
//! enemy AI emit these events, and the systems that own the affected entity
//! collections drain them once per frame in the fixed `GameSet` order.

use bevy::prelude::*;
use serde::Deserialize;

use crate::combat::SpellKind;
use crate::enemies::Archetype;

/// How a monster hits. Selects the particle and sound played on impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttackType {
    Slash,
    Claw,
    Thunder,
    LeafAttack,
}

impl AttackType {
    /// Particle clip played where the hit lands.
    pub fn particle(&self) -> &'static str {
        match self {
            AttackType::Slash => "particles/slash",
            AttackType::Claw => "particles/claw",
            AttackType::Thunder => "particles/thunder",
            AttackType::LeafAttack => "particles/leaf_attack",
        }
    }
}

/// What dealt a hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageKind {
    /// The player's equipped weapon
    Weapon,
    /// A player spell effect
    Spell,
    /// A monster attack
    Monster(AttackType),
}

impl DamageKind {
    /// Particle clip the receiving entity plays when this hit lands.
    pub fn particle(&self) -> &'static str {
        match self {
            DamageKind::Weapon => "particles/sparkle",
            DamageKind::Spell => "particles/flame",
            DamageKind::Monster(attack) => attack.particle(),
        }
    }
}

/// Sent when the player begins a weapon swing.
#[derive(Event, Debug, Clone, Copy)]
pub struct AttackStarted {
    pub attacker: Entity,
}

/// Sent when the player's attack window closes. Every hitbox owned by the
/// attacker is destroyed in response.
#[derive(Event, Debug, Clone, Copy)]
pub struct AttackEnded {
    pub attacker: Entity,
}

/// Sent when the player casts the equipped spell.
#[derive(Event, Debug, Clone, Copy)]
pub struct SpellCast {
    pub caster: Entity,
    pub spell: SpellKind,
    /// Spell strength plus the caster's magic stat
    pub strength: f32,
    /// Energy already deducted for this cast
    pub cost: f32,
}

/// Sent when an entity takes a hit.
///
/// The receiving side decides whether the hit lands (invulnerability) and
/// which particle to play for the given kind.
#[derive(Event, Debug, Clone, Copy)]
pub struct DamageEvent {
    /// Entity receiving damage
    pub target: Entity,
    /// Entity that caused the damage
    pub source: Entity,
    /// Damage amount
    pub amount: f32,
    pub kind: DamageKind,
}

/// Sent once when an enemy's health reaches zero.
#[derive(Event, Debug, Clone, Copy)]
pub struct EnemyDefeated {
    pub archetype: Archetype,
    /// Experience awarded to the player
    pub exp: u32,
}

/// Fire-and-forget sound requests consumed by the audio layer.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    Sword,
    Heal,
    Flame,
    Hit,
    Death,
    MonsterAttack(AttackType),
}
