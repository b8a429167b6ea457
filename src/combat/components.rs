//! Combat-related components.

use bevy::prelude::*;
use std::time::Duration;

use crate::core::Cooldown;

/// Component for entities that can take damage.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Health {
    pub current: f32,
    pub maximum: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self {
            current: max,
            maximum: max,
        }
    }

    /// Start below full health. `current` is clamped into `[0, max]`.
    pub fn with_current(current: f32, max: f32) -> Self {
        Self {
            current: current.clamp(0.0, max),
            maximum: max,
        }
    }

    /// Returns the damage actually taken. Health never drops below zero.
    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.current);
        self.current -= actual;
        actual
    }

    /// Returns the amount actually healed. Health never exceeds the maximum.
    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.max(0.0).min(self.maximum - self.current);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }
}

/// Energy pool spent on spells.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Energy {
    pub current: f32,
    pub maximum: f32,
}

impl Energy {
    pub fn with_current(current: f32, max: f32) -> Self {
        Self {
            current: current.clamp(0.0, max),
            maximum: max,
        }
    }

    /// Deduct `amount` if there is enough. Returns whether it was spent.
    pub fn spend(&mut self, amount: f32) -> bool {
        if self.current >= amount {
            self.current -= amount;
            true
        } else {
            false
        }
    }

    pub fn regenerate(&mut self, amount: f32) {
        self.current = (self.current + amount.max(0.0)).min(self.maximum);
    }

    pub fn percentage(&self) -> f32 {
        if self.maximum <= 0.0 {
            return 0.0;
        }
        self.current / self.maximum
    }
}

/// Window after a hit during which further hits are ignored.
#[derive(Component, Debug, Clone, Copy)]
pub struct Invulnerability {
    window: Cooldown,
}

impl Invulnerability {
    pub fn new(duration: Duration) -> Self {
        Self {
            window: Cooldown::new(duration),
        }
    }

    pub fn from_millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis))
    }

    /// Start the window at `now`.
    pub fn trigger(&mut self, now: Duration) {
        self.window.start(now);
    }

    /// False for every `now` in `[hit, hit + duration)`, true otherwise.
    pub fn is_vulnerable(&self, now: Duration) -> bool {
        self.window.is_ready(now)
    }
}

/// What produced an attack hitbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackSource {
    Weapon,
    Spell,
}

/// A transient hitbox that damages whatever it overlaps.
///
/// Lives until the owner's attack window closes.
#[derive(Component, Debug, Clone, Copy)]
pub struct AttackHitbox {
    pub owner: Entity,
    pub source: AttackSource,
}

/// How a target reacts to being hit by an attack hitbox.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attackable {
    /// Destroyed on any hit, no damage accounting (grass)
    Foliage,
    /// Takes damage from the attacker's weapon or spell strength
    Creature,
}
