//! Enemy-related components.

use bevy::prelude::*;
use std::time::Duration;

use super::data::Archetype;
use crate::core::{AttackType, Cooldown};

/// Marker component for all enemies.
#[derive(Component, Debug, Clone, Copy)]
pub struct Enemy {
    pub archetype: Archetype,
}

/// AI state machine for enemy behavior.
#[derive(Component, Default, PartialEq, Eq, Clone, Copy, Debug)]
pub enum AiState {
    /// Player outside the notice radius
    #[default]
    Idle,
    /// Walking toward the player
    Move,
    /// Player within the attack radius
    Attack,
}

impl AiState {
    /// State for a given distance to the player.
    pub fn from_distance(distance: f32, notice_radius: f32, attack_radius: f32) -> Self {
        if distance <= attack_radius {
            AiState::Attack
        } else if distance <= notice_radius {
            AiState::Move
        } else {
            AiState::Idle
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AiState::Idle => "idle",
            AiState::Move => "move",
            AiState::Attack => "attack",
        }
    }
}

/// Per-archetype values the AI and combat read every frame.
#[derive(Component, Clone, Debug)]
pub struct EnemyStats {
    pub damage: f32,
    pub attack_type: AttackType,
    pub speed: f32,
    pub attack_radius: f32,
    pub notice_radius: f32,
    pub exp: u32,
}

/// Distance and unit direction from this enemy to the player.
///
/// Overwritten every frame before the state is chosen.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct EnemySenses {
    pub distance: f32,
    pub direction: Vec2,
}

/// Gap between two attacks.
#[derive(Component, Debug, Clone, Copy)]
pub struct AttackTimer(pub Cooldown);

impl AttackTimer {
    pub fn from_millis(millis: u64) -> Self {
        Self(Cooldown::from_millis(millis))
    }
}

/// Direction an enemy is pushed after a hit, applied while invulnerable.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Knockback(pub Vec2);

/// Present once health reached zero. The entity is despawned when the
/// timer runs out.
#[derive(Component, Debug, Clone, Copy)]
pub struct DeathTimer(pub Cooldown);

impl DeathTimer {
    pub fn started(now: Duration, duration: Duration) -> Self {
        let mut timer = Cooldown::new(duration);
        timer.start(now);
        Self(timer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_follows_distance() {
        assert_eq!(AiState::from_distance(500.0, 400.0, 80.0), AiState::Idle);
        assert_eq!(AiState::from_distance(200.0, 400.0, 80.0), AiState::Move);
        assert_eq!(AiState::from_distance(50.0, 400.0, 80.0), AiState::Attack);
    }

    #[test]
    fn radii_are_inclusive() {
        assert_eq!(AiState::from_distance(400.0, 400.0, 80.0), AiState::Move);
        assert_eq!(AiState::from_distance(80.0, 400.0, 80.0), AiState::Attack);
        assert_eq!(AiState::from_distance(400.01, 400.0, 80.0), AiState::Idle);
    }
}
