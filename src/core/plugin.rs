//! Core plugin that sets up game states, events, and the per-frame order.

use bevy::prelude::*;

use super::config::GameConfig;
use super::events::*;
use super::states::*;

/// Per-frame update order.
///
/// Gameplay sets run chained and only while `GameState::Playing`, so every
/// frame is one fixed pass: the player acts, enemies react to the player's
/// new position, then hits are resolved against both. Nothing is iterated
/// to a fixed point.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Raw device input is mapped to actions
    Input,
    /// Player controller: input, cooldowns, status, movement, regen
    Player,
    /// Attack and spell events spawn or destroy hitboxes
    Attacks,
    /// Enemy AI and movement
    Enemies,
    /// Hitbox collision pass and damage application
    Combat,
    /// Kills, experience, deferred removals
    Bookkeeping,
    /// Game-over / victory evaluation
    EndConditions,
    /// Particle lifetimes (runs in every state)
    Effects,
}

/// Core plugin - must be added first as other plugins depend on it.
///
/// Requires `StatesPlugin` (part of `DefaultPlugins`).
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app
            .init_resource::<GameConfig>()
            .init_state::<GameState>()

            // Register global events
            .add_event::<AttackStarted>()
            .add_event::<AttackEnded>()
            .add_event::<SpellCast>()
            .add_event::<DamageEvent>()
            .add_event::<EnemyDefeated>()
            .add_event::<SoundCue>()

            // Frame order
            .configure_sets(
                Update,
                (
                    GameSet::Input,
                    GameSet::Player,
                    GameSet::Attacks,
                    GameSet::Enemies,
                    GameSet::Combat,
                    GameSet::Bookkeeping,
                    GameSet::EndConditions,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .configure_sets(Update, GameSet::Effects.after(GameSet::EndConditions))
            .add_systems(OnEnter(GameState::GameOver), log_outcome)
            .add_systems(OnEnter(GameState::Won), log_outcome);
    }
}

fn log_outcome(state: Res<State<GameState>>) {
    info!("Level finished: {:?}", state.get());
}
