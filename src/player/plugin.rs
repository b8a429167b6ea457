//! Player plugin - input mapping and the controller state machine.

use bevy::prelude::*;

use super::controller;
use super::input::{map_keyboard_to_actions, Action, KeyBindings};
use crate::core::GameSet;

/// Player plugin - handles input mapping, attacks, and movement.
pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>()
            .init_resource::<ButtonInput<Action>>()
            .add_systems(
                Update,
                map_keyboard_to_actions
                    .in_set(GameSet::Input)
                    .run_if(resource_exists::<ButtonInput<KeyCode>>),
            )
            .add_systems(
                Update,
                (
                    controller::player_input,
                    controller::upgrade_stats,
                    controller::player_cooldowns,
                    controller::update_player_status,
                    controller::move_player,
                    controller::regenerate_energy,
                )
                    .chain()
                    .in_set(GameSet::Player),
            );
    }
}
