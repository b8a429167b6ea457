//! Input source - maps the keyboard onto gameplay actions.
//!
//! Gameplay reads `ButtonInput<Action>` only. The keyboard feeds it when one
//! exists; headless runs and tests press actions directly.

use bevy::prelude::*;

use super::components::StatKind;

/// The fixed set of gameplay inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Up,
    Down,
    Left,
    Right,
    Attack,
    Cast,
    SwitchWeapon,
    SwitchSpell,
    /// Spend experience on one stat
    Upgrade(StatKind),
}

/// Keyboard layout for each action.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub bindings: Vec<(KeyCode, Action)>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            bindings: vec![
                (KeyCode::ArrowUp, Action::Up),
                (KeyCode::ArrowDown, Action::Down),
                (KeyCode::ArrowLeft, Action::Left),
                (KeyCode::ArrowRight, Action::Right),
                (KeyCode::Space, Action::Attack),
                (KeyCode::ControlLeft, Action::Cast),
                (KeyCode::KeyQ, Action::SwitchWeapon),
                (KeyCode::KeyE, Action::SwitchSpell),
                (KeyCode::Digit1, Action::Upgrade(StatKind::Health)),
                (KeyCode::Digit2, Action::Upgrade(StatKind::Energy)),
                (KeyCode::Digit3, Action::Upgrade(StatKind::Attack)),
                (KeyCode::Digit4, Action::Upgrade(StatKind::Magic)),
                (KeyCode::Digit5, Action::Upgrade(StatKind::Speed)),
            ],
        }
    }
}

/// Mirror the keyboard into the action state.
///
/// Clearing first means `just_pressed` holds for exactly one frame per key
/// press, which is what the edge-triggered actions rely on.
pub fn map_keyboard_to_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    bindings: Res<KeyBindings>,
    mut actions: ResMut<ButtonInput<Action>>,
) {
    actions.clear();

    for &(key, action) in &bindings.bindings {
        if keyboard.pressed(key) {
            actions.press(action);
        } else {
            actions.release(action);
        }
    }
}
