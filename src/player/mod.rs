//! Player module - input mapping, controller state machine, and spawning.

mod components;
mod controller;
mod input;
mod plugin;
mod spawning;

pub use components::*;
pub use input::{Action, KeyBindings};
pub use plugin::PlayerPlugin;
pub use spawning::spawn_player;
