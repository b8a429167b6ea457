//! Core game module - states, events, timers, and configuration.
//!
//! This module provides the foundation that all other game systems build upon.

mod config;
mod cooldown;
mod events;
mod plugin;
mod states;

pub use config::*;
pub use cooldown::Cooldown;
pub use events::*;
pub use plugin::{CorePlugin, GameSet};
pub use states::*;
