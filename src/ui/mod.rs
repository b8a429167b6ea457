//! UI module - HUD overlay and end-of-level banner.

mod hud;
mod plugin;

pub use hud::kills_label;
pub use plugin::{banner_text, UiPlugin};
