//! Rendering module - sprites, animation clips, and the follow camera.

mod camera;
mod catalog;
mod components;
mod plugin;
mod sprites;
pub mod visual_config;

pub use camera::{camera_offset, depth_order, to_screen, CameraOffset};
pub use catalog::{AnimationCatalog, AnimationLibrary, PLAYER_IDLE_CLIP};
pub use components::{Appearance, Floor};
pub use plugin::RenderingPlugin;
pub use sprites::{flicker_alpha, resolve_clip};
pub use visual_config::{rgb, VisualConfig};
