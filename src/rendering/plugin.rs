//! Rendering plugin - 2D sprites, follow camera, and depth sorting.

use bevy::prelude::*;
use bevy::transform::TransformSystem;

use super::camera::{place_sprites, spawn_camera, spawn_floor, update_camera_offset, CameraOffset};
use super::catalog::load_animation_library;
use super::sprites::{attach_sprites, flicker_invulnerable, select_frames};
use super::visual_config::{rgb, VisualConfig};

/// Rendering plugin - draws the simulation.
///
/// Expects an `AnimationCatalog` resource, scanned before the app starts.
/// Runs in `PostUpdate` in every game state, so a finished level stays on
/// screen frozen.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        let visuals = VisualConfig::load();

        app.insert_resource(ClearColor(rgb(visuals.clear_color)))
            .insert_resource(visuals)
            .init_resource::<CameraOffset>()
            .add_systems(Startup, (spawn_camera, spawn_floor, load_animation_library))
            .add_systems(
                PostUpdate,
                (
                    attach_sprites,
                    update_camera_offset,
                    select_frames,
                    flicker_invulnerable,
                    place_sprites,
                )
                    .chain()
                    .before(TransformSystem::TransformPropagate),
            );
    }
}
