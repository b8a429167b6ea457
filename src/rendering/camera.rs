//! Centred follow camera and depth-sorted placement.
//!
//! Gameplay positions are map pixels with y down. The camera never moves;
//! instead every frame each sprite is placed at its rect minus the camera
//! offset, converted into Bevy's centred, y-up screen space.

use bevy::prelude::*;
use bevy::sprite::Anchor;
use bevy::window::PrimaryWindow;

use super::components::Floor;
use crate::core::GameConfig;
use crate::movement::Body;
use crate::player::Player;

/// Map-space position of the viewport's top-left corner.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct CameraOffset {
    pub offset: Vec2,
    pub viewport: Vec2,
}

/// Offset that puts `focus` in the middle of the viewport.
pub fn camera_offset(focus: Vec2, viewport: Vec2) -> Vec2 {
    focus - viewport / 2.0
}

/// Entities ordered back to front by the vertical centre of their rect.
pub fn depth_order(entries: &[(Entity, f32)]) -> Vec<Entity> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| a.1.total_cmp(&b.1));
    sorted.into_iter().map(|(entity, _)| entity).collect()
}

/// Convert a map-space point to Bevy world space for a fixed camera.
pub fn to_screen(point: Vec2, camera: &CameraOffset) -> Vec2 {
    let screen = point - camera.offset;
    Vec2::new(
        screen.x - camera.viewport.x / 2.0,
        camera.viewport.y / 2.0 - screen.y,
    )
}

pub fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Follow the player's visual centre.
pub fn update_camera_offset(
    config: Res<GameConfig>,
    windows: Query<&Window, With<PrimaryWindow>>,
    player_query: Query<&Body, With<Player>>,
    mut camera: ResMut<CameraOffset>,
) {
    camera.viewport = windows
        .get_single()
        .map(|window| Vec2::new(window.width(), window.height()))
        .unwrap_or(Vec2::new(config.window.width, config.window.height));

    if let Ok(body) = player_query.get_single() {
        camera.offset = camera_offset(body.rect.center(), camera.viewport);
    }
}

/// Place every sprite and stack them by depth. The floor stays at z 0.
pub fn place_sprites(
    camera: Res<CameraOffset>,
    mut sprites: Query<(Entity, &Body, &mut Transform, &mut Sprite), Without<Floor>>,
    mut floor: Query<&mut Transform, With<Floor>>,
) {
    if let Ok(mut transform) = floor.get_single_mut() {
        transform.translation = to_screen(Vec2::ZERO, &camera).extend(0.0);
    }

    let entries: Vec<(Entity, f32)> = sprites
        .iter()
        .map(|(entity, body, _, _)| (entity, body.rect.center().y))
        .collect();

    for (rank, entity) in depth_order(&entries).into_iter().enumerate() {
        let Ok((_, body, mut transform, mut sprite)) = sprites.get_mut(entity) else {
            continue;
        };
        sprite.custom_size = Some(body.rect.size());
        let depth = 1.0 + rank as f32 * 1e-3;
        transform.translation = to_screen(body.rect.center(), &camera).extend(depth);
    }
}

/// Draw the background image under everything else.
pub fn spawn_floor(
    mut commands: Commands,
    config: Res<GameConfig>,
    asset_server: Res<AssetServer>,
) {
    commands.spawn((
        Floor,
        Sprite {
            image: asset_server.load(config.paths.floor_image.clone()),
            anchor: Anchor::TopLeft,
            ..default()
        },
        Transform::default(),
    ));
}
