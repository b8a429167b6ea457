//! Level construction from map layers.
//!
//! One pass over every layer spawns the static tiles, the player, and the
//! enemies. Bad cells are skipped with a warning.

use bevy::prelude::*;
use rand::Rng;

use super::map::{Cell, MapLayer, MapLayout};
use crate::combat::Attackable;
use crate::core::GameConfig;
use crate::enemies::{spawn_enemy, Archetype, MonsterRegistry};
use crate::movement::{Body, Obstacle};
use crate::player::spawn_player;
use crate::rendering::Appearance;

/// Entity layer code for the player spawn.
pub const PLAYER_SPAWN_CODE: u32 = 394;

/// Number of grass sprite variants picked from at random.
const GRASS_VARIANTS: usize = 3;

/// Static tile kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    /// Invisible wall
    Boundary,
    /// Blocks movement until cut
    Grass,
    /// Two tiles tall decoration
    Object,
}

/// Marker for static map tiles.
#[derive(Component, Debug, Clone, Copy)]
pub struct Tile(pub TileKind);

/// What a build produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BuildSummary {
    pub player: Option<Entity>,
    pub enemies: u32,
    pub tiles: u32,
    pub skipped: u32,
}

/// Spawn everything the map describes.
pub fn build_level(
    commands: &mut Commands,
    layout: &MapLayout,
    config: &GameConfig,
    monsters: &MonsterRegistry,
) -> BuildSummary {
    let mut summary = BuildSummary::default();
    let tile = config.tile_size;
    let mut rng = rand::thread_rng();

    for cell in layout.cells(MapLayer::Boundary) {
        spawn_tile(commands, TileKind::Boundary, top_left(&cell, tile), Vec2::splat(tile), None);
        summary.tiles += 1;
    }

    for cell in layout.cells(MapLayer::Grass) {
        let variant = rng.gen_range(0..GRASS_VARIANTS);
        let position = top_left(&cell, tile);
        spawn_tile(commands, TileKind::Grass, position, Vec2::splat(tile), Some(variant));
        summary.tiles += 1;
    }

    for cell in layout.cells(MapLayer::Objects) {
        let Ok(index) = cell.token.parse::<usize>() else {
            warn!("Skipping object cell ({}, {}): bad token '{}'", cell.row, cell.col, cell.token);
            summary.skipped += 1;
            continue;
        };
        // Objects are drawn one tile above their cell
        let position = top_left(&cell, tile) - Vec2::new(0.0, tile);
        spawn_tile(commands, TileKind::Object, position, Vec2::new(tile, tile * 2.0), Some(index));
        summary.tiles += 1;
    }

    for cell in layout.cells(MapLayer::Entities) {
        let Ok(code) = cell.token.parse::<u32>() else {
            warn!("Skipping entity cell ({}, {}): bad token '{}'", cell.row, cell.col, cell.token);
            summary.skipped += 1;
            continue;
        };
        let position = top_left(&cell, tile);

        if code == PLAYER_SPAWN_CODE {
            if summary.player.is_some() {
                warn!("Ignoring extra player spawn at ({}, {})", cell.row, cell.col);
                summary.skipped += 1;
                continue;
            }
            summary.player = Some(spawn_player(commands, position, config));
            continue;
        }

        let Some(archetype) = Archetype::from_spawn_code(code) else {
            warn!("Skipping unknown entity code {} at ({}, {})", code, cell.row, cell.col);
            summary.skipped += 1;
            continue;
        };
        let Some(def) = monsters.get(archetype) else {
            warn!("No stats for {:?}, skipping spawn", archetype);
            summary.skipped += 1;
            continue;
        };
        spawn_enemy(commands, archetype, def, position, config);
        summary.enemies += 1;
    }

    summary
}

fn top_left(cell: &Cell, tile: f32) -> Vec2 {
    Vec2::new(cell.col as f32 * tile, cell.row as f32 * tile)
}

fn spawn_tile(
    commands: &mut Commands,
    kind: TileKind,
    position: Vec2,
    size: Vec2,
    variant: Option<usize>,
) -> Entity {
    let inflate = match kind {
        TileKind::Boundary => (0.0, 0.0),
        TileKind::Grass => (0.0, -10.0),
        TileKind::Object => (0.0, -40.0),
    };
    let mut tile = commands.spawn((
        Tile(kind),
        Obstacle,
        Body::from_top_left(position, size, inflate),
    ));

    match kind {
        TileKind::Boundary => {}
        TileKind::Grass => {
            tile.insert((Attackable::Foliage, Appearance::variant("grass", variant.unwrap_or(0))));
        }
        TileKind::Object => {
            tile.insert(Appearance::variant("objects", variant.unwrap_or(0)));
        }
    }

    tile.id()
}
