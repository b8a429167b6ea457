//! Map layers read from CSV grids.
//!
//! A map is four grids of the same size, one file per layer named
//! `<map>_<Layer>.csv`. Each cell is a token; `-1` or an empty cell means
//! no tile.

use bevy::prelude::*;
use std::fs;
use std::path::Path;

use super::error::DataLoadError;

/// Token marking an empty cell.
pub const EMPTY_CELL: &str = "-1";

/// One layer of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapLayer {
    /// Invisible walls
    Boundary,
    /// Destructible grass
    Grass,
    /// Large decorations; the token is the object sprite index
    Objects,
    /// Player and monster spawn codes
    Entities,
}

impl MapLayer {
    pub const ALL: [MapLayer; 4] = [
        MapLayer::Boundary,
        MapLayer::Grass,
        MapLayer::Objects,
        MapLayer::Entities,
    ];

    /// Suffix of the layer's CSV file.
    pub fn file_suffix(&self) -> &'static str {
        match self {
            MapLayer::Boundary => "FloorBlocks",
            MapLayer::Grass => "Grass",
            MapLayer::Objects => "Objects",
            MapLayer::Entities => "Entities",
        }
    }
}

/// Rows of cell tokens.
pub type Grid = Vec<Vec<String>>;

/// A non-empty cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell<'a> {
    pub row: usize,
    pub col: usize,
    pub token: &'a str,
}

/// Resource holding every layer of the current map.
#[derive(Resource, Debug, Clone, Default)]
pub struct MapLayout {
    pub name: String,
    pub boundary: Grid,
    pub grass: Grid,
    pub objects: Grid,
    pub entities: Grid,
}

impl MapLayout {
    /// Build a map from in-memory CSV text, one string per layer.
    pub fn from_csv_strs(boundary: &str, grass: &str, objects: &str, entities: &str) -> Self {
        Self {
            name: "inline".to_string(),
            boundary: parse_csv(boundary),
            grass: parse_csv(grass),
            objects: parse_csv(objects),
            entities: parse_csv(entities),
        }
    }

    /// Read `<dir>/<name>_<Layer>.csv` for every layer.
    ///
    /// A layer that cannot be read is logged and left empty so the rest of
    /// the map still builds.
    pub fn load(dir: &Path, name: &str) -> Self {
        let mut layout = Self {
            name: name.to_string(),
            ..default()
        };

        for layer in MapLayer::ALL {
            let path = dir.join(format!("{}_{}.csv", name, layer.file_suffix()));
            match read_grid(&path) {
                Ok(grid) => {
                    info!("Loaded map layer {:?} ({} rows)", layer, grid.len());
                    *layout.layer_mut(layer) = grid;
                }
                Err(e) => error!("{}", e),
            }
        }

        if let Err(e) = layout.validate() {
            warn!("{}", e);
        }

        layout
    }

    pub fn layer(&self, layer: MapLayer) -> &Grid {
        match layer {
            MapLayer::Boundary => &self.boundary,
            MapLayer::Grass => &self.grass,
            MapLayer::Objects => &self.objects,
            MapLayer::Entities => &self.entities,
        }
    }

    fn layer_mut(&mut self, layer: MapLayer) -> &mut Grid {
        match layer {
            MapLayer::Boundary => &mut self.boundary,
            MapLayer::Grass => &mut self.grass,
            MapLayer::Objects => &mut self.objects,
            MapLayer::Entities => &mut self.entities,
        }
    }

    /// Non-empty cells of a layer in row-major order.
    pub fn cells(&self, layer: MapLayer) -> impl Iterator<Item = Cell<'_>> {
        self.layer(layer).iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, token)| !token.is_empty() && token.as_str() != EMPTY_CELL)
                .map(move |(col, token)| Cell {
                    row,
                    col,
                    token: token.as_str(),
                })
        })
    }

    /// Check that every non-empty layer has the same width and height.
    pub fn validate(&self) -> Result<(), DataLoadError> {
        let dims = |grid: &Grid| {
            (
                grid.iter().map(|row| row.len()).max().unwrap_or(0),
                grid.len(),
            )
        };

        let mut expected: Option<(usize, usize)> = None;
        for layer in MapLayer::ALL {
            let grid = self.layer(layer);
            if grid.is_empty() {
                continue;
            }
            let (width, height) = dims(grid);
            match expected {
                None => expected = Some((width, height)),
                Some((expected_width, expected_height))
                    if (expected_width, expected_height) != (width, height) =>
                {
                    return Err(DataLoadError::GridMismatch {
                        layer: layer.file_suffix().to_string(),
                        expected_width,
                        expected_height,
                        actual_width: width,
                        actual_height: height,
                    });
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Split CSV text into rows of trimmed tokens. Blank lines are dropped.
pub fn parse_csv(text: &str) -> Grid {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| line.split(',').map(|cell| cell.trim().to_string()).collect())
        .collect()
}

fn read_grid(path: &Path) -> Result<Grid, DataLoadError> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound(path.display().to_string()));
    }

    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    Ok(parse_csv(&contents))
}
