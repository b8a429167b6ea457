//! Error types for map, data table, and asset loading.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading map layers and data tables.
#[derive(Debug, Error)]
pub enum DataLoadError {
    /// File could not be found.
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// File could not be read.
    #[error("Failed to read file '{path}': {details}")]
    ReadError { path: String, details: String },

    /// File was read but is not valid RON for its table.
    #[error("Failed to parse '{path}': {details}")]
    ParseError { path: String, details: String },

    /// Layers of one map disagree on their size.
    #[error("Grid mismatch in layer '{layer}': expected {expected_width}x{expected_height}, got {actual_width}x{actual_height}")]
    GridMismatch {
        layer: String,
        expected_width: usize,
        expected_height: usize,
        actual_width: usize,
        actual_height: usize,
    },
}

/// Read and deserialise a RON file.
pub fn read_ron<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let contents = fs::read_to_string(path).map_err(|e| DataLoadError::ReadError {
        path: path.display().to_string(),
        details: e.to_string(),
    })?;

    ron::from_str(&contents).map_err(|e| DataLoadError::ParseError {
        path: path.display().to_string(),
        details: e.to_string(),
    })
}

/// Conditions that stop the game before the first frame.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The player's idle sprite is required to draw anything sensible.
    #[error("Missing player sprite: no frames for '{0}'")]
    MissingPlayerSprite(String),

    /// The sprite folder could not be scanned.
    #[error("Failed to read graphics directory '{path}': {details}")]
    GraphicsRoot { path: String, details: String },

    /// The entity layer has no player spawn cell.
    #[error("Map '{0}' has no player spawn")]
    MissingPlayerSpawn(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreadable_file_is_a_read_error() {
        let result: Result<u32, _> = read_ron(Path::new("does/not/exist.ron"));
        assert!(matches!(result, Err(DataLoadError::ReadError { .. })));
    }
}
