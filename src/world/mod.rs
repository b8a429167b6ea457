//! World module - map layers, level construction, and end conditions.

mod builder;
mod error;
mod level;
mod map;
mod plugin;

pub use builder::{build_level, BuildSummary, Tile, TileKind, PLAYER_SPAWN_CODE};
pub use error::{read_ron, DataLoadError, StartupError};
pub use level::{evaluate_end, Level};
pub use map::{parse_csv, Cell, MapLayer, MapLayout};
pub use plugin::WorldPlugin;
