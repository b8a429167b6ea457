//! World plugin - map building and level bookkeeping.

use bevy::prelude::*;

use super::level::{check_end_conditions, record_kills, spawn_level, Level};
use super::map::MapLayout;
use crate::core::GameSet;

/// World plugin - builds the map and tracks kills and end conditions.
///
/// The map is built at startup from the `MapLayout` resource, which the
/// caller inserts (from disk or in memory) before the first update.
pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Level>()
            .add_systems(Startup, spawn_level.run_if(resource_exists::<MapLayout>))
            .add_systems(Update, record_kills.in_set(GameSet::Bookkeeping))
            .add_systems(Update, check_end_conditions.in_set(GameSet::EndConditions));
    }
}
