//! Level bookkeeping: kill counts, experience, and end conditions.

use bevy::prelude::*;

use super::builder::build_level;
use super::error::StartupError;
use super::map::MapLayout;
use crate::combat::Health;
use crate::core::{EnemyDefeated, GameConfig, GameState};
use crate::enemies::MonsterRegistry;
use crate::player::{Experience, Player};

/// Running counters for the current level.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Level {
    pub total_enemies: u32,
    pub enemies_killed: u32,
}

/// Which terminal state, if any, the level has reached.
///
/// A dead player loses even if the last enemy fell on the same frame.
pub fn evaluate_end(player_health: f32, level: &Level) -> Option<GameState> {
    if player_health <= 0.0 {
        Some(GameState::GameOver)
    } else if level.enemies_killed >= level.total_enemies {
        Some(GameState::Won)
    } else {
        None
    }
}

/// Build the map held in `MapLayout`.
///
/// A map without a player spawn is unplayable, so the app exits.
pub fn spawn_level(
    mut commands: Commands,
    layout: Res<MapLayout>,
    config: Res<GameConfig>,
    monsters: Res<MonsterRegistry>,
    mut level: ResMut<Level>,
    mut exit: EventWriter<AppExit>,
) {
    let summary = build_level(&mut commands, &layout, &config, &monsters);

    if summary.player.is_none() {
        error!("{}", StartupError::MissingPlayerSpawn(layout.name.clone()));
        exit.send(AppExit::error());
        return;
    }

    level.total_enemies = summary.enemies;
    level.enemies_killed = 0;
    info!(
        "Built map '{}': {} tiles, {} enemies, {} cells skipped",
        layout.name, summary.tiles, summary.enemies, summary.skipped
    );
}

/// Award experience and count kills.
pub fn record_kills(
    mut defeated_events: EventReader<EnemyDefeated>,
    mut level: ResMut<Level>,
    mut player_query: Query<&mut Experience, With<Player>>,
) {
    for event in defeated_events.read() {
        level.enemies_killed += 1;
        if let Ok(mut exp) = player_query.get_single_mut() {
            exp.gain(event.exp);
        }
        debug!(
            "Kill {}/{}: {} for {} exp",
            level.enemies_killed,
            level.total_enemies,
            event.archetype.name(),
            event.exp
        );
    }
}

/// Move to game over or victory once either condition holds.
pub fn check_end_conditions(
    level: Res<Level>,
    player_query: Query<&Health, With<Player>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let Ok(health) = player_query.get_single() else {
        return;
    };

    if let Some(outcome) = evaluate_end(health.current, &level) {
        next_state.set(outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_when_every_enemy_is_killed() {
        let mut level = Level {
            total_enemies: 5,
            enemies_killed: 0,
        };
        for _ in 0..4 {
            level.enemies_killed += 1;
            assert_eq!(evaluate_end(50.0, &level), None);
        }
        level.enemies_killed += 1;
        assert_eq!(evaluate_end(50.0, &level), Some(GameState::Won));
    }

    #[test]
    fn death_beats_victory() {
        let level = Level {
            total_enemies: 1,
            enemies_killed: 1,
        };
        assert_eq!(evaluate_end(0.0, &level), Some(GameState::GameOver));
    }

    #[test]
    fn empty_map_is_won_immediately() {
        assert_eq!(evaluate_end(50.0, &Level::default()), Some(GameState::Won));
    }
}
