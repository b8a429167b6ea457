//! Headless simulation tests: a real `App` with the gameplay plugins, an
//! in-memory map, and a clock advanced by hand.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use std::time::Duration;

use grove_brawler::combat::{AttackHitbox, Health};
use grove_brawler::core::GameState;
use grove_brawler::effects::ParticleEffect;
use grove_brawler::enemies::{AiState, Archetype, DeathTimer, Enemy, MonsterRegistry};
use grove_brawler::movement::Body;
use grove_brawler::player::{
    Action, Experience, Facing, Player, PlayerCombat, PlayerStats, PlayerStatus, StatKind,
};
use grove_brawler::world::{Level, MapLayout, Tile, TileKind};
use grove_brawler::SimulationPlugin;

const ROWS: usize = 4;
const COLS: usize = 20;

/// CSV grid with `code` at each listed (row, col).
fn grid(cells: &[(usize, usize, &str)]) -> String {
    let mut rows = vec![vec!["-1".to_string(); COLS]; ROWS];
    for &(row, col, code) in cells {
        rows[row][col] = code.to_string();
    }
    rows.iter()
        .map(|row| row.join(","))
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_app(layout: MapLayout, monsters: MonsterRegistry) -> App {
    let mut app = App::new();
    app.add_plugins(StatesPlugin)
        .init_resource::<Time>()
        .insert_resource(monsters)
        .insert_resource(layout)
        .add_plugins(SimulationPlugin);
    app
}

fn app_with(grass: &[(usize, usize, &str)], entities: &[(usize, usize, &str)]) -> App {
    let layout = MapLayout::from_csv_strs(&grid(&[]), &grid(grass), &grid(&[]), &grid(entities));
    build_app(layout, MonsterRegistry::default())
}

/// Squids with 10 health so one sword hit kills them.
fn fragile_squids() -> MonsterRegistry {
    let mut registry = MonsterRegistry::default();
    if let Some(squid) = registry.monsters.get_mut(&Archetype::Squid) {
        squid.health = 10.0;
    }
    registry
}

fn step(app: &mut App, millis: u64) {
    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(millis));
    app.update();
}

/// Press for exactly one frame.
fn tap(app: &mut App, action: Action, millis: u64) {
    app.world_mut().resource_mut::<ButtonInput<Action>>().press(action);
    step(app, millis);
    let mut actions = app.world_mut().resource_mut::<ButtonInput<Action>>();
    actions.release(action);
    actions.clear();
}

fn player_health(app: &mut App) -> f32 {
    let mut query = app.world_mut().query_filtered::<&Health, With<Player>>();
    query.single(app.world()).current
}

fn player_body(app: &mut App) -> Body {
    let mut query = app.world_mut().query_filtered::<&Body, With<Player>>();
    *query.single(app.world())
}

fn enemy_health(app: &mut App) -> f32 {
    let mut query = app.world_mut().query_filtered::<&Health, With<Enemy>>();
    query.single(app.world()).current
}

fn enemy_body(app: &mut App) -> Body {
    let mut query = app.world_mut().query_filtered::<&Body, With<Enemy>>();
    *query.single(app.world())
}

fn face(app: &mut App, facing: Facing) {
    let mut query = app.world_mut().query_filtered::<&mut PlayerStatus, With<Player>>();
    query.single_mut(app.world_mut()).facing = facing;
}

fn state(app: &App) -> GameState {
    app.world().resource::<State<GameState>>().get().clone()
}

fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    app.world_mut()
        .query_filtered::<Entity, F>()
        .iter(app.world())
        .count()
}

#[test]
fn builds_player_enemies_and_tiles() {
    let mut app = app_with(
        &[(0, 5, "1"), (3, 7, "2")],
        &[(1, 1, "394"), (1, 10, "393"), (2, 12, "390"), (2, 14, "999"), (0, 0, "x")],
    );
    app.update();

    assert_eq!(count::<With<Player>>(&mut app), 1);
    assert_eq!(count::<With<Enemy>>(&mut app), 2);
    assert_eq!(count::<With<Tile>>(&mut app), 2);
    assert_eq!(app.world().resource::<Level>().total_enemies, 2);

    let body = player_body(&mut app);
    assert_eq!(body.rect.min, Vec2::new(64.0, 64.0));
    assert_eq!(body.hitbox.height(), 64.0 - 26.0);
}

#[test]
fn map_without_enemies_is_won_immediately() {
    let mut app = app_with(&[], &[(1, 1, "394")]);
    app.update();
    app.update();
    assert_eq!(state(&app), GameState::Won);
}

#[test]
fn enemy_state_follows_distance_to_player() {
    // Squid: notice 360, attack 80
    let cases = [
        (500.0, AiState::Idle),
        (200.0, AiState::Move),
        (50.0, AiState::Attack),
    ];
    for (distance, expected) in cases {
        let mut app = app_with(&[], &[(1, 1, "394"), (1, 18, "393")]);
        app.update();

        let center = player_body(&mut app).center() + Vec2::new(distance, 0.0);
        let mut query = app.world_mut().query_filtered::<&mut Body, With<Enemy>>();
        let mut body = query.single_mut(app.world_mut());
        *body = Body::new(Rect::from_center_size(center, Vec2::splat(64.0)), (0.0, 0.0));

        step(&mut app, 16);

        let mut query = app.world_mut().query::<&AiState>();
        assert_eq!(*query.single(app.world()), expected, "distance {}", distance);
    }
}

#[test]
fn player_is_invulnerable_for_half_a_second_after_a_hit() {
    // Adjacent squid hits for 20 every 400 ms
    let mut app = app_with(&[], &[(1, 1, "394"), (2, 1, "393"), (1, 18, "393")]);
    app.update();
    assert_eq!(player_health(&mut app), 30.0);

    for _ in 0..4 {
        step(&mut app, 100);
    }
    // Attack at 400 ms lands inside the window
    assert_eq!(player_health(&mut app), 30.0);

    for _ in 0..3 {
        step(&mut app, 100);
    }
    assert_eq!(player_health(&mut app), 30.0);

    step(&mut app, 100);
    assert_eq!(player_health(&mut app), 10.0);
}

#[test]
fn grass_is_cut_by_a_single_hit() {
    let mut app = app_with(&[(2, 1, "0")], &[(1, 1, "394"), (1, 18, "393")]);
    app.update();
    assert_eq!(count::<With<Tile>>(&mut app), 1);

    tap(&mut app, Action::Attack, 16);

    let remaining = app
        .world_mut()
        .query::<&Tile>()
        .iter(app.world())
        .filter(|tile| tile.0 == TileKind::Grass)
        .count();
    assert_eq!(remaining, 0);

    let leaves = count::<With<ParticleEffect>>(&mut app);
    assert!((3..=6).contains(&leaves), "{} leaves", leaves);
}

#[test]
fn weapon_hit_deals_attack_plus_weapon_damage() {
    // Raccoon: 300 health, large enough to overlap the sword below the player
    let mut app = app_with(&[], &[(1, 1, "394"), (2, 1, "392")]);
    app.update();

    tap(&mut app, Action::Attack, 16);

    let mut query = app.world_mut().query_filtered::<&Health, With<Enemy>>();
    assert_eq!(query.single(app.world()).current, 300.0 - 25.0);
}

#[test]
fn killing_an_enemy_awards_exp_and_counts() {
    let layout = MapLayout::from_csv_strs(
        &grid(&[]),
        &grid(&[]),
        &grid(&[]),
        &grid(&[(1, 1, "394"), (2, 1, "393"), (1, 15, "392"), (1, 18, "391")]),
    );
    let mut app = build_app(layout, fragile_squids());
    app.update();
    assert_eq!(app.world().resource::<Level>().total_enemies, 3);

    // Sword alone: 15 damage against 10 health
    let mut query = app.world_mut().query_filtered::<&mut PlayerStats, With<Player>>();
    query.single_mut(app.world_mut()).current.attack = 0.0;

    tap(&mut app, Action::Attack, 16);

    assert_eq!(app.world().resource::<Level>().enemies_killed, 1);
    assert_eq!(count::<With<DeathTimer>>(&mut app), 1);
    let mut query = app.world_mut().query_filtered::<&Experience, With<Player>>();
    assert_eq!(query.single(app.world()).0, 100);
    assert_eq!(state(&app), GameState::Playing);

    // Death sequence and attack window both over
    step(&mut app, 600);
    assert_eq!(count::<With<Enemy>>(&mut app), 2);
    assert_eq!(count::<With<AttackHitbox>>(&mut app), 0);
    let mut query = app.world_mut().query_filtered::<&PlayerCombat, With<Player>>();
    assert!(!query.single(app.world()).attacking);
}

#[test]
fn winning_freezes_the_level() {
    let layout = MapLayout::from_csv_strs(
        &grid(&[]),
        &grid(&[]),
        &grid(&[]),
        &grid(&[(1, 1, "394"), (2, 1, "393")]),
    );
    let mut app = build_app(layout, fragile_squids());
    app.update();

    tap(&mut app, Action::Attack, 16);
    step(&mut app, 16);
    assert_eq!(state(&app), GameState::Won);

    let before = player_body(&mut app);
    app.world_mut().resource_mut::<ButtonInput<Action>>().press(Action::Right);
    for _ in 0..10 {
        step(&mut app, 100);
    }
    assert_eq!(player_body(&mut app), before);
    assert_eq!(state(&app), GameState::Won);
}

#[test]
fn player_walls_stop_movement() {
    let layout = MapLayout::from_csv_strs(
        &grid(&[(1, 3, "395")]),
        &grid(&[]),
        &grid(&[]),
        &grid(&[(1, 1, "394"), (3, 19, "393")]),
    );
    let mut app = build_app(layout, MonsterRegistry::default());
    app.update();

    app.world_mut().resource_mut::<ButtonInput<Action>>().press(Action::Right);
    for _ in 0..30 {
        step(&mut app, 50);
    }

    // Wall occupies x 192..256; the player hitbox stops at its left edge
    assert_eq!(player_body(&mut app).hitbox.max.x, 192.0);
}

#[test]
fn keyboard_drives_actions_when_present() {
    let mut app = app_with(&[], &[(1, 1, "394"), (1, 18, "393")]);
    app.init_resource::<ButtonInput<KeyCode>>();
    app.update();

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::Space);
    step(&mut app, 16);

    let mut query = app.world_mut().query_filtered::<&PlayerCombat, With<Player>>();
    assert!(query.single(app.world()).attacking);
    assert_eq!(count::<With<AttackHitbox>>(&mut app), 1);
}

#[test]
fn casting_without_energy_does_nothing() {
    let mut app = app_with(&[], &[(1, 1, "394"), (1, 18, "393")]);
    app.update();

    let mut query = app
        .world_mut()
        .query_filtered::<&mut grove_brawler::combat::Energy, With<Player>>();
    query.single_mut(app.world_mut()).current = 5.0;

    // Flame is the first spell and costs 20
    tap(&mut app, Action::Cast, 16);

    let mut query = app.world_mut().query_filtered::<&PlayerCombat, With<Player>>();
    assert!(!query.single(app.world()).attacking);
    assert_eq!(count::<With<AttackHitbox>>(&mut app), 0);
}

#[test]
fn flame_spawns_five_spell_hitboxes() {
    let mut app = app_with(&[], &[(1, 1, "394"), (1, 18, "393")]);
    app.update();

    tap(&mut app, Action::Cast, 16);

    assert_eq!(count::<With<AttackHitbox>>(&mut app), 5);
    let mut query = app
        .world_mut()
        .query_filtered::<&grove_brawler::combat::Energy, With<Player>>();
    // 48 to start, minus 20, plus a sliver of regen
    assert!(query.single(app.world()).current < 29.0);
}

#[test]
fn hit_enemy_is_pushed_back_and_ignores_hits_while_invulnerable() {
    let mut app = app_with(&[], &[(1, 1, "394"), (1, 2, "393")]);
    app.update();
    face(&mut app, Facing::Right);

    tap(&mut app, Action::Attack, 16);
    assert_eq!(enemy_health(&mut app), 100.0 - 25.0);
    let hit_at = enemy_body(&mut app).rect.min.x;

    // The sword still overlaps for the next frames, but the squid's 300 ms
    // window swallows every repeat hit while it slides away
    step(&mut app, 100);
    let pushed_to = enemy_body(&mut app).rect.min.x;
    assert!(pushed_to > hit_at, "{} should be right of {}", pushed_to, hit_at);
    assert_eq!(enemy_health(&mut app), 75.0);

    step(&mut app, 100);
    assert!(enemy_body(&mut app).rect.min.x > pushed_to);
    assert_eq!(enemy_health(&mut app), 75.0);
}

#[test]
fn walls_stop_knockback() {
    let layout = MapLayout::from_csv_strs(
        &grid(&[(1, 3, "395")]),
        &grid(&[]),
        &grid(&[]),
        &grid(&[(1, 1, "394"), (1, 2, "393")]),
    );
    let mut app = build_app(layout, MonsterRegistry::default());
    app.update();
    face(&mut app, Facing::Right);

    tap(&mut app, Action::Attack, 16);
    step(&mut app, 100);

    // Wall occupies x 192..256
    assert_eq!(enemy_body(&mut app).hitbox.max.x, 192.0);
}

#[test]
fn heal_restores_health_up_to_the_stat_cap() {
    let mut app = app_with(&[], &[(1, 1, "394"), (1, 18, "393")]);
    app.update();
    assert_eq!(player_health(&mut app), 50.0);

    // Heal is the second spell: 20 strength plus 4 magic
    tap(&mut app, Action::SwitchSpell, 16);
    tap(&mut app, Action::Cast, 16);
    assert_eq!(player_health(&mut app), 74.0);

    // Heals go past the health stat of 100 and stop at its cap of 300
    let mut query = app.world_mut().query_filtered::<&mut Health, With<Player>>();
    query.single_mut(app.world_mut()).current = 290.0;
    step(&mut app, 600);
    tap(&mut app, Action::Cast, 16);
    assert_eq!(player_health(&mut app), 300.0);
}

#[test]
fn flame_damages_by_magic_plus_spell_strength() {
    // Squid directly below the player, inside the first flame tile
    let mut app = app_with(&[], &[(1, 1, "394"), (2, 1, "393")]);
    app.update();

    tap(&mut app, Action::Cast, 16);
    assert_eq!(enemy_health(&mut app), 100.0 - 9.0);
}

#[test]
fn upgrades_spend_experience() {
    let mut app = app_with(&[], &[(1, 1, "394"), (1, 18, "393")]);
    app.update();

    let mut query = app.world_mut().query_filtered::<&mut Experience, With<Player>>();
    query.single_mut(app.world_mut()).0 = 120;

    tap(&mut app, Action::Upgrade(StatKind::Attack), 16);
    tap(&mut app, Action::Upgrade(StatKind::Attack), 16);

    // The first costs 100, the second 140 and is refused
    let mut query = app
        .world_mut()
        .query_filtered::<(&PlayerStats, &Experience), With<Player>>();
    let (stats, exp) = query.single(app.world());
    assert!((stats.current.attack - 12.0).abs() < 1e-4);
    assert_eq!(exp.0, 20);
}

#[test]
fn attack_and_cast_on_the_same_frame_both_fire() {
    let mut app = app_with(&[], &[(1, 1, "394"), (1, 18, "393")]);
    app.update();

    let mut actions = app.world_mut().resource_mut::<ButtonInput<Action>>();
    actions.press(Action::Attack);
    actions.press(Action::Cast);
    step(&mut app, 16);

    // One sword swing plus five flame tiles
    assert_eq!(count::<With<AttackHitbox>>(&mut app), 6);
}
