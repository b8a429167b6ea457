//! In-game HUD - health, energy, experience, kills, and loadout.
//!
//! Read-only: every system here only queries gameplay state.

use bevy::prelude::*;

use crate::combat::{Energy, Health, SpellTable, WeaponTable};
use crate::player::{Experience, Player, PlayerCombat, PlayerStats};
use crate::rendering::{rgb, VisualConfig};
use crate::world::Level;

/// Marker for HUD root entity.
#[derive(Component)]
pub struct HudRoot;

/// Marker for health bar fill.
#[derive(Component)]
pub struct HealthBar;

/// Marker for energy bar fill.
#[derive(Component)]
pub struct EnergyBar;

/// Marker for the experience readout.
#[derive(Component)]
pub struct ExpText;

/// Marker for the kill counter.
#[derive(Component)]
pub struct KillsText;

/// Marker for the equipped weapon and spell names.
#[derive(Component)]
pub struct LoadoutText;

/// Kill counter text, e.g. `Kills: 2 / 5`.
pub fn kills_label(level: &Level) -> String {
    format!("Kills: {} / {}", level.enemies_killed, level.total_enemies)
}

/// Spawn the HUD UI.
pub fn spawn_hud(mut commands: Commands, visuals: Res<VisualConfig>) {
    let text_color = rgb(visuals.text_color);

    // Bars top-left
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                flex_direction: FlexDirection::Column,
                ..default()
            },
            HudRoot,
        ))
        .with_children(|parent| {
            let background = rgb(visuals.bar_background);
            spawn_bar(parent, 200.0, rgb(visuals.health_color), background, HealthBar);
            spawn_bar(parent, 140.0, rgb(visuals.energy_color), background, EnergyBar);
            parent.spawn((Text::new(""), text_font(18.0), TextColor(text_color), KillsText));
        });

    // Experience bottom-right
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(20.0),
            bottom: Val::Px(20.0),
            ..default()
        },
        Text::new(""),
        text_font(18.0),
        TextColor(text_color),
        ExpText,
        HudRoot,
    ));

    // Loadout bottom-left
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            bottom: Val::Px(20.0),
            ..default()
        },
        Text::new(""),
        text_font(18.0),
        TextColor(text_color),
        LoadoutText,
        HudRoot,
    ));
}

fn text_font(size: f32) -> TextFont {
    TextFont {
        font_size: size,
        ..default()
    }
}

/// Helper to spawn a status bar.
fn spawn_bar<M: Component>(
    parent: &mut ChildBuilder,
    width: f32,
    color: Color,
    background: Color,
    bar_marker: M,
) {
    parent
        .spawn((
            Node {
                width: Val::Px(width),
                height: Val::Px(20.0),
                margin: UiRect::bottom(Val::Px(6.0)),
                border: UiRect::all(Val::Px(3.0)),
                ..default()
            },
            BackgroundColor(background),
            BorderColor(Color::srgb(0.07, 0.07, 0.07)),
        ))
        .with_children(|bg| {
            bg.spawn((
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(color),
                bar_marker,
            ));
        });
}

/// Fraction of the health bar to fill. The bar measures against the health
/// stat, so overheal past it shows as a full bar.
pub fn health_fill(current: f32, stat: f32) -> f32 {
    if stat <= 0.0 {
        return 0.0;
    }
    (current / stat).clamp(0.0, 1.0)
}

/// Update health and energy bars from the player.
pub fn update_bars(
    player_query: Query<(&Health, &Energy, &PlayerStats), With<Player>>,
    mut health_bar: Query<&mut Node, (With<HealthBar>, Without<EnergyBar>)>,
    mut energy_bar: Query<&mut Node, (With<EnergyBar>, Without<HealthBar>)>,
) {
    let Ok((health, energy, stats)) = player_query.get_single() else {
        return;
    };

    if let Ok(mut bar) = health_bar.get_single_mut() {
        bar.width = Val::Percent(health_fill(health.current, stats.current.health) * 100.0);
    }
    if let Ok(mut bar) = energy_bar.get_single_mut() {
        bar.width = Val::Percent(energy.percentage() * 100.0);
    }
}

/// Update experience, kills, and loadout readouts.
pub fn update_readouts(
    level: Res<Level>,
    weapons: Res<WeaponTable>,
    spells: Res<SpellTable>,
    player_query: Query<(&Experience, &PlayerCombat), With<Player>>,
    mut exp_text: Query<&mut Text, (With<ExpText>, Without<KillsText>, Without<LoadoutText>)>,
    mut kills_text: Query<&mut Text, (With<KillsText>, Without<ExpText>, Without<LoadoutText>)>,
    mut loadout_text: Query<&mut Text, (With<LoadoutText>, Without<ExpText>, Without<KillsText>)>,
) {
    let Ok((exp, combat)) = player_query.get_single() else {
        return;
    };

    if let Ok(mut text) = exp_text.get_single_mut() {
        text.0 = format!("{}", exp.0);
    }
    if let Ok(mut text) = kills_text.get_single_mut() {
        text.0 = kills_label(&level);
    }
    if let Ok(mut text) = loadout_text.get_single_mut() {
        text.0 = format!(
            "{} | {}",
            weapons.get(combat.weapon_index).name,
            spells.get(combat.spell_index).name
        );
    }
}
