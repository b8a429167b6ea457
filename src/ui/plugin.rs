//! UI plugin - HUD and end-of-level banner.

use bevy::prelude::*;

use super::hud;
use crate::core::GameState;
use crate::rendering::{rgb, VisualConfig};

/// UI plugin - handles all user interface.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, hud::spawn_hud)
            .add_systems(PostUpdate, (hud::update_bars, hud::update_readouts))
            .add_systems(OnEnter(GameState::GameOver), spawn_banner)
            .add_systems(OnEnter(GameState::Won), spawn_banner);
    }
}

/// Marker for the game over / victory overlay.
#[derive(Component)]
struct BannerUi;

/// Banner text for a terminal state.
pub fn banner_text(state: &GameState) -> Option<&'static str> {
    match state {
        GameState::Playing => None,
        GameState::GameOver => Some("GAME OVER"),
        GameState::Won => Some("YOU WIN"),
    }
}

/// Cover the frozen level with the outcome.
fn spawn_banner(mut commands: Commands, state: Res<State<GameState>>, visuals: Res<VisualConfig>) {
    let Some(text) = banner_text(state.get()) else {
        return;
    };
    let (r, g, b) = visuals.banner_color;

    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                position_type: PositionType::Absolute,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::srgba(r, g, b, 0.6)),
            BannerUi,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(text),
                TextFont {
                    font_size: 72.0,
                    ..default()
                },
                TextColor(rgb(visuals.text_color)),
            ));
        });
}
