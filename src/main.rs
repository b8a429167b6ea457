//! Grove Brawler - Entry Point
//!
//! Controls:
//! - Arrow keys: Move
//! - Space: Attack
//! - Left Ctrl: Cast spell
//! - Q / E: Switch weapon / spell

use bevy::prelude::*;
use bevy_kira_audio::AudioPlugin;
use std::path::Path;

use grove_brawler::core::GameConfig;
use grove_brawler::rendering::{AnimationCatalog, PLAYER_IDLE_CLIP};
use grove_brawler::GamePlugin;

fn main() -> AppExit {
    let config = GameConfig::load();

    // The player sprite must exist before the loop starts
    let catalog = match AnimationCatalog::scan(
        Path::new(&config.paths.asset_root),
        &config.paths.graphics_dir,
    )
    .and_then(|catalog| catalog.require(PLAYER_IDLE_CLIP).map(|_| catalog))
    {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Startup failed: {}", e);
            return AppExit::error();
        }
    };

    App::new()
        // Bevy default plugins, kira replaces Bevy's audio
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: config.window.title.clone(),
                        resolution: (config.window.width, config.window.height).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(AssetPlugin {
                    file_path: config.paths.asset_root.clone(),
                    ..default()
                })
                .set(ImagePlugin::default_nearest())
                .disable::<bevy::audio::AudioPlugin>(),
        )
        .add_plugins(AudioPlugin)
        .insert_resource(catalog)

        // Our game plugin
        .add_plugins(GamePlugin { config })
        .run()
}
