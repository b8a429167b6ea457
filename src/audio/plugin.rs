//! Audio plugin - kira playback of gameplay sound cues.

use bevy::prelude::*;

use super::sounds::{load_sounds, play_sound_cues, SoundLibrary};

/// Plays `SoundCue` events. Needs `bevy_kira_audio::AudioPlugin` and
/// Bevy's own audio plugin disabled.
pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sounds).add_systems(
            PostUpdate,
            play_sound_cues.run_if(resource_exists::<SoundLibrary>),
        );
    }
}
