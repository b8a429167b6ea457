//! Sound handles and cue playback through kira.

use bevy::prelude::*;
use bevy_kira_audio::{Audio, AudioControl, AudioSource};
use std::collections::HashMap;

use crate::core::{AttackType, GameConfig, SoundCue};

/// File for a cue, relative to the asset root.
pub fn cue_path(cue: SoundCue) -> &'static str {
    match cue {
        SoundCue::Sword => "audio/sword.wav",
        SoundCue::Heal => "audio/heal.wav",
        SoundCue::Flame => "audio/fire.wav",
        SoundCue::Hit => "audio/hit.wav",
        SoundCue::Death => "audio/death.wav",
        SoundCue::MonsterAttack(AttackType::Slash) => "audio/attack/slash.wav",
        SoundCue::MonsterAttack(AttackType::Claw) => "audio/attack/claw.wav",
        SoundCue::MonsterAttack(AttackType::Thunder) => "audio/attack/fireball.wav",
        SoundCue::MonsterAttack(AttackType::LeafAttack) => "audio/attack/leaf.wav",
    }
}

const ALL_CUES: [SoundCue; 9] = [
    SoundCue::Sword,
    SoundCue::Heal,
    SoundCue::Flame,
    SoundCue::Hit,
    SoundCue::Death,
    SoundCue::MonsterAttack(AttackType::Slash),
    SoundCue::MonsterAttack(AttackType::Claw),
    SoundCue::MonsterAttack(AttackType::Thunder),
    SoundCue::MonsterAttack(AttackType::LeafAttack),
];

/// Loaded handles for every cue.
#[derive(Resource, Default)]
pub struct SoundLibrary {
    cues: HashMap<&'static str, Handle<AudioSource>>,
}

impl SoundLibrary {
    pub fn get(&self, cue: SoundCue) -> Option<&Handle<AudioSource>> {
        self.cues.get(cue_path(cue))
    }
}

/// Queue every cue file and start the background track.
pub fn load_sounds(
    mut commands: Commands,
    config: Res<GameConfig>,
    asset_server: Res<AssetServer>,
    audio: Res<Audio>,
) {
    let cues = ALL_CUES
        .iter()
        .map(|&cue| (cue_path(cue), asset_server.load(cue_path(cue))))
        .collect();
    commands.insert_resource(SoundLibrary { cues });

    audio
        .play(asset_server.load(config.audio.music.clone()))
        .looped()
        .with_volume(config.audio.music_volume);
    info!("Loaded {} sound cues", ALL_CUES.len());
}

/// Play every cue raised this frame.
pub fn play_sound_cues(
    mut cues: EventReader<SoundCue>,
    config: Res<GameConfig>,
    library: Res<SoundLibrary>,
    audio: Res<Audio>,
) {
    for &cue in cues.read() {
        let Some(handle) = library.get(cue) else {
            debug!("No sound for {:?}", cue);
            continue;
        };
        audio.play(handle.clone()).with_volume(config.audio.effects_volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_cue_has_a_distinct_file() {
        let mut paths: Vec<_> = ALL_CUES.iter().map(|&cue| cue_path(cue)).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), ALL_CUES.len());
    }
}
