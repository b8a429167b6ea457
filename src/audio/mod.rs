//! Audio module - sound effects for gameplay cues and background music.

mod plugin;
mod sounds;

pub use plugin::GameAudioPlugin;
pub use sounds::{cue_path, SoundLibrary};
