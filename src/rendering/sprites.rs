//! Sprite attachment, frame selection, and hit flicker.

use bevy::prelude::*;
use std::time::Duration;

use super::catalog::AnimationLibrary;
use super::components::Appearance;
use crate::combat::Invulnerability;
use crate::core::GameConfig;
use crate::enemies::{AiState, DeathTimer};
use crate::player::PlayerStatus;

/// Give every new `Appearance` a sprite to draw into.
pub fn attach_sprites(mut commands: Commands, added: Query<Entity, Added<Appearance>>) {
    for entity in added.iter() {
        commands
            .entity(entity)
            .insert((Sprite::default(), Visibility::Hidden));
    }
}

/// Clip id an appearance resolves to this frame.
///
/// A dying character sheet switches to its `death` clip.
pub fn resolve_clip(
    appearance: &Appearance,
    status: Option<&PlayerStatus>,
    ai_state: Option<&AiState>,
    dying: bool,
) -> String {
    match appearance {
        Appearance::Clip(clip) | Appearance::Still { clip, .. } => clip.clone(),
        Appearance::Sheet(base) if dying => format!("{}/death", base),
        Appearance::Sheet(base) => match (status, ai_state) {
            (Some(status), _) => format!("{}/{}", base, status.clip_name()),
            (None, Some(state)) => format!("{}/{}", base, state.name()),
            (None, None) => base.clone(),
        },
    }
}

/// Frame index for a looping clip at `now`.
pub fn frame_index(now: Duration, fps: f32, frames: usize) -> usize {
    if frames == 0 {
        return 0;
    }
    (now.as_secs_f32() * fps) as usize % frames
}

/// Frame index for a clip played once and held on its last frame.
pub fn once_frame_index(elapsed: Duration, fps: f32, frames: usize) -> usize {
    if frames == 0 {
        return 0;
    }
    ((elapsed.as_secs_f32() * fps) as usize).min(frames - 1)
}

/// Pick the current frame. Clips without images hide the sprite.
///
/// Dying enemies play their death clip once. Without one they play out
/// their last state clip once and freeze.
pub fn select_frames(
    time: Res<Time>,
    config: Res<GameConfig>,
    library: Option<Res<AnimationLibrary>>,
    mut query: Query<(
        &Appearance,
        &mut Sprite,
        &mut Visibility,
        Option<&PlayerStatus>,
        Option<&AiState>,
        Option<&DeathTimer>,
    )>,
) {
    let Some(library) = library else {
        return;
    };
    let now = time.elapsed();
    let fps = config.effects.animation_fps;

    for (appearance, mut sprite, mut visibility, status, ai_state, death) in query.iter_mut() {
        let dying = death.is_some();
        let mut frames = library.frames(&resolve_clip(appearance, status, ai_state, dying));
        if frames.is_empty() && dying {
            frames = library.frames(&resolve_clip(appearance, status, ai_state, false));
        }

        if frames.is_empty() {
            *visibility = Visibility::Hidden;
            continue;
        }

        let index = match (appearance, death) {
            (Appearance::Still { frame, .. }, _) => frame % frames.len(),
            (_, Some(death)) => once_frame_index(death.0.elapsed(now), fps, frames.len()),
            (_, None) => frame_index(now, fps, frames.len()),
        };
        if sprite.image != frames[index] {
            sprite.image = frames[index].clone();
        }
        *visibility = Visibility::Inherited;
    }
}

/// Opacity of a flickering sprite at `now`.
pub fn flicker_alpha(now: Duration) -> f32 {
    if (now.as_millis() as f32).sin() >= 0.0 {
        1.0
    } else {
        0.0
    }
}

/// Blink anything inside its invulnerability window.
pub fn flicker_invulnerable(time: Res<Time>, mut query: Query<(&Invulnerability, &mut Sprite)>) {
    let now = time.elapsed();

    for (invulnerability, mut sprite) in query.iter_mut() {
        let alpha = if invulnerability.is_vulnerable(now) {
            1.0
        } else {
            flicker_alpha(now)
        };
        sprite.color.set_alpha(alpha);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::{Activity, Facing};

    #[test]
    fn sheet_follows_state() {
        let status = PlayerStatus {
            facing: Facing::Up,
            activity: Activity::Attacking,
        };
        let player = Appearance::sheet("player");
        assert_eq!(resolve_clip(&player, Some(&status), None, false), "player/up_attack");

        let squid = Appearance::sheet("monsters/squid");
        assert_eq!(
            resolve_clip(&squid, None, Some(&AiState::Move), false),
            "monsters/squid/move"
        );
        assert_eq!(
            resolve_clip(&squid, None, Some(&AiState::Move), true),
            "monsters/squid/death"
        );

        let grass = Appearance::variant("grass", 2);
        assert_eq!(resolve_clip(&grass, None, None, true), "grass");
    }

    #[test]
    fn frames_loop() {
        assert_eq!(frame_index(Duration::from_millis(0), 9.0, 4), 0);
        assert_eq!(frame_index(Duration::from_millis(500), 10.0, 4), 1);
        assert_eq!(frame_index(Duration::from_secs(3), 9.0, 0), 0);
    }

    #[test]
    fn death_clip_plays_once_and_holds() {
        assert_eq!(once_frame_index(Duration::ZERO, 10.0, 4), 0);
        assert_eq!(once_frame_index(Duration::from_millis(250), 10.0, 4), 2);
        assert_eq!(once_frame_index(Duration::from_secs(5), 10.0, 4), 3);
        assert_eq!(once_frame_index(Duration::from_secs(5), 10.0, 0), 0);
    }

    #[test]
    fn flicker_alternates() {
        // sin(0) = 0, sin(4) < 0
        assert_eq!(flicker_alpha(Duration::from_millis(0)), 1.0);
        assert_eq!(flicker_alpha(Duration::from_millis(4)), 0.0);
    }
}
