//! Sprite discovery and loading.
//!
//! `AnimationCatalog` scans the graphics folder once before the app starts.
//! Every folder of images becomes a clip named by its path below the
//! graphics root (`player/down_idle`), and every single image is also a
//! one-frame clip (`weapons/sword/right`). Frames are ordered by their
//! numeric file stem when they have one.

use bevy::prelude::*;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::world::StartupError;

/// Clip the game cannot start without.
pub const PLAYER_IDLE_CLIP: &str = "player/down_idle";

const IMAGE_EXTENSIONS: [&str; 2] = ["png", "jpg"];

/// Ordered frame paths per clip, relative to the asset root.
#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationCatalog {
    pub clips: HashMap<String, Vec<String>>,
}

impl AnimationCatalog {
    /// Walk `<asset_root>/<graphics_dir>` and record every clip.
    pub fn scan(asset_root: &Path, graphics_dir: &str) -> Result<Self, StartupError> {
        let root = asset_root.join(graphics_dir);
        let mut catalog = Self::default();
        let mut pending = vec![root.clone()];

        while let Some(dir) = pending.pop() {
            let entries = fs::read_dir(&dir).map_err(|e| StartupError::GraphicsRoot {
                path: dir.display().to_string(),
                details: e.to_string(),
            })?;

            let mut frames: Vec<PathBuf> = Vec::new();
            for entry in entries.flatten() {
                let path = entry.path();
                if path.is_dir() {
                    pending.push(path);
                } else if is_image(&path) {
                    frames.push(path);
                }
            }

            if frames.is_empty() {
                continue;
            }
            frames.sort_by_key(|path| frame_sort_key(path));

            let asset_paths: Vec<String> = frames
                .iter()
                .filter_map(|frame| relative(asset_root, frame))
                .collect();

            for (frame, asset_path) in frames.iter().zip(&asset_paths) {
                if let Some(id) = relative(&root, &frame.with_extension("")) {
                    catalog.clips.insert(id, vec![asset_path.clone()]);
                }
            }
            if let Some(id) = relative(&root, &dir) {
                if !id.is_empty() {
                    catalog.clips.insert(id, asset_paths);
                }
            }
        }

        info!("Found {} sprite clips under {:?}", catalog.clips.len(), root);
        Ok(catalog)
    }

    /// Fail unless `clip` has at least one frame.
    pub fn require(&self, clip: &str) -> Result<(), StartupError> {
        if self.frames(clip).is_empty() {
            return Err(StartupError::MissingPlayerSprite(clip.to_string()));
        }
        Ok(())
    }

    pub fn frames(&self, clip: &str) -> &[String] {
        self.clips.get(clip).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Loaded image handles per clip.
#[derive(Resource, Debug, Default)]
pub struct AnimationLibrary {
    clips: HashMap<String, Vec<Handle<Image>>>,
}

impl AnimationLibrary {
    /// Frames of `clip`, empty when the clip has no images.
    pub fn frames(&self, clip: &str) -> &[Handle<Image>] {
        self.clips.get(clip).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Queue every catalogued image for loading.
pub fn load_animation_library(
    mut commands: Commands,
    catalog: Res<AnimationCatalog>,
    asset_server: Res<AssetServer>,
) {
    let clips = catalog
        .clips
        .iter()
        .map(|(id, paths)| {
            let handles = paths.iter().map(|path| asset_server.load(path.clone())).collect();
            (id.clone(), handles)
        })
        .collect();

    commands.insert_resource(AnimationLibrary { clips });
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

/// Numbered frames sort numerically, everything else by name after them.
fn frame_sort_key(path: &Path) -> (u64, String) {
    let stem = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default()
        .to_string();
    (stem.parse::<u64>().unwrap_or(u64::MAX), stem)
}

fn relative(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let parts: Vec<String> = relative
        .components()
        .map(|part| part.as_os_str().to_string_lossy().into_owned())
        .collect();
    Some(parts.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbered_frames_sort_numerically() {
        let mut frames = vec![
            PathBuf::from("a/10.png"),
            PathBuf::from("a/2.png"),
            PathBuf::from("a/1.png"),
            PathBuf::from("a/extra.png"),
        ];
        frames.sort_by_key(|path| frame_sort_key(path));
        let names: Vec<_> = frames.iter().map(|p| p.display().to_string()).collect();
        assert_eq!(names, vec!["a/1.png", "a/2.png", "a/10.png", "a/extra.png"]);
    }

    #[test]
    fn missing_clip_is_a_startup_error() {
        let mut catalog = AnimationCatalog::default();
        assert!(matches!(
            catalog.require(PLAYER_IDLE_CLIP),
            Err(StartupError::MissingPlayerSprite(_))
        ));

        catalog
            .clips
            .insert(PLAYER_IDLE_CLIP.to_string(), vec!["graphics/player/down_idle/0.png".into()]);
        assert!(catalog.require(PLAYER_IDLE_CLIP).is_ok());
        assert!(catalog.frames("monsters/squid/idle").is_empty());
    }

    #[test]
    fn unreadable_root_is_reported() {
        let result = AnimationCatalog::scan(Path::new("does/not/exist"), "graphics");
        assert!(matches!(result, Err(StartupError::GraphicsRoot { .. })));
    }
}
