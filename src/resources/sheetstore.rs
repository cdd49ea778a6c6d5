//! Sprite sheet manifest registry.
//!
//! A [`SpriteManifest`] describes one sprite sheet: the image it comes
//! from, the fixed cell size of the sheet grid, and the named animations
//! defined over frame indices. Manifests are loaded from JSON once at
//! setup and shared by every entity that plays from the same sheet.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use raylib::prelude::Rectangle;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One named animation: an ordered list of sheet frame indices and a
/// playback rate.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Animation {
    pub id: String,
    pub frames: Vec<usize>,
    pub fps: f32,
}

impl Animation {
    /// Frame interval in milliseconds.
    pub fn ms_per_frame(&self) -> f64 {
        1000.0 / self.fps as f64
    }
}

/// Sheet description loaded from a JSON manifest.
///
/// Frame indices count row-major across the sheet grid; the column count
/// is derived from the bitmap width at draw time, so the manifest stays
/// valid if the image is re-exported with more rows.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SpriteManifest {
    /// Image path, relative to the working directory.
    pub spritesheet: String,
    pub frame_width: u32,
    pub frame_height: u32,
    pub animations: Vec<Animation>,
}

impl SpriteManifest {
    /// Loads and validates a manifest from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let path = path.as_ref();
        let file_content = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read manifest '{}': {}", path.display(), e))?;
        let manifest: SpriteManifest = serde_json::from_str(&file_content)
            .map_err(|e| format!("Failed to parse manifest '{}': {}", path.display(), e))?;
        manifest.validate()?;
        Ok(manifest)
    }

    /// Rejects manifests that playback cannot run on.
    ///
    /// Divisibility of the bitmap by the cell size is not checked here;
    /// the bitmap is not available until the texture loads.
    pub fn validate(&self) -> Result<(), String> {
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err(format!(
                "Manifest '{}' has a zero frame dimension",
                self.spritesheet
            ));
        }
        for animation in &self.animations {
            if animation.frames.is_empty() {
                return Err(format!("Animation '{}' has no frames", animation.id));
            }
            if animation.fps <= 0.0 {
                return Err(format!(
                    "Animation '{}' has non-positive fps {}",
                    animation.id, animation.fps
                ));
            }
        }
        Ok(())
    }

    /// Look up an animation by id.
    pub fn animation(&self, id: &str) -> Option<&Animation> {
        self.animations.iter().find(|a| a.id == id)
    }

    /// Source rectangle of `frame` on a sheet bitmap `sheet_width` pixels
    /// wide. Frames count row-major, left to right then top to bottom.
    pub fn source_rect(&self, frame: usize, sheet_width: i32) -> Rectangle {
        let cols = (sheet_width / self.frame_width as i32).max(1) as usize;
        let col = frame % cols;
        let row = frame / cols;
        Rectangle {
            x: (col as u32 * self.frame_width) as f32,
            y: (row as u32 * self.frame_height) as f32,
            width: self.frame_width as f32,
            height: self.frame_height as f32,
        }
    }
}

/// Registry of loaded manifests keyed by sheet key.
#[derive(Resource, Default)]
pub struct SheetStore {
    pub sheets: FxHashMap<String, SpriteManifest>,
}

impl SheetStore {
    pub fn insert(&mut self, key: impl Into<String>, manifest: SpriteManifest) {
        self.sheets.insert(key.into(), manifest);
    }

    pub fn get(&self, key: &str) -> Option<&SpriteManifest> {
        self.sheets.get(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manifest() -> SpriteManifest {
        SpriteManifest {
            spritesheet: "hero.png".to_string(),
            frame_width: 32,
            frame_height: 32,
            animations: vec![Animation {
                id: "run".to_string(),
                frames: vec![0, 1, 2],
                fps: 10.0,
            }],
        }
    }

    #[test]
    fn parses_manifest_json() {
        let json = r#"{
            "spritesheet": "hero.png",
            "frame_width": 32,
            "frame_height": 32,
            "animations": [
                { "id": "run", "frames": [0, 1, 2], "fps": 10.0 }
            ]
        }"#;
        let manifest: SpriteManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest, sample_manifest());
    }

    #[test]
    fn animation_lookup_by_id() {
        let manifest = sample_manifest();
        assert_eq!(manifest.animation("run").unwrap().frames, vec![0, 1, 2]);
        assert!(manifest.animation("fly").is_none());
    }

    #[test]
    fn ms_per_frame_from_fps() {
        let animation = Animation {
            id: "run".to_string(),
            frames: vec![0],
            fps: 10.0,
        };
        assert_eq!(animation.ms_per_frame(), 100.0);
    }

    #[test]
    fn source_rect_wraps_row_major() {
        // 160px wide sheet with 32px frames: 5 columns, frame 7 sits at
        // column 2 of row 1
        let manifest = sample_manifest();
        let rect = manifest.source_rect(7, 160);
        assert_eq!(rect.x, 64.0);
        assert_eq!(rect.y, 32.0);
        assert_eq!(rect.width, 32.0);
        assert_eq!(rect.height, 32.0);
    }

    #[test]
    fn source_rect_first_row() {
        let manifest = sample_manifest();
        let rect = manifest.source_rect(3, 160);
        assert_eq!(rect.x, 96.0);
        assert_eq!(rect.y, 0.0);
    }

    #[test]
    fn source_rect_narrow_sheet_clamps_to_one_column() {
        let manifest = sample_manifest();
        let rect = manifest.source_rect(2, 16);
        assert_eq!(rect.x, 0.0);
        assert_eq!(rect.y, 64.0);
    }

    #[test]
    fn validate_rejects_zero_frame_dimension() {
        let mut manifest = sample_manifest();
        manifest.frame_width = 0;
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_frame_list() {
        let mut manifest = sample_manifest();
        manifest.animations[0].frames.clear();
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_positive_fps() {
        let mut manifest = sample_manifest();
        manifest.animations[0].fps = 0.0;
        assert!(manifest.validate().is_err());
    }

    #[test]
    fn store_round_trip() {
        let mut store = SheetStore::default();
        store.insert("hero", sample_manifest());
        assert!(store.get("hero").is_some());
        assert!(store.get("villain").is_none());
    }
}
