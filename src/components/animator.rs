//! Sprite animation playback state.
//!
//! The [`Animator`] component owns which animation of the entity's manifest
//! is active and which sheet frame is currently visible. The animation
//! system feeds [`Animator::advance`] with the world clock; rendering only
//! reads [`Animator::frame`].

use bevy_ecs::prelude::Component;
use log::error;

use crate::resources::sheetstore::SpriteManifest;

/// Playback state for one sprite.
///
/// Created with no active animation; the visible frame starts at sheet
/// frame 0 until [`Animator::set_animation`] succeeds.
#[derive(Component, Debug, Clone)]
pub struct Animator {
    /// Id of the active animation, `None` until a switch succeeds.
    pub active: Option<String>,
    /// Cursor into the active animation's frame list.
    pub cursor: usize,
    /// Timestamp of the last frame advance, in milliseconds.
    pub last_advance_ms: f64,
    /// Resolved frame index into the sheet grid.
    pub frame: usize,
}

impl Default for Animator {
    fn default() -> Self {
        Self::new()
    }
}

impl Animator {
    pub fn new() -> Self {
        Self {
            active: None,
            cursor: 0,
            last_advance_ms: 0.0,
            frame: 0,
        }
    }

    /// Switch to the animation named `id`.
    ///
    /// An unknown id logs an error and leaves the previous animation and
    /// frame untouched. On success the cursor rewinds to 0 and the first
    /// listed frame becomes visible. The advance timestamp keeps its value,
    /// so the next `advance` still measures against the previous step.
    pub fn set_animation(&mut self, manifest: &SpriteManifest, id: &str) {
        let Some(animation) = manifest.animation(id) else {
            error!("Animation '{}' not found in manifest", id);
            return;
        };
        self.active = Some(animation.id.clone());
        self.cursor = 0;
        if let Some(&first) = animation.frames.first() {
            self.frame = first;
        }
    }

    /// Step the active animation against the clock.
    ///
    /// Fixed-threshold timer: the cursor moves at most one step per call,
    /// and only once more than `1000 / fps` milliseconds have passed since
    /// the last step, no matter how many whole intervals elapsed in between.
    /// `now_ms` must be monotonically non-decreasing.
    pub fn advance(&mut self, manifest: &SpriteManifest, now_ms: f64) {
        let Some(id) = self.active.as_deref() else {
            return;
        };
        let Some(animation) = manifest.animation(id) else {
            return;
        };
        if animation.frames.is_empty() {
            return;
        }
        if now_ms - self.last_advance_ms > animation.ms_per_frame() {
            self.last_advance_ms = now_ms;
            self.cursor = (self.cursor + 1) % animation.frames.len();
            self.frame = animation.frames[self.cursor];
        }
    }
}
