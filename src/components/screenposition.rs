//! Screen-space position component.
//!
//! The [`ScreenPosition`] component stores an entity's position in screen
//! (pixel) coordinates. Sprites and the pixel canvas are both placed with
//! it; there is no camera, so screen space is the only space.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Top-left screen position of an entity, in pixels.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScreenPosition {
    /// 2D coordinates in screen pixels.
    pub pos: Vector2,
}

impl Default for ScreenPosition {
    fn default() -> Self {
        Self {
            pos: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

impl ScreenPosition {
    /// Create a ScreenPosition from x and y.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }

    /// X coordinate.
    pub fn x(&self) -> f32 {
        self.pos.x
    }

    /// Y coordinate.
    pub fn y(&self) -> f32 {
        self.pos.y
    }

    /// Translate by delta.
    #[allow(dead_code)]
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.pos.x += dx;
        self.pos.y += dy;
    }
}
