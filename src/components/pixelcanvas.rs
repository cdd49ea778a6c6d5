//! Marker component for the pixel-grid canvas.

use bevy_ecs::prelude::Component;

/// Tags the entity whose [`ScreenPosition`](super::screenposition::ScreenPosition)
/// anchors the pixel grid on screen.
///
/// Pointer translation measures device coordinates relative to this entity,
/// and the render system blits the grid surface at it. At most one entity
/// should carry the marker.
#[derive(Component, Debug, Default)]
pub struct PixelCanvas;
