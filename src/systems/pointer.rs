//! Pointer input system.
//!
//! Polls the mouse each frame and turns it into
//! [`PointerEvent`](crate::events::pointer::PointerEvent)s local to the
//! pixel canvas. Downstream translation to cell coordinates happens in the
//! observer chain, not here.

use bevy_ecs::prelude::*;
use raylib::ffi::MouseButton;

use crate::components::pixelcanvas::PixelCanvas;
use crate::components::screenposition::ScreenPosition;
use crate::events::pointer::{PointerEvent, PointerKind};
use crate::resources::pixelgrid::PixelGrid;

/// Emit pointer events for the canvas under the mouse.
///
/// Coordinates are device pixels relative to the canvas origin. Events
/// only fire while the pointer is over the canvas; the far edge is still
/// considered inside so edge positions stay observable. `Move` fires once
/// per position change, `Down`/`Up` on button edges.
pub fn emit_pointer_events(
    rl: NonSend<raylib::RaylibHandle>,
    grid: Option<Res<PixelGrid>>,
    canvas: Query<&ScreenPosition, With<PixelCanvas>>,
    mut last_pos: Local<Option<(f32, f32)>>,
    mut commands: Commands,
) {
    let Some(grid) = grid else {
        return;
    };
    let Ok(origin) = canvas.single() else {
        return;
    };

    let mouse = rl.get_mouse_position();
    let x = mouse.x - origin.x();
    let y = mouse.y - origin.y();

    if x < 0.0 || y < 0.0 || x > grid.full_width() as f32 || y > grid.full_height() as f32 {
        *last_pos = None;
        return;
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        commands.trigger(PointerEvent {
            kind: PointerKind::Down,
            x,
            y,
        });
    }
    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        commands.trigger(PointerEvent {
            kind: PointerKind::Up,
            x,
            y,
        });
    }
    if *last_pos != Some((x, y)) {
        *last_pos = Some((x, y));
        commands.trigger(PointerEvent {
            kind: PointerKind::Move,
            x,
            y,
        });
    }
}
