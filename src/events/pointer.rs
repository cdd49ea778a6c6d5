//! Pointer events and the device-to-grid translation observer.
//!
//! The pointer system emits [`PointerEvent`]s in device pixels local to
//! the canvas. The [`translate_pointer_events`] observer consumes them and
//! re-triggers [`GridPointerEvent`]s carrying grid cell coordinates, so
//! downstream listeners never see device pixels. Listeners that want raw
//! coordinates can observe [`PointerEvent`] directly.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::warn;

use crate::resources::pixelgrid::PixelGrid;

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerKind {
    Move,
    Down,
    Up,
}

/// Pointer event in device pixels, relative to the canvas origin.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub x: f32,
    pub y: f32,
}

/// Pointer event translated to grid cell coordinates.
///
/// A pointer on the far edge of the surface maps to one past the last
/// valid cell; listeners painting cells should bounds-check.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct GridPointerEvent {
    pub kind: PointerKind,
    pub cell_x: i32,
    pub cell_y: i32,
}

/// Handle to the translation observer entity.
///
/// The observer is spawned once at scene setup and stays alive for the
/// scene's lifetime; despawning the entity detaches the translation chain.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PointerHooks {
    pub translator: Entity,
}

/// Observer that swaps device coordinates for cell coordinates.
///
/// The original device-space event stops here; only the translated
/// [`GridPointerEvent`] is re-triggered.
pub fn translate_pointer_events(
    trigger: On<PointerEvent>,
    grid: Option<Res<PixelGrid>>,
    mut commands: Commands,
) {
    let Some(grid) = grid else {
        warn!("PixelGrid resource missing in translate_pointer_events");
        return;
    };
    let event = trigger.event();
    let (cell_x, cell_y) = grid.point_to_cell(event.x, event.y);
    commands.trigger(GridPointerEvent {
        kind: event.kind,
        cell_x,
        cell_y,
    });
}
