//! Pixel grid systems.
//!
//! Three systems keep the grid surface current:
//! - [`update_grid_messages`] advances the [`GridCmd`] message queue once
//!   per frame.
//! - [`apply_grid_changes`] watches [`PixelGrid`] through change detection
//!   and recreates/repaints the surface when the model changed.
//! - [`apply_grid_commands`] drains queued [`GridCmd`]s in order onto the
//!   surface.
//!
//! Run order matters: commands are applied after the change pass so a
//! repaint never erases cells painted in the same frame.

use bevy_ecs::prelude::*;
use log::error;

use crate::events::grid::GridCmd;
use crate::resources::gridsurface::GridSurface;
use crate::resources::pixelgrid::PixelGrid;

/// Advance the ECS message queue for [`GridCmd`].
///
/// Runs after the pointer pass wrote this frame's commands and before
/// [`apply_grid_commands`] reads them.
pub fn update_grid_messages(mut msgs: ResMut<Messages<GridCmd>>) {
    msgs.update();
}

/// Recreate and repaint the grid surface when the grid model changes.
///
/// Detects [`PixelGrid`] insertion or mutation. If the derived dimensions
/// differ from the surface, the render texture is recreated first; either
/// way the grid lines are repainted, which drops previously painted cells.
pub fn apply_grid_changes(
    grid: Option<Res<PixelGrid>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    surface: Option<NonSendMut<GridSurface>>,
) {
    let Some(grid) = grid else {
        return;
    };
    let Some(mut surface) = surface else {
        return;
    };
    if !(grid.is_changed() || grid.is_added()) {
        return;
    }

    let (width, height) = (grid.full_width() as u32, grid.full_height() as u32);
    if surface.width != width || surface.height != height {
        if let Err(e) = surface.recreate(&mut rl, &th, width, height) {
            error!("Failed to resize grid surface: {}", e);
            return;
        }
    }
    surface.repaint(&mut rl, &th, &grid);
}

/// Apply queued drawing commands to the grid surface, in queue order.
pub fn apply_grid_commands(
    mut reader: MessageReader<GridCmd>,
    grid: Option<Res<PixelGrid>>,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    surface: Option<NonSendMut<GridSurface>>,
) {
    let Some(grid) = grid else {
        return;
    };
    let Some(mut surface) = surface else {
        return;
    };

    for cmd in reader.read() {
        match cmd {
            GridCmd::SetFillColor(color) => surface.fill = *color,
            GridCmd::SetPixel { col, row } => {
                surface.fill_cell(&mut rl, &th, &grid, *col, *row);
            }
        }
    }
}
