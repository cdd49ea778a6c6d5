//! Pixel grid drawing commands.

use bevy_ecs::message::Message;
use raylib::prelude::Color;

/// Commands sent to the grid surface.
///
/// Queued through `MessageWriter<GridCmd>` and applied in order by
/// [`apply_grid_commands`](crate::systems::grid::apply_grid_commands), so
/// a fill color change affects only the cells painted after it.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum GridCmd {
    /// Paint the cell at (col, row) with the current fill color.
    SetPixel { col: f32, row: f32 },
    /// Change the fill color for subsequent paints.
    SetFillColor(Color),
}
