//! Offscreen drawing surface for the pixel grid.
//!
//! Holds the render texture the grid is painted into. The surface is only
//! redrawn when the grid changes or a cell is filled; the render system
//! blits the finished texture every frame.

use raylib::prelude::*;

use crate::resources::pixelgrid::PixelGrid;

/// Render texture sized to the grid's device-pixel dimensions.
///
/// # Note
/// This is a NonSend resource because `RenderTexture2D` contains GPU
/// resources that must be accessed from the main thread.
pub struct GridSurface {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    /// Surface width in device pixels.
    pub width: u32,
    /// Surface height in device pixels.
    pub height: u32,
    /// Fill color for painted cells.
    pub fill: Color,
}

impl GridSurface {
    /// Create a surface at the given device-pixel size.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create grid surface: {}", e))?;

        Ok(Self {
            texture,
            width,
            height,
            fill: Color::BLACK,
        })
    }

    /// Recreate the texture at a new size, dropping the old contents.
    pub fn recreate(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<(), String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to recreate grid surface: {}", e))?;

        self.texture = texture;
        self.width = width;
        self.height = height;

        Ok(())
    }

    /// Redraw the full grid: transparent background, one-pixel grid lines
    /// at every cell boundary and around the border.
    pub fn repaint(&mut self, rl: &mut RaylibHandle, th: &RaylibThread, grid: &PixelGrid) {
        let pitch = (grid.cell_size() + 1) as usize;
        let width = grid.full_width();
        let height = grid.full_height();
        let style = grid.cell_style();

        let mut d = rl.begin_texture_mode(th, &mut self.texture);
        d.clear_background(Color::BLANK);
        for x in (0..width).step_by(pitch) {
            d.draw_rectangle(x, 0, 1, height, style);
        }
        for y in (0..height).step_by(pitch) {
            d.draw_rectangle(0, y, width, 1, style);
        }
    }

    /// Paint one cell with the current fill color.
    pub fn fill_cell(
        &mut self,
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        grid: &PixelGrid,
        col: f32,
        row: f32,
    ) {
        let (x, y) = grid.cell_origin(col, row);
        let size = grid.cell_size();
        let fill = self.fill;

        let mut d = rl.begin_texture_mode(th, &mut self.texture);
        d.draw_rectangle(x, y, size, size, fill);
    }

    /// Source rectangle for drawing this texture.
    ///
    /// Height is negative to flip the Y axis, compensating for OpenGL's
    /// inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.width as f32,
            height: -(self.height as f32),
        }
    }
}
