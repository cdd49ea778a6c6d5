//! Application configuration resource.
//!
//! Settings loaded from an INI configuration file, with defaults for safe
//! startup. The `[grid]` section is delegated to
//! [`PixelGridConfig`](crate::resources::pixelgrid::PixelGridConfig).
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! target_fps = 120
//!
//! [sprite]
//! manifest = ./assets/sprites/guy.json
//! animation = roll
//! x = 100
//! y = 50
//! scale = 5
//! mirror = true
//!
//! [grid]
//! pixel-width = 50
//! pixel-height = 50
//! pixel-size = 10
//! cell-style = #444444
//! ```

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

use crate::resources::pixelgrid::PixelGridConfig;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_MANIFEST_PATH: &str = "./assets/sprites/guy.json";
const DEFAULT_ANIMATION: &str = "roll";
const DEFAULT_SPRITE_X: f32 = 100.0;
const DEFAULT_SPRITE_Y: f32 = 50.0;
const DEFAULT_SPRITE_SCALE: f32 = 5.0;
const DEFAULT_SPRITE_MIRROR: bool = true;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Application configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct AppConfig {
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Path to the sprite sheet manifest.
    pub manifest_path: String,
    /// Animation id to play at startup.
    pub animation: String,
    /// Sprite position on screen.
    pub sprite_x: f32,
    pub sprite_y: f32,
    /// Scale factor for the sprite's frame size.
    pub sprite_scale: f32,
    /// Draw the sprite mirrored horizontally.
    pub sprite_mirror: bool,
    /// Pixel grid settings from the `[grid]` section.
    pub grid: PixelGridConfig,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            manifest_path: DEFAULT_MANIFEST_PATH.to_string(),
            animation: DEFAULT_ANIMATION.to_string(),
            sprite_x: DEFAULT_SPRITE_X,
            sprite_y: DEFAULT_SPRITE_Y,
            sprite_scale: DEFAULT_SPRITE_SCALE,
            sprite_mirror: DEFAULT_SPRITE_MIRROR,
            grid: PixelGridConfig::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        // Only ';' starts a comment: '#' must stay readable for hex colors
        // like `cell-style = #444444`.
        config.set_comment_symbols(&[';']);
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [sprite] section
        if let Some(manifest) = config.get("sprite", "manifest") {
            self.manifest_path = manifest;
        }
        if let Some(animation) = config.get("sprite", "animation") {
            self.animation = animation;
        }
        if let Some(x) = config.getfloat("sprite", "x").ok().flatten() {
            self.sprite_x = x as f32;
        }
        if let Some(y) = config.getfloat("sprite", "y").ok().flatten() {
            self.sprite_y = y as f32;
        }
        if let Some(scale) = config.getfloat("sprite", "scale").ok().flatten() {
            self.sprite_scale = scale as f32;
        }
        if let Some(mirror) = config.getbool("sprite", "mirror").ok().flatten() {
            self.sprite_mirror = mirror;
        }

        // [grid] section
        self.grid = PixelGridConfig::from_ini(&config);

        info!(
            "Loaded config: {}x{} window, fps={}, manifest='{}', animation='{}', grid {}x{} cells",
            self.window_width,
            self.window_height,
            self.target_fps,
            self.manifest_path,
            self.animation,
            self.grid.pixel_width,
            self.grid.pixel_height
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    #[allow(dead_code)]
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [window] section
        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [sprite] section
        config.set("sprite", "manifest", Some(self.manifest_path.clone()));
        config.set("sprite", "animation", Some(self.animation.clone()));
        config.set("sprite", "x", Some(self.sprite_x.to_string()));
        config.set("sprite", "y", Some(self.sprite_y.to_string()));
        config.set("sprite", "scale", Some(self.sprite_scale.to_string()));
        config.set("sprite", "mirror", Some(self.sprite_mirror.to_string()));

        // [grid] section
        self.grid.write_ini(&mut config);

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }
}
