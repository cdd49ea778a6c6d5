//! ECS resources.
//!
//! - [`appconfig`]: INI-backed application settings
//! - [`gridsurface`]: render texture the pixel grid is painted into
//! - [`pixelgrid`]: logical grid model and its configuration
//! - [`sheetstore`]: sprite sheet manifests keyed by sheet key
//! - [`texturestore`]: loaded sheet textures
//! - [`worldtime`]: accumulated frame time

pub mod appconfig;
pub mod gridsurface;
pub mod pixelgrid;
pub mod sheetstore;
pub mod texturestore;
pub mod worldtime;
