//! ECS systems.
//!
//! - [`animation`]: advance sprite animation playback
//! - [`grid`]: grid surface upkeep and drawing commands
//! - [`pointer`]: mouse polling into pointer events
//! - [`render`]: frame drawing
//! - [`time`]: world clock update

pub mod animation;
pub mod grid;
pub mod pointer;
pub mod render;
pub mod time;
