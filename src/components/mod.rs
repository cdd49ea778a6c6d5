//! ECS components.
//!
//! - [`animator`]: sprite animation playback state
//! - [`pixelcanvas`]: marker for the pixel-grid canvas entity
//! - [`screenposition`]: position in screen pixels
//! - [`sprite`]: sheet reference, scale and mirroring

pub mod animator;
pub mod pixelcanvas;
pub mod screenposition;
pub mod sprite;
