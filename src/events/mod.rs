//! Event and message types.
//!
//! - [`grid`]: drawing commands for the pixel grid surface
//! - [`pointer`]: pointer events and the device-to-cell translation observer

pub mod grid;
pub mod pointer;
