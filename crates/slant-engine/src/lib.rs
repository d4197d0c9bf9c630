//! Slant engine crate.
//!
//! Owns the renderer-agnostic pieces used by the widget layer: coordinates,
//! the paint model, angle → gradient-vector geometry, the draw stream handed
//! to the external rasterizer and its packed form.

pub mod coords;
pub mod geometry;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
