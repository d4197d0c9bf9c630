//! Paint model handed to the external rasterizer.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, two-colour linear gradients)
//!
//! Geometry types remain in `coords` and `geometry`.

pub mod color;
pub mod error;
pub mod gradient;

pub use color::Color;
pub use error::ColorParseError;
pub use gradient::LinearGradient;

/// Paint source for filling geometry.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
}

impl From<Color> for Paint {
    #[inline]
    fn from(color: Color) -> Self {
        Paint::Solid(color)
    }
}

impl From<LinearGradient> for Paint {
    #[inline]
    fn from(gradient: LinearGradient) -> Self {
        Paint::LinearGradient(gradient)
    }
}
