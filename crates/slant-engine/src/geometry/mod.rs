//! Angle → gradient-vector geometry.
//!
//! Angles are in degrees, measured counter-clockwise from east (+X), the
//! standard trigonometric convention. Any finite value is accepted; no
//! normalization to `[0, 360)` is needed or performed.
//!
//! Two coordinate spaces are involved:
//! - [`UnitSquarePoint`]: signed `[-1, 1]²`, origin at the centre, +Y up.
//! - [`NormalizedPoint`]: gradient space `[0, 1]²`, origin top-left, +Y down.
//!   This is what a two-point linear-gradient rasterizer consumes, and it is
//!   resolved into logical pixels with [`NormalizedPoint::resolve`].

mod point;
mod vector;

pub use point::{NormalizedPoint, UnitSquarePoint};
pub use vector::{GradientVector, gradient_vector_for_angle, point_for_angle};
