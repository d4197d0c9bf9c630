use crate::coords::Vec2;

use super::Color;

/// Two-colour linear gradient in logical pixel space.
///
/// `from` sits at `start`, `to` at `end`. Beyond either end the edge colour
/// is held (pad).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub from: Color,
    pub to: Color,
}

impl LinearGradient {
    #[inline]
    pub const fn new(start: Vec2, end: Vec2, from: Color, to: Color) -> Self {
        Self { start, end, from, to }
    }

    /// Returns true when a rasterizer can draw it: finite values and an axis
    /// of non-zero length.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.from.is_finite()
            && self.to.is_finite()
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}
