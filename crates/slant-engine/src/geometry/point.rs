use crate::coords::{Rect, Vec2};

/// A direction from the centre of the signed unit square out to its edge.
///
/// Range `[-1, 1]²`, +Y up.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct UnitSquarePoint {
    pub x: f32,
    pub y: f32,
}

impl UnitSquarePoint {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Point reflection through the centre of the square.
    #[inline]
    #[must_use]
    pub fn opposite(self) -> Self {
        Self::new(-self.x, -self.y)
    }

    /// Maps `[-1, 1]²` (Y up) onto gradient space `[0, 1]²` (Y down).
    #[inline]
    pub fn to_gradient_space(self) -> NormalizedPoint {
        NormalizedPoint::new((self.x + 1.0) * 0.5, 1.0 - (self.y + 1.0) * 0.5)
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// A point in gradient space: `(0, 0)` is the top-left of the target
/// rectangle and `(1, 1)` its bottom-right.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    /// `(0.0, 0.0)`
    pub const TOP_LEFT: Self = Self::new(0.0, 0.0);
    /// `(0.5, 0.0)`
    pub const TOP: Self = Self::new(0.5, 0.0);
    /// `(1.0, 0.0)`
    pub const TOP_RIGHT: Self = Self::new(1.0, 0.0);
    /// `(0.0, 0.5)`
    pub const LEFT: Self = Self::new(0.0, 0.5);
    /// `(0.5, 0.5)`
    pub const CENTER: Self = Self::new(0.5, 0.5);
    /// `(1.0, 0.5)`
    pub const RIGHT: Self = Self::new(1.0, 0.5);
    /// `(0.0, 1.0)`
    pub const BOTTOM_LEFT: Self = Self::new(0.0, 1.0);
    /// `(0.5, 1.0)`
    pub const BOTTOM: Self = Self::new(0.5, 1.0);
    /// `(1.0, 1.0)`
    pub const BOTTOM_RIGHT: Self = Self::new(1.0, 1.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Resolves the point inside `rect`, in logical pixels.
    #[inline]
    pub fn resolve(self, rect: Rect) -> Vec2 {
        Vec2::new(
            rect.origin.x + self.x * rect.size.x,
            rect.origin.y + self.y * rect.size.y,
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn distance(self, other: Self) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}
