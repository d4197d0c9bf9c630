use super::Vec2;

/// Viewport size in logical pixels.
///
/// The root widget of a frame is laid out to exactly this size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }

    #[inline]
    pub const fn size(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}
