use super::ZIndex;

/// Stable sort key for draw items.
///
/// Ordering is lexicographic over the fields: `z` ascending (back-to-front),
/// then `order` ascending (insertion order within a layer).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}
