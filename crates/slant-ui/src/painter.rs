use slant_engine::coords::Rect;
use slant_engine::paint::Paint;
use slant_engine::scene::{DrawList, ZIndex};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList`; every fill lands one z-layer above the
/// previous one so later paints sit on top.
pub struct Painter<'a> {
    draw_list: &'a mut DrawList,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList) -> Self {
        Self { draw_list, z: 0 }
    }

    /// Axis-aligned rectangle filled with a solid color or a gradient.
    pub fn fill_rect(&mut self, rect: Rect, paint: impl Into<Paint>) {
        let z = ZIndex::new(self.z);
        self.z += 1;
        self.draw_list.push_rect(z, rect, paint.into());
    }
}
