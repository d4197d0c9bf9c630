use slant_engine::coords::{Rect, Viewport};
use slant_engine::scene::DrawList;

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Top-level coordinator that owns the `DrawList` across frames.
///
/// Each `frame*` call clears the list, measures the root against the viewport
/// and paints it at the measured size. The returned list is what the external
/// rasterizer consumes.
///
/// ```rust,ignore
/// let mut ui = UiScene::new();
/// let draw_list = ui.frame_widget(GradientView::new().angle(45.0), Viewport::new(320.0, 200.0));
/// rasterizer.draw(draw_list);
/// ```
#[derive(Debug, Default)]
pub struct UiScene {
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Like [`frame`](Self::frame) but borrows the root.
    ///
    /// Use this when the root holds configuration that persists across frames.
    pub fn frame_ref(&mut self, root: &Element, viewport: Viewport) -> &mut DrawList {
        self.draw_list.clear();

        if !viewport.is_valid() {
            log::warn!(
                "skipping frame: invalid viewport {}x{}",
                viewport.width, viewport.height
            );
            return &mut self.draw_list;
        }

        // The root fills the viewport; a root that ignores its tight
        // constraints is clamped back into them.
        let constraints = Constraints::tight(viewport.size());
        let size = constraints.constrain(root.measure(constraints));
        let rect = Rect::from_size(size);

        root.paint(&mut Painter::new(&mut self.draw_list), rect);

        log::trace!("frame {rect:?} recorded {} draw items", self.draw_list.len());
        &mut self.draw_list
    }

    /// Lay out and paint `root` for this frame.
    pub fn frame(&mut self, root: Element, viewport: Viewport) -> &mut DrawList {
        self.frame_ref(&root, viewport)
    }

    /// Convenience: wrap any [`Widget`] in an [`Element`] and call [`frame`](Self::frame).
    pub fn frame_widget<W: Widget>(&mut self, root: W, viewport: Viewport) -> &mut DrawList {
        self.frame(root.into(), viewport)
    }
}
