use crate::coords::Rect;
use crate::paint::Paint;

use super::{DrawList, ZIndex};

/// A rect filled with a solid color or a two-colour gradient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub paint: Paint,
}

/// Renderer-agnostic draw command.
///
/// A gradient view only ever fills rects; new shapes get a variant here and a
/// matching arm in `render::pack_draw_list`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
}

impl DrawList {
    /// Records a filled rect.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, paint: Paint) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, paint }));
    }
}
