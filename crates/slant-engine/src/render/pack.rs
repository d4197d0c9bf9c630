use bytemuck::{Pod, Zeroable};

use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList};

/// Per-rect payload for a two-colour gradient rasterizer.
///
/// Solid fills use identical colors and a zero-length axis, so one shader
/// path covers both cases.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct GradientInstance {
    pub origin: [f32; 2],
    pub size: [f32; 2],
    pub color0: [f32; 4],
    pub color1: [f32; 4],
    pub p0: [f32; 2],
    pub p1: [f32; 2],
}

/// Converts a `Paint` to `(color0, color1, p0, p1)`.
pub fn resolve_paint(paint: &Paint) -> ([f32; 4], [f32; 4], [f32; 2], [f32; 2]) {
    match paint {
        Paint::Solid(c) => {
            let col = c.to_array();
            (col, col, [0.0, 0.0], [0.0, 0.0])
        }
        Paint::LinearGradient(g) => (
            g.from.to_array(),
            g.to.to_array(),
            [g.start.x, g.start.y],
            [g.end.x, g.end.y],
        ),
    }
}

/// Walks `list` back-to-front and packs one instance per rect.
pub fn pack_draw_list(list: &mut DrawList) -> Vec<GradientInstance> {
    let mut out = Vec::with_capacity(list.len());

    for item in list.iter_in_paint_order() {
        match &item.cmd {
            DrawCmd::Rect(cmd) => {
                let (color0, color1, p0, p1) = resolve_paint(&cmd.paint);
                out.push(GradientInstance {
                    origin: [cmd.rect.origin.x, cmd.rect.origin.y],
                    size: [cmd.rect.size.x, cmd.rect.size.y],
                    color0,
                    color1,
                    p0,
                    p1,
                });
            }
        }
    }

    log::trace!("packed {} draw items", out.len());
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::{Rect, Vec2};
    use crate::paint::{Color, LinearGradient};
    use crate::scene::ZIndex;

    fn white() -> Color { Color::from_straight(1.0, 1.0, 1.0, 1.0) }

    #[test]
    fn solid_has_degenerate_axis() {
        let (c0, c1, p0, p1) = resolve_paint(&Paint::Solid(white()));
        assert_eq!(c0, c1);
        assert_eq!(p0, p1);
    }

    #[test]
    fn gradient_carries_both_colors_and_axis() {
        let blue = Color::from_straight(0.0, 0.0, 1.0, 1.0);
        let g = LinearGradient::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), white(), blue);
        let (c0, c1, p0, p1) = resolve_paint(&g.into());
        assert_eq!(c0, [1.0; 4]);
        assert_eq!(c1, [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(p0, [1.0, 2.0]);
        assert_eq!(p1, [3.0, 4.0]);
    }

    #[test]
    fn pack_follows_paint_order() {
        let mut list = DrawList::new();
        list.push_rect(ZIndex::new(1), Rect::new(10.0, 0.0, 5.0, 5.0), white().into());
        list.push_rect(ZIndex::new(0), Rect::new(20.0, 0.0, 5.0, 5.0), white().into());

        let packed = pack_draw_list(&mut list);
        assert_eq!(packed.len(), 2);
        assert_eq!(packed[0].origin, [20.0, 0.0]);
        assert_eq!(packed[1].origin, [10.0, 0.0]);
        assert_eq!(packed[1].size, [5.0, 5.0]);
    }

    #[test]
    fn instance_is_plain_old_data() {
        let inst = GradientInstance::zeroed();
        assert_eq!(bytemuck::bytes_of(&inst).len(), 16 * 4);
    }
}
