//! Packing of draw streams for the external rasterizer.
//!
//! Nothing here touches a GPU. The types are laid out so a compositor can
//! upload them as-is (`#[repr(C)]`, `bytemuck::Pod`), one instance per rect.
//!
//! Convention:
//! - geometry is in logical pixels (top-left origin, +Y down)
//! - colors are premultiplied linear RGBA
//! - `p0`/`p1` are the gradient axis in the same pixel space as `origin`

mod pack;

pub use pack::{GradientInstance, pack_draw_list, resolve_paint};
