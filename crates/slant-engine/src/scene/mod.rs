//! Scene (draw stream) types.
//!
//! The draw list is the hand-off point to the external rasterizer: widgets
//! record renderer-agnostic commands here and the rasterizer walks them in
//! paint order.

mod cmd;
mod key;
mod list;
mod z_index;

pub use cmd::{DrawCmd, RectCmd};
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use z_index::ZIndex;
