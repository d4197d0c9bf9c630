//! Slant UI — widgets on top of `slant-engine`, centred on [`GradientView`].
//!
//! # Quick start
//!
//! ```
//! use slant_ui::prelude::*;
//!
//! let mut scene = UiScene::new();
//! let view = GradientView::new()
//!     .start_color(Color::from_straight(1.0, 0.5, 0.0, 1.0))
//!     .end_color(Color::from_straight(0.1, 0.1, 0.4, 1.0))
//!     .angle(30.0);
//!
//! let draw_list = scene.frame_widget(view, Viewport::new(320.0, 200.0));
//! assert_eq!(draw_list.len(), 1);
//! // Hand `draw_list` to the rasterizer.
//! ```
//!
//! [`GradientView`]: widgets::gradient_view::GradientView

pub mod constraints;
pub mod painter;
pub mod scene;
pub mod widget;
pub mod widgets;

/// Everything needed to build and extend UI.
pub mod prelude {
    pub use crate::constraints::Constraints;
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::gradient_view::{ColorPair, GradientLayer, GradientView};

    pub use slant_engine::coords::{Rect, Vec2, Viewport};
    pub use slant_engine::geometry::{GradientVector, NormalizedPoint, gradient_vector_for_angle};
    pub use slant_engine::paint::{Color, LinearGradient, Paint};
}
