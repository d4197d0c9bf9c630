use slant_engine::coords::{Rect, Vec2};
use slant_engine::geometry::{GradientVector, gradient_vector_for_angle};
use slant_engine::paint::{Color, LinearGradient, Paint};

use crate::constraints::Constraints;
use crate::painter::Painter;
use crate::widget::Widget;

/// Angle used by [`GradientView::new`]: start colour at the top, end colour at the bottom.
pub const DEFAULT_ANGLE: f32 = 270.0;

/// Size requested by [`GradientView::new`] when the parent leaves room.
pub const DEFAULT_SIZE: Vec2 = Vec2::new(200.0, 200.0);

// ── ColorPair ─────────────────────────────────────────────────────────────

/// Start and end colours. An absent colour paints as transparent.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorPair {
    pub start: Option<Color>,
    pub end: Option<Color>,
}

impl ColorPair {
    #[inline]
    pub const fn new(start: Color, end: Color) -> Self {
        Self { start: Some(start), end: Some(end) }
    }

    /// `[start, end]` with absent colours replaced by transparent.
    #[inline]
    pub fn resolved(self) -> [Color; 2] {
        [
            self.start.unwrap_or(Color::transparent()),
            self.end.unwrap_or(Color::transparent()),
        ]
    }
}

// ── GradientLayer ─────────────────────────────────────────────────────────

/// The rendering resource a view owns: colours and vector bound to a frame.
///
/// A layer is never resized; when the geometry changes a new one replaces it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientLayer {
    pub frame: Rect,
    pub colors: [Color; 2],
    pub vector: GradientVector,
}

impl GradientLayer {
    pub fn new(frame: Rect, colors: [Color; 2], vector: GradientVector) -> Self {
        Self { frame, colors, vector }
    }

    /// Two-colour gradient with its axis resolved into `frame`.
    pub fn gradient(&self) -> LinearGradient {
        let (start, end) = self.vector.resolve(self.frame);
        LinearGradient::new(start, end, self.colors[0], self.colors[1])
    }

    /// The paint to hand to the rasterizer, or `None` when the frame is
    /// empty or the vector is not finite.
    pub fn to_paint(&self) -> Option<Paint> {
        let gradient = self.gradient();
        gradient.is_valid().then_some(Paint::LinearGradient(gradient))
    }
}

// ── GradientView ──────────────────────────────────────────────────────────

/// A rectangle filled with a two-colour linear gradient pointing at `angle`
/// (degrees counter-clockwise from east).
///
/// Configuration changes never recompute implicitly. Either call
/// [`configure`](Self::configure), which stores and recomputes in one step,
/// or mutate with the `set_*` methods and then call [`update`](Self::update).
/// Until then, painting keeps showing the colours and vector of the last
/// recompute.
///
/// # Example
/// ```
/// use slant_engine::coords::Rect;
/// use slant_engine::paint::Color;
/// use slant_ui::widgets::gradient_view::{ColorPair, GradientView};
///
/// let mut view = GradientView::new();
/// view.install(Rect::new(0.0, 0.0, 320.0, 200.0));
/// let white = Color::from_straight(1.0, 1.0, 1.0, 1.0);
/// let vector = view.configure(ColorPair::new(white, Color::transparent()), 0.0);
/// assert_eq!(vector.end.x, 1.0);
/// assert!(view.layer().is_some_and(|l| l.vector == vector));
/// ```
#[derive(Debug, Clone)]
pub struct GradientView {
    colors: ColorPair,
    angle: f32,
    /// Colours and vector as of the last recompute; what gets painted.
    applied: ([Color; 2], GradientVector),
    layer: Option<GradientLayer>,
    preferred_size: Vec2,
}

impl GradientView {
    pub fn new() -> Self {
        let colors = ColorPair::default();
        Self {
            colors,
            angle: DEFAULT_ANGLE,
            applied: (colors.resolved(), gradient_vector_for_angle(DEFAULT_ANGLE)),
            layer: None,
            preferred_size: DEFAULT_SIZE,
        }
    }

    pub fn start_color(mut self, v: Color) -> Self { self.colors.start = Some(v); self.update(); self }
    pub fn end_color(mut self, v: Color) -> Self { self.colors.end = Some(v); self.update(); self }
    pub fn angle(mut self, v: f32) -> Self { self.angle = v; self.update(); self }
    pub fn preferred_size(mut self, v: Vec2) -> Self { self.preferred_size = v; self }

    // ── layer ─────────────────────────────────────────────────────────────

    /// Installs a fresh layer covering `bounds`, dropping any previous one,
    /// and fills it from the current configuration.
    pub fn install(&mut self, bounds: Rect) -> &GradientLayer {
        if let Some(old) = self.layer.take() {
            log::debug!("replacing gradient layer {:?} with {:?}", old.frame, bounds);
        }
        self.update();
        self.layer.insert(GradientLayer::new(bounds, self.applied.0, self.applied.1))
    }

    /// The installed layer, if [`install`](Self::install) was called.
    #[inline]
    pub fn layer(&self) -> Option<&GradientLayer> {
        self.layer.as_ref()
    }

    // ── configuration ─────────────────────────────────────────────────────

    /// Stores `colors` and `angle`, recomputes, and returns the new vector.
    pub fn configure(&mut self, colors: ColorPair, angle: f32) -> GradientVector {
        self.colors = colors;
        self.angle = angle;
        self.update()
    }

    /// Stores `colors` without recomputing.
    pub fn set_colors(&mut self, colors: ColorPair) {
        self.colors = colors;
    }

    pub fn set_start_color(&mut self, color: Option<Color>) {
        self.colors.start = color;
    }

    pub fn set_end_color(&mut self, color: Option<Color>) {
        self.colors.end = color;
    }

    /// Stores `angle` without recomputing.
    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle;
    }

    /// Recomputes the vector from the stored angle, snapshots the colours
    /// and writes both into the installed layer, if any.
    pub fn update(&mut self) -> GradientVector {
        let vector = gradient_vector_for_angle(self.angle);
        if !vector.is_finite() {
            log::warn!("gradient angle {} is not finite; nothing will be painted", self.angle);
        }
        log::debug!(
            "gradient {}°: ({:.3}, {:.3}) -> ({:.3}, {:.3})",
            self.angle, vector.start.x, vector.start.y, vector.end.x, vector.end.y
        );

        self.applied = (self.colors.resolved(), vector);
        if let Some(layer) = self.layer.as_mut() {
            layer.colors = self.applied.0;
            layer.vector = vector;
        }
        vector
    }

    // ── accessors ─────────────────────────────────────────────────────────

    /// Configured colours, including changes not yet applied by [`update`](Self::update).
    #[inline]
    pub fn colors(&self) -> ColorPair {
        self.colors
    }

    #[inline]
    pub fn current_angle(&self) -> f32 {
        self.angle
    }

    /// Vector as of the last recompute.
    #[inline]
    pub fn vector(&self) -> GradientVector {
        self.applied.1
    }

    /// The layer painted into `rect`: the installed one when its frame
    /// matches, otherwise a replacement built from the last recompute.
    pub fn layer_for(&self, rect: Rect) -> GradientLayer {
        match self.layer {
            Some(layer) if layer.frame == rect => layer,
            _ => GradientLayer::new(rect, self.applied.0, self.applied.1),
        }
    }
}

impl Default for GradientView { fn default() -> Self { Self::new() } }

impl Widget for GradientView {
    fn measure(&self, constraints: Constraints) -> Vec2 {
        constraints.constrain(self.preferred_size)
    }

    fn paint(&self, painter: &mut Painter<'_>, rect: Rect) {
        if rect.is_empty() || !rect.is_finite() {
            log::debug!("skipping gradient paint: empty rect {rect:?}");
            return;
        }
        match self.layer_for(rect).to_paint() {
            Some(paint) => painter.fill_rect(rect, paint),
            None => log::warn!("skipping gradient paint: non-finite vector for angle {}", self.angle),
        }
    }
}
