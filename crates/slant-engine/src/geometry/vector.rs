use crate::coords::{Rect, Vec2};

use super::{NormalizedPoint, UnitSquarePoint};

/// The two points a linear-gradient rasterizer interpolates between.
///
/// Invariant: `start` is the point reflection of `end` through
/// [`NormalizedPoint::CENTER`], so the axis always crosses the middle of the
/// target rectangle and spans it edge to edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GradientVector {
    pub start: NormalizedPoint,
    pub end: NormalizedPoint,
}

impl GradientVector {
    /// Same as [`gradient_vector_for_angle`].
    #[inline]
    pub fn for_angle(angle_deg: f32) -> Self {
        gradient_vector_for_angle(angle_deg)
    }

    /// False only when the angle it was built from was NaN or infinite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// `(start, end)`.
    #[inline]
    pub fn points(self) -> (NormalizedPoint, NormalizedPoint) {
        (self.start, self.end)
    }

    /// Resolves both points into `rect`, in logical pixels.
    #[inline]
    pub fn resolve(self, rect: Rect) -> (Vec2, Vec2) {
        (self.start.resolve(rect), self.end.resolve(rect))
    }
}

/// Unit-circle direction of `angle_deg`, extrapolated to the edge of the
/// signed unit square.
///
/// The larger of `|cos θ|` and `|sin θ|` is snapped to `±1` and the other
/// component is scaled by the same factor, which keeps the direction. When the
/// two magnitudes are equal the x-axis wins, so 45° maps to `(1, tan 45°)`.
/// The ratio is always taken over the larger component, which is at least
/// `√½`, so axis-aligned angles never divide by zero and come out as
/// `(±1, 0)` or `(0, ±1)`.
///
/// Trig runs in `f64`; the residue left by `π` not being exact (`cos 90°`
/// evaluates to ~6e-17) disappears when narrowing to `f32`.
///
/// NaN or infinite input yields a NaN point.
pub fn point_for_angle(angle_deg: f32) -> UnitSquarePoint {
    if !angle_deg.is_finite() {
        return UnitSquarePoint::new(f32::NAN, f32::NAN);
    }

    let (sin, cos) = f64::from(angle_deg).to_radians().sin_cos();

    let (x, y) = if cos.abs() >= sin.abs() {
        let x = cos.signum();
        (x, x * (sin / cos))
    } else {
        let y = sin.signum();
        (y * (cos / sin), y)
    };

    UnitSquarePoint::new(x as f32, y as f32)
}

/// Start and end points, in gradient space, of a linear gradient that sweeps
/// towards `angle_deg` (degrees counter-clockwise from east).
///
/// ```
/// use slant_engine::geometry::{gradient_vector_for_angle, NormalizedPoint};
///
/// let v = gradient_vector_for_angle(90.0);
/// assert_eq!(v.start, NormalizedPoint::BOTTOM);
/// assert_eq!(v.end, NormalizedPoint::TOP);
/// ```
pub fn gradient_vector_for_angle(angle_deg: f32) -> GradientVector {
    let end = point_for_angle(angle_deg);
    let start = end.opposite();
    GradientVector {
        start: start.to_gradient_space(),
        end: end.to_gradient_space(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: NormalizedPoint, b: NormalizedPoint) -> bool {
        (a.x - b.x).abs() <= EPS && (a.y - b.y).abs() <= EPS
    }

    fn sweep(step: f32) -> impl Iterator<Item = f32> {
        let n = (360.0 / step) as usize;
        (0..=n).map(move |i| i as f32 * step)
    }

    // ── compass directions ────────────────────────────────────────────────

    #[test]
    fn east_runs_left_to_right() {
        let v = gradient_vector_for_angle(0.0);
        assert_eq!(v.end, NormalizedPoint::RIGHT);
        assert_eq!(v.start, NormalizedPoint::LEFT);
    }

    #[test]
    fn north_runs_bottom_to_top() {
        let v = gradient_vector_for_angle(90.0);
        assert_eq!(v.end, NormalizedPoint::TOP);
        assert_eq!(v.start, NormalizedPoint::BOTTOM);
    }

    #[test]
    fn west_and_south() {
        let w = gradient_vector_for_angle(180.0);
        assert!(approx(w.end, NormalizedPoint::LEFT));
        assert!(approx(w.start, NormalizedPoint::RIGHT));

        let s = gradient_vector_for_angle(270.0);
        assert!(approx(s.end, NormalizedPoint::BOTTOM));
        assert!(approx(s.start, NormalizedPoint::TOP));
    }

    // ── tie-break at the corners ──────────────────────────────────────────

    #[test]
    fn forty_five_degrees_hits_the_top_right_corner_exactly() {
        let v = gradient_vector_for_angle(45.0);
        assert_eq!(v.end.x, 1.0);
        assert_eq!(v.end.y, 0.0);
        assert_eq!(v.start, NormalizedPoint::BOTTOM_LEFT);
    }

    #[test]
    fn diagonal_family_reaches_corners_without_nan() {
        let corners = [
            (45.0, NormalizedPoint::TOP_RIGHT),
            (135.0, NormalizedPoint::TOP_LEFT),
            (225.0, NormalizedPoint::BOTTOM_LEFT),
            (315.0, NormalizedPoint::BOTTOM_RIGHT),
            (-45.0, NormalizedPoint::BOTTOM_RIGHT),
        ];
        for (angle, corner) in corners {
            let v = gradient_vector_for_angle(angle);
            assert!(v.is_finite(), "NaN at {angle}");
            assert!(approx(v.end, corner), "{angle}: {:?}", v.end);
        }
    }

    #[test]
    fn unit_square_point_has_one_saturated_axis() {
        for angle in sweep(1.0) {
            let p = point_for_angle(angle);
            let saturated = (p.x.abs() - 1.0).abs() <= EPS || (p.y.abs() - 1.0).abs() <= EPS;
            assert!(saturated, "{angle}: {p:?}");
            assert!(p.x.abs() <= 1.0 + EPS && p.y.abs() <= 1.0 + EPS, "{angle}: {p:?}");
        }
    }

    // ── invariants ────────────────────────────────────────────────────────

    #[test]
    fn start_is_reflection_of_end_through_center() {
        for angle in sweep(7.5) {
            let v = gradient_vector_for_angle(angle);
            let mirrored = NormalizedPoint::new(1.0 - v.end.x, 1.0 - v.end.y);
            assert!(approx(v.start, mirrored), "{angle}: {v:?}");
        }
    }

    #[test]
    fn full_turns_are_periodic() {
        for angle in (-8..=8).map(|i| i as f32 * 97.5) {
            let a = gradient_vector_for_angle(angle);
            let b = gradient_vector_for_angle(angle + 360.0);
            let c = gradient_vector_for_angle(angle - 720.0);
            assert!(approx(a.end, b.end) && approx(a.start, b.start), "{angle}");
            assert!(approx(a.end, c.end) && approx(a.start, c.start), "{angle}");
        }
    }

    #[test]
    fn one_degree_sweep_is_finite_and_continuous() {
        let mut prev: Option<GradientVector> = None;
        for angle in sweep(1.0) {
            let v = gradient_vector_for_angle(angle);
            assert!(v.is_finite(), "non-finite at {angle}");
            for p in [v.start, v.end] {
                assert!((-EPS..=1.0 + EPS).contains(&p.x), "{angle}: {p:?}");
                assert!((-EPS..=1.0 + EPS).contains(&p.y), "{angle}: {p:?}");
            }
            if let Some(prev) = prev {
                // Steepest slope is at the corners: d(tan θ)/dθ = 2 over a
                // one-degree step, halved by the gradient-space transform.
                assert!(prev.end.distance(v.end) < 0.03, "jump at {angle}");
            }
            prev = Some(v);
        }
    }

    #[test]
    fn axis_length_is_between_side_and_diagonal() {
        for angle in sweep(1.0) {
            let v = gradient_vector_for_angle(angle);
            let d = v.start.distance(v.end);
            assert!(d >= 1.0 - EPS, "{angle}: {d}");
            assert!(d <= core::f32::consts::SQRT_2 + EPS, "{angle}: {d}");
        }
    }

    // ── non-finite input ──────────────────────────────────────────────────

    #[test]
    fn non_finite_angle_propagates_nan() {
        for angle in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY] {
            let v = gradient_vector_for_angle(angle);
            assert!(!v.is_finite());
            assert!(v.end.x.is_nan() && v.start.y.is_nan());
        }
    }

    #[test]
    fn resolve_maps_into_pixels() {
        let rect = Rect::new(0.0, 0.0, 300.0, 100.0);
        let (start, end) = gradient_vector_for_angle(0.0).resolve(rect);
        assert_eq!(start, Vec2::new(0.0, 50.0));
        assert_eq!(end, Vec2::new(300.0, 50.0));
    }
}
