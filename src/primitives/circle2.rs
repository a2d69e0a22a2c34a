//! 2D circle type and circle-circle intersection.

use super::{Point2, Vec2};
use num_traits::Float;

/// Center distance at or below which two circles are treated as concentric.
///
/// Concentric circles either never meet or coincide entirely, and the
/// intersection formula divides by the squared center distance, so such pairs
/// produce no intersection points.
pub const COINCIDENT_EPSILON: f64 = 1e-3;

/// Outcome of intersecting two circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleIntersection<F> {
    /// Centers are within [`COINCIDENT_EPSILON`] of each other.
    Coincident,
    /// Circles are too far apart, or one lies strictly inside the other.
    Separate,
    /// Two boundary crossings. Tangent circles yield two identical points.
    Pair(Point2<F>, Point2<F>),
}

impl<F: Float> CircleIntersection<F> {
    /// Returns the two intersection points, if any.
    #[inline]
    pub fn points(self) -> Option<(Point2<F>, Point2<F>)> {
        match self {
            CircleIntersection::Pair(a, b) => Some((a, b)),
            _ => None,
        }
    }

    /// Returns true if the circles produced intersection points.
    #[inline]
    pub fn is_pair(self) -> bool {
        matches!(self, CircleIntersection::Pair(..))
    }

    /// Returns the result as two point slots, both absent when there is no
    /// intersection.
    #[inline]
    pub fn slots(self) -> [Option<Point2<F>>; 2] {
        match self {
            CircleIntersection::Pair(a, b) => [Some(a), Some(b)],
            _ => [None, None],
        }
    }
}

/// A 2D circle defined by center and radius.
///
/// In a multilateration scene each circle is an antenna: the center is the
/// antenna position and the radius the measured range.
///
/// # Example
///
/// ```
/// use multilat::primitives::{Circle2, Point2};
///
/// let a: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 5.0);
/// let b = Circle2::from_coords(8.0, 0.0, 5.0);
///
/// let (p, q) = a.intersect_circle(&b).points().unwrap();
/// assert!((p.x - 4.0).abs() < 1e-12 && (p.y.abs() - 3.0).abs() < 1e-12);
/// assert!((q.x - 4.0).abs() < 1e-12 && (q.y + p.y).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Circle2<F> {
    /// Center point of the circle
    pub center: Point2<F>,
    /// Radius of the circle (must be non-negative)
    pub radius: F,
}

impl<F: Float> Circle2<F> {
    /// Creates a new circle from center and radius.
    #[inline]
    pub fn new(center: Point2<F>, radius: F) -> Self {
        Self { center, radius }
    }

    /// Creates a circle from center coordinates and radius.
    #[inline]
    pub fn from_coords(cx: F, cy: F, radius: F) -> Self {
        Self {
            center: Point2::new(cx, cy),
            radius,
        }
    }

    /// Checks if a point is inside the circle (including boundary).
    #[inline]
    pub fn contains(&self, point: Point2<F>) -> bool {
        self.center.distance(point) <= self.radius
    }

    /// Returns a circle with the radius multiplied by `factor`.
    #[inline]
    pub fn scaled(&self, factor: F) -> Self {
        Self {
            center: self.center,
            radius: self.radius * factor,
        }
    }

    /// Returns a circle translated by the given vector.
    #[inline]
    pub fn translated(&self, offset: Vec2<F>) -> Self {
        Self {
            center: self.center + offset,
            radius: self.radius,
        }
    }

    /// Finds the intersection points of two circles.
    ///
    /// With `d` the center distance, the crossings lie on the radical line at
    /// `mid + q * (B - A)`, offset by `±w` along `(By - Ay, Ax - Bx)`, where
    ///
    /// ```text
    /// q  = (rA² - rB²) / 2d²
    /// w2 = 2 (rA² + rB²) / d² - (rA² - rB²)² / d⁴ - 1
    /// w  = √w2 / 2
    /// ```
    ///
    /// A negative `w2` means the boundaries never cross. Tangent circles give
    /// `w2 == 0` and two identical points; no special case is made for them.
    pub fn intersect_circle(&self, other: &Circle2<F>) -> CircleIntersection<F> {
        let a = self.center;
        let b = other.center;

        let d = a.distance(b);
        if d <= F::from(COINCIDENT_EPSILON).unwrap() {
            return CircleIntersection::Coincident;
        }

        let one = F::one();
        let two = one + one;
        let half = F::from(0.5).unwrap();

        let ra_sq = self.radius * self.radius;
        let rb_sq = other.radius * other.radius;
        let d_sq = d * d;
        let diff = ra_sq - rb_sq;

        let q = diff / (two * d_sq);
        let w0 = (ra_sq + rb_sq) / d_sq;
        let w1 = diff * diff / (d_sq * d_sq);
        let w2 = two * w0 - w1 - one;

        // NaN radii fall through here as well
        if !(w2 >= F::zero()) {
            return CircleIntersection::Separate;
        }

        let w = half * w2.sqrt();
        let along = b - a;
        let base = a.midpoint(b) + along * q;
        let offset = along.perpendicular_cw() * w;

        CircleIntersection::Pair(base + offset, base + (-offset))
    }

    /// Checks if the boundaries of two circles cross or touch.
    #[inline]
    pub fn intersects_circle(&self, other: &Circle2<F>) -> bool {
        self.intersect_circle(other).is_pair()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new() {
        let c: Circle2<f64> = Circle2::new(Point2::new(1.0, 2.0), 3.0);
        assert_eq!(c.center.x, 1.0);
        assert_eq!(c.center.y, 2.0);
        assert_eq!(c.radius, 3.0);
        assert_eq!(c, Circle2::from_coords(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_contains() {
        let c: Circle2<f64> = Circle2::new(Point2::origin(), 1.0);

        assert!(c.contains(Point2::new(0.0, 0.0))); // Center
        assert!(c.contains(Point2::new(1.0, 0.0))); // On boundary
        assert!(c.contains(Point2::new(0.5, 0.5))); // Inside
        assert!(!c.contains(Point2::new(1.0, 1.0))); // Outside
    }

    #[test]
    fn test_scaled_and_translated() {
        let c: Circle2<f64> = Circle2::from_coords(1.0, 1.0, 2.0);
        assert_eq!(c.scaled(2.0).radius, 4.0);
        assert_eq!(c.scaled(2.0).center, c.center);

        let moved = c.translated(Vec2::new(3.0, 4.0));
        assert_eq!(moved.center, Point2::new(4.0, 5.0));
        assert_eq!(moved.radius, 2.0);
    }

    #[test]
    fn test_intersect_two_points() {
        let c1: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 5.0);
        let c2 = Circle2::from_coords(8.0, 0.0, 5.0);

        let (p0, p1) = c1.intersect_circle(&c2).points().unwrap();
        assert_relative_eq!(p0.x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(p0.y, -3.0, epsilon = 1e-12);
        assert_relative_eq!(p1.x, 4.0, epsilon = 1e-12);
        assert_relative_eq!(p1.y, 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intersect_points_lie_on_both_circles() {
        let c1: Circle2<f64> = Circle2::from_coords(150.0, 400.0, 150.0);
        let c2 = Circle2::from_coords(320.0, 200.0, 150.0);

        let (p0, p1) = c1.intersect_circle(&c2).points().unwrap();
        for p in [p0, p1] {
            assert_relative_eq!(p.distance(c1.center), 150.0, epsilon = 1e-9);
            assert_relative_eq!(p.distance(c2.center), 150.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_intersect_unequal_radii() {
        let c1: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 2.0);
        let c2 = Circle2::from_coords(3.0, 0.0, 2.0_f64.sqrt());

        // x² + y² = 4 and (x-3)² + y² = 2 meet at x = 11/6
        let (p0, p1) = c1.intersect_circle(&c2).points().unwrap();
        assert_relative_eq!(p0.x, 11.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(p1.x, 11.0 / 6.0, epsilon = 1e-12);
        assert_relative_eq!(p0.y, -p1.y, epsilon = 1e-12);
    }

    #[test]
    fn test_intersect_far_apart() {
        let c1: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 1.0);
        let c2 = Circle2::from_coords(10.0, 0.0, 1.0);

        assert_eq!(c1.intersect_circle(&c2), CircleIntersection::Separate);
        assert!(!c1.intersects_circle(&c2));
    }

    #[test]
    fn test_intersect_nested() {
        let outer: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 10.0);
        let inner = Circle2::from_coords(1.0, 0.0, 2.0);

        assert_eq!(outer.intersect_circle(&inner), CircleIntersection::Separate);
    }

    #[test]
    fn test_intersect_coincident_centers() {
        let c1: Circle2<f64> = Circle2::from_coords(5.0, 5.0, 3.0);
        for r in [0.0, 1.0, 3.0, 50.0] {
            let c2 = Circle2::from_coords(5.0, 5.0, r);
            assert_eq!(c1.intersect_circle(&c2), CircleIntersection::Coincident);
        }

        let near = Circle2::from_coords(5.0005, 5.0, 3.0);
        assert_eq!(c1.intersect_circle(&near), CircleIntersection::Coincident);
    }

    #[test]
    fn test_intersect_tangent() {
        let c1: Circle2<f64> = Circle2::from_coords(0.0, 0.0, 3.0);
        let c2 = Circle2::from_coords(6.0, 0.0, 3.0);

        let (p0, p1) = c1.intersect_circle(&c2).points().unwrap();
        assert_eq!(p0, p1);
        assert_relative_eq!(p0.x, 3.0, epsilon = 1e-12);
        assert_relative_eq!(p0.y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_intersect_symmetric_as_set() {
        let c1: Circle2<f64> = Circle2::from_coords(1.0, 2.0, 4.0);
        let c2 = Circle2::from_coords(4.0, 6.0, 3.0);

        let (a0, a1) = c1.intersect_circle(&c2).points().unwrap();
        let (b0, b1) = c2.intersect_circle(&c1).points().unwrap();

        // Swapping the circles flips the perpendicular, so the order swaps.
        assert_relative_eq!(a0.x, b1.x, epsilon = 1e-12);
        assert_relative_eq!(a0.y, b1.y, epsilon = 1e-12);
        assert_relative_eq!(a1.x, b0.x, epsilon = 1e-12);
        assert_relative_eq!(a1.y, b0.y, epsilon = 1e-12);
    }

    #[test]
    fn test_intersect_nan_radius() {
        let c1: Circle2<f64> = Circle2::from_coords(0.0, 0.0, f64::NAN);
        let c2 = Circle2::from_coords(3.0, 0.0, 2.0);
        assert_eq!(c1.intersect_circle(&c2), CircleIntersection::Separate);
    }

    #[test]
    fn test_slots() {
        let none: CircleIntersection<f64> = CircleIntersection::Separate;
        assert_eq!(none.slots(), [None, None]);

        let p = Point2::new(1.0, 2.0);
        let q = Point2::new(3.0, 4.0);
        assert_eq!(CircleIntersection::Pair(p, q).slots(), [Some(p), Some(q)]);
    }

    #[test]
    fn test_f32_support() {
        let c1: Circle2<f32> = Circle2::from_coords(0.0, 0.0, 5.0);
        let c2 = Circle2::from_coords(8.0, 0.0, 5.0);
        let (p0, _) = c1.intersect_circle(&c2).points().unwrap();
        assert_relative_eq!(p0.x, 4.0, epsilon = 1e-5);
    }
}
