//! One full estimation pass over an antenna set.
//!
//! A pass is a pure function of the circles it is given: aggregation first,
//! then both estimators over the same valid points. Nothing is carried from
//! one pass to the next, so re-running a pass on unchanged circles gives an
//! identical [`PassResult`].

use crate::estimate::{density_estimate, median_estimate, Estimate};
use crate::intersect::IntersectionSet;
use crate::primitives::Circle2;
use num_traits::Float;

/// Everything one pass produces for the drawing layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PassResult<F> {
    /// All pairwise intersection slots, absent ones included.
    pub intersections: IntersectionSet<F>,
    /// Median of the densest neighborhood of intersection points.
    pub density: Estimate<F>,
    /// Per-coordinate median of all intersection points.
    pub median: Estimate<F>,
}

impl<F: Float> PassResult<F> {
    /// Returns true if at least one estimate is available.
    pub fn has_estimate(&self) -> bool {
        self.density.is_some() || self.median.is_some()
    }
}

impl<F: Float> Default for PassResult<F> {
    fn default() -> Self {
        Self {
            intersections: IntersectionSet::default(),
            density: None,
            median: None,
        }
    }
}

/// Runs one estimation pass over `circles`.
///
/// # Example
///
/// ```
/// use multilat::pipeline::compute_pass;
/// use multilat::primitives::Circle2;
///
/// let antennas: Vec<Circle2<f64>> = vec![
///     Circle2::from_coords(0.0, 0.0, 50.0),
///     Circle2::from_coords(60.0, 0.0, 50.0),
///     Circle2::from_coords(30.0, 60.0, 50.0),
/// ];
///
/// let pass = compute_pass(&antennas);
/// assert_eq!(pass.intersections.len(), 6);
/// assert!(pass.density.is_some());
/// assert!(pass.median.is_some());
///
/// assert!(compute_pass::<f64>(&antennas[..1]).density.is_none());
/// ```
pub fn compute_pass<F: Float>(circles: &[Circle2<F>]) -> PassResult<F> {
    let intersections = IntersectionSet::from_circles(circles);
    let points = intersections.valid_points();

    let density = density_estimate(points);
    let median = median_estimate(&intersections.xs(), &intersections.ys());

    tracing::debug!(
        circles = circles.len(),
        slots = intersections.len(),
        valid = points.len(),
        density = ?density.map(|p| (p.x.to_f64(), p.y.to_f64())),
        median = ?median.map(|p| (p.x.to_f64(), p.y.to_f64())),
        "estimation pass complete"
    );

    PassResult {
        intersections,
        density,
        median,
    }
}
