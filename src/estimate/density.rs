//! Density-based location estimate.
//!
//! Each valid intersection point votes for a location. The point with the
//! most other points within [`NEIGHBORHOOD_RADIUS`] marks the region where
//! the most antenna pairs agree, and the coordinate-wise median of that
//! neighborhood is reported. Spurious crossings from antennas that do not
//! overlap near the target fall outside the neighborhood and are ignored.

use super::{median, Estimate};
use crate::primitives::Point2;
use crate::spatial::{KdTree, NeighborIndex};
use num_traits::Float;

/// Neighborhood radius, in scene units, used by [`density_estimate`].
pub const NEIGHBORHOOD_RADIUS: f64 = 100.0;

/// The largest fixed-radius neighborhood of a point cloud.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Neighborhood {
    /// Index of the point the neighborhood is centered on.
    pub seed: usize,
    /// Indices of all points within the radius of `seed`, itself included,
    /// in ascending order.
    pub members: Vec<usize>,
}

impl Neighborhood {
    /// Returns the number of points in the neighborhood.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the neighborhood has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Coordinate-wise median of the member points.
    pub fn median_point<F: Float>(&self, points: &[Point2<F>]) -> Estimate<F> {
        let xs: Vec<F> = self.members.iter().map(|&i| points[i].x).collect();
        let ys: Vec<F> = self.members.iter().map(|&i| points[i].y).collect();
        Some(Point2::new(median(&xs)?, median(&ys)?))
    }
}

/// Finds the point whose `radius`-neighborhood holds the most points.
///
/// Ties go to the earliest point in `points`. Returns `None` for an empty
/// cloud.
pub fn densest_neighborhood<F, I>(
    index: &I,
    points: &[Point2<F>],
    radius: F,
) -> Option<Neighborhood>
where
    F: Float,
    I: NeighborIndex<F>,
{
    let mut best: Option<Neighborhood> = None;

    for (seed, mut members) in index.neighborhoods(points, radius).into_iter().enumerate() {
        if best.as_ref().map_or(true, |b| members.len() > b.len()) {
            members.sort_unstable();
            best = Some(Neighborhood { seed, members });
        }
    }

    best
}

/// Estimates a location from the densest cluster of intersection points.
///
/// Builds a [`KdTree`] over `points`, takes the largest
/// [`NEIGHBORHOOD_RADIUS`] neighborhood and returns the coordinate-wise
/// median of its members. Returns `None` for an empty cloud.
///
/// # Example
///
/// ```
/// use multilat::estimate::density_estimate;
/// use multilat::primitives::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(100.0, 100.0),
///     Point2::new(110.0, 104.0),
///     Point2::new(104.0, 96.0),
///     Point2::new(600.0, 20.0),
/// ];
///
/// let at = density_estimate(&points).unwrap();
/// assert_eq!(at, Point2::new(104.0, 100.0));
/// ```
pub fn density_estimate<F: Float>(points: &[Point2<F>]) -> Estimate<F> {
    let tree = KdTree::build(points);
    let radius = F::from(NEIGHBORHOOD_RADIUS).unwrap();
    densest_neighborhood(&tree, points, radius)?.median_point(points)
}
