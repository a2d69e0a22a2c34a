//! Spatial indexing over point clouds.
//!
//! The density estimator only needs one capability: given a set of points and
//! a radius, return the neighbors of every point. [`NeighborIndex`] names that
//! capability.
//!
//! - [`KdTree`] - A balanced 2D KD-tree answering ball queries in sub-linear time
//! - [`LinearScan`] - Brute-force reference, O(n²) over the whole cloud

mod kdtree;
mod linear;

pub use kdtree::KdTree;
pub use linear::LinearScan;

use crate::primitives::Point2;
use num_traits::Float;

/// A structure that can answer fixed-radius neighbor queries over the point
/// slice it was built from.
///
/// Indices returned by every method refer to positions in that slice.
/// Distances are compared inclusively: a point exactly `radius` away is a
/// neighbor, and every point is its own neighbor.
pub trait NeighborIndex<F: Float> {
    /// Returns the indices of all points within `radius` of `query`.
    fn within_radius(&self, points: &[Point2<F>], query: Point2<F>, radius: F) -> Vec<usize>;

    /// Returns, for every point in `points`, the indices of its neighbors
    /// within `radius` (including itself). The outer vector follows the
    /// order of `points`.
    fn neighborhoods(&self, points: &[Point2<F>], radius: F) -> Vec<Vec<usize>> {
        points
            .iter()
            .map(|&p| self.within_radius(points, p, radius))
            .collect()
    }
}
