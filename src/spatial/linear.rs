//! Brute-force neighbor search.

use super::NeighborIndex;
use crate::primitives::Point2;
use num_traits::Float;

/// Exhaustive neighbor search with no acceleration structure.
///
/// Used to cross-check [`KdTree`](super::KdTree) and for tiny point clouds
/// where building a tree is not worth it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScan;

impl<F: Float> NeighborIndex<F> for LinearScan {
    fn within_radius(&self, points: &[Point2<F>], query: Point2<F>, radius: F) -> Vec<usize> {
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.distance(query) <= radius)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_within_radius_inclusive() {
        let points: Vec<Point2<f64>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 4.0),
            Point2::new(6.0, 8.0),
        ];
        let found = LinearScan.within_radius(&points, Point2::origin(), 5.0);
        assert_eq!(found, vec![0, 1]);
    }

    #[test]
    fn test_neighborhoods_include_self() {
        let points: Vec<Point2<f64>> = vec![Point2::new(0.0, 0.0), Point2::new(50.0, 0.0)];
        let hoods = LinearScan.neighborhoods(&points, 1.0);
        assert_eq!(hoods, vec![vec![0], vec![1]]);
    }
}
