//! KD-tree for fixed-radius neighbor queries.
//!
//! The tree stores indices into an external point slice, so the intersection
//! cloud produced by a pass can be indexed without copying it.
//!
//! # Example
//!
//! ```
//! use multilat::primitives::Point2;
//! use multilat::spatial::{KdTree, NeighborIndex};
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(2.0, 3.0),
//!     Point2::new(5.0, 4.0),
//!     Point2::new(9.0, 6.0),
//!     Point2::new(4.0, 7.0),
//! ];
//!
//! let tree = KdTree::build(&points);
//! let mut near = tree.within_radius(&points, Point2::new(3.0, 4.0), 2.5);
//! near.sort_unstable();
//! assert_eq!(near, vec![0, 1]);
//! ```

use super::NeighborIndex;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Splitting axis of an internal node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn at_depth(depth: usize) -> Self {
        if depth % 2 == 0 {
            Axis::X
        } else {
            Axis::Y
        }
    }

    #[inline]
    fn coord<F: Float>(self, p: Point2<F>) -> F {
        match self {
            Axis::X => p.x,
            Axis::Y => p.y,
        }
    }
}

/// A node in the KD-tree.
#[derive(Debug, Clone)]
enum KdNode {
    /// A leaf holding a single point index.
    Leaf { index: usize },
    /// The median point on `axis`; `left` holds coordinates at or below it,
    /// `right` at or above it.
    Split {
        index: usize,
        axis: Axis,
        left: Option<Box<KdNode>>,
        right: Option<Box<KdNode>>,
    },
}

/// A balanced 2D KD-tree over a point slice.
///
/// # Complexity
///
/// - Construction: O(n log² n) (sort per level)
/// - Ball query: O(√n + k) typical, where k is the number of results
#[derive(Debug, Clone)]
pub struct KdTree {
    root: Option<Box<KdNode>>,
    size: usize,
}

impl KdTree {
    /// Builds a KD-tree from a slice of points.
    ///
    /// Returns an empty tree if the input is empty.
    pub fn build<F: Float>(points: &[Point2<F>]) -> Self {
        if points.is_empty() {
            return KdTree {
                root: None,
                size: 0,
            };
        }

        let mut indices: Vec<usize> = (0..points.len()).collect();
        let root = Self::build_recursive(points, &mut indices, 0);

        KdTree {
            root: Some(root),
            size: points.len(),
        }
    }

    fn build_recursive<F: Float>(
        points: &[Point2<F>],
        indices: &mut [usize],
        depth: usize,
    ) -> Box<KdNode> {
        if indices.len() == 1 {
            return Box::new(KdNode::Leaf { index: indices[0] });
        }

        let axis = Axis::at_depth(depth);

        // Stable sort keeps construction deterministic for duplicate points
        indices.sort_by(|&a, &b| {
            axis.coord(points[a])
                .partial_cmp(&axis.coord(points[b]))
                .unwrap_or(Ordering::Equal)
        });

        let median = indices.len() / 2;
        let index = indices[median];
        let (below, rest) = indices.split_at_mut(median);
        let above = &mut rest[1..];

        let left = (!below.is_empty()).then(|| Self::build_recursive(points, below, depth + 1));
        let right = (!above.is_empty()).then(|| Self::build_recursive(points, above, depth + 1));

        Box::new(KdNode::Split {
            index,
            axis,
            left,
            right,
        })
    }

    /// Returns the number of points in the tree.
    pub fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the tree is empty.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    fn radius_recursive<F: Float>(
        points: &[Point2<F>],
        node: &KdNode,
        query: Point2<F>,
        radius: F,
        results: &mut Vec<usize>,
    ) {
        match node {
            KdNode::Leaf { index } => {
                if points[*index].distance(query) <= radius {
                    results.push(*index);
                }
            }
            KdNode::Split {
                index,
                axis,
                left,
                right,
            } => {
                let point = points[*index];
                if point.distance(query) <= radius {
                    results.push(*index);
                }

                let query_val = axis.coord(query);
                let split_val = axis.coord(point);

                if let Some(child) = left {
                    if query_val - radius <= split_val {
                        Self::radius_recursive(points, child, query, radius, results);
                    }
                }
                if let Some(child) = right {
                    if query_val + radius >= split_val {
                        Self::radius_recursive(points, child, query, radius, results);
                    }
                }
            }
        }
    }
}

impl<F: Float> NeighborIndex<F> for KdTree {
    /// Finds all points within `radius` of `query`.
    ///
    /// Result order follows the tree traversal, not the input order.
    fn within_radius(&self, points: &[Point2<F>], query: Point2<F>, radius: F) -> Vec<usize> {
        let mut results = Vec::new();
        if let Some(root) = &self.root {
            Self::radius_recursive(points, root, query, radius, &mut results);
        }
        results
    }
}
