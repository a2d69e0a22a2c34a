//! Pairwise intersection of an antenna set.
//!
//! [`IntersectionSet::from_circles`] runs the circle-circle solver over every
//! unordered pair of circles and keeps two point slots per pair, absent when
//! that pair does not intersect.
//!
//! # Pair order
//!
//! Pairs `(i, j)` with `i < j` are visited colexicographically:
//!
//! ```text
//! (0,1) (0,2) (1,2) (0,3) (1,3) (2,3) ...
//! ```
//!
//! so the slots for the first `n` circles are always a prefix of the slots
//! for `n + 1` circles. Adding a circle appends `2n` slots and never moves an
//! existing one.

use crate::primitives::{Circle2, CircleIntersection, Point2};
use num_traits::Float;

/// Number of unordered pairs among `n` circles.
#[inline]
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Returns the circle pair `(i, j)` visited at position `k` of the pair order.
///
/// ```
/// use multilat::intersect::pair_at;
///
/// assert_eq!(pair_at(0), (0, 1));
/// assert_eq!(pair_at(2), (1, 2));
/// assert_eq!(pair_at(3), (0, 3));
/// ```
pub fn pair_at(k: usize) -> (usize, usize) {
    // Largest j with j(j-1)/2 <= k
    let mut j = ((((8 * k + 1) as f64).sqrt() + 1.0) / 2.0) as usize;
    while pair_count(j) > k {
        j -= 1;
    }
    while pair_count(j + 1) <= k {
        j += 1;
    }
    (k - pair_count(j), j)
}

/// Iterates circle pairs `(i, j)` in pair order.
pub fn pairs(n: usize) -> impl Iterator<Item = (usize, usize)> {
    (1..n).flat_map(|j| (0..j).map(move |i| (i, j)))
}

/// All pairwise intersection slots of one pass.
///
/// # Example
///
/// ```
/// use multilat::intersect::IntersectionSet;
/// use multilat::primitives::Circle2;
///
/// let circles: Vec<Circle2<f64>> = vec![
///     Circle2::from_coords(0.0, 0.0, 5.0),
///     Circle2::from_coords(8.0, 0.0, 5.0),
///     Circle2::from_coords(100.0, 0.0, 1.0),
/// ];
///
/// let set = IntersectionSet::from_circles(&circles);
/// assert_eq!(set.len(), 6);
/// assert_eq!(set.valid_points().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionSet<F> {
    slots: Vec<Option<Point2<F>>>,
    valid: Vec<Point2<F>>,
}

impl<F: Float> IntersectionSet<F> {
    /// Intersects every unordered pair of `circles`.
    ///
    /// Fewer than two circles give an empty set. Coincident and
    /// non-intersecting pairs contribute two absent slots.
    pub fn from_circles(circles: &[Circle2<F>]) -> Self {
        let n = pair_count(circles.len());
        let mut slots = Vec::with_capacity(2 * n);
        let mut valid = Vec::with_capacity(2 * n);

        for (i, j) in pairs(circles.len()) {
            let hit = circles[i].intersect_circle(&circles[j]);
            match hit {
                CircleIntersection::Pair(a, b) => valid.extend([a, b]),
                CircleIntersection::Coincident => {
                    tracing::trace!(i, j, "concentric antennas, pair skipped");
                }
                CircleIntersection::Separate => {
                    tracing::trace!(i, j, "antennas do not intersect");
                }
            }
            slots.extend(hit.slots());
        }

        Self { slots, valid }
    }

    /// Returns every slot in pair order, two per pair.
    #[inline]
    pub fn slots(&self) -> &[Option<Point2<F>>] {
        &self.slots
    }

    /// Returns the number of slots (`2 × C(n, 2)`).
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if no pair was visited.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns the number of circle pairs visited.
    #[inline]
    pub fn pair_count(&self) -> usize {
        self.slots.len() / 2
    }

    /// Returns the circle pair a slot came from, or `None` past the end.
    pub fn pair_of(&self, slot: usize) -> Option<(usize, usize)> {
        (slot < self.slots.len()).then(|| pair_at(slot / 2))
    }

    /// Returns the non-absent points, in slot order.
    #[inline]
    pub fn valid_points(&self) -> &[Point2<F>] {
        &self.valid
    }

    /// Returns the x coordinates of the valid points.
    pub fn xs(&self) -> Vec<F> {
        self.valid.iter().map(|p| p.x).collect()
    }

    /// Returns the y coordinates of the valid points.
    pub fn ys(&self) -> Vec<F> {
        self.valid.iter().map(|p| p.y).collect()
    }

    /// Returns the number of pairs that produced intersection points.
    #[inline]
    pub fn intersecting_pairs(&self) -> usize {
        self.valid.len() / 2
    }
}

impl<F: Float> Default for IntersectionSet<F> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            valid: Vec::new(),
        }
    }
}
