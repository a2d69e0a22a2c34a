//! Median and the coordinate-wise median estimator.

use super::Estimate;
use crate::primitives::Point2;
use num_traits::Float;
use std::cmp::Ordering;

/// Computes the median of a slice without modifying it.
///
/// Even-length input averages the two middle values. Returns `None` for an
/// empty slice.
///
/// ```
/// use multilat::estimate::median;
///
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// assert_eq!(median::<f64>(&[]), None);
/// ```
pub fn median<F: Float>(values: &[F]) -> Option<F> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        let two = F::one() + F::one();
        Some((sorted[mid - 1] + sorted[mid]) / two)
    } else {
        Some(sorted[mid])
    }
}

/// Estimates a location as the median x paired with the median y.
///
/// The coordinates are reduced independently, so the result need not be one
/// of the input points. Returns `None` when either slice is empty.
pub fn median_estimate<F: Float>(xs: &[F], ys: &[F]) -> Estimate<F> {
    Some(Point2::new(median(xs)?, median(ys)?))
}
