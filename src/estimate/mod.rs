//! Location estimates from an intersection point cloud.
//!
//! Two independent estimators turn the valid intersection points of a pass
//! into a single location:
//!
//! - [`density_estimate`] - median of the densest fixed-radius neighborhood
//! - [`median_estimate`] - per-coordinate median of the whole cloud
//!
//! Both return an [`Estimate`], which is absent when there is nothing to
//! estimate from.

mod density;
mod median;

pub use density::{densest_neighborhood, density_estimate, Neighborhood, NEIGHBORHOOD_RADIUS};
pub use median::{median, median_estimate};

use crate::primitives::Point2;

/// An estimated location, or `None` when the input was insufficient.
pub type Estimate<F> = Option<Point2<F>>;
