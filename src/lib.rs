//! multilat - Circle multilateration
//!
//! Given a set of antennas, each a circle whose radius is a measured range,
//! this library intersects every pair of circles and reduces the resulting
//! point cloud to a single location in two independent ways:
//!
//! - **density** - the coordinate-wise median of the largest cluster of
//!   intersection points, found with a KD-tree ball query
//! - **median** - the per-coordinate median of all intersection points
//!
//! ```
//! use multilat::{compute_pass, Circle2};
//!
//! let antennas: Vec<Circle2<f64>> = vec![
//!     Circle2::from_coords(150.0, 400.0, 150.0),
//!     Circle2::from_coords(320.0, 200.0, 150.0),
//!     Circle2::from_coords(450.0, 450.0, 180.0),
//! ];
//!
//! let pass = compute_pass(&antennas);
//! assert_eq!(pass.intersections.len(), 6);
//! let location = pass.density.unwrap();
//! assert!(location.x > 200.0 && location.x < 400.0);
//! ```

pub mod config;
pub mod error;
pub mod estimate;
pub mod intersect;
pub mod io;
pub mod pipeline;
pub mod primitives;
pub mod scene;
pub mod spatial;

pub use config::SceneConfig;
pub use error::MultilatError;
pub use estimate::Estimate;
pub use intersect::IntersectionSet;
pub use pipeline::{compute_pass, PassResult};
pub use primitives::{Circle2, CircleIntersection, Point2, Vec2};
pub use scene::Scene;
