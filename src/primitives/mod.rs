//! Floating-point geometric primitives.
//!
//! Everything the estimation pipeline needs is here: points, displacement
//! vectors and circles. All types are generic over `f32` or `f64`.

mod circle2;
mod point2;
mod vec2;

pub use circle2::{Circle2, CircleIntersection, COINCIDENT_EPSILON};
pub use point2::Point2;
pub use vec2::Vec2;
