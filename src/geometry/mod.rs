//! Geometric predicates
//!
//! Polygon containment and line-of-sight tests. All functions are pure
//! and side-effect free.

mod polygon;
mod ray;

pub use polygon::{Polygon, point_inside_any};
pub use ray::{DEFAULT_RAY_STEP, ray_clear, segment_clear_exact};
