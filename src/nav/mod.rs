//! Maneuver graph and visibility pathfinding
//!
//! A sparse, hand-authored waypoint graph stitched together with
//! line-of-sight tests at query time.

mod graph;
mod pathfinder;

pub use graph::{DEFAULT_AUTO_CONNECT_RADIUS, ManeuverGraph, ManeuverNode};
pub use pathfinder::{Path, build_path};
