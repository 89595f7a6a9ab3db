//! Isometric navigation and path planning
//!
//! This crate provides:
//! - Coordinate transforms between the tile grid, world space, and map pixels
//! - Polygon containment and sampled line-of-sight tests
//! - Visibility-graph pathfinding over hand-authored maneuver nodes
//! - Frame-stepped agent motion with corner blending and 8-way facing

pub mod agent;
pub mod config;
pub mod geometry;
pub mod iso;
pub mod nav;

// Re-exports for convenience
pub use glam;

/// Prelude module for common imports
pub mod prelude {
    pub use crate::agent::{Agent, AgentState, Facing};
    pub use crate::config::NavConfig;
    pub use crate::geometry::{Polygon, point_inside_any, ray_clear, segment_clear_exact};
    pub use crate::iso::{GridCoord, MapMetrics, iso_to_world, pixel_to_world, world_to_iso};
    pub use crate::nav::{ManeuverGraph, ManeuverNode, Path, build_path};
    pub use glam::Vec2;
}
