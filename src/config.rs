//! Navigation configuration
//!
//! Tunable parameters shared by the pathfinder and the motion integrator.

use serde::{Deserialize, Serialize};

use crate::geometry::DEFAULT_RAY_STEP;
use crate::nav::DEFAULT_AUTO_CONNECT_RADIUS;

/// Navigation configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NavConfig {
    /// Sampling interval for line-of-sight tests, in world units.
    /// Obstacles thinner than this can slip between samples.
    pub ray_step: f32,
    /// Radius within which nodes authored without connections are
    /// auto-wired to their neighbors, in world units
    pub auto_connect_radius: f32,
    /// Distance at which a waypoint counts as reached, in world units
    pub reach_threshold: f32,
    /// Distance from a waypoint at which corner blending begins,
    /// in world units
    pub blend_distance: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            ray_step: DEFAULT_RAY_STEP,
            auto_connect_radius: DEFAULT_AUTO_CONNECT_RADIUS,
            reach_threshold: 0.1,
            blend_distance: 0.5,
        }
    }
}

impl NavConfig {
    /// Set the line-of-sight sampling interval
    pub fn with_ray_step(mut self, step: f32) -> Self {
        self.ray_step = step;
        self
    }

    /// Set the auto-connection radius
    pub fn with_auto_connect_radius(mut self, radius: f32) -> Self {
        self.auto_connect_radius = radius;
        self
    }

    /// Set the waypoint reach threshold
    pub fn with_reach_threshold(mut self, threshold: f32) -> Self {
        self.reach_threshold = threshold;
        self
    }

    /// Set the corner blend distance
    pub fn with_blend_distance(mut self, distance: f32) -> Self {
        self.blend_distance = distance;
        self
    }
}
