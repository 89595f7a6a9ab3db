//! Frame-stepped path following

use glam::Vec2;

use crate::config::NavConfig;
use crate::geometry::{Polygon, point_inside_any};
use crate::nav::Path;

use super::Facing;

/// What the agent is currently doing with its path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentState {
    /// No active path
    #[default]
    Idle,
    /// Consuming a path, one waypoint at a time
    Following,
    /// The last step would have entered an obstacle; the path has been
    /// discarded. Settles to `Idle` on the next step, giving calling
    /// code one frame to observe the blockage and re-request a route.
    Blocked,
}

/// The entity being moved.
///
/// Sole owner and mutator of its own position and path; the pathfinder
/// and transforms never retain references to agent state.
#[derive(Debug, Clone)]
pub struct Agent {
    /// Feet position in world space
    pub position: Vec2,
    /// Velocity of the last committed step, world units per second
    pub velocity: Vec2,
    /// Movement speed in world units per second
    pub speed: f32,
    /// Current facing, preserved while standing still
    pub facing: Facing,
    path: Path,
    state: AgentState,
}

impl Agent {
    /// Create an idle agent
    #[must_use]
    pub fn new(position: Vec2, speed: f32) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            speed,
            facing: Facing::default(),
            path: Path::default(),
            state: AgentState::Idle,
        }
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> AgentState {
        self.state
    }

    /// The remaining path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Assign a path to follow. An empty path leaves the agent idle.
    pub fn set_path(&mut self, path: Path) {
        self.state = if path.is_empty() {
            AgentState::Idle
        } else {
            AgentState::Following
        };
        self.path = path;
    }

    /// Drop the active path and hold position
    pub fn cancel_path(&mut self) {
        self.path.clear();
        self.velocity = Vec2::ZERO;
        self.state = AgentState::Idle;
    }

    /// Direct input wins over path-following: any active path is cleared
    /// and a single collision-checked step is taken along `direction`.
    pub fn apply_direct_input(&mut self, direction: Vec2, dt: f32, obstacles: &[Polygon]) {
        self.path.clear();
        self.state = AgentState::Idle;

        let dir = direction.normalize_or_zero();
        if dir == Vec2::ZERO {
            self.velocity = Vec2::ZERO;
            return;
        }

        let candidate = self.position + dir * self.speed * dt;
        if point_inside_any(candidate, obstacles) {
            self.velocity = Vec2::ZERO;
            return;
        }

        self.position = candidate;
        self.velocity = dir * self.speed;
        if let Some(facing) = Facing::from_vector(dir) {
            self.facing = facing;
        }
    }

    /// Advance along the active path by one frame.
    ///
    /// The step direction blends the leg toward the current waypoint
    /// with the leg leaving it, weighted by proximity within the blend
    /// distance, so corners are rounded instead of turned sharply. The
    /// candidate position is rejected if it falls inside an obstacle:
    /// the path is discarded and the state becomes [`AgentState::Blocked`].
    pub fn integrate_step(&mut self, dt: f32, obstacles: &[Polygon], config: &NavConfig) {
        // Consume any waypoints the agent is already on top of.
        while let Some(next) = self.path.next_waypoint() {
            if self.position.distance(next) > config.reach_threshold {
                break;
            }
            self.path.advance();
        }

        let Some(next1) = self.path.next_waypoint() else {
            self.velocity = Vec2::ZERO;
            self.state = AgentState::Idle;
            return;
        };
        self.state = AgentState::Following;

        let step_len = self.speed * dt;
        let to_next = next1 - self.position;
        let dist = to_next.length();

        let (candidate, direction, arrived) = if dist <= step_len {
            // Arriving this frame: land on the waypoint instead of
            // overshooting past it.
            (next1, to_next.normalize_or_zero(), true)
        } else {
            let dir1 = to_next / dist;
            let next2 = self.path.second_waypoint().unwrap_or(next1);
            let mut dir2 = (next2 - next1).normalize_or_zero();
            if dir2 == Vec2::ZERO || dir1.dot(dir2) <= 0.0 {
                // No outgoing leg, or a turn of 90° or more — blending
                // there would stall progress toward the waypoint.
                dir2 = dir1;
            }
            let blend = 1.0 - (dist / config.blend_distance).clamp(0.0, 1.0);
            let direction = dir1.lerp(dir2, blend).normalize_or_zero();
            (self.position + direction * step_len, direction, false)
        };

        if point_inside_any(candidate, obstacles) {
            log::debug!("step to {candidate} blocked; discarding path");
            self.path.clear();
            self.velocity = Vec2::ZERO;
            self.state = AgentState::Blocked;
            return;
        }

        self.position = candidate;
        self.velocity = direction * self.speed;
        if let Some(facing) = Facing::from_vector(direction) {
            self.facing = facing;
        }

        if arrived {
            self.path.advance();
            if self.path.is_empty() {
                self.velocity = Vec2::ZERO;
                self.state = AgentState::Idle;
            }
        }
    }
}
