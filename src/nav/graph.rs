//! Maneuver nodes — sparse hand-authored waypoints

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Default auto-connection radius in world units
pub const DEFAULT_AUTO_CONNECT_RADIUS: f32 = 2.0;

/// A named waypoint with optional authored connections to other nodes.
///
/// Authored as level data. Connections are directed as declared;
/// authoring them symmetrically is convention, not a requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManeuverNode {
    /// Unique node name, referenced by other nodes' `connections`
    pub id: String,
    /// World-space position
    pub pos: Vec2,
    /// Names of nodes this one connects to; empty means auto-connect
    #[serde(default)]
    pub connections: Vec<String>,
}

impl ManeuverNode {
    /// Create a node with explicit connections
    #[must_use]
    pub fn new(id: impl Into<String>, pos: Vec2, connections: Vec<String>) -> Self {
        Self {
            id: id.into(),
            pos,
            connections,
        }
    }

    /// Create a node with no authored connections (auto-connected at
    /// graph build time)
    #[must_use]
    pub fn unconnected(id: impl Into<String>, pos: Vec2) -> Self {
        Self::new(id, pos, Vec::new())
    }
}

/// The static maneuver graph for one map.
///
/// Built once at map load, read-only during gameplay, discarded
/// wholesale on map change. Pathfinding queries never mutate it.
#[derive(Debug, Clone, Default)]
pub struct ManeuverGraph {
    nodes: Vec<ManeuverNode>,
}

impl ManeuverGraph {
    /// Build a graph from authored nodes.
    ///
    /// Any node authored with zero connections is auto-wired to every
    /// other node within `radius` world units, by straight-line distance
    /// regardless of obstruction — the ray-clear test at query time
    /// decides whether an auto-connected edge actually materializes.
    #[must_use]
    pub fn new(mut nodes: Vec<ManeuverNode>, radius: f32) -> Self {
        let positions: Vec<(String, Vec2)> =
            nodes.iter().map(|node| (node.id.clone(), node.pos)).collect();

        for node in nodes.iter_mut().filter(|node| node.connections.is_empty()) {
            for (id, pos) in &positions {
                if *id != node.id && node.pos.distance(*pos) <= radius {
                    node.connections.push(id.clone());
                }
            }
        }

        Self { nodes }
    }

    /// The nodes in authoring order
    #[must_use]
    pub fn nodes(&self) -> &[ManeuverNode] {
        &self.nodes
    }

    /// Look up a node by name
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ManeuverNode> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Number of nodes
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
