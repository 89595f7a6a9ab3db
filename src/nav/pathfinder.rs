//! Visibility-graph pathfinding
//!
//! Builds a per-query visibility graph from a start point, a goal point,
//! and the static maneuver nodes, then runs best-first search over it.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use glam::Vec2;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::config::NavConfig;
use crate::geometry::{Polygon, ray_clear};
use crate::nav::ManeuverGraph;

/// An ordered sequence of waypoints toward a goal, excluding the start
/// and including the goal. Consumed head-first by the agent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    waypoints: Vec<Vec2>,
}

impl Path {
    /// A path over explicit waypoints
    #[must_use]
    pub fn new(waypoints: Vec<Vec2>) -> Self {
        Self { waypoints }
    }

    /// The single-waypoint path used when the goal is in direct sight
    #[must_use]
    pub fn direct(goal: Vec2) -> Self {
        Self {
            waypoints: vec![goal],
        }
    }

    /// Remaining waypoints in traversal order
    #[must_use]
    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    /// The waypoint currently being moved toward
    #[must_use]
    pub fn next_waypoint(&self) -> Option<Vec2> {
        self.waypoints.first().copied()
    }

    /// The waypoint after the current one, for corner blending
    #[must_use]
    pub fn second_waypoint(&self) -> Option<Vec2> {
        self.waypoints.get(1).copied()
    }

    /// Drop the current waypoint once it has been reached
    pub fn advance(&mut self) {
        if !self.waypoints.is_empty() {
            self.waypoints.remove(0);
        }
    }

    /// Discard all remaining waypoints
    pub fn clear(&mut self) {
        self.waypoints.clear();
    }

    /// Whether no waypoints remain
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Number of remaining waypoints
    #[must_use]
    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    /// Total straight-line length of the remaining legs from `from`
    #[must_use]
    pub fn total_length(&self, from: Vec2) -> f32 {
        let mut length = 0.0;
        let mut prev = from;
        for &waypoint in &self.waypoints {
            length += prev.distance(waypoint);
            prev = waypoint;
        }
        length
    }
}

/// Open-set entry for the best-first search
#[derive(Debug, Clone)]
struct OpenNode {
    index: usize,
    g_cost: f32,
    f_cost: f32,
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.index == other.index
    }
}

impl Eq for OpenNode {}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap
        other
            .f_cost
            .partial_cmp(&self.f_cost)
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a walkable path from `start` to `goal`.
///
/// Contract:
/// 1. Coincident endpoints or a clear straight line → `[goal]`.
/// 2. Empty graph → empty path; the caller holds position.
/// 3. Otherwise a per-query visibility graph is built: ephemeral start
///    and goal nodes, `start → node` and `node → goal` edges discovered
///    by line of sight, and authored connections materialized only when
///    ray-clear at query time. The stored graph is never mutated.
/// 4. Best-first search over Euclidean edge weights, ordered by
///    `g + h` with the straight-line distance to the goal as heuristic
///    (admissible here, so the first pop of the goal is shortest).
///
/// An unreachable goal yields an empty path, never an error.
#[must_use]
pub fn build_path(
    start: Vec2,
    goal: Vec2,
    graph: &ManeuverGraph,
    obstacles: &[Polygon],
    config: &NavConfig,
) -> Path {
    // Coincident endpoints: already there.
    if start.distance(goal) <= f32::EPSILON {
        return Path::direct(goal);
    }

    // Direct route shortcut — the common case in open areas.
    if ray_clear(start, goal, obstacles, config.ray_step) {
        return Path::direct(goal);
    }

    if graph.is_empty() {
        log::debug!("no maneuver nodes; no route from {start} to {goal}");
        return Path::default();
    }

    let nodes = graph.nodes();
    let node_count = nodes.len();
    let start_index = node_count;
    let goal_index = node_count + 1;

    let index_of: FxHashMap<&str, usize> = nodes
        .iter()
        .enumerate()
        .map(|(i, node)| (node.id.as_str(), i))
        .collect();

    // Per-query adjacency. Ephemeral by construction: authored
    // connections and the start/goal hookups live here, never on the
    // stored nodes.
    let mut edges: Vec<SmallVec<[usize; 8]>> = vec![SmallVec::new(); node_count + 2];
    for (i, node) in nodes.iter().enumerate() {
        for name in &node.connections {
            if let Some(&j) = index_of.get(name.as_str()) {
                if j != i && ray_clear(node.pos, nodes[j].pos, obstacles, config.ray_step) {
                    edges[i].push(j);
                }
            }
        }
        if ray_clear(node.pos, goal, obstacles, config.ray_step) {
            edges[i].push(goal_index);
        }
        if ray_clear(start, node.pos, obstacles, config.ray_step) {
            edges[start_index].push(i);
        }
    }

    let position = |index: usize| -> Vec2 {
        if index == start_index {
            start
        } else if index == goal_index {
            goal
        } else {
            nodes[index].pos
        }
    };
    let heuristic = |index: usize| -> f32 { position(index).distance(goal) };

    let mut open_set = BinaryHeap::new();
    let mut came_from: FxHashMap<usize, usize> = FxHashMap::default();
    let mut g_score: FxHashMap<usize, f32> = FxHashMap::default();

    g_score.insert(start_index, 0.0);
    open_set.push(OpenNode {
        index: start_index,
        g_cost: 0.0,
        f_cost: heuristic(start_index),
    });

    while let Some(current) = open_set.pop() {
        if current.index == goal_index {
            // Walk predecessors back to the start; the path excludes the
            // start and includes the goal.
            let mut waypoints = vec![goal];
            let mut index = goal_index;
            while let Some(&prev) = came_from.get(&index) {
                if prev == start_index {
                    break;
                }
                waypoints.push(position(prev));
                index = prev;
            }
            waypoints.reverse();
            return Path::new(waypoints);
        }

        for &next in &edges[current.index] {
            let tentative = current.g_cost + position(current.index).distance(position(next));
            if tentative < *g_score.get(&next).unwrap_or(&f32::MAX) {
                came_from.insert(next, current.index);
                g_score.insert(next, tentative);
                open_set.push(OpenNode {
                    index: next,
                    g_cost: tentative,
                    f_cost: tentative + heuristic(next),
                });
            }
        }
    }

    log::debug!("goal {goal} unreachable from {start}");
    Path::default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::{DEFAULT_AUTO_CONNECT_RADIUS, ManeuverNode};

    fn rect(min: Vec2, max: Vec2) -> Polygon {
        Polygon::new(vec![
            min,
            Vec2::new(max.x, min.y),
            max,
            Vec2::new(min.x, max.y),
        ])
    }

    fn graph(nodes: Vec<ManeuverNode>) -> ManeuverGraph {
        ManeuverGraph::new(nodes, DEFAULT_AUTO_CONNECT_RADIUS)
    }

    #[test]
    fn test_open_field_direct_route() {
        let path = build_path(
            Vec2::ZERO,
            Vec2::new(5.0, 5.0),
            &ManeuverGraph::default(),
            &[],
            &NavConfig::default(),
        );

        assert_eq!(path.waypoints(), &[Vec2::new(5.0, 5.0)]);
    }

    #[test]
    fn test_coincident_start_and_goal() {
        let goal = Vec2::new(2.0, 2.0);
        let path = build_path(goal, goal, &ManeuverGraph::default(), &[], &NavConfig::default());

        assert_eq!(path.waypoints(), &[goal]);
    }

    #[test]
    fn test_empty_graph_and_blocked_route() {
        let wall = [rect(Vec2::new(2.0, -5.0), Vec2::new(3.0, 5.0))];
        let path = build_path(
            Vec2::ZERO,
            Vec2::new(5.0, 0.0),
            &ManeuverGraph::default(),
            &wall,
            &NavConfig::default(),
        );

        assert!(path.is_empty());
    }

    #[test]
    fn test_walled_room_through_doorway() {
        // A wall along x ∈ [-0.25, 0.25] with a doorway gap at y ∈ (-1, 1)
        // and a maneuver node in the gap.
        let walls = [
            rect(Vec2::new(-0.25, 1.0), Vec2::new(0.25, 8.0)),
            rect(Vec2::new(-0.25, -8.0), Vec2::new(0.25, -1.0)),
        ];
        let doorway = Vec2::new(0.0, 0.0);
        let nodes = graph(vec![ManeuverNode::unconnected("doorway", doorway)]);

        let start = Vec2::new(-3.0, 5.0);
        let goal = Vec2::new(3.0, 5.0);
        let path = build_path(start, goal, &nodes, &walls, &NavConfig::default());

        assert_eq!(path.waypoints(), &[doorway, goal]);
    }

    #[test]
    fn test_unreachable_enclosed_goal() {
        let cell = [rect(Vec2::new(4.0, 4.0), Vec2::new(6.0, 6.0))];
        let nodes = graph(vec![ManeuverNode::unconnected("outside", Vec2::new(2.0, 0.0))]);

        let path = build_path(
            Vec2::ZERO,
            Vec2::new(5.0, 5.0),
            &nodes,
            &cell,
            &NavConfig::default(),
        );

        assert!(path.is_empty());
    }

    #[test]
    fn test_shorter_of_two_routes_wins() {
        // Wall from y = -6 to y = 2; going over the top is much shorter
        // than going under the bottom.
        let wall = [rect(Vec2::new(4.75, -6.0), Vec2::new(5.25, 2.0))];
        let top = Vec2::new(5.0, 3.5);
        let bottom = Vec2::new(5.0, -7.5);
        let nodes = graph(vec![
            ManeuverNode::unconnected("top", top),
            ManeuverNode::unconnected("bottom", bottom),
        ]);

        let path = build_path(
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            &nodes,
            &wall,
            &NavConfig::default(),
        );

        assert_eq!(path.waypoints(), &[top, Vec2::new(10.0, 0.0)]);
    }

    #[test]
    fn test_isolated_node_is_ignored() {
        let wall = [rect(Vec2::new(4.75, -6.0), Vec2::new(5.25, 2.0))];
        let top = Vec2::new(5.0, 3.5);
        // "boxed" sits inside its own enclosure and can see nothing.
        let enclosure = rect(Vec2::new(-4.0, -4.0), Vec2::new(-2.0, -2.0));
        let nodes = graph(vec![
            ManeuverNode::unconnected("top", top),
            ManeuverNode::unconnected("boxed", Vec2::new(-3.0, -3.0)),
        ]);
        let obstacles = [wall[0].clone(), enclosure];

        let path = build_path(
            Vec2::ZERO,
            Vec2::new(10.0, 0.0),
            &nodes,
            &obstacles,
            &NavConfig::default(),
        );

        assert_eq!(path.waypoints(), &[top, Vec2::new(10.0, 0.0)]);
    }

    #[test]
    fn test_query_does_not_mutate_stored_graph() {
        // Both maneuver nodes sit above the wall; the route must hop
        // start -> a -> b -> goal.
        let wall = [rect(Vec2::new(2.0, -5.0), Vec2::new(3.0, 5.0))];
        let a = Vec2::new(1.0, 6.0);
        let b = Vec2::new(2.8, 6.0);
        let nodes = graph(vec![
            ManeuverNode::unconnected("a", a),
            ManeuverNode::unconnected("b", b),
        ]);
        let before: Vec<ManeuverNode> = nodes.nodes().to_vec();

        let path = build_path(
            Vec2::ZERO,
            Vec2::new(5.0, 0.0),
            &nodes,
            &wall,
            &NavConfig::default(),
        );

        assert_eq!(path.waypoints(), &[a, b, Vec2::new(5.0, 0.0)]);
        // No goal edges or start hookups leaked into the level data.
        assert_eq!(nodes.nodes(), before.as_slice());
    }

    #[test]
    fn test_path_consumption() {
        let mut path = Path::new(vec![Vec2::new(1.0, 0.0), Vec2::new(2.0, 0.0)]);

        assert_eq!(path.len(), 2);
        assert_eq!(path.next_waypoint(), Some(Vec2::new(1.0, 0.0)));
        assert_eq!(path.second_waypoint(), Some(Vec2::new(2.0, 0.0)));
        assert!((path.total_length(Vec2::ZERO) - 2.0).abs() < 1e-6);

        path.advance();
        assert_eq!(path.next_waypoint(), Some(Vec2::new(2.0, 0.0)));
        assert_eq!(path.second_waypoint(), None);

        path.advance();
        assert!(path.is_empty());
    }
}
