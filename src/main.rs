//! Demo walking an agent through a small walled map
//!
//! Builds a doorway scene from embedded level data, converts a "click"
//! from map pixel space to world space, plans a route, and steps the
//! agent at a fixed frame rate until it arrives.

use isonav::prelude::*;

/// Maneuver nodes as the map loader would deliver them
const NODE_DATA: &str = r#"[
    { "id": "doorway", "pos": [0.0, 0.0] },
    { "id": "hall_west", "pos": [-1.5, 0.5], "connections": ["doorway"] },
    { "id": "hall_east", "pos": [1.5, 0.5], "connections": ["doorway"] }
]"#;

fn wall(min: Vec2, max: Vec2) -> Polygon {
    Polygon::new(vec![
        min,
        Vec2::new(max.x, min.y),
        max,
        Vec2::new(min.x, max.y),
    ])
}

fn main() {
    env_logger::init();

    let map = MapMetrics {
        width: 16,
        height: 16,
        tile_width: 2.0,
        tile_height: 1.0,
        pixels_per_unit: 100.0,
    };
    let config = NavConfig::default();

    // A wall along x = 0 with a doorway gap at y in (-1, 1).
    let obstacles = vec![
        wall(Vec2::new(-0.25, 1.0), Vec2::new(0.25, 8.0)),
        wall(Vec2::new(-0.25, -8.0), Vec2::new(0.25, -1.0)),
    ];

    let nodes: Vec<ManeuverNode> = match serde_json::from_str(NODE_DATA) {
        Ok(nodes) => nodes,
        Err(e) => {
            eprintln!("bad node data: {e}");
            return;
        }
    };
    let graph = ManeuverGraph::new(nodes, config.auto_connect_radius);
    log::info!("loaded {} maneuver nodes", graph.len());

    let mut agent = Agent::new(Vec2::new(-3.0, 5.0), 3.0);

    // A click lands on the far side of the wall, in map pixel space.
    let click_pixel = Vec2::new(800.0, 350.0);
    let target = pixel_to_world(click_pixel, &map);
    let target_cell = world_to_iso(target, &map);
    log::info!(
        "click at pixel {click_pixel} -> world {target} (tile {:.1}, {:.1})",
        target_cell.col,
        target_cell.row
    );

    let path = build_path(agent.position, target, &graph, &obstacles, &config);
    if path.is_empty() {
        log::warn!("no route from {} to {target}", agent.position);
        return;
    }
    log::info!(
        "route with {} waypoints, {:.2} units",
        path.len(),
        path.total_length(agent.position)
    );
    agent.set_path(path);

    let dt = 1.0 / 60.0;
    let mut frame = 0u32;
    while agent.state() == AgentState::Following && frame < 3600 {
        agent.integrate_step(dt, &obstacles, &config);
        frame += 1;
        if frame % 60 == 0 {
            log::info!(
                "t = {:.0}s: at {} facing {:?}",
                frame as f32 * dt,
                agent.position,
                agent.facing
            );
        }
    }

    match agent.state() {
        AgentState::Idle => log::info!("arrived at {} after {frame} frames", agent.position),
        state => log::warn!("stopped in state {state:?} at {}", agent.position),
    }
}
