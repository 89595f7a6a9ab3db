//! Line-of-sight tests
//!
//! [`ray_clear`] is the sampled test the pathfinder uses;
//! [`segment_clear_exact`] is an exact alternative for content where
//! obstacles can be thinner than the sampling step.

use glam::Vec2;

use super::polygon::{Polygon, point_inside_any};

/// Default sampling interval for [`ray_clear`], in world units
pub const DEFAULT_RAY_STEP: f32 = 0.05;

/// True if the straight segment from `a` to `b` stays outside every
/// obstacle polygon.
///
/// The segment is sampled every `step` world units (plus the endpoint
/// `b`) and each sample is tested for containment. Returns `false`
/// immediately when the endpoints coincide or their distance is not
/// finite.
///
/// This is a discrete approximation, not exact intersection: an obstacle
/// thinner than `step` can slip between two samples and report clear.
/// Use [`segment_clear_exact`] where that matters.
#[must_use]
pub fn ray_clear(a: Vec2, b: Vec2, obstacles: &[Polygon], step: f32) -> bool {
    let distance = a.distance(b);
    if distance == 0.0 || !distance.is_finite() {
        return false;
    }

    let direction = (b - a) / distance;
    let step = step.max(1e-4);
    let mut t = step;
    while t < distance {
        if point_inside_any(a + direction * t, obstacles) {
            return false;
        }
        t += step;
    }
    // Always test the endpoint, so a target inside an obstacle is never
    // reported reachable.
    !point_inside_any(b, obstacles)
}

/// Exact segment-versus-polygon test: true if the segment from `a` to
/// `b` neither crosses any obstacle edge nor lies inside an obstacle.
///
/// Catches arbitrarily thin obstacles at the cost of testing every edge
/// of every polygon. Endpoint behavior matches [`ray_clear`]: coincident
/// or non-finite endpoints return `false`, and an endpoint inside an
/// obstacle makes the segment blocked. Grazing contact along a polygon
/// boundary counts as clear, consistent with the containment test's
/// boundary convention.
#[must_use]
pub fn segment_clear_exact(a: Vec2, b: Vec2, obstacles: &[Polygon]) -> bool {
    let distance = a.distance(b);
    if distance == 0.0 || !distance.is_finite() {
        return false;
    }

    for polygon in obstacles {
        let vertices = polygon.vertices();
        let n = vertices.len();
        if n < 3 {
            continue;
        }
        for i in 0..n {
            if segments_cross(a, b, vertices[i], vertices[(i + 1) % n]) {
                return false;
            }
        }
        // No edge crossing: the segment is entirely inside or entirely
        // outside this polygon. The midpoint decides which.
        if polygon.contains((a + b) * 0.5) || polygon.contains(b) {
            return false;
        }
    }
    true
}

/// Proper crossing test for the open segments `a1-a2` and `b1-b2`.
/// Collinear overlap and endpoint touching count as not crossing.
fn segments_cross(a1: Vec2, a2: Vec2, b1: Vec2, b2: Vec2) -> bool {
    let d1 = (b2 - b1).perp_dot(a1 - b1);
    let d2 = (b2 - b1).perp_dot(a2 - b1);
    let d3 = (a2 - a1).perp_dot(b1 - a1);
    let d4 = (a2 - a1).perp_dot(b2 - a1);
    ((d1 > 0.0) != (d2 > 0.0)) && ((d3 > 0.0) != (d4 > 0.0))
}
