//! Polygons and containment tests

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A simple polygon in world space, implicitly closed (the last vertex
/// connects back to the first).
///
/// Used both for static obstacles and for dynamically computed blockers.
/// The containment test is winding-agnostic; cleanup and inflation
/// normalize to counter-clockwise order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Create a polygon from its vertices in order
    #[must_use]
    pub fn new(vertices: Vec<Vec2>) -> Self {
        Self { vertices }
    }

    /// The vertices in order
    #[must_use]
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Signed area via the shoelace formula; positive for
    /// counter-clockwise winding
    #[must_use]
    pub fn signed_area(&self) -> f32 {
        let n = self.vertices.len();
        if n < 3 {
            return 0.0;
        }
        let mut area = 0.0;
        for i in 0..n {
            let a = self.vertices[i];
            let b = self.vertices[(i + 1) % n];
            area += a.x * b.y - b.x * a.y;
        }
        area * 0.5
    }

    /// Whether the vertices wind counter-clockwise
    #[must_use]
    pub fn is_counter_clockwise(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Reverse the vertex order if the polygon winds clockwise
    pub fn normalize_winding(&mut self) {
        if !self.is_counter_clockwise() {
            self.vertices.reverse();
        }
    }

    /// Grow the polygon outward by `margin` world units, moving each
    /// vertex along the averaged outward normals of its incident edges.
    /// Winding is normalized to counter-clockwise first.
    #[must_use]
    pub fn inflated(&self, margin: f32) -> Polygon {
        let mut poly = self.clone();
        poly.normalize_winding();
        let n = poly.vertices.len();
        if n < 3 {
            return poly;
        }

        let mut inflated = Vec::with_capacity(n);
        for i in 0..n {
            let prev = poly.vertices[(i + n - 1) % n];
            let curr = poly.vertices[i];
            let next = poly.vertices[(i + 1) % n];
            let dir = (outward_normal(prev, curr) + outward_normal(curr, next)).normalize_or_zero();
            inflated.push(curr + dir * margin);
        }
        Polygon::new(inflated)
    }

    /// Ray-casting containment test: cast a horizontal ray from `point`
    /// toward +X and count edge crossings; an odd count means inside.
    ///
    /// Boundary convention: comparisons are strict, so points exactly on
    /// an edge may classify either way; callers should treat boundaries
    /// as outside. Fewer than 3 vertices always yields `false`.
    #[must_use]
    pub fn contains(&self, point: Vec2) -> bool {
        let n = self.vertices.len();
        if n < 3 {
            return false;
        }

        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let vi = self.vertices[i];
            let vj = self.vertices[j];
            if (vi.y > point.y) != (vj.y > point.y) {
                // Epsilon substitute keeps degenerate (horizontal or
                // zero-length) edges from dividing by zero.
                let mut dy = vj.y - vi.y;
                if dy.abs() < f32::EPSILON {
                    dy = f32::EPSILON;
                }
                let cross_x = vi.x + (point.y - vi.y) * (vj.x - vi.x) / dy;
                if point.x < cross_x {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }
}

/// Outward normal of the edge from `a` to `b` for a counter-clockwise
/// polygon (the interior lies to the left of each edge)
fn outward_normal(a: Vec2, b: Vec2) -> Vec2 {
    let d = (b - a).normalize_or_zero();
    Vec2::new(d.y, -d.x)
}

/// True if `point` is inside at least one polygon in the set.
/// Short-circuits on the first match.
#[must_use]
pub fn point_inside_any(point: Vec2, polygons: &[Polygon]) -> bool {
    polygons.iter().any(|polygon| polygon.contains(point))
}
