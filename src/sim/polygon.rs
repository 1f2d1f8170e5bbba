//! Boundary polygon math
//!
//! Collision shapes are convex polygons stored in local (unrotated, unscaled)
//! space and pushed through the actor transform on demand. The overlap test is
//! a bounding-rectangle rejection followed by a separating-axis check.

use glam::Vec2;

/// Axis-aligned rectangle used for the cheap overlap rejection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Smallest rectangle containing all points
    pub fn from_points(points: &[Vec2]) -> Self {
        let mut min = Vec2::splat(f32::INFINITY);
        let mut max = Vec2::splat(f32::NEG_INFINITY);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }
        Self { min, max }
    }

    /// Overlap test, inclusive at the edges
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }
}

/// Local-space vertices for an axis-aligned box of the given size
pub fn rectangle_vertices(size: Vec2) -> Vec<Vec2> {
    vec![
        Vec2::ZERO,
        Vec2::new(size.x, 0.0),
        size,
        Vec2::new(0.0, size.y),
    ]
}

/// Local-space vertices for a regular n-gon inscribed in the box
///
/// `vertex_i = (w/2·cos θ_i + w/2, h/2·sin θ_i + h/2)` with `θ_i = i·2π/n`.
pub fn regular_polygon_vertices(size: Vec2, sides: usize) -> Vec<Vec2> {
    let half = size / 2.0;
    (0..sides)
        .map(|i| {
            let theta = i as f32 * std::f32::consts::TAU / sides as f32;
            half + half * Vec2::new(theta.cos(), theta.sin())
        })
        .collect()
}

/// Apply an actor transform to local-space vertices
///
/// Vertices are scaled and rotated about `origin`, then translated so the
/// local origin point lands at `position + origin`.
pub fn transform_vertices(
    local: &[Vec2],
    position: Vec2,
    origin: Vec2,
    rotation_deg: f32,
    scale: Vec2,
) -> Vec<Vec2> {
    let rad = rotation_deg.to_radians();
    let (sin, cos) = rad.sin_cos();
    local
        .iter()
        .map(|v| {
            let p = (*v - origin) * scale;
            let rotated = Vec2::new(p.x * cos - p.y * sin, p.x * sin + p.y * cos);
            position + origin + rotated
        })
        .collect()
}

/// Exact overlap test for two convex polygons (separating axis)
///
/// Touching edges count as overlap. Vertices must describe convex polygons;
/// winding order does not matter.
pub fn overlap_convex_polygons(a: &[Vec2], b: &[Vec2]) -> bool {
    if a.len() < 3 || b.len() < 3 {
        return false;
    }
    has_no_separating_axis(a, b) && has_no_separating_axis(b, a)
}

/// Check every edge normal of `a` as a candidate separating axis
fn has_no_separating_axis(a: &[Vec2], b: &[Vec2]) -> bool {
    for i in 0..a.len() {
        let edge = a[(i + 1) % a.len()] - a[i];
        let axis = Vec2::new(-edge.y, edge.x);
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        if max_a < min_b || max_b < min_a {
            return false;
        }
    }
    true
}

/// Project vertices onto an axis, returning the (min, max) interval
fn project(points: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for p in points {
        let d = p.dot(axis);
        min = min.min(d);
        max = max.max(d);
    }
    (min, max)
}
