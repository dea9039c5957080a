//! Separating-axis test over convex vertex loops.

use crate::core::Vec2;

/// Axis of least penetration found by [`min_overlap_axis`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SatHit {
    /// Unit axis (not yet oriented A→B)
    pub axis: Vec2,
    pub overlap: f32,
}

/// Unit normals of every edge of a closed vertex loop. Zero-length edges yield
/// no normal.
pub fn edge_normals(vertices: &[Vec2]) -> impl Iterator<Item = Vec2> + '_ {
    let n = vertices.len();
    (0..n).filter_map(move |i| {
        let edge = vertices[(i + 1) % n] - vertices[i];
        let normal = edge.perp().normalize();
        (!normal.is_zero()).then_some(normal)
    })
}

/// Min/max of the vertex projections onto `axis`.
pub fn project(vertices: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for v in vertices {
        let p = axis.dot(*v);
        min = min.min(p);
        max = max.max(p);
    }
    (min, max)
}

/// Overlap of two projection intervals, or `None` when disjoint.
pub fn interval_overlap(min_a: f32, max_a: f32, min_b: f32, max_b: f32) -> Option<f32> {
    if min_a > max_b || min_b > max_a {
        return None;
    }
    Some((max_b - min_a).min(max_a - min_b))
}

/// Runs SAT over the edge normals of both loops.
///
/// `None` means a separating axis exists, or that neither loop has a usable
/// edge (empty or fully collapsed input).
pub fn min_overlap_axis(a: &[Vec2], b: &[Vec2]) -> Option<SatHit> {
    if a.is_empty() || b.is_empty() {
        return None;
    }

    let mut best: Option<SatHit> = None;
    for axis in edge_normals(a).chain(edge_normals(b)) {
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        let overlap = interval_overlap(min_a, max_a, min_b, max_b)?;

        if best.map_or(true, |hit| overlap < hit.overlap) {
            best = Some(SatHit { axis, overlap });
        }
    }
    best
}
