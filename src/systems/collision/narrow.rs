use std::borrow::Cow;
use std::f32::consts::TAU;

use super::sat::min_overlap_axis;
use super::types::CollisionInfo;
use crate::core::constants::{CIRCLE_SEGMENTS, COINCIDENT_EPSILON};
use crate::core::Vec2;
use crate::domain::{RigidBody, Shape};
use crate::systems::polygon_registry::PolygonRegistry;

/// Exact pairwise test. Circle pairs use the closed form, everything else
/// goes through SAT on polygon representations.
///
/// Callers are expected to have culled the pair with
/// [`aabb_overlap`](super::broad::aabb_overlap) first.
pub fn detect_collision(a: &RigidBody, b: &RigidBody, registry: &PolygonRegistry) -> CollisionInfo {
    match (a.shape, b.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            detect_circle_collision(a.pos, ra, b.pos, rb)
        }
        _ => detect_polygon_collision(a, b, registry),
    }
}

/// Closed-form circle-circle test. The square root is only taken once an
/// overlap is confirmed.
pub fn detect_circle_collision(pa: Vec2, ra: f32, pb: Vec2, rb: f32) -> CollisionInfo {
    let delta = pb - pa;
    let reach = ra + rb;
    let dist_sq = delta.length_squared();
    if dist_sq > reach * reach {
        return CollisionInfo::none();
    }

    let dist = dist_sq.sqrt();
    if dist < COINCIDENT_EPSILON {
        // Coincident centers: push along +x by A's radius.
        return CollisionInfo::hit(Vec2::new(ra, 0.0), reach, pa);
    }

    let normal = delta * (1.0 / dist);
    let depth = reach - dist;
    CollisionInfo::hit(normal * depth, depth, pa + normal * ra)
}

/// SAT over both bodies' polygon representations.
pub fn detect_polygon_collision(
    a: &RigidBody,
    b: &RigidBody,
    registry: &PolygonRegistry,
) -> CollisionInfo {
    let verts_a = polygon_of(a, registry);
    let verts_b = polygon_of(b, registry);

    let Some(hit) = min_overlap_axis(&verts_a, &verts_b) else {
        return CollisionInfo::none();
    };

    let mut axis = hit.axis;
    if (b.pos - a.pos).dot(axis) < 0.0 {
        axis = -axis;
    }

    let contact = (a.pos + b.pos) * 0.5;
    CollisionInfo::hit(axis * hit.overlap, hit.overlap, contact)
}

/// World-space vertex loop for `body`. Registered polygons are borrowed from
/// the registry; everything else is built on the fly.
pub fn polygon_of<'a>(body: &RigidBody, registry: &'a PolygonRegistry) -> Cow<'a, [Vec2]> {
    match body.shape {
        Shape::Circle { radius } => Cow::Owned(circle_polygon(body.pos, radius, CIRCLE_SEGMENTS)),
        Shape::Rectangle { width, height } => Cow::Owned(rect_corners(body.pos, width, height)),
        Shape::Polygon { width, height, .. } => match registry.vertices(body.id) {
            Some(verts) => Cow::Borrowed(verts),
            None => Cow::Owned(rect_corners(body.bbox_center(), width, height)),
        },
    }
}

pub fn rect_corners(center: Vec2, width: f32, height: f32) -> Vec<Vec2> {
    let hw = width * 0.5;
    let hh = height * 0.5;
    vec![
        Vec2::new(center.x - hw, center.y - hh),
        Vec2::new(center.x + hw, center.y - hh),
        Vec2::new(center.x + hw, center.y + hh),
        Vec2::new(center.x - hw, center.y + hh),
    ]
}

/// Regular `segments`-gon inscribed in the circle.
pub fn circle_polygon(center: Vec2, radius: f32, segments: usize) -> Vec<Vec2> {
    (0..segments)
        .map(|i| {
            let angle = i as f32 * TAU / segments as f32;
            Vec2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
        })
        .collect()
}
