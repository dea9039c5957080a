use crate::domain::{RigidBody, Shape};

/// Cheap overlap pre-check, picking the tightest test for the shape pairing:
/// circle-circle center distance, circle against the other body's box via the
/// clamped closest point, otherwise half-extent box overlap. Boxes are centered
/// on [`RigidBody::bbox_center`], not the body position, so off-center polygon
/// boxes still cover their vertices. Touching counts as overlapping.
pub fn aabb_overlap(a: &RigidBody, b: &RigidBody) -> bool {
    match (a.shape, b.shape) {
        (Shape::Circle { radius: ra }, Shape::Circle { radius: rb }) => {
            let d = b.pos - a.pos;
            let reach = ra + rb;
            d.length_squared() <= reach * reach
        }
        (Shape::Circle { radius }, _) => circle_box_overlap(a, radius, b),
        (_, Shape::Circle { radius }) => circle_box_overlap(b, radius, a),
        _ => {
            let (ahw, ahh) = a.half_extents();
            let (bhw, bhh) = b.half_extents();
            let (ac, bc) = (a.bbox_center(), b.bbox_center());
            let overlap_x = (ahw + bhw) - (ac.x - bc.x).abs();
            let overlap_y = (ahh + bhh) - (ac.y - bc.y).abs();
            overlap_x >= 0.0 && overlap_y >= 0.0
        }
    }
}

fn circle_box_overlap(circle: &RigidBody, radius: f32, other: &RigidBody) -> bool {
    let (hw, hh) = other.half_extents();
    let c = other.bbox_center();
    let closest_x = circle.pos.x.clamp(c.x - hw, c.x + hw);
    let closest_y = circle.pos.y.clamp(c.y - hh, c.y + hh);
    let dx = closest_x - circle.pos.x;
    let dy = closest_y - circle.pos.y;
    dx * dx + dy * dy <= radius * radius
}
