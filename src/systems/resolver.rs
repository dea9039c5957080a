//! Contact response for one colliding pair.
//!
//! Two response families:
//! - both movable: split positional correction plus a restitution impulse
//! - one movable: full push out of the static body and a dead stop

use crate::core::Vec2;
use crate::domain::RigidBody;
use crate::systems::collision::CollisionInfo;

/// Separates `a` and `b` along `info.mtv` (A toward B) and updates velocities.
///
/// Pairs where neither body is movable are ignored, as are infos that did not
/// collide.
pub fn resolve(a: &mut RigidBody, b: &mut RigidBody, info: &CollisionInfo, restitution: f32) {
    if !info.collided {
        return;
    }

    match (a.movable, b.movable) {
        (true, true) => {
            let half = info.mtv * 0.5;
            a.pos -= half;
            b.pos += half;
            apply_collision_impulse(a, b, info.mtv, restitution);
        }
        (true, false) => {
            a.pos -= info.mtv;
            a.velocity = Vec2::zero();
        }
        (false, true) => {
            b.pos += info.mtv;
            b.velocity = Vec2::zero();
        }
        (false, false) => {}
    }
}

/// Restitution impulse along the MTV normal. Returns the impulse magnitude, or
/// `None` when nothing was applied (separating pair, degenerate normal, or no
/// finite mass on either side).
pub fn apply_collision_impulse(
    a: &mut RigidBody,
    b: &mut RigidBody,
    mtv: Vec2,
    restitution: f32,
) -> Option<f32> {
    let normal = mtv.normalize();
    if normal.is_zero() {
        return None;
    }

    let closing = (b.velocity - a.velocity).dot(normal);
    if closing > 0.0 {
        return None;
    }

    let inv_a = a.inverse_mass();
    let inv_b = b.inverse_mass();
    let inv_sum = inv_a + inv_b;
    if inv_sum <= 0.0 {
        return None;
    }

    let j = -(1.0 + restitution) * closing / inv_sum;
    a.velocity -= normal * (j * inv_a);
    b.velocity += normal * (j * inv_b);
    Some(j)
}
