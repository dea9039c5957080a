use crate::core::WorldBounds;
use crate::domain::{BodyId, PhysicsSettings, RigidBody};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Advance one movable body by `settings.dt`: integrate, clamp and bounce per
/// axis, then drag and rest snap. Returns `true` when the position changed.
pub(super) fn integrate_body(body: &mut RigidBody, bounds: &WorldBounds, settings: &PhysicsSettings) -> bool {
    if !body.movable {
        return false;
    }

    let before = body.pos;
    body.pos += body.velocity * settings.dt;

    // Clamp the bounding box, not the position: polygon boxes sit off-center.
    let (hw, hh) = body.half_extents();
    let offset = body.shape.bbox_offset();
    let center = body.pos + offset;
    let bounce = settings.boundary_bounce;

    if center.x - hw < bounds.min_x {
        body.pos.x = bounds.min_x + hw - offset.x;
        body.velocity.x = -body.velocity.x * bounce;
    } else if center.x + hw > bounds.max_x {
        body.pos.x = bounds.max_x - hw - offset.x;
        body.velocity.x = -body.velocity.x * bounce;
    }

    if center.y - hh < bounds.min_y {
        body.pos.y = bounds.min_y + hh - offset.y;
        body.velocity.y = -body.velocity.y * bounce;
    } else if center.y + hh > bounds.max_y {
        body.pos.y = bounds.max_y - hh - offset.y;
        body.velocity.y = -body.velocity.y * bounce;
    }

    body.velocity *= settings.drag;
    if body.velocity.length() < settings.rest_speed {
        body.velocity.x = 0.0;
        body.velocity.y = 0.0;
    }

    body.pos != before
}

/// Integrate every body. Returns the ids of polygon bodies that moved and
/// therefore need their registry vertices resynced.
pub(super) fn integrate_all(
    bodies: &mut [RigidBody],
    bounds: &WorldBounds,
    settings: &PhysicsSettings,
) -> Vec<BodyId> {
    #[cfg(feature = "parallel")]
    {
        bodies
            .par_iter_mut()
            .filter_map(|body| {
                let moved = integrate_body(body, bounds, settings);
                (moved && body.shape.is_polygon()).then_some(body.id)
            })
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        bodies
            .iter_mut()
            .filter_map(|body| {
                let moved = integrate_body(body, bounds, settings);
                (moved && body.shape.is_polygon()).then_some(body.id)
            })
            .collect()
    }
}
