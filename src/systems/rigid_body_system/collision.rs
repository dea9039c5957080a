use crate::domain::RigidBody;
use crate::systems::collision::{aabb_overlap, detect_collision};
use crate::systems::polygon_registry::PolygonRegistry;
use crate::systems::resolver::resolve;

/// Tallies from one collision pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CollisionCounters {
    /// Pairs with at least one movable body
    pub pairs_tested: u32,
    pub broad_phase_hits: u32,
    pub collisions: u32,
}

/// Test and resolve every unordered pair `i < j` in collection order.
///
/// Static-static pairs are skipped before any geometry runs. Polygon bodies
/// pushed by the resolver are resynced right away so later pairs in the same
/// pass see their new vertices.
pub(super) fn collision_pass(
    bodies: &mut [RigidBody],
    registry: &mut PolygonRegistry,
    restitution: f32,
) -> CollisionCounters {
    let mut counters = CollisionCounters::default();
    let n = bodies.len();

    for i in 0..n {
        for j in (i + 1)..n {
            let (head, tail) = bodies.split_at_mut(j);
            let a = &mut head[i];
            let b = &mut tail[0];

            if !a.movable && !b.movable {
                continue;
            }
            counters.pairs_tested += 1;

            if !aabb_overlap(a, b) {
                continue;
            }
            counters.broad_phase_hits += 1;

            let info = detect_collision(a, b, registry);
            if !info.collided {
                continue;
            }
            counters.collisions += 1;
            log::debug!(
                "collision {} <-> {}: depth {:.3} mtv ({:.3}, {:.3})",
                a.id,
                b.id,
                info.depth,
                info.mtv.x,
                info.mtv.y
            );

            resolve(a, b, &info, restitution);

            if a.movable && a.shape.is_polygon() {
                registry.resync(a.id, a.pos);
            }
            if b.movable && b.shape.is_polygon() {
                registry.resync(b.id, b.pos);
            }
        }
    }

    counters
}
