use crate::domain::{BodySnapshot, ShapeKind};

use super::{commands, PhysicsWorld};

pub(super) fn snapshots(world: &PhysicsWorld) -> Vec<BodySnapshot> {
    world
        .bodies
        .iter()
        .map(|body| {
            let snapshot = BodySnapshot::from(body);
            match world.registry.vertices(body.id) {
                Some(verts) if body.shape.is_polygon() => snapshot.with_vertices(verts),
                _ => snapshot,
            }
        })
        .collect()
}

/// Re-add saved map colliders as statics. Movable snapshots are skipped.
pub(super) fn restore_statics(world: &mut PhysicsWorld, snapshots: &[BodySnapshot]) -> usize {
    let mut restored = 0;
    for snapshot in snapshots.iter().filter(|s| !s.is_movable) {
        let vertices = (snapshot.shape == ShapeKind::Polygon && !snapshot.vertices.is_empty())
            .then(|| snapshot.vertices.clone());
        commands::add_static(world, snapshot.to_body(), vertices);
        restored += 1;
    }
    log::info!("restored {} static colliders ({} snapshots offered)", restored, snapshots.len());
    restored
}
