use crate::core::Vec2;
use crate::domain::{BodyId, RigidBody, Shape};
use crate::systems::ownership::OwnerId;

use super::PhysicsWorld;

/// Insert a body and, when given, its polygon vertices as one unit. A polygon
/// shape is refitted to the vertices; the offset is taken from their centroid,
/// which resync keeps on the body position.
fn insert_body(world: &mut PhysicsWorld, mut body: RigidBody, vertices: Option<Vec<Vec2>>) -> BodyId {
    let polygon = body.shape.is_polygon();
    if polygon {
        if let Some(shape) = vertices.as_deref().and_then(|v| Shape::polygon_around(Vec2::centroid(v), v)) {
            body.shape = shape;
        }
    }
    let id = world.bodies.add_body(body);

    if let Some(vertices) = vertices {
        if !polygon {
            log::warn!("body {} is not a polygon, ignoring {} vertices", id, vertices.len());
        } else if !world.registry.register(id, vertices) {
            log::warn!("body {} falls back to its bounding rectangle", id);
        }
    }
    id
}

/// Remove one body and every trace of it outside the canonical collection.
fn purge_body(world: &mut PhysicsWorld, id: BodyId) -> bool {
    let removed = world.bodies.remove_body(id).is_some();
    world.registry.remove(id);
    world.ownership.forget_body(id);
    if let Some(participant) = world.player_bodies.remove(&id) {
        world.players.remove(&participant);
    }
    removed
}

pub(super) fn add_owned(
    world: &mut PhysicsWorld,
    owner: OwnerId,
    body: RigidBody,
    vertices: Option<Vec<Vec2>>,
) -> BodyId {
    let id = insert_body(world, body, vertices);
    world.ownership.record(owner, id);
    log::debug!("{} gained collider {}", owner, id);
    id
}

pub(super) fn remove_owned(world: &mut PhysicsWorld, owner: OwnerId) -> usize {
    let ids = world.ownership.take_owner(owner);
    if ids.is_empty() {
        return 0;
    }

    let removed = world.bodies.remove_many(&ids);
    for id in ids.iter() {
        world.registry.remove(*id);
        if let Some(participant) = world.player_bodies.remove(id) {
            world.players.remove(&participant);
        }
    }

    log::debug!("{} released {} colliders", owner, removed);
    removed
}

pub(super) fn add_body(world: &mut PhysicsWorld, body: RigidBody, vertices: Option<Vec<Vec2>>) -> BodyId {
    insert_body(world, body, vertices)
}

pub(super) fn add_static(world: &mut PhysicsWorld, body: RigidBody, vertices: Option<Vec<Vec2>>) -> BodyId {
    if body.movable {
        log::warn!("static collider added with mass {}, making it immovable", body.mass);
    }
    insert_body(world, body.with_mass(0.0), vertices)
}

pub(super) fn remove_body(world: &mut PhysicsWorld, id: BodyId) -> bool {
    purge_body(world, id)
}

/// A participant owns at most one body; adding again replaces the old one.
pub(super) fn add_player_body(world: &mut PhysicsWorld, participant: &str, body: RigidBody) -> BodyId {
    if let Some(old) = world.players.get(participant).copied() {
        log::debug!("participant {} replaced body {}", participant, old);
        purge_body(world, old);
    }
    let id = insert_body(world, body, None);
    world.players.insert(participant.to_string(), id);
    world.player_bodies.insert(id, participant.to_string());
    id
}

pub(super) fn remove_player_body(world: &mut PhysicsWorld, participant: &str) -> bool {
    let Some(id) = world.players.get(participant).copied() else {
        return false;
    };
    purge_body(world, id)
}

/// Requested velocity with its magnitude clamped to `max_player_speed`.
pub(super) fn set_player_velocity(world: &mut PhysicsWorld, participant: &str, velocity: Vec2) -> bool {
    let Some(id) = world.players.get(participant).copied() else {
        return false;
    };
    let max_speed = world.settings.max_player_speed;
    let Some(body) = world.bodies.get_mut(id) else {
        return false;
    };

    let speed = velocity.length();
    body.velocity = if speed > max_speed && speed > 0.0 {
        velocity * (max_speed / speed)
    } else {
        velocity
    };
    true
}

pub(super) fn respawn_player(world: &mut PhysicsWorld, participant: &str, position: Vec2) -> bool {
    let Some(id) = world.players.get(participant).copied() else {
        return false;
    };
    let Some(body) = world.bodies.get_mut(id) else {
        return false;
    };
    body.pos = position;
    body.velocity = Vec2::zero();
    if body.shape.is_polygon() {
        world.registry.resync(id, position);
    }
    true
}

pub(super) fn clear(world: &mut PhysicsWorld) {
    world.bodies.clear();
    world.registry.clear();
    world.ownership.clear();
    world.players.clear();
    world.player_bodies.clear();
    world.tick = 0;
    world.perf_stats.reset();
}
