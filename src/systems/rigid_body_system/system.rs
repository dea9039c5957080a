use std::collections::HashMap;

use crate::core::WorldBounds;
use crate::domain::{BodyId, PhysicsSettings, RigidBody};
use crate::systems::polygon_registry::PolygonRegistry;

use super::collision::{collision_pass, CollisionCounters};
use super::integrate::integrate_all;

/// Canonical collection of every simulated body.
///
/// Bodies sit in a dense `Vec` with an id → slot index beside it, so lookups
/// and removals cost O(1) regardless of world size. Removal swaps the last
/// body into the freed slot: iteration order is insertion order only until
/// the first removal, and pair order in the collision pass follows the
/// current slot order.
pub struct RigidBodySystem {
    bodies: Vec<RigidBody>,
    index: HashMap<BodyId, usize>,
    next_id: u32,
}

/// What one [`RigidBodySystem::step`] did.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    pub movable_bodies: u32,
    pub polygons_resynced: u32,
    /// Registry entries dropped by the periodic sweep (0 on non-sweep ticks)
    pub registry_swept: u32,
    pub collisions: CollisionCounters,
}

impl RigidBodySystem {
    pub fn new() -> Self {
        Self {
            bodies: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }

    /// Add a body and assign it a fresh id.
    ///
    /// Whatever id the body carried is overwritten; ids are never reused.
    pub fn add_body(&mut self, mut body: RigidBody) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id = self.next_id.saturating_add(1);
        body.id = id;
        self.index.insert(id, self.bodies.len());
        self.bodies.push(body);
        id
    }

    /// Remove a body by id. Unknown ids are a no-op.
    ///
    /// The last body moves into the freed slot.
    pub fn remove_body(&mut self, id: BodyId) -> Option<RigidBody> {
        let idx = self.index.remove(&id)?;
        let removed = self.bodies.swap_remove(idx);
        if let Some(moved) = self.bodies.get(idx) {
            self.index.insert(moved.id, idx);
        }
        Some(removed)
    }

    /// Remove every listed body. Returns how many were actually present.
    pub fn remove_many(&mut self, ids: &[BodyId]) -> usize {
        ids.iter().filter(|id| self.remove_body(**id).is_some()).count()
    }

    /// Remove all bodies. Id allocation keeps counting so stale ids held by
    /// callers can never alias a new body.
    pub fn clear(&mut self) {
        self.bodies.clear();
        self.index.clear();
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn movable_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.movable).count()
    }

    pub fn get(&self, id: BodyId) -> Option<&RigidBody> {
        let idx = *self.index.get(&id)?;
        self.bodies.get(idx)
    }

    pub fn get_mut(&mut self, id: BodyId) -> Option<&mut RigidBody> {
        let idx = *self.index.get(&id)?;
        self.bodies.get_mut(idx)
    }

    pub fn contains(&self, id: BodyId) -> bool {
        self.index.contains_key(&id)
    }

    /// Index and collection agree slot for slot.
    pub fn is_consistent(&self) -> bool {
        self.index.len() == self.bodies.len()
            && self.bodies.iter().enumerate().all(|(i, b)| self.index.get(&b.id) == Some(&i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &RigidBody> {
        self.bodies.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = BodyId> + '_ {
        self.bodies.iter().map(|b| b.id)
    }

    pub fn as_slice(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// Integration phase: move, clamp, bounce, drag. Returns moved polygon ids.
    pub fn integrate(&mut self, bounds: &WorldBounds, settings: &PhysicsSettings) -> Vec<BodyId> {
        integrate_all(&mut self.bodies, bounds, settings)
    }

    /// Bring the registry vertices of `moved` polygons back onto their bodies.
    pub fn resync_polygons(&self, registry: &mut PolygonRegistry, moved: &[BodyId]) -> u32 {
        let mut resynced = 0;
        for id in moved {
            if let Some(body) = self.get(*id) {
                if registry.resync(body.id, body.pos) {
                    resynced += 1;
                }
            }
        }
        resynced
    }

    /// Periodic registry garbage collection. Runs only when `tick` is a
    /// multiple of `interval`.
    pub fn sweep_registry(&self, registry: &mut PolygonRegistry, tick: u64, interval: u64) -> u32 {
        if interval == 0 || tick % interval != 0 {
            return 0;
        }
        let removed = registry.sweep(self.ids());
        if removed > 0 {
            log::debug!("registry sweep at tick {}: dropped {} stale entries", tick, removed);
        }
        removed as u32
    }

    /// Pairwise collision detection and resolution over the whole collection.
    pub fn resolve_collisions(&mut self, registry: &mut PolygonRegistry, restitution: f32) -> CollisionCounters {
        collision_pass(&mut self.bodies, registry, restitution)
    }

    /// One full tick: integrate, resync moved polygons, sweep the registry on
    /// sweep ticks, then the collision pass.
    pub fn step(
        &mut self,
        registry: &mut PolygonRegistry,
        bounds: &WorldBounds,
        tick: u64,
        settings: &PhysicsSettings,
    ) -> StepCounters {
        let moved = self.integrate(bounds, settings);
        let polygons_resynced = self.resync_polygons(registry, &moved);
        let registry_swept = self.sweep_registry(registry, tick, settings.registry_sweep_interval);
        let collisions = self.resolve_collisions(registry, settings.restitution);

        StepCounters {
            movable_bodies: self.movable_count() as u32,
            polygons_resynced,
            registry_swept,
            collisions,
        }
    }
}

impl Default for RigidBodySystem {
    fn default() -> Self {
        Self::new()
    }
}
