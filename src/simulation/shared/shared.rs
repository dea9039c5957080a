use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::core::{Vec2, WorldBounds};
use crate::domain::{BodyId, BodySnapshot, PhysicsSettings, RigidBody};
use crate::systems::ownership::OwnerId;

use super::lock_metrics::LockMetrics;
use super::PhysicsWorld;

fn lock_poisoned_err() -> String {
    "world lock poisoned".to_string()
}

/// A [`PhysicsWorld`] behind the single process-wide lock.
///
/// Every entry point takes the lock once for its whole critical section, and
/// [`tick`](Self::tick) holds it for the entire step, so ticks and mutations
/// coming from different threads never interleave. Share it with `Arc`.
pub struct SharedWorld {
    world: Mutex<PhysicsWorld>,
    metrics: LockMetrics,
}

impl SharedWorld {
    pub fn new(world: PhysicsWorld) -> Self {
        Self {
            world: Mutex::new(world),
            metrics: LockMetrics::new(),
        }
    }

    pub fn with_settings(settings: PhysicsSettings) -> Self {
        Self::new(PhysicsWorld::with_settings(settings))
    }

    fn lock(&self, context: &str) -> Result<MutexGuard<'_, PhysicsWorld>, String> {
        let t0 = Instant::now();
        let guard = self.world.lock().map_err(|_| lock_poisoned_err())?;
        self.metrics.record_wait(context, t0.elapsed());
        Ok(guard)
    }

    /// Run `f` with exclusive access to the world.
    pub fn with_world<R>(&self, f: impl FnOnce(&mut PhysicsWorld) -> R) -> Result<R, String> {
        let mut w = self.lock("with_world")?;
        Ok(f(&mut w))
    }

    /// Advance one tick under the lock. Returns the new tick number.
    pub fn tick(&self) -> Result<u64, String> {
        let mut w = self.lock("tick")?;
        w.step();
        Ok(w.tick())
    }

    pub fn add_owned(&self, owner: OwnerId, body: RigidBody, vertices: Option<Vec<Vec2>>) -> Result<BodyId, String> {
        let mut w = self.lock("add_owned")?;
        Ok(w.add_owned(owner, body, vertices))
    }

    pub fn remove_owned(&self, owner: OwnerId) -> Result<usize, String> {
        let mut w = self.lock("remove_owned")?;
        Ok(w.remove_owned(owner))
    }

    pub fn add_body(&self, body: RigidBody, vertices: Option<Vec<Vec2>>) -> Result<BodyId, String> {
        let mut w = self.lock("add_body")?;
        Ok(w.add_body(body, vertices))
    }

    pub fn add_static(&self, body: RigidBody, vertices: Option<Vec<Vec2>>) -> Result<BodyId, String> {
        let mut w = self.lock("add_static")?;
        Ok(w.add_static(body, vertices))
    }

    pub fn remove_body(&self, id: BodyId) -> Result<bool, String> {
        let mut w = self.lock("remove_body")?;
        Ok(w.remove_body(id))
    }

    pub fn add_player_body(&self, participant: &str, body: RigidBody) -> Result<BodyId, String> {
        let mut w = self.lock("add_player_body")?;
        Ok(w.add_player_body(participant, body))
    }

    pub fn remove_player_body(&self, participant: &str) -> Result<bool, String> {
        let mut w = self.lock("remove_player_body")?;
        Ok(w.remove_player_body(participant))
    }

    pub fn set_player_velocity(&self, participant: &str, velocity: Vec2) -> Result<bool, String> {
        let mut w = self.lock("set_player_velocity")?;
        Ok(w.set_player_velocity(participant, velocity))
    }

    pub fn respawn_player(&self, participant: &str, position: Vec2) -> Result<bool, String> {
        let mut w = self.lock("respawn_player")?;
        Ok(w.respawn_player(participant, position))
    }

    pub fn world_bounds(&self) -> Result<WorldBounds, String> {
        Ok(self.lock("world_bounds")?.world_bounds())
    }

    pub fn set_world_bounds(&self, bounds: WorldBounds) -> Result<(), String> {
        self.lock("set_world_bounds")?.set_world_bounds(bounds);
        Ok(())
    }

    pub fn body(&self, id: BodyId) -> Result<Option<RigidBody>, String> {
        Ok(self.lock("body")?.body(id).cloned())
    }

    pub fn body_count(&self) -> Result<usize, String> {
        Ok(self.lock("body_count")?.body_count())
    }

    pub fn registry_len(&self) -> Result<usize, String> {
        Ok(self.lock("registry_len")?.registry_len())
    }

    pub fn polygon_vertex_count(&self, id: BodyId) -> Result<usize, String> {
        Ok(self.lock("polygon_vertex_count")?.polygon_vertex_count(id))
    }

    pub fn snapshots(&self) -> Result<Vec<BodySnapshot>, String> {
        Ok(self.lock("snapshots")?.snapshots())
    }

    /// Longest lock wait observed by this handle.
    pub fn max_lock_wait(&self) -> Duration {
        self.metrics.max_wait()
    }

    pub fn into_inner(self) -> Result<PhysicsWorld, String> {
        self.world.into_inner().map_err(|_| lock_poisoned_err())
    }
}

impl Default for SharedWorld {
    fn default() -> Self {
        Self::new(PhysicsWorld::new())
    }
}
