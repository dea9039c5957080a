//! PhysicsWorld - owns every piece of mutable simulation state
//!
//! One world per match/map. It orchestrates only; the work is done by:
//! - `RigidBodySystem` (canonical bodies, integration, collision pass)
//! - `PolygonRegistry` (custom polygon vertices)
//! - `OwnershipIndex` (owner ↔ collider bookkeeping)
//!
//! `step(&mut self)` never locks. When ticks and mutations come from
//! different threads, wrap the world in `SharedWorld`.

use std::collections::HashMap;

use crate::core::{Vec2, WorldBounds};
use crate::domain::{BodyId, BodySnapshot, PhysicsSettings, RigidBody};
use crate::systems::ownership::{OwnerId, OwnershipIndex};
use crate::systems::polygon_registry::PolygonRegistry;
use crate::systems::rigid_body_system::RigidBodySystem;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "step/step.rs"]
mod step;
#[path = "commands/commands.rs"]
mod commands;
#[path = "persist/persist.rs"]
mod persist;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "shared/lock_metrics.rs"]
mod lock_metrics;
#[path = "shared/shared.rs"]
mod shared;

pub use lock_metrics::LOCK_WAIT_WARN_US;
pub use perf_stats::PerfStats;
pub use shared::SharedWorld;

use perf_timer::PerfTimer;

/// The simulation world
pub struct PhysicsWorld {
    bodies: RigidBodySystem,
    registry: PolygonRegistry,
    ownership: OwnershipIndex,
    /// participant id → their single body
    players: HashMap<String, BodyId>,
    /// reverse of `players`
    player_bodies: HashMap<BodyId, String>,

    settings: PhysicsSettings,
    bounds: WorldBounds,

    tick: u64,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl PhysicsWorld {
    /// Empty world with default settings
    pub fn new() -> Self {
        init::create_world(PhysicsSettings::default())
    }

    pub fn with_settings(settings: PhysicsSettings) -> Self {
        init::create_world(settings)
    }

    pub fn from_settings_json(json: &str) -> Result<Self, String> {
        let settings = PhysicsSettings::from_json(json)?;
        Ok(Self::with_settings(settings))
    }

    pub fn settings(&self) -> &PhysicsSettings {
        &self.settings
    }

    pub fn apply_settings(&mut self, settings: PhysicsSettings) {
        settings::apply_settings(self, settings);
    }

    /// Ticks advanced since creation (or the last `clear`)
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Advance the simulation by one fixed time slice.
    ///
    /// The registry sweep runs on ticks that are a multiple of
    /// `registry_sweep_interval` (counting the tick being advanced to).
    pub fn step(&mut self) {
        step::step(self);
    }

    /// Enable or disable per-step perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last step perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    // === MUTATIONS ===

    /// Add a collider owned by an interactive object. Vertices, when given,
    /// are registered for polygon bodies.
    pub fn add_owned(&mut self, owner: OwnerId, body: RigidBody, vertices: Option<Vec<Vec2>>) -> BodyId {
        commands::add_owned(self, owner, body, vertices)
    }

    /// Remove every collider of `owner`. Returns how many bodies went away.
    pub fn remove_owned(&mut self, owner: OwnerId) -> usize {
        commands::remove_owned(self, owner)
    }

    /// Add an unowned body that is neither map scenery nor a participant,
    /// e.g. a loose movable crate. It stays until `remove_body` or `clear`.
    pub fn add_body(&mut self, body: RigidBody, vertices: Option<Vec<Vec2>>) -> BodyId {
        commands::add_body(self, body, vertices)
    }

    /// Add a permanent map collider (no owner). The body is forced immovable.
    pub fn add_static(&mut self, body: RigidBody, vertices: Option<Vec<Vec2>>) -> BodyId {
        commands::add_static(self, body, vertices)
    }

    /// Remove a single body with its registry/ownership/participant traces.
    pub fn remove_body(&mut self, id: BodyId) -> bool {
        commands::remove_body(self, id)
    }

    pub fn add_player_body(&mut self, participant: &str, body: RigidBody) -> BodyId {
        commands::add_player_body(self, participant, body)
    }

    /// Stock participant body at `spawn`, sized by the current settings.
    pub fn spawn_player(&mut self, participant: &str, spawn: Vec2) -> BodyId {
        let body = RigidBody::player(spawn, self.settings.player_size, self.settings.player_mass);
        commands::add_player_body(self, participant, body)
    }

    pub fn remove_player_body(&mut self, participant: &str) -> bool {
        commands::remove_player_body(self, participant)
    }

    pub fn set_player_velocity(&mut self, participant: &str, velocity: Vec2) -> bool {
        commands::set_player_velocity(self, participant, velocity)
    }

    pub fn respawn_player(&mut self, participant: &str, position: Vec2) -> bool {
        commands::respawn_player(self, participant, position)
    }

    /// Drop everything. Body ids keep counting up.
    pub fn clear(&mut self) {
        commands::clear(self)
    }

    // === QUERIES ===

    pub fn world_bounds(&self) -> WorldBounds {
        self.bounds
    }

    pub fn set_world_bounds(&mut self, bounds: WorldBounds) {
        settings::set_world_bounds(self, bounds);
    }

    pub fn body(&self, id: BodyId) -> Option<&RigidBody> {
        self.bodies.get(id)
    }

    pub fn bodies(&self) -> &[RigidBody] {
        self.bodies.as_slice()
    }

    pub fn body_count(&self) -> usize {
        self.bodies.body_count()
    }

    pub fn player_body(&self, participant: &str) -> Option<BodyId> {
        self.players.get(participant).copied()
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn owner_of(&self, id: BodyId) -> Option<OwnerId> {
        self.ownership.owner_of(id)
    }

    pub fn owned_by(&self, owner: OwnerId) -> &[BodyId] {
        self.ownership.owned_by(owner)
    }

    pub fn ownership(&self) -> &OwnershipIndex {
        &self.ownership
    }

    /// Registered vertex count, 0 for bodies without a registry entry.
    pub fn polygon_vertex_count(&self, id: BodyId) -> usize {
        self.registry.vertex_count(id)
    }

    pub fn polygon_vertices(&self, id: BodyId) -> Option<&[Vec2]> {
        self.registry.vertices(id)
    }

    pub fn registry_len(&self) -> usize {
        self.registry.len()
    }

    /// Debug-log the whole polygon registry.
    pub fn dump_registry(&self) {
        self.registry.dump();
    }

    // === PERSISTENCE HANDOFF ===

    pub fn snapshots(&self) -> Vec<BodySnapshot> {
        persist::snapshots(self)
    }

    /// Re-add static snapshots as map colliders. Returns how many were added.
    pub fn restore_statics(&mut self, snapshots: &[BodySnapshot]) -> usize {
        persist::restore_statics(self, snapshots)
    }
}

impl Default for PhysicsWorld {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
