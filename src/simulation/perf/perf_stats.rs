use serde::Serialize;

use crate::systems::rigid_body_system::StepCounters;

/// Timings and counters for the most recent step. All zero while perf
/// metrics are disabled.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) resync_ms: f64,
    pub(super) sweep_ms: f64,
    pub(super) collision_ms: f64,
    pub(super) bodies: u32,
    pub(super) movable_bodies: u32,
    pub(super) pairs_tested: u32,
    pub(super) broad_phase_hits: u32,
    pub(super) collisions: u32,
    pub(super) polygons_resynced: u32,
    pub(super) registry_swept: u32,
    pub(super) registry_entries: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }

    pub(crate) fn record_counters(&mut self, counters: &StepCounters) {
        self.movable_bodies = counters.movable_bodies;
        self.polygons_resynced = counters.polygons_resynced;
        self.registry_swept = counters.registry_swept;
        self.pairs_tested = counters.collisions.pairs_tested;
        self.broad_phase_hits = counters.collisions.broad_phase_hits;
        self.collisions = counters.collisions.collisions;
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl PerfStats {
    pub fn step_ms(&self) -> f64 { self.step_ms }
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    pub fn resync_ms(&self) -> f64 { self.resync_ms }
    pub fn sweep_ms(&self) -> f64 { self.sweep_ms }
    pub fn collision_ms(&self) -> f64 { self.collision_ms }
    pub fn bodies(&self) -> u32 { self.bodies }
    pub fn movable_bodies(&self) -> u32 { self.movable_bodies }
    pub fn pairs_tested(&self) -> u32 { self.pairs_tested }
    pub fn broad_phase_hits(&self) -> u32 { self.broad_phase_hits }
    pub fn collisions(&self) -> u32 { self.collisions }
    pub fn polygons_resynced(&self) -> u32 { self.polygons_resynced }
    pub fn registry_swept(&self) -> u32 { self.registry_swept }
    pub fn registry_entries(&self) -> u32 { self.registry_entries }
}
