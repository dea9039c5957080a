use crate::core::WorldBounds;
use crate::domain::PhysicsSettings;

use super::perf_stats::PerfStats;
use super::PhysicsWorld;

pub(super) fn enable_perf_metrics(world: &mut PhysicsWorld, enabled: bool) {
    world.perf_enabled = enabled;
    if !enabled {
        world.perf_stats.reset();
    }
}

pub(super) fn get_perf_stats(world: &PhysicsWorld) -> PerfStats {
    world.perf_stats.clone()
}

pub(super) fn set_world_bounds(world: &mut PhysicsWorld, bounds: WorldBounds) {
    log::info!(
        "world bounds set to ({}, {}) - ({}, {})",
        bounds.min_x,
        bounds.min_y,
        bounds.max_x,
        bounds.max_y
    );
    world.bounds = bounds;
    world.settings.world_bounds = bounds;
}

/// Swap tunables. The current bounds follow the new settings.
pub(super) fn apply_settings(world: &mut PhysicsWorld, settings: PhysicsSettings) {
    world.bounds = settings.world_bounds;
    world.settings = settings;
}
