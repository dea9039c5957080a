use crate::systems::rigid_body_system::StepCounters;

use super::{PerfTimer, PhysicsWorld};

pub(super) fn step(world: &mut PhysicsWorld) {
    world.tick = world.tick.wrapping_add(1);
    let tick = world.tick;

    let perf_on = world.perf_enabled;
    if perf_on {
        world.perf_stats.reset();
        world.perf_stats.bodies = world.bodies.body_count() as u32;
    }
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let counters = if perf_on {
        step_timed(world, tick)
    } else {
        world
            .bodies
            .step(&mut world.registry, &world.bounds, tick, &world.settings)
    };

    log::trace!(
        "tick {}: {} bodies, {} collisions, {} polygons resynced",
        tick,
        world.bodies.body_count(),
        counters.collisions.collisions,
        counters.polygons_resynced
    );

    if let Some(t0) = step_start {
        world.perf_stats.record_counters(&counters);
        world.perf_stats.registry_entries = world.registry.len() as u32;
        world.perf_stats.step_ms = t0.elapsed_ms();
    }
}

/// Same phases as `RigidBodySystem::step`, each one timed.
fn step_timed(world: &mut PhysicsWorld, tick: u64) -> StepCounters {
    let t0 = PerfTimer::start();
    let moved = world.bodies.integrate(&world.bounds, &world.settings);
    world.perf_stats.integrate_ms = t0.elapsed_ms();

    let t0 = PerfTimer::start();
    let polygons_resynced = world.bodies.resync_polygons(&mut world.registry, &moved);
    world.perf_stats.resync_ms = t0.elapsed_ms();

    let t0 = PerfTimer::start();
    let registry_swept =
        world
            .bodies
            .sweep_registry(&mut world.registry, tick, world.settings.registry_sweep_interval);
    world.perf_stats.sweep_ms = t0.elapsed_ms();

    let t0 = PerfTimer::start();
    let collisions = world
        .bodies
        .resolve_collisions(&mut world.registry, world.settings.restitution);
    world.perf_stats.collision_ms = t0.elapsed_ms();

    StepCounters {
        movable_bodies: world.bodies.movable_count() as u32,
        polygons_resynced,
        registry_swept,
        collisions,
    }
}
