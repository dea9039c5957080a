use std::collections::HashMap;

use crate::domain::PhysicsSettings;
use crate::systems::ownership::OwnershipIndex;
use crate::systems::polygon_registry::PolygonRegistry;
use crate::systems::rigid_body_system::RigidBodySystem;

use super::perf_stats::PerfStats;
use super::PhysicsWorld;

pub(super) fn create_world(settings: PhysicsSettings) -> PhysicsWorld {
    PhysicsWorld {
        bodies: RigidBodySystem::new(),
        registry: PolygonRegistry::new(),
        ownership: OwnershipIndex::new(),
        players: HashMap::new(),
        player_bodies: HashMap::new(),
        bounds: settings.world_bounds,
        settings,
        tick: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
