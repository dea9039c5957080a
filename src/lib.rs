//! Realm Physics - fixed-tick 2D physics and collision core for a
//! multiplayer world server
//!
//! Architecture:
//! - core/          - Vector math, world bounds, constants
//! - domain/        - Bodies, settings, persistence snapshots
//! - systems/       - Polygon registry, collision, resolver, ownership, body system
//! - simulation/    - PhysicsWorld orchestration + SharedWorld lock wrapper

pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;

// Compatibility re-exports (short paths used across the crate)
pub use systems::collision;
pub use systems::ownership;
pub use systems::polygon_registry;
pub use systems::resolver;
pub use systems::rigid_body_system;

/// Get engine version
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use crate::core::{Vec2, WorldBounds};
pub use domain::{BodyId, BodySnapshot, PhysicsSettings, RigidBody, Shape, ShapeKind};
pub use ownership::OwnerId;
pub use simulation::{PerfStats, PhysicsWorld, SharedWorld};
