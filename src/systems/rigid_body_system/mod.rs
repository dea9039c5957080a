//! RigidBodySystem - the canonical body collection and its per-tick pipeline
//!
//! Per tick:
//! - integrate movable bodies (clamp + bounce against world bounds, drag, rest snap)
//! - resync registry vertices of polygons that moved
//! - sweep stale registry entries every `registry_sweep_interval` ticks
//! - pairwise broad + narrow phase and contact resolution
//!
//! Integration runs on rayon with the `parallel` feature. The collision pass
//! stays sequential so pair order, and therefore the result, is deterministic.

mod collision;
mod integrate;
mod system;

pub use collision::CollisionCounters;
pub use system::{RigidBodySystem, StepCounters};
