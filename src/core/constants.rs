//! Simulation defaults. `PhysicsSettings` starts from these values.

/// Fixed time slice per tick (60 Hz).
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Velocity multiplier applied when a body is clamped at a world edge.
pub const BOUNDARY_BOUNCE: f32 = 0.7;

/// Per-tick isotropic velocity damping.
pub const DRAG: f32 = 0.95;

/// Speeds below this snap to zero after drag.
pub const REST_SPEED: f32 = 0.5;

/// Restitution used by the impulse resolver.
pub const RESTITUTION: f32 = 0.7;

/// Ticks between polygon registry sweeps.
pub const REGISTRY_SWEEP_INTERVAL: u64 = 100;

/// Sides of the regular polygon standing in for a circle in SAT.
pub const CIRCLE_SEGMENTS: usize = 16;

/// Circle centers closer than this are treated as coincident.
pub const COINCIDENT_EPSILON: f32 = 0.0001;

pub const MAX_PLAYER_SPEED: f32 = 300.0;
pub const PLAYER_SIZE: f32 = 40.0;
pub const PLAYER_MASS: f32 = 10.0;

pub const DEFAULT_WORLD_MAX_X: f32 = 1600.0;
pub const DEFAULT_WORLD_MAX_Y: f32 = 1200.0;
