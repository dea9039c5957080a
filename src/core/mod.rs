//! Geometry primitives and simulation-wide constants.

pub mod bounds;
pub mod constants;
pub mod vec2;

pub use bounds::WorldBounds;
pub use vec2::Vec2;
