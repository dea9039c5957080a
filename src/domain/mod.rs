pub mod body;
pub mod settings;
pub mod snapshot;

pub use body::{BodyId, RigidBody, Shape};
pub use settings::PhysicsSettings;
pub use snapshot::{BodySnapshot, ShapeKind};
