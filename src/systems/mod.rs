pub mod collision;
pub mod ownership;
pub mod polygon_registry;
pub mod resolver;
pub mod rigid_body_system;
