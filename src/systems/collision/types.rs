use crate::core::Vec2;

/// Result of one pairwise test. Lives for a single tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CollisionInfo {
    pub collided: bool,
    /// Minimum translation vector, pointing from body A toward body B
    pub mtv: Vec2,
    /// Penetration depth along the MTV axis
    pub depth: f32,
    pub contact_point: Vec2,
}

impl CollisionInfo {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn hit(mtv: Vec2, depth: f32, contact_point: Vec2) -> Self {
        Self { collided: true, mtv, depth, contact_point }
    }
}
