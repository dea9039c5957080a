use serde::{Deserialize, Serialize};

use crate::core::Vec2;

use super::body::{BodyId, RigidBody, Shape};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Polygon,
}

/// Plain-data copy of a body handed to the storage layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BodySnapshot {
    pub id: u32,
    pub position: Vec2,
    pub velocity: Vec2,
    pub mass: f32,
    pub shape: ShapeKind,
    #[serde(default)]
    pub width: f32,
    #[serde(default)]
    pub height: f32,
    #[serde(default)]
    pub radius: f32,
    pub is_movable: bool,
    /// Registered polygon vertices (world space), empty for other shapes
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vertices: Vec<Vec2>,
}

impl From<&RigidBody> for BodySnapshot {
    fn from(body: &RigidBody) -> Self {
        let (shape, width, height, radius) = match body.shape {
            Shape::Rectangle { width, height } => (ShapeKind::Rectangle, width, height, 0.0),
            Shape::Circle { radius } => (ShapeKind::Circle, radius * 2.0, radius * 2.0, radius),
            Shape::Polygon { width, height, .. } => (ShapeKind::Polygon, width, height, 0.0),
        };
        Self {
            id: body.id.0,
            position: body.pos,
            velocity: body.velocity,
            mass: body.mass,
            shape,
            width,
            height,
            radius,
            is_movable: body.movable,
            vertices: Vec::new(),
        }
    }
}

impl BodySnapshot {
    pub fn with_vertices(mut self, vertices: &[Vec2]) -> Self {
        self.vertices = vertices.to_vec();
        self
    }

    /// Rebuild an uninserted body. The id is not carried over; the receiving
    /// world allocates a fresh one.
    pub fn to_body(&self) -> RigidBody {
        let mut body = match self.shape {
            ShapeKind::Rectangle => RigidBody::rect(self.position.x, self.position.y, self.width, self.height),
            ShapeKind::Circle => RigidBody::circle(self.position.x, self.position.y, self.radius),
            ShapeKind::Polygon => {
                let mut b = RigidBody::rect(self.position.x, self.position.y, self.width, self.height);
                b.shape = Shape::polygon_around(Vec2::centroid(&self.vertices), &self.vertices).unwrap_or(Shape::Polygon {
                    width: self.width,
                    height: self.height,
                    offset: Vec2::zero(),
                });
                b
            }
        };
        body.velocity = self.velocity;
        body.mass = self.mass.max(0.0);
        body.movable = self.is_movable && self.mass > 0.0;
        body.id = BodyId::UNASSIGNED;
        body
    }
}
