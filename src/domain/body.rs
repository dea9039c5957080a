use serde::{Deserialize, Serialize};

use crate::core::constants::{PLAYER_MASS, PLAYER_SIZE};
use crate::core::Vec2;

/// Stable identity of a simulated body.
///
/// Allocated by [`RigidBodySystem`](crate::rigid_body_system::RigidBodySystem) on
/// insertion and never reused for the lifetime of a world. `BodyId::UNASSIGNED`
/// marks bodies that have not been inserted yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BodyId(pub u32);

impl BodyId {
    pub const UNASSIGNED: BodyId = BodyId(0);

    pub fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Collision shape. Polygons keep their bounding box here; the actual vertices
/// live in the polygon registry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rectangle { width: f32, height: f32 },
    Circle { radius: f32 },
    /// `offset` is the bounding box center relative to the body position. The
    /// body sits on the vertex centroid, which is off-center for most shapes.
    Polygon {
        width: f32,
        height: f32,
        #[serde(default)]
        offset: Vec2,
    },
}

impl Shape {
    pub fn is_circle(&self) -> bool {
        matches!(self, Shape::Circle { .. })
    }

    pub fn is_polygon(&self) -> bool {
        matches!(self, Shape::Polygon { .. })
    }

    /// Polygon shape fitted to `points` for a body positioned at `anchor`.
    /// `None` for an empty point set.
    pub fn polygon_around(anchor: Vec2, points: &[Vec2]) -> Option<Shape> {
        let first = points.first()?;
        let (mut min, mut max) = (*first, *first);
        for p in points.iter() {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Some(Shape::Polygon {
            width: max.x - min.x,
            height: max.y - min.y,
            offset: (min + max) * 0.5 - anchor,
        })
    }

    /// Half width / half height of the axis-aligned bounding box.
    pub fn half_extents(&self) -> (f32, f32) {
        match *self {
            Shape::Rectangle { width, height } | Shape::Polygon { width, height, .. } => {
                (width * 0.5, height * 0.5)
            }
            Shape::Circle { radius } => (radius, radius),
        }
    }

    /// Bounding box center relative to the body position. Zero except for
    /// polygons.
    pub fn bbox_offset(&self) -> Vec2 {
        match *self {
            Shape::Polygon { offset, .. } => offset,
            _ => Vec2::zero(),
        }
    }
}

/// Rigid Body - moves as a single unit, never rotates
#[derive(Clone, Debug, PartialEq)]
pub struct RigidBody {
    /// Assigned on insertion into the canonical collection
    pub id: BodyId,
    /// World position (center)
    pub pos: Vec2,
    /// Velocity (units per second)
    pub velocity: Vec2,
    /// `0.0` means immovable / infinite mass
    pub mass: f32,
    pub shape: Shape,
    /// Only movable bodies are integrated and pushed by the resolver
    pub movable: bool,
}

impl RigidBody {
    fn new(x: f32, y: f32, shape: Shape) -> Self {
        Self {
            id: BodyId::UNASSIGNED,
            pos: Vec2::new(x, y),
            velocity: Vec2::zero(),
            mass: 0.0,
            shape,
            movable: false,
        }
    }

    /// Static rectangle centered at (cx, cy)
    pub fn rect(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self::new(cx, cy, Shape::Rectangle { width, height })
    }

    /// Static circle centered at (cx, cy)
    pub fn circle(cx: f32, cy: f32, radius: f32) -> Self {
        Self::new(cx, cy, Shape::Circle { radius })
    }

    /// Static polygon from absolute world-space points.
    ///
    /// The body sits on the vertex centroid, so a registry resync leaves the
    /// points where they are. The shape records the bounding box and where its
    /// center lies relative to the centroid. Returns the body together with
    /// the vertex list to hand to the polygon registry, or `None` for an empty
    /// point set.
    pub fn polygon_from_points(points: &[Vec2]) -> Option<(Self, Vec<Vec2>)> {
        let center = Vec2::centroid(points);
        let shape = Shape::polygon_around(center, points)?;
        Some((Self::new(center.x, center.y, shape), points.to_vec()))
    }

    /// Movable participant body: square of `size`, given mass.
    pub fn player(spawn: Vec2, size: f32, mass: f32) -> Self {
        Self::rect(spawn.x, spawn.y, size, size).with_mass(mass)
    }

    /// Participant body with the stock 40x40 / mass 10 dimensions.
    pub fn default_player(spawn: Vec2) -> Self {
        Self::player(spawn, PLAYER_SIZE, PLAYER_MASS)
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Sets the mass. Positive mass makes the body movable, anything else
    /// turns it into immovable scenery.
    pub fn with_mass(mut self, mass: f32) -> Self {
        if mass > 0.0 {
            self.mass = mass;
            self.movable = true;
        } else {
            self.mass = 0.0;
            self.movable = false;
        }
        self
    }

    /// `1 / mass`, with zero (or negative) mass treated as infinite.
    #[inline]
    pub fn inverse_mass(&self) -> f32 {
        if self.mass > 0.0 {
            1.0 / self.mass
        } else {
            0.0
        }
    }

    #[inline]
    pub fn half_extents(&self) -> (f32, f32) {
        self.shape.half_extents()
    }

    /// World-space center of the bounding box. Equals `pos` except for
    /// polygons.
    #[inline]
    pub fn bbox_center(&self) -> Vec2 {
        self.pos + self.shape.bbox_offset()
    }

    /// Apply impulse at center of mass. No-op on infinite mass.
    pub fn apply_impulse(&mut self, impulse: Vec2) {
        self.velocity += impulse * self.inverse_mass();
    }
}
