use serde::{Deserialize, Serialize};

/// Below this length a vector has no usable direction.
pub const NORMALIZE_EPSILON: f32 = 0.0001;

/// 2D Vector for physics calculations
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn scale(&self, factor: f32) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }

    /// Unit vector in the same direction, or zero for (near) zero-length input.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > NORMALIZE_EPSILON {
            Self { x: self.x / len, y: self.y / len }
        } else {
            Self::zero()
        }
    }

    /// Left-hand perpendicular `(-y, x)`.
    pub fn perp(&self) -> Self {
        Self { x: -self.y, y: self.x }
    }

    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Arithmetic mean of a point set. Empty input yields zero.
    pub fn centroid(points: &[Vec2]) -> Self {
        if points.is_empty() {
            return Self::zero();
        }
        let sum = points.iter().fold(Self::zero(), |acc, p| acc + *p);
        sum * (1.0 / points.len() as f32)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::MulAssign<f32> for Vec2 {
    fn mul_assign(&mut self, rhs: f32) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_zero_vector_stays_zero() {
        assert_eq!(Vec2::zero().normalize(), Vec2::zero());
        assert_eq!(Vec2::new(0.00001, 0.0).normalize(), Vec2::zero());
    }

    #[test]
    fn normalize_produces_unit_length() {
        let n = Vec2::new(3.0, 4.0).normalize();
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n.x - 0.6).abs() < 1e-6);
        assert!((n.y - 0.8).abs() < 1e-6);
    }

    #[test]
    fn centroid_of_square_is_its_center() {
        let pts = [
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
            Vec2::new(10.0, 10.0),
            Vec2::new(0.0, 10.0),
        ];
        assert_eq!(Vec2::centroid(&pts), Vec2::new(5.0, 5.0));
        assert_eq!(Vec2::centroid(&[]), Vec2::zero());
    }

    #[test]
    fn perp_is_orthogonal() {
        let v = Vec2::new(2.0, -7.0);
        assert_eq!(v.dot(v.perp()), 0.0);
    }
}
