use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_WORLD_MAX_X, DEFAULT_WORLD_MAX_Y};

/// Axis-aligned world rectangle. Set at map load, read-only while ticking.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorldBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl WorldBounds {
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }

    /// True when a box with the given center and half extents touches no edge.
    pub fn contains_box(&self, cx: f32, cy: f32, half_w: f32, half_h: f32) -> bool {
        cx - half_w >= self.min_x
            && cx + half_w <= self.max_x
            && cy - half_h >= self.min_y
            && cy + half_h <= self.max_y
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self::new(0.0, 0.0, DEFAULT_WORLD_MAX_X, DEFAULT_WORLD_MAX_Y)
    }
}
