use serde::{Deserialize, Serialize};

use crate::core::constants::{
    BOUNDARY_BOUNCE, DRAG, FIXED_DT, MAX_PLAYER_SPEED, PLAYER_MASS, PLAYER_SIZE,
    REGISTRY_SWEEP_INTERVAL, RESTITUTION, REST_SPEED,
};
use crate::core::WorldBounds;

/// Tunables for one world. Every field falls back to its default when missing
/// from the JSON document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PhysicsSettings {
    pub dt: f32,
    pub boundary_bounce: f32,
    pub drag: f32,
    pub rest_speed: f32,
    pub restitution: f32,
    pub registry_sweep_interval: u64,
    pub max_player_speed: f32,
    pub player_size: f32,
    pub player_mass: f32,
    pub world_bounds: WorldBounds,
}

impl PhysicsSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: PhysicsSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    fn validate(&self) -> Result<(), String> {
        if !(self.dt > 0.0) {
            return Err(format!("dt must be positive, got {}", self.dt));
        }
        if self.registry_sweep_interval == 0 {
            return Err("registrySweepInterval must be at least 1".to_string());
        }
        if self.world_bounds.max_x < self.world_bounds.min_x
            || self.world_bounds.max_y < self.world_bounds.min_y
        {
            return Err(format!("world bounds are inverted: {:?}", self.world_bounds));
        }
        Ok(())
    }
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            dt: FIXED_DT,
            boundary_bounce: BOUNDARY_BOUNCE,
            drag: DRAG,
            rest_speed: REST_SPEED,
            restitution: RESTITUTION,
            registry_sweep_interval: REGISTRY_SWEEP_INTERVAL,
            max_player_speed: MAX_PLAYER_SPEED,
            player_size: PLAYER_SIZE,
            player_mass: PLAYER_MASS,
            world_bounds: WorldBounds::default(),
        }
    }
}
