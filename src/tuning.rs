//! Data-driven gameplay balance
//!
//! Everything the simulation needs that is not about how the frame looks.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay tuning values (all rates are per tick)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Edge length of one grid tile (world units)
    pub tile_size: f32,
    /// Player walk distance per tick
    pub player_speed: f32,
    /// Player turn rate (radians per tick)
    pub rotation_speed: f32,
    /// Starting player health (shown on the HUD)
    pub player_health: u32,
    /// Projectile travel per tick
    pub projectile_speed: f32,
    /// Projectile draw radius
    pub projectile_radius: f32,
    /// Rounds in a full magazine
    pub ammo_capacity: u32,
    /// Ticks a reload takes
    pub reload_ticks: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            tile_size: TILE_SIZE,
            player_speed: PLAYER_SPEED,
            rotation_speed: ROTATION_SPEED,
            player_health: PLAYER_HEALTH,
            projectile_speed: PROJECTILE_SPEED,
            projectile_radius: PROJECTILE_RADIUS,
            ammo_capacity: AMMO_CAPACITY,
            reload_ticks: RELOAD_TICKS,
        }
    }
}

impl Tuning {
    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), String> {
        if !self.tile_size.is_finite() || self.tile_size <= 0.0 {
            return Err(format!("tile_size must be positive, got {}", self.tile_size));
        }
        if self.ammo_capacity == 0 {
            return Err("ammo_capacity must be at least 1".to_string());
        }
        let rates = [
            ("player_speed", self.player_speed),
            ("rotation_speed", self.rotation_speed),
            ("projectile_speed", self.projectile_speed),
            ("projectile_radius", self.projectile_radius),
        ];
        for (name, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(format!("{name} must be finite and not negative, got {value}"));
            }
        }
        Ok(())
    }
}
