//! Tilecast - A first-person raycaster on a tile grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid map, collision, ray casting, projectiles)
//! - `renderer`: Column projection and a canvas abstraction for the host
//! - `settings`: View configuration and the JSON config envelope
//! - `tuning`: Data-driven gameplay balance

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::{ConfigError, MapError};
pub use settings::{Config, Settings};
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Screen dimensions (pixels)
    pub const SCREEN_WIDTH: u32 = 800;
    pub const SCREEN_HEIGHT: u32 = 600;

    /// Field of view (radians, 60 degrees)
    pub const FOV: f32 = std::f32::consts::FRAC_PI_3;
    /// Number of rays cast per frame (one per screen column slice)
    pub const NUM_RAYS: u32 = 120;
    /// Maximum ray march distance (world units)
    pub const MAX_DEPTH: u32 = 800;
    /// Perspective falloff used by the column projection
    pub const WALL_FALLOFF: f32 = 0.01;

    /// Edge length of one grid tile (world units)
    pub const TILE_SIZE: f32 = 50.0;

    /// Player defaults (per tick)
    pub const PLAYER_SPEED: f32 = 3.0;
    pub const ROTATION_SPEED: f32 = 0.05;
    pub const PLAYER_HEALTH: u32 = 100;

    /// Weapon defaults
    pub const AMMO_CAPACITY: u32 = 10;
    /// Reload duration in ticks (1 second at 60 Hz)
    pub const RELOAD_TICKS: u32 = 60;

    /// Projectile defaults
    pub const PROJECTILE_SPEED: f32 = 10.0;
    pub const PROJECTILE_RADIUS: f32 = 5.0;

    /// Target frame rate of the host loop
    pub const TICK_RATE: u32 = 60;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(mut angle: f32) -> f32 {
    use std::f32::consts::PI;
    while angle >= PI {
        angle -= 2.0 * PI;
    }
    while angle < -PI {
        angle += 2.0 * PI;
    }
    angle
}

/// Unit direction for a heading (radians, +x is 0, +y is π/2)
#[inline]
pub fn heading_vector(heading: f32) -> Vec2 {
    Vec2::new(heading.cos(), heading.sin())
}
