//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, fixed per-tick rates
//! - No randomness
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod levels;
pub mod map;
pub mod projectile;
pub mod raycast;
pub mod state;
pub mod tick;
pub mod weapon;

pub use collision::{is_walkable, world_to_tile};
pub use levels::{LEVELS, Level, load_level};
pub use map::{GridMap, Tile, TileCoord};
pub use projectile::Projectile;
pub use raycast::{RayConfig, RayHit, RayMethod, cast_ray, cast_ray_dda, cast_rays};
pub use state::{GameEvent, GameState, HudStatus, Player, Pose};
pub use tick::{TickInput, tick};
pub use weapon::{FireOutcome, Weapon};
