//! Grid collision
//!
//! Entities are accepted or rejected as a single point sample at their
//! prospective position. There is no swept test, so something moving faster
//! than a tile per tick could clip a wall corner; at the shipped speeds
//! (10 units/tick on 50-unit tiles) it cannot.

use glam::Vec2;

use super::map::{GridMap, TileCoord};

/// Tile containing a world position (`floor(coord / tile_size)`)
#[inline]
pub fn world_to_tile(pos: Vec2, tile_size: f32) -> TileCoord {
    TileCoord::new(
        (pos.x / tile_size).floor() as i64,
        (pos.y / tile_size).floor() as i64,
    )
}

/// Whether a point may be occupied.
///
/// Positions outside the grid are blocked, the same as walls.
#[inline]
pub fn is_walkable(map: &GridMap, pos: Vec2) -> bool {
    map.tile(world_to_tile(pos, map.tile_size()))
        .is_some_and(|tile| tile.is_open())
}
