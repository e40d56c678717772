//! Built-in levels
//!
//! Selection is static: the host picks one index at startup.

use super::map::GridMap;
use crate::error::MapError;

/// A named level layout
#[derive(Debug, Clone, Copy)]
pub struct Level {
    pub name: &'static str,
    pub rows: &'static [&'static str],
}

pub const LEVELS: [Level; 2] = [
    Level {
        name: "Corridors",
        rows: &[
            "#########",
            "#.......#",
            "#.#####.#",
            "#.#...#.#",
            "#.#.#.#.#",
            "#...#.#.#",
            "#####.#.#",
            "#.......#",
            "#########",
        ],
    },
    Level {
        name: "Ring",
        rows: &[
            "########",
            "#......#",
            "#.####.#",
            "#.#..#.#",
            "#.#..#.#",
            "#.####.#",
            "#......#",
            "########",
        ],
    },
];

/// Build the grid for a built-in level
pub fn load_level(index: usize, tile_size: f32) -> Result<GridMap, MapError> {
    let level = LEVELS.get(index).ok_or(MapError::UnknownLevel(index))?;
    let map = GridMap::parse(level.rows, tile_size)?;
    log::info!(
        "Loaded level {} '{}' ({}x{} tiles)",
        index,
        level.name,
        map.cols(),
        map.rows()
    );
    Ok(map)
}
