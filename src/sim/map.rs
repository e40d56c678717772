//! Static tile grid
//!
//! Built once from row strings (`#` wall, `.` open) and never mutated after.

use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tile {
    Wall,
    Open,
}

impl Tile {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '#' => Some(Tile::Wall),
            '.' => Some(Tile::Open),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Tile::Wall => '#',
            Tile::Open => '.',
        }
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        *self == Tile::Open
    }
}

/// Signed tile coordinate (may lie outside the grid)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub col: i64,
    pub row: i64,
}

impl TileCoord {
    pub const fn new(col: i64, row: i64) -> Self {
        Self { col, row }
    }
}

/// Rectangular wall/open grid with a fixed tile size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridMap {
    cols: usize,
    rows: usize,
    tile_size: f32,
    /// Row-major tiles
    tiles: Vec<Tile>,
}

impl GridMap {
    /// Parse a map from equal-length row strings
    pub fn parse<S: AsRef<str>>(rows: &[S], tile_size: f32) -> Result<Self, MapError> {
        let first = rows.first().ok_or(MapError::Empty)?;
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(MapError::ZeroWidth);
        }

        let mut tiles = Vec::with_capacity(cols * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != cols {
                return Err(MapError::Ragged {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let tile =
                    Tile::from_symbol(symbol).ok_or(MapError::UnknownTile { row, col, symbol })?;
                tiles.push(tile);
            }
        }

        Ok(Self {
            cols,
            rows: rows.len(),
            tile_size,
            tiles,
        })
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn tile_size(&self) -> f32 {
        self.tile_size
    }

    /// World-space extent (width, height)
    pub fn world_size(&self) -> (f32, f32) {
        (
            self.cols as f32 * self.tile_size,
            self.rows as f32 * self.tile_size,
        )
    }

    /// Tile at a coordinate, `None` when outside the grid
    pub fn tile(&self, coord: TileCoord) -> Option<Tile> {
        if coord.col < 0 || coord.row < 0 {
            return None;
        }
        let (col, row) = (coord.col as usize, coord.row as usize);
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.tiles[row * self.cols + col])
    }

    /// Centre of the first open tile in row-major order
    pub fn first_open_center(&self) -> Option<glam::Vec2> {
        let index = self.tiles.iter().position(Tile::is_open)?;
        let (col, row) = (index % self.cols, index / self.cols);
        Some(glam::Vec2::new(
            (col as f32 + 0.5) * self.tile_size,
            (row as f32 + 0.5) * self.tile_size,
        ))
    }

    /// Render back to row strings
    pub fn to_rows(&self) -> Vec<String> {
        self.tiles
            .chunks(self.cols)
            .map(|row| row.iter().map(Tile::symbol).collect())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dimensions() {
        let map = GridMap::parse(&["####", "#..#", "####"], 50.0).unwrap();
        assert_eq!(map.cols(), 4);
        assert_eq!(map.rows(), 3);
        assert_eq!(map.world_size(), (200.0, 150.0));
        assert_eq!(map.tile(TileCoord::new(1, 1)), Some(Tile::Open));
        assert_eq!(map.tile(TileCoord::new(0, 1)), Some(Tile::Wall));
    }

    #[test]
    fn test_out_of_range_tile_is_none() {
        let map = GridMap::parse(&["#.#"], 50.0).unwrap();
        assert_eq!(map.tile(TileCoord::new(-1, 0)), None);
        assert_eq!(map.tile(TileCoord::new(3, 0)), None);
        assert_eq!(map.tile(TileCoord::new(1, 1)), None);
    }

    #[test]
    fn test_parse_errors() {
        let empty: [&str; 0] = [];
        assert_eq!(GridMap::parse(&empty, 50.0), Err(MapError::Empty));
        assert_eq!(GridMap::parse(&[""], 50.0), Err(MapError::ZeroWidth));
        assert_eq!(
            GridMap::parse(&["###", "#."], 50.0),
            Err(MapError::Ragged {
                row: 1,
                expected: 3,
                found: 2
            })
        );
        assert_eq!(
            GridMap::parse(&["#x#"], 50.0),
            Err(MapError::UnknownTile {
                row: 0,
                col: 1,
                symbol: 'x'
            })
        );
    }

    #[test]
    fn test_first_open_center() {
        let map = GridMap::parse(&["###", "#.#", "###"], 50.0).unwrap();
        assert_eq!(map.first_open_center(), Some(glam::Vec2::new(75.0, 75.0)));

        let solid = GridMap::parse(&["##"], 50.0).unwrap();
        assert_eq!(solid.first_open_center(), None);
    }

    #[test]
    fn test_to_rows_round_trip() {
        let rows = ["#####", "#.#.#", "#####"];
        let map = GridMap::parse(&rows, 50.0).unwrap();
        assert_eq!(map.to_rows(), rows);
    }
}
