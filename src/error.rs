//! Error types for the fallible edges (level parsing, config loading)
//!
//! The simulation itself never fails: out-of-range queries block, empty
//! magazines start a reload, and rays past the depth limit report no hit.

use thiserror::Error;

/// Errors raised while building a [`GridMap`](crate::sim::GridMap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map has no rows")]
    Empty,

    #[error("map rows have zero width")]
    ZeroWidth,

    #[error("row {row} has {found} tiles, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown tile symbol {symbol:?} at row {row}, col {col}")]
    UnknownTile { row: usize, col: usize, symbol: char },

    #[error("no built-in level with index {0}")]
    UnknownLevel(usize),
}

/// Errors raised while loading a [`Config`](crate::Config).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}
