//! Errors rejected before a generation run starts
//!
//! Everything that can go wrong mid-run (a slot that never finds space, a
//! room with no usable wall cell, a corridor that misses a wall point) is
//! an expected outcome and is reported through `Option`s and counters.

use thiserror::Error;

#[cfg(not(feature = "std"))]
use crate::compat::String;

/// Invalid inputs to a generation run
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigurationError {
    #[error("grid must have at least one column and one row, got {columns}x{rows}")]
    EmptyGrid { columns: i32, rows: i32 },

    #[error("grid {columns}x{rows} cannot fit a {min_size}x{min_size} room with a margin of {margin}")]
    GridTooSmall {
        columns: i32,
        rows: i32,
        min_size: i32,
        margin: i32,
    },

    #[error("room count must not be negative, got {0}")]
    NegativeRoomCount(i64),

    #[error("invalid room size bounds: min {min}, max {max}")]
    InvalidRoomSize { min: i32, max: i32 },

    #[error("room margin must not be negative, got {0}")]
    NegativeMargin(i32),

    #[error("rooms up to {max_size} cells with a margin of {margin} exceed any grid")]
    Oversized { max_size: i32, margin: i32 },

    #[error("placement attempt cap must be at least 1")]
    ZeroAttemptCap,

    #[error("door width fraction must be in (0, 1], got {0}")]
    InvalidDoorWidth(f64),

    #[error("cell size must be at least one pixel")]
    InvalidCellSize,

    #[error("could not parse configuration: {0}")]
    Parse(String),
}

#[cfg(feature = "std")]
impl From<serde_json::Error> for ConfigurationError {
    fn from(err: serde_json::Error) -> Self {
        ConfigurationError::Parse(err.to_string())
    }
}
