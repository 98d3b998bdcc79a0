//! Generation settings and map size presets
//!
//! Settings are plain data with the documented defaults; a partial JSON
//! document only overrides the fields it names.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::consts::{
    DOOR_WIDTH_FRACTION, MAX_ROOM_SIZE, MIN_ROOM_SIZE, PLACEMENT_ATTEMPT_CAP, ROOM_MARGIN,
};
use crate::dungeon::GridContext;
use crate::error::ConfigurationError;

/// Tunables for one generation run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Smallest room edge, in cells
    pub min_size: i32,
    /// Largest room edge, in cells
    pub max_size: i32,
    /// Empty cells kept between any room and the grid border
    pub room_margin: i32,
    /// Position samples per room slot before the slot is dropped
    pub placement_attempt_cap: u32,
    /// Door thickness as a fraction of the cell size
    pub door_width_fraction: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            min_size: MIN_ROOM_SIZE,
            max_size: MAX_ROOM_SIZE,
            room_margin: ROOM_MARGIN,
            placement_attempt_cap: PLACEMENT_ATTEMPT_CAP,
            door_width_fraction: DOOR_WIDTH_FRACTION,
        }
    }
}

impl GenerationConfig {
    /// Parse settings from JSON and validate them
    #[cfg(feature = "std")]
    pub fn from_json(json: &str) -> Result<Self, ConfigurationError> {
        let config: GenerationConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the settings on their own, independent of any grid
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.min_size < 1 || self.max_size < self.min_size {
            return Err(ConfigurationError::InvalidRoomSize {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if self.room_margin < 0 {
            return Err(ConfigurationError::NegativeMargin(self.room_margin));
        }
        if self.footprint(self.max_size) > i32::MAX as i64 {
            return Err(ConfigurationError::Oversized {
                max_size: self.max_size,
                margin: self.room_margin,
            });
        }
        if self.placement_attempt_cap == 0 {
            return Err(ConfigurationError::ZeroAttemptCap);
        }
        // Also rejects NaN
        if !(self.door_width_fraction > 0.0 && self.door_width_fraction <= 1.0) {
            return Err(ConfigurationError::InvalidDoorWidth(self.door_width_fraction));
        }
        Ok(())
    }

    /// Check that at least one minimum-size room fits inside the margins
    ///
    /// The placer samples `x` in `margin..=columns - width - 1 - margin`, so
    /// the grid needs `min_size + 2 * margin + 1` cells along each axis.
    pub fn check_grid(&self, grid: &GridContext) -> Result<(), ConfigurationError> {
        let needed = self.footprint(self.min_size);
        if (grid.columns as i64) < needed || (grid.rows as i64) < needed {
            return Err(ConfigurationError::GridTooSmall {
                columns: grid.columns,
                rows: grid.rows,
                min_size: self.min_size,
                margin: self.room_margin,
            });
        }
        Ok(())
    }

    /// Cells one axis needs for a room of `size` plus both margins and the
    /// trailing gap
    fn footprint(&self, size: i32) -> i64 {
        size as i64 + 2 * self.room_margin as i64 + 1
    }
}

/// Convert a user-entered room count, rejecting negatives
pub fn room_count_from(requested: i64) -> Result<usize, ConfigurationError> {
    usize::try_from(requested).map_err(|_| ConfigurationError::NegativeRoomCount(requested))
}

/// Map density presets, expressed as the pixel size of one cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
    EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MapSize {
    /// Few large cells
    Small,
    #[default]
    Medium,
    /// Many small cells
    Large,
}

impl MapSize {
    /// Pixel size of one cell
    pub const fn cell_size(self) -> u32 {
        match self {
            MapSize::Small => 18,
            MapSize::Medium => 12,
            MapSize::Large => 8,
        }
    }

    /// Grid for a viewport of the given pixel size at this density
    pub fn grid_for(self, width_px: u32, height_px: u32) -> Result<GridContext, ConfigurationError> {
        GridContext::from_viewport(width_px, height_px, self.cell_size())
    }
}
