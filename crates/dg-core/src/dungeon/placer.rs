//! Room placement
//!
//! Each room slot samples a size once, then tries random positions until
//! one clears every existing room or the attempt cap runs out. A slot that
//! runs out is dropped, so a run may end with fewer rooms than requested.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::{debug, trace};

use crate::config::GenerationConfig;
use crate::rng::RandomSource;

use super::grid::GridContext;
use super::room::Room;

/// Rooms produced for a run, with the number of slots that were dropped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoomPlacement {
    pub rooms: Vec<Room>,
    /// Slots that exhausted their attempts without finding space
    pub exhausted: usize,
}

/// Try to place one room that does not overlap `existing`
///
/// Returns `None` when the grid cannot hold the sampled size inside the
/// margins, or when every attempt collided with an existing room.
pub fn place_room(
    existing: &[Room],
    grid: &GridContext,
    config: &GenerationConfig,
    rng: &mut impl RandomSource,
) -> Option<Room> {
    let width = rng.rn_range(config.min_size, config.max_size)?;
    let height = rng.rn_range(config.min_size, config.max_size)?;

    let margin = config.room_margin;
    let (Some(max_x), Some(max_y)) = (
        last_start(grid.columns, width, margin),
        last_start(grid.rows, height, margin),
    ) else {
        trace!("no position range for a {}x{} room", width, height);
        return None;
    };

    for attempt in 1..=config.placement_attempt_cap {
        let x = rng.rn_range(margin, max_x)?;
        let y = rng.rn_range(margin, max_y)?;
        let room = Room::new(x, y, width, height);

        if !existing.iter().any(|r| room.overlaps(r)) {
            trace!("placed {:?} after {} attempt(s)", room, attempt);
            return Some(room);
        }
    }

    None
}

/// Last start coordinate along one axis, if any start fits
fn last_start(extent: i32, size: i32, margin: i32) -> Option<i32> {
    let last = extent as i64 - size as i64 - 1 - margin as i64;
    if last < margin as i64 {
        return None;
    }
    i32::try_from(last).ok()
}

/// Upper bound on how many rooms can share the grid
///
/// Rooms keep the closed box `x..=x + width` by `y..=y + height` to
/// themselves, so each one claims at least `(min_size + 1)^2` cells of the
/// area inside the margins.
pub fn room_capacity(grid: &GridContext, config: &GenerationConfig) -> usize {
    let inner = |extent: i32| (extent as i64 - 2 * config.room_margin as i64).max(0) as u128;
    let side = (config.min_size as i64 + 1).max(1) as u128;
    let capacity = inner(grid.columns) * inner(grid.rows) / (side * side);
    usize::try_from(capacity).unwrap_or(usize::MAX)
}

/// Fill up to `room_count` slots, in order
///
/// Slots past [`room_capacity`] cannot succeed and are counted as
/// exhausted without drawing from `rng`.
pub fn place_rooms(
    grid: &GridContext,
    room_count: usize,
    config: &GenerationConfig,
    rng: &mut impl RandomSource,
) -> RoomPlacement {
    let slots = room_count.min(room_capacity(grid, config));
    let mut placement = RoomPlacement {
        rooms: Vec::with_capacity(slots),
        exhausted: room_count - slots,
    };
    if placement.exhausted > 0 {
        debug!("{} room slot(s) exceed grid capacity", placement.exhausted);
    }

    for slot in 0..slots {
        match place_room(&placement.rooms, grid, config, rng) {
            Some(room) => placement.rooms.push(room),
            None => {
                debug!("room slot {} found no space", slot);
                placement.exhausted += 1;
            }
        }
    }

    placement
}
