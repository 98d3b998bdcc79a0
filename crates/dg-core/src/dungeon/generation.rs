//! Layout generation
//!
//! One run places rooms, orders the spanning-tree connections, carves a
//! corridor per connection and records the doors that corridor reaches.
//! The run owns all of its state and hands back a single snapshot.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::GenerationConfig;
use crate::error::ConfigurationError;
use crate::rng::RandomSource;

use super::connector::{connect, ConnectivityTracker};
use super::corridor::{carve_path, Corridor};
use super::door::{try_place_door, Door};
use super::grid::{GridContext, Point};
use super::placer::place_rooms;
use super::room::Room;
use super::wall::{select_wall_point, WallPoint};

/// Counters describing how a run degraded, if at all
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub rooms_requested: usize,
    pub rooms_placed: usize,
    /// Connections dropped because a room had no usable wall cell
    pub connections_skipped: usize,
    pub doors_placed: usize,
    /// Corridor ends that missed their wall point
    pub doors_omitted: usize,
}

/// Rooms, corridors and doors from one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub grid: GridContext,
    pub rooms: Vec<Room>,
    pub corridors: Vec<Corridor>,
    pub doors: Vec<Door>,
    pub stats: GenerationStats,
}

impl GenerationResult {
    /// Index of the room covering a cell
    pub fn room_at(&self, point: Point) -> Option<usize> {
        self.rooms.iter().position(|room| room.contains(point))
    }

    /// Check that the cell outside a wall point is not inside any room
    pub fn door_opens_outside(&self, wall_point: &WallPoint) -> bool {
        self.room_at(wall_point.outward()).is_none()
    }

    /// Check that the carved corridors link every room
    pub fn is_fully_connected(&self) -> bool {
        let mut tracker = ConnectivityTracker::new(self.rooms.len());
        for corridor in &self.corridors {
            tracker.merge(corridor.from, corridor.to);
        }
        tracker.all_connected()
    }
}

/// Generate a layout with the default settings
pub fn generate(
    grid: &GridContext,
    room_count: usize,
    rng: &mut impl RandomSource,
) -> Result<GenerationResult, ConfigurationError> {
    generate_with(&GenerationConfig::default(), grid, room_count, rng)
}

/// Generate a layout
///
/// Settings and grid are checked before any randomness is drawn. After
/// that the run always completes, possibly with fewer rooms, corridors or
/// doors than ideal; see [`GenerationStats`].
pub fn generate_with(
    config: &GenerationConfig,
    grid: &GridContext,
    room_count: usize,
    rng: &mut impl RandomSource,
) -> Result<GenerationResult, ConfigurationError> {
    config.validate()?;
    config.check_grid(grid)?;

    let placement = place_rooms(grid, room_count, config, rng);
    let rooms = placement.rooms;

    let mut stats = GenerationStats {
        rooms_requested: room_count,
        rooms_placed: rooms.len(),
        ..Default::default()
    };
    let mut corridors = Vec::new();
    let mut doors = Vec::new();

    for edge in connect(&rooms) {
        let (from, to) = (&rooms[edge.from], &rooms[edge.to]);

        let (Some(start), Some(end)) = (select_wall_point(from, to), select_wall_point(to, from))
        else {
            debug!("no wall cell to link room {} and room {}", edge.from, edge.to);
            stats.connections_skipped += 1;
            continue;
        };

        let corridor = Corridor {
            from: edge.from,
            to: edge.to,
            cells: carve_path(&start, &end),
        };

        for wall_point in [start, end] {
            match try_place_door(&wall_point, &corridor) {
                Some(door) => doors.push(door.with_thickness(config.door_width_fraction)),
                None => stats.doors_omitted += 1,
            }
        }

        corridors.push(corridor);
    }
    stats.doors_placed = doors.len();

    debug!(
        "generated {}/{} rooms, {} corridors, {} doors on a {}x{} grid",
        stats.rooms_placed,
        stats.rooms_requested,
        corridors.len(),
        stats.doors_placed,
        grid.columns,
        grid.rows
    );

    Ok(GenerationResult {
        grid: *grid,
        rooms,
        corridors,
        doors,
        stats,
    })
}
