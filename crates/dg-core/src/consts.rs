//! Generation defaults
//!
//! Grid units are cells; pixel values only matter to consumers that scale
//! the output for drawing.

/// Smallest room edge, in cells
pub const MIN_ROOM_SIZE: i32 = 4;
/// Largest room edge, in cells
pub const MAX_ROOM_SIZE: i32 = 8;

/// Empty cells kept between a room and the grid border
pub const ROOM_MARGIN: i32 = 1;

/// Position samples tried per room slot before the slot is given up
pub const PLACEMENT_ATTEMPT_CAP: u32 = 100;

/// Door stroke thickness as a fraction of the cell size
pub const DOOR_WIDTH_FRACTION: f64 = 0.2;

/// Offset of each door endpoint from the cell edge, along the wall.
/// Doors span the middle 60% of the wall cell.
pub const DOOR_SPAN_INSET: f64 = 0.2;

/// Rooms requested when the caller has no preference
pub const DEFAULT_ROOM_COUNT: usize = 5;

/// Pixel size of one cell for the medium map preset
pub const DEFAULT_CELL_SIZE: u32 = 12;

/// Fixed drawing surface height, in pixels
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 800;
