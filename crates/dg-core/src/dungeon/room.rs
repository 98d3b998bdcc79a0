//! Rectangular rooms

use serde::{Deserialize, Serialize};

use super::grid::Point;

/// Axis-aligned rectangle of open floor
///
/// `x`/`y` is the top-left cell. The outermost ring of cells is the wall
/// ring where doors can be cut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    /// Left column
    pub x: i32,
    /// Top row
    pub y: i32,
    /// Width in cells
    pub width: i32,
    /// Height in cells
    pub height: i32,
}

impl Room {
    /// Create a new room
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Column just past the right edge
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Row just past the bottom edge
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Check if this room overlaps another, counting touching edges as overlap
    ///
    /// Rooms only pass when one lies strictly left, right, above or below
    /// the other, so accepted rooms always have a gap between them.
    pub const fn overlaps(&self, other: &Room) -> bool {
        !(self.right() < other.x
            || self.x > other.right()
            || self.bottom() < other.y
            || self.y > other.bottom())
    }

    /// Center point, possibly on a half cell
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.width as f64 / 2.0,
            self.y as f64 + self.height as f64 / 2.0,
        )
    }

    /// Center in doubled coordinates, exact for odd sizes
    pub const fn center_doubled(&self) -> Point {
        Point::new(2 * self.x + self.width, 2 * self.y + self.height)
    }

    /// Center-to-center rectilinear distance, doubled
    pub const fn distance_doubled(&self, other: &Room) -> i32 {
        self.center_doubled().manhattan(other.center_doubled())
    }

    /// Check if a cell is inside the room
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}
