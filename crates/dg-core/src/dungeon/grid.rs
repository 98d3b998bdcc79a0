//! Grid dimensions and cell coordinates

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// A grid cell. Signed so one-step moves off a wall never underflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Rectilinear distance to another cell
    pub const fn manhattan(self, other: Point) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// True if the two cells share an edge
    pub const fn is_adjacent(self, other: Point) -> bool {
        self.manhattan(other) == 1
    }
}

/// Discrete grid the generator works within
///
/// Fixed for the duration of a run; replaced wholesale when the viewport
/// changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridContext {
    pub columns: i32,
    pub rows: i32,
}

impl GridContext {
    /// Create a grid with at least one column and one row
    pub fn new(columns: i32, rows: i32) -> Result<Self, ConfigurationError> {
        if columns < 1 || rows < 1 {
            return Err(ConfigurationError::EmptyGrid { columns, rows });
        }
        Ok(Self { columns, rows })
    }

    /// Derive a grid from a viewport size and the pixel size of one cell
    ///
    /// Partial cells at the right and bottom edges are dropped.
    pub fn from_viewport(
        width_px: u32,
        height_px: u32,
        cell_size: u32,
    ) -> Result<Self, ConfigurationError> {
        if cell_size == 0 {
            return Err(ConfigurationError::InvalidCellSize);
        }
        let columns = i32::try_from(width_px / cell_size).unwrap_or(i32::MAX);
        let rows = i32::try_from(height_px / cell_size).unwrap_or(i32::MAX);
        Self::new(columns, rows)
    }

    /// Check that a cell lies on the grid
    pub const fn in_bounds(&self, point: Point) -> bool {
        point.x >= 0 && point.y >= 0 && point.x < self.columns && point.y < self.rows
    }

    /// Number of cells on the grid
    pub const fn area(&self) -> usize {
        self.columns as usize * self.rows as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty() {
        assert!(GridContext::new(1, 1).is_ok());
        assert_eq!(
            GridContext::new(0, 10),
            Err(ConfigurationError::EmptyGrid { columns: 0, rows: 10 })
        );
        assert!(GridContext::new(10, -3).is_err());
    }

    #[test]
    fn test_from_viewport_floors() {
        let grid = GridContext::from_viewport(605, 800, 12).unwrap();
        assert_eq!(grid.columns, 50);
        assert_eq!(grid.rows, 66);

        assert_eq!(
            GridContext::from_viewport(600, 800, 0),
            Err(ConfigurationError::InvalidCellSize)
        );
        // Narrower than a single cell
        assert!(GridContext::from_viewport(7, 800, 8).is_err());
    }

    #[test]
    fn test_in_bounds() {
        let grid = GridContext::new(10, 5).unwrap();
        assert!(grid.in_bounds(Point::new(0, 0)));
        assert!(grid.in_bounds(Point::new(9, 4)));
        assert!(!grid.in_bounds(Point::new(10, 4)));
        assert!(!grid.in_bounds(Point::new(-1, 2)));
        assert_eq!(grid.area(), 50);
    }

    #[test]
    fn test_point_metrics() {
        let a = Point::new(2, 3);
        assert_eq!(a.manhattan(Point::new(5, 1)), 5);
        assert!(a.is_adjacent(Point::new(2, 4)));
        assert!(!a.is_adjacent(Point::new(3, 4)));
        assert!(!a.is_adjacent(a));
    }
}
