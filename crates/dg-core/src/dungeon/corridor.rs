//! Corridor carving
//!
//! Corridors run from the cell outside one wall point to the cell outside
//! the other: all horizontal steps first, then all vertical steps. They do
//! not route around rooms or other corridors.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use serde::{Deserialize, Serialize};

use super::grid::Point;
use super::wall::WallPoint;

/// A carved path linking two rooms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Corridor {
    /// Index of the room the path leaves
    pub from: usize,
    /// Index of the room the path reaches
    pub to: usize,
    /// Cells in walking order; never empty
    pub cells: Vec<Point>,
}

impl Corridor {
    /// Check if a cell is part of this corridor
    pub fn contains(&self, point: Point) -> bool {
        self.cells.contains(&point)
    }

    /// First cell, just outside the `from` room
    pub fn start(&self) -> Option<Point> {
        self.cells.first().copied()
    }

    /// Last cell, just outside the `to` room
    pub fn end(&self) -> Option<Point> {
        self.cells.last().copied()
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Check that consecutive cells share an edge
    pub fn is_continuous(&self) -> bool {
        !self.cells.is_empty() && self.cells.windows(2).all(|w| w[0].is_adjacent(w[1]))
    }
}

/// Carve the cells between two wall points
///
/// The result has `|dx| + |dy| + 1` cells, where `dx`/`dy` separate the two
/// outward cells, and always holds at least one cell.
pub fn carve_path(start: &WallPoint, end: &WallPoint) -> Vec<Point> {
    let from = start.outward();
    let to = end.outward();

    let mut cells = Vec::with_capacity(from.manhattan(to) as usize + 1);
    let mut x = from.x;
    let mut y = from.y;

    while x != to.x {
        cells.push(Point::new(x, y));
        x += (to.x - x).signum();
    }
    while y != to.y {
        cells.push(Point::new(x, y));
        y += (to.y - y).signum();
    }
    cells.push(Point::new(x, y));

    cells
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::wall::Side;

    fn wp(x: i32, y: i32, side: Side) -> WallPoint {
        WallPoint::new(Point::new(x, y), side)
    }

    #[test]
    fn test_carve_l_shape() {
        // Right wall of one room to the top wall of a room lower down
        let cells = carve_path(&wp(5, 3, Side::Right), &wp(9, 7, Side::Top));
        assert_eq!(cells.first(), Some(&Point::new(6, 3)));
        assert_eq!(cells.last(), Some(&Point::new(9, 6)));
        assert_eq!(
            cells,
            vec![
                Point::new(6, 3),
                Point::new(7, 3),
                Point::new(8, 3),
                Point::new(9, 3),
                Point::new(9, 4),
                Point::new(9, 5),
                Point::new(9, 6),
            ]
        );
    }

    #[test]
    fn test_carve_leftward_and_up() {
        let cells = carve_path(&wp(20, 20, Side::Left), &wp(10, 10, Side::Bottom));
        assert_eq!(cells.len(), (19 - 10) + (20 - 11) + 1);
        assert_eq!(cells[0], Point::new(19, 20));
        assert_eq!(*cells.last().unwrap(), Point::new(10, 11));
    }

    #[test]
    fn test_carve_single_cell() {
        // Both wall points open onto the same outside cell
        let cells = carve_path(&wp(5, 5, Side::Right), &wp(7, 5, Side::Left));
        assert_eq!(cells, vec![Point::new(6, 5)]);
    }

    #[test]
    fn test_corridor_continuity() {
        let cells = carve_path(&wp(3, 30, Side::Top), &wp(40, 2, Side::Bottom));
        let corridor = Corridor {
            from: 0,
            to: 1,
            cells,
        };
        assert!(corridor.is_continuous());
        assert_eq!(corridor.start(), Some(Point::new(3, 29)));
        assert_eq!(corridor.end(), Some(Point::new(40, 3)));
        assert!(corridor.contains(Point::new(40, 29)));
        assert!(!corridor.contains(Point::new(3, 28)));
    }

    #[test]
    fn test_empty_corridor_is_not_continuous() {
        let corridor = Corridor {
            from: 0,
            to: 1,
            cells: Vec::new(),
        };
        assert!(corridor.is_empty());
        assert!(!corridor.is_continuous());
    }
}
