//! Door placement and geometry
//!
//! A door is only recorded when the corridor really passes the cell just
//! outside its wall point. Geometry is kept in cell units; consumers scale
//! it with [`Door::scaled`].

use serde::{Deserialize, Serialize};

use crate::consts::{DOOR_SPAN_INSET, DOOR_WIDTH_FRACTION};

use super::corridor::Corridor;
use super::wall::WallPoint;

/// A door stroke in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub thickness: f64,
}

/// An opening in a room wall where a corridor meets it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Door {
    /// Wall cell the door is cut into
    pub wall_point: WallPoint,
    /// Centerline start, in cells
    pub start: (f64, f64),
    /// Centerline end, in cells
    pub end: (f64, f64),
    /// Stroke thickness, in cells
    pub thickness: f64,
}

impl Door {
    /// Lay a door along the outer edge of a wall cell
    ///
    /// The segment covers the middle of the cell and runs parallel to the
    /// wall.
    pub fn at(wall_point: WallPoint, thickness: f64) -> Self {
        let x = wall_point.cell.x as f64;
        let y = wall_point.cell.y as f64;
        let (dx, dy) = wall_point.side.outward();

        let (start, end) = if wall_point.side.is_horizontal() {
            // Top edge for the top wall, bottom edge for the bottom wall
            let edge = y + dy.max(0) as f64;
            (
                (x + DOOR_SPAN_INSET, edge),
                (x + 1.0 - DOOR_SPAN_INSET, edge),
            )
        } else {
            let edge = x + dx.max(0) as f64;
            (
                (edge, y + DOOR_SPAN_INSET),
                (edge, y + 1.0 - DOOR_SPAN_INSET),
            )
        };

        Self {
            wall_point,
            start,
            end,
            thickness,
        }
    }

    /// Replace the stroke thickness
    pub fn with_thickness(self, thickness: f64) -> Self {
        Self { thickness, ..self }
    }

    /// Convert to pixel space for a given cell size
    pub fn scaled(&self, cell_size: u32) -> DoorSegment {
        let s = cell_size as f64;
        DoorSegment {
            x1: self.start.0 * s,
            y1: self.start.1 * s,
            x2: self.end.0 * s,
            y2: self.end.1 * s,
            thickness: self.thickness * s,
        }
    }
}

/// Check whether the corridor passes the cell outside a wall point
pub fn is_door_connected(wall_point: &WallPoint, corridor: &Corridor) -> bool {
    corridor.contains(wall_point.outward())
}

/// Record a door at `wall_point` if `corridor` reaches it
///
/// A miss is an expected outcome and yields `None`.
pub fn try_place_door(wall_point: &WallPoint, corridor: &Corridor) -> Option<Door> {
    is_door_connected(wall_point, corridor).then(|| Door::at(*wall_point, DOOR_WIDTH_FRACTION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dungeon::corridor::carve_path;
    use crate::dungeon::grid::Point;
    use crate::dungeon::wall::Side;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_door_geometry_horizontal_walls() {
        let top = Door::at(WallPoint::new(Point::new(4, 2), Side::Top), 0.2);
        assert!(close(top.start.0, 4.2) && close(top.end.0, 4.8));
        assert!(close(top.start.1, 2.0) && close(top.end.1, 2.0));

        let bottom = Door::at(WallPoint::new(Point::new(4, 2), Side::Bottom), 0.2);
        assert!(close(bottom.start.1, 3.0) && close(bottom.end.1, 3.0));
    }

    #[test]
    fn test_door_geometry_vertical_walls() {
        let left = Door::at(WallPoint::new(Point::new(7, 9), Side::Left), 0.2);
        assert!(close(left.start.0, 7.0) && close(left.end.0, 7.0));
        assert!(close(left.start.1, 9.2) && close(left.end.1, 9.8));

        let right = Door::at(WallPoint::new(Point::new(7, 9), Side::Right), 0.2);
        assert!(close(right.start.0, 8.0) && close(right.end.0, 8.0));
    }

    #[test]
    fn test_door_scaled() {
        let door = Door::at(WallPoint::new(Point::new(1, 1), Side::Top), 0.2);
        let seg = door.scaled(12);
        assert!(close(seg.x1, 14.4));
        assert!(close(seg.x2, 21.6));
        assert!(close(seg.y1, 12.0) && close(seg.y2, 12.0));
        assert!(close(seg.thickness, 2.4));

        let thick = door.with_thickness(0.5).scaled(10);
        assert!(close(thick.thickness, 5.0));
    }

    #[test]
    fn test_try_place_door_on_corridor() {
        let a = WallPoint::new(Point::new(5, 5), Side::Right);
        let b = WallPoint::new(Point::new(12, 9), Side::Left);
        let corridor = Corridor {
            from: 0,
            to: 1,
            cells: carve_path(&a, &b),
        };

        let door = try_place_door(&a, &corridor).unwrap();
        assert_eq!(door.wall_point, a);
        assert!(close(door.thickness, DOOR_WIDTH_FRACTION));
        assert!(try_place_door(&b, &corridor).is_some());
    }

    #[test]
    fn test_try_place_door_miss() {
        let corridor = Corridor {
            from: 0,
            to: 1,
            cells: vec![Point::new(10, 10), Point::new(11, 10)],
        };
        // Outward cell (10, 11) is off the path
        let point = WallPoint::new(Point::new(10, 12), Side::Top);
        assert!(!is_door_connected(&point, &corridor));
        assert_eq!(try_place_door(&point, &corridor), None);

        // Next to a corridor cell is not on it
        let near = WallPoint::new(Point::new(11, 12), Side::Top);
        assert_eq!(try_place_door(&near, &corridor), None);
    }
}
