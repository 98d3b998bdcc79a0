//! Wall sides and door point selection

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::grid::Point;
use super::room::Room;

/// One of the four walls of a room
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter,
)]
pub enum Side {
    Top,
    Right,
    Bottom,
    Left,
}

impl Side {
    /// Order walls are scanned in; earlier walls win distance ties
    pub const SCAN_ORDER: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// Unit step pointing out of the room
    pub const fn outward(self) -> (i32, i32) {
        match self {
            Side::Top => (0, -1),
            Side::Right => (1, 0),
            Side::Bottom => (0, 1),
            Side::Left => (-1, 0),
        }
    }

    /// Top and bottom walls run horizontally
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    /// Interior cells of this wall, corners excluded
    ///
    /// A wall shorter than three cells has no interior.
    pub fn cells(self, room: &Room) -> impl Iterator<Item = Point> {
        let room = *room;
        let (along, fixed) = match self {
            Side::Top => (room.x + 1..room.right() - 1, room.y),
            Side::Bottom => (room.x + 1..room.right() - 1, room.bottom() - 1),
            Side::Left => (room.y + 1..room.bottom() - 1, room.x),
            Side::Right => (room.y + 1..room.bottom() - 1, room.right() - 1),
        };
        let horizontal = self.is_horizontal();
        along.map(move |t| {
            if horizontal {
                Point::new(t, fixed)
            } else {
                Point::new(fixed, t)
            }
        })
    }
}

/// A wall cell of a specific room, tagged with its side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WallPoint {
    pub cell: Point,
    pub side: Side,
}

impl WallPoint {
    pub const fn new(cell: Point, side: Side) -> Self {
        Self { cell, side }
    }

    /// Cell just outside the wall
    pub const fn outward(&self) -> Point {
        let (dx, dy) = self.side.outward();
        Point::new(self.cell.x + dx, self.cell.y + dy)
    }
}

/// Pick the wall cell of `room` closest to the center of `target`
///
/// Distance is rectilinear. Returns `None` when no wall has an interior
/// cell, i.e. the room is under three cells in both directions.
pub fn select_wall_point(room: &Room, target: &Room) -> Option<WallPoint> {
    let center = target.center_doubled();
    let mut best: Option<(i32, WallPoint)> = None;

    for side in Side::SCAN_ORDER {
        for cell in side.cells(room) {
            let d = Point::new(2 * cell.x, 2 * cell.y).manhattan(center);
            if best.is_none_or(|(min, _)| d < min) {
                best = Some((d, WallPoint::new(cell, side)));
            }
        }
    }

    best.map(|(_, point)| point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_outward_steps() {
        let cell = Point::new(5, 5);
        let expected = [
            (Side::Top, Point::new(5, 4)),
            (Side::Right, Point::new(6, 5)),
            (Side::Bottom, Point::new(5, 6)),
            (Side::Left, Point::new(4, 5)),
        ];
        for (side, out) in expected {
            assert_eq!(WallPoint::new(cell, side).outward(), out);
        }
    }

    #[test]
    fn test_wall_cells_skip_corners() {
        let room = Room::new(2, 3, 5, 4);
        let top: Vec<Point> = Side::Top.cells(&room).collect();
        assert_eq!(top, vec![Point::new(3, 3), Point::new(4, 3), Point::new(5, 3)]);

        let right: Vec<Point> = Side::Right.cells(&room).collect();
        assert_eq!(right, vec![Point::new(6, 4), Point::new(6, 5)]);

        // Every side contributes length - 2 cells
        let total: usize = Side::iter().map(|s| s.cells(&room).count()).sum();
        assert_eq!(total, 2 * 3 + 2 * 2);
    }

    #[test]
    fn test_select_faces_target() {
        let room = Room::new(10, 10, 5, 5);

        let east = select_wall_point(&room, &Room::new(30, 10, 5, 5)).unwrap();
        assert_eq!(east.side, Side::Right);
        assert_eq!(east.cell, Point::new(14, 12));

        let north = select_wall_point(&room, &Room::new(10, 1, 5, 4)).unwrap();
        assert_eq!(north.side, Side::Top);
        assert_eq!(north.cell, Point::new(12, 10));

        let south = select_wall_point(&room, &Room::new(11, 30, 4, 4)).unwrap();
        assert_eq!(south.side, Side::Bottom);

        let west = select_wall_point(&room, &Room::new(1, 11, 4, 4)).unwrap();
        assert_eq!(west.side, Side::Left);
    }

    #[test]
    fn test_select_tie_prefers_scan_order() {
        // Target center sits on the room's diagonal: top and right tie, top wins
        let room = Room::new(0, 10, 4, 4);
        let target = Room::new(10, 0, 4, 4);
        let point = select_wall_point(&room, &target).unwrap();
        assert_eq!(point.side, Side::Top);
        assert_eq!(point.cell, Point::new(2, 10));
    }

    #[test]
    fn test_select_is_on_room() {
        let room = Room::new(5, 5, 6, 4);
        let point = select_wall_point(&room, &Room::new(40, 40, 4, 4)).unwrap();
        assert!(room.contains(point.cell));
        assert!(!room.contains(point.outward()));
    }

    #[test]
    fn test_select_degenerate_room() {
        let tiny = Room::new(5, 5, 2, 2);
        assert_eq!(select_wall_point(&tiny, &Room::new(20, 20, 4, 4)), None);

        // A thin room still has a usable long wall
        let thin = Room::new(5, 5, 2, 6);
        let point = select_wall_point(&thin, &Room::new(20, 5, 4, 4)).unwrap();
        assert!(matches!(point.side, Side::Left | Side::Right));
    }
}
