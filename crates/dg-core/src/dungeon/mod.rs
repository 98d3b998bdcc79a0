//! Dungeon layout
//!
//! Grid, rooms, the generation stages and the result snapshot.

mod connector;
mod corridor;
mod door;
mod generation;
mod grid;
mod placer;
mod room;
mod tilemap;
mod wall;

pub use connector::{connect, Connection, ConnectivityTracker};
pub use corridor::{carve_path, Corridor};
pub use door::{is_door_connected, try_place_door, Door, DoorSegment};
pub use generation::{generate, generate_with, GenerationResult, GenerationStats};
pub use grid::{GridContext, Point};
pub use placer::{place_room, place_rooms, room_capacity, RoomPlacement};
pub use room::Room;
pub use tilemap::{Tile, TileMap};
pub use wall::{select_wall_point, Side, WallPoint};
