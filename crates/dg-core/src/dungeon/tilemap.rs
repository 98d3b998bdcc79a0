//! Cell-level view of a generated layout
//!
//! Paints a [`GenerationResult`] onto a grid of tiles in drawing order:
//! room floors, then corridors, then doors. Useful for text output and
//! for checking that the layout can actually be walked.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use core::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter};

use super::generation::GenerationResult;
use super::grid::{GridContext, Point};

/// What occupies a cell
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Display, EnumIter,
)]
#[repr(u8)]
pub enum Tile {
    #[default]
    Stone = 0,
    Floor = 1,
    Corridor = 2,
    Door = 3,
}

impl Tile {
    /// Check if this tile can be walked on
    pub const fn is_walkable(&self) -> bool {
        !matches!(self, Tile::Stone)
    }

    /// Map symbol
    pub const fn symbol(&self) -> char {
        match self {
            Tile::Stone => ' ',
            Tile::Floor => '.',
            Tile::Corridor => '#',
            Tile::Door => '+',
        }
    }
}

/// Row-major tile grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    grid: GridContext,
    tiles: Vec<Tile>,
}

impl TileMap {
    /// Create a map of solid stone
    pub fn new(grid: GridContext) -> Self {
        Self {
            grid,
            tiles: vec![Tile::Stone; grid.area()],
        }
    }

    /// Paint a generated layout
    ///
    /// Corridor cells that leave the grid are dropped. Corridors drawn over
    /// room floor keep the floor tile.
    pub fn rasterize(result: &GenerationResult) -> Self {
        let mut map = Self::new(result.grid);

        for room in &result.rooms {
            for y in room.y..room.bottom() {
                for x in room.x..room.right() {
                    map.set(Point::new(x, y), Tile::Floor);
                }
            }
        }

        for corridor in &result.corridors {
            for &cell in &corridor.cells {
                if map.get(cell) == Some(Tile::Stone) {
                    map.set(cell, Tile::Corridor);
                }
            }
        }

        for door in &result.doors {
            map.set(door.wall_point.cell, Tile::Door);
        }

        map
    }

    pub fn grid(&self) -> GridContext {
        self.grid
    }

    fn index(&self, point: Point) -> Option<usize> {
        self.grid
            .in_bounds(point)
            .then(|| point.y as usize * self.grid.columns as usize + point.x as usize)
    }

    /// Tile at a cell, or `None` off the grid
    pub fn get(&self, point: Point) -> Option<Tile> {
        self.index(point).map(|i| self.tiles[i])
    }

    /// Set a tile; cells off the grid are ignored
    pub fn set(&mut self, point: Point, tile: Tile) {
        if let Some(i) = self.index(point) {
            self.tiles[i] = tile;
        }
    }

    /// Count tiles of one kind
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// Count walkable cells reachable from `start` through edge-adjacent steps
    pub fn reachable_from(&self, start: Point) -> usize {
        let mut visited = vec![false; self.tiles.len()];
        let mut stack = vec![start];
        let mut count = 0;

        while let Some(point) = stack.pop() {
            let Some(i) = self.index(point) else {
                continue;
            };
            if visited[i] || !self.tiles[i].is_walkable() {
                continue;
            }
            visited[i] = true;
            count += 1;

            stack.push(Point::new(point.x - 1, point.y));
            stack.push(Point::new(point.x + 1, point.y));
            stack.push(Point::new(point.x, point.y - 1));
            stack.push(Point::new(point.x, point.y + 1));
        }

        count
    }
}

impl fmt::Display for TileMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.tiles.chunks(self.grid.columns as usize).enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for tile in line {
                write!(f, "{}", tile.symbol())?;
            }
        }
        Ok(())
    }
}
