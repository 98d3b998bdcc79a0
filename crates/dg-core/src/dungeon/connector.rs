//! Room connection order
//!
//! Grows a spanning tree from the first room: each step links the closest
//! unconnected room to any connected one. Every pair is rescanned per step,
//! which is cubic in the room count; fine for tens of rooms, not thousands.

#[cfg(not(feature = "std"))]
use crate::compat::*;

use log::trace;
use serde::{Deserialize, Serialize};

use super::room::Room;

/// One spanning-tree edge, as indices into the room list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    /// Room already in the tree
    pub from: usize,
    /// Room joining the tree
    pub to: usize,
}

impl Connection {
    /// Resolve both ends against the room list
    pub fn rooms<'a>(&self, rooms: &'a [Room]) -> Option<(&'a Room, &'a Room)> {
        Some((rooms.get(self.from)?, rooms.get(self.to)?))
    }
}

/// Order the room pairs to connect
///
/// Returns `rooms.len() - 1` edges, or none for fewer than two rooms. Ties
/// go to the first pair scanned: connected rooms in the order they joined,
/// then unconnected rooms in list order.
pub fn connect(rooms: &[Room]) -> Vec<Connection> {
    if rooms.len() < 2 {
        return Vec::new();
    }

    let mut connected = vec![0usize];
    let mut unconnected: Vec<usize> = (1..rooms.len()).collect();
    let mut edges = Vec::with_capacity(rooms.len() - 1);

    while !unconnected.is_empty() {
        // (distance, from, position in `unconnected`)
        let mut best: Option<(i32, usize, usize)> = None;

        for &c in &connected {
            for (pos, &u) in unconnected.iter().enumerate() {
                let d = rooms[c].distance_doubled(&rooms[u]);
                if best.is_none_or(|(min, _, _)| d < min) {
                    best = Some((d, c, pos));
                }
            }
        }

        let Some((_, from, pos)) = best else {
            break;
        };
        let to = unconnected.remove(pos);
        trace!("connect room {} -> room {}", from, to);
        connected.push(to);
        edges.push(Connection { from, to });
    }

    edges
}

/// Tracks room connectivity using equivalence classes
#[derive(Debug, Clone)]
pub struct ConnectivityTracker {
    /// Each room's equivalence class (rooms in same class are connected)
    classes: Vec<usize>,
}

impl ConnectivityTracker {
    /// Create a new tracker for the given number of rooms
    pub fn new(num_rooms: usize) -> Self {
        // Initially, each room is its own equivalence class
        Self {
            classes: (0..num_rooms).collect(),
        }
    }

    /// Check if two rooms are connected (in same equivalence class)
    pub fn are_connected(&self, a: usize, b: usize) -> bool {
        if a >= self.classes.len() || b >= self.classes.len() {
            return false;
        }
        self.classes[a] == self.classes[b]
    }

    /// Merge equivalence classes when rooms are connected
    ///
    /// Returns false if the rooms were already connected.
    pub fn merge(&mut self, a: usize, b: usize) -> bool {
        if a >= self.classes.len() || b >= self.classes.len() || self.are_connected(a, b) {
            return false;
        }

        let old_class = self.classes[b];
        let new_class = self.classes[a];

        for eq in &mut self.classes {
            if *eq == old_class {
                *eq = new_class;
            }
        }
        true
    }

    /// Check if all rooms are connected
    pub fn all_connected(&self) -> bool {
        match self.classes.first() {
            Some(&first) => self.classes.iter().all(|&c| c == first),
            None => true,
        }
    }
}
