//! dg-core: room-and-corridor dungeon layout generation
//!
//! Places non-overlapping rectangular rooms on a grid, links them with a
//! greedy spanning tree of L-shaped corridors and records doors where a
//! corridor actually meets a room wall. The crate does no I/O and no
//! drawing; a generation run returns one immutable [`GenerationResult`]
//! snapshot for a renderer to consume.
//!
//! Supports `no_std` environments by disabling the default `std` feature.
//! The JSON configuration loader and entropy seeding are gated behind
//! `cfg(feature = "std")`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

/// Re-exports of alloc types needed when building without std.
/// In std mode, these are provided by the std prelude.
#[cfg(not(feature = "std"))]
pub(crate) mod compat {
    pub use alloc::string::String;
    pub use alloc::vec;
    pub use alloc::vec::Vec;
}

pub mod config;
pub mod dungeon;

mod consts;
mod error;
mod rng;

pub use config::{room_count_from, GenerationConfig, MapSize};
pub use consts::*;
pub use dungeon::{generate, generate_with, GenerationResult, GenerationStats, GridContext};
pub use error::ConfigurationError;
pub use rng::{DungeonRng, RandomSource};
