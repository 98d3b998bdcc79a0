//! Random number generation for dungeon layouts
//!
//! Uses a seeded ChaCha RNG so a seed fully determines a layout.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Uniform random source consumed by the generation algorithms
///
/// Implemented by [`DungeonRng`]; tests can supply scripted sources.
pub trait RandomSource {
    /// Returns a uniform value in 0..n, or 0 if n is 0.
    fn rn2(&mut self, n: u32) -> u32;

    /// Returns a uniform value in lo..=hi, or `None` if the range is empty
    /// or holds more values than `rn2` can draw from.
    fn rn_range(&mut self, lo: i32, hi: i32) -> Option<i32> {
        if hi < lo {
            return None;
        }
        let span = u32::try_from(hi as i64 - lo as i64 + 1).ok()?;
        Some((lo as i64 + self.rn2(span) as i64) as i32)
    }
}

/// Layout random number generator
///
/// Wraps ChaCha8Rng for reproducible generation.
/// Note: RNG state is not serialized - a restored generator restarts from its seed.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for DungeonRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for DungeonRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(DungeonRng::new(seed))
    }
}

impl DungeonRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    #[cfg(feature = "std")]
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for DungeonRng {
    fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

#[cfg(feature = "std")]
impl Default for DungeonRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
