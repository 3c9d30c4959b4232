//! Random number generation for layout builds
//!
//! Uses a seeded ChaCha RNG so a layout can be rebuilt bit-for-bit from its
//! seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Layout random number generator
///
/// Wraps ChaCha8Rng for reproducible generation.
/// Note: RNG state is not serialized - only the seed is kept, and
/// deserializing restores a fresh stream for that seed.
#[derive(Debug, Clone)]
pub struct LayoutRng {
    rng: ChaCha8Rng,
    seed: u64,
}

// Custom serialization - only serialize seed, recreate RNG on deserialize
impl Serialize for LayoutRng {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.seed.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LayoutRng {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let seed = u64::deserialize(deserializer)?;
        Ok(LayoutRng::new(seed))
    }
}

impl LayoutRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[lo, hi)`
    ///
    /// Returns `lo` when the range is empty (`hi <= lo`).
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// Uniform index in `0..n`
    ///
    /// Returns 0 if n is 0.
    pub fn index(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }
}

impl Default for LayoutRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
