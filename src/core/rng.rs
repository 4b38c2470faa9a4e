//! Seeded randomness for heuristic tie-breaks.
//!
//! A match owns one root `GameRng` built from `EngineConfig::seed` and hands
//! each player's strategy its own fork, so the two sides draw from
//! independent streams and a match replays exactly from its seed.
//!
//! ```
//! use blokus_engine::core::GameRng;
//!
//! let mut root = GameRng::new(42);
//! let mut one = root.fork();
//! let mut two = root.fork();
//!
//! assert_ne!(one.seed(), two.seed());
//! assert!((0.0..1.0).contains(&one.gen_unit()));
//! assert_eq!(two.choose(&[7]), Some(&7));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio stride between fork seeds.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream that can be split into per-player streams.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Split off an independent stream.
    ///
    /// The n-th fork of a given seed is always the same stream, and does
    /// not advance this one.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniform draw in `[0, 1)`, added to integer scores to break ties.
    pub fn gen_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Uniform pick from `items`, `None` when empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.inner)
    }
}
