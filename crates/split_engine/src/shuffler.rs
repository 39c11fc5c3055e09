//! Shuffler implementations
//!
//! Both go through `rand::seq::SliceRandom`, whose in-place shuffle is the
//! standard unbiased Fisher-Yates. The seeded variant exists so tests and
//! reproducible runs can pin the exact permutation.

use contracts::{Entry, EntryShuffler};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Production shuffler: fresh thread-local RNG, non-reproducible across runs.
#[derive(Debug, Default)]
pub struct ThreadRngShuffler;

impl ThreadRngShuffler {
    /// Create a thread-RNG shuffler
    pub fn new() -> Self {
        Self
    }
}

impl EntryShuffler for ThreadRngShuffler {
    fn name(&self) -> &str {
        "thread_rng"
    }

    fn shuffle(&mut self, entries: &mut [Entry]) {
        entries.shuffle(&mut rand::rng());
    }
}

/// Deterministic shuffler seeded from a fixed `u64`.
///
/// Same seed, same input, same permutation — across runs and platforms
/// (StdRng's seeding is stable for a given rand major version).
#[derive(Debug)]
pub struct SeededShuffler {
    seed: u64,
    rng: StdRng,
}

impl SeededShuffler {
    /// Create a shuffler with a fixed seed
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The seed this shuffler was built with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl EntryShuffler for SeededShuffler {
    fn name(&self) -> &str {
        "seeded"
    }

    fn shuffle(&mut self, entries: &mut [Entry]) {
        entries.shuffle(&mut self.rng);
    }
}
