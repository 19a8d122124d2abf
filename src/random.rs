// src/random.rs
//! Injectable randomness. Components draw `[0,1)` floats lazily, so a
//! deterministic source can be swapped in for tests and replays.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn draw(&mut self) -> f64;
}

/// Thread-local system RNG; the default source.
pub struct SystemRandom(ThreadRng);

impl SystemRandom {
    pub fn new() -> Self {
        Self(rand::rng())
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn draw(&mut self) -> f64 {
        self.0.random()
    }
}

/// Seeded ChaCha8-backed source; same seed, same sequence.
pub struct SeededRandom(ChaCha8Rng);

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl RandomSource for SeededRandom {
    fn draw(&mut self) -> f64 {
        self.0.random()
    }
}

/// Replays a fixed list of draws, cycling once exhausted.
pub struct SequenceRandom {
    draws: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// Panics when `draws` is empty.
    pub fn new(draws: Vec<f64>) -> Self {
        assert!(!draws.is_empty(), "SequenceRandom needs at least one draw");
        Self { draws, cursor: 0 }
    }
}

impl RandomSource for SequenceRandom {
    fn draw(&mut self) -> f64 {
        let value = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        value
    }
}
