//! Random source for the selection fallback. Owned by the game session, never global.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform integer draws. `uniform(n)` returns a value in `0..n`; callers never pass `n == 0`.
pub trait RandomSource {
    fn uniform(&mut self, n: usize) -> usize;
}

impl<F> RandomSource for F
where
    F: FnMut(usize) -> usize,
{
    fn uniform(&mut self, n: usize) -> usize {
        self(n)
    }
}

/// Reproducible source: the same seed yields the same sequence of draws.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }
}
