//! Injectable randomness for agent sizing and satisfaction checks.
//!
//! Every random draw the organizer makes goes through [`RandomSource`], so
//! tests can script outcomes and the CLI can replay a run with `--seed`.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the organizer's random decisions.
pub trait RandomSource: Send {
    /// Draws uniformly from the closed interval `[low, high]`.
    ///
    /// Implementations must return `low` when `low >= high`.
    fn pick_inclusive(&mut self, low: usize, high: usize) -> usize;

    /// Draws a fair coin.
    fn coin_flip(&mut self) -> bool;
}

/// [`RandomSource`] backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    /// Seeds from operating system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeds deterministically.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for StdRandom {
    fn pick_inclusive(&mut self, low: usize, high: usize) -> usize {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }
}

/// Creates a boxed source, seeded when `seed` is given.
#[must_use]
pub fn random_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(StdRandom::seeded(seed)),
        None => Box::new(StdRandom::from_entropy()),
    }
}
