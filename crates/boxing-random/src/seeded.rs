//! Local pseudo-random source

use crate::RandomError;
use boxing_domain::traits::RandomSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random source backed by a local generator
///
/// The same seed always yields the same sequence of draws.
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Create a reproducible source from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededSource {
    type Error = RandomError;

    fn next(&mut self) -> Result<f64, Self::Error> {
        // Standard distribution for f64 is uniform over [0, 1)
        Ok(self.rng.gen::<f64>())
    }
}
