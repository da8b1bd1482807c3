//! Options for drawing random orthogonal vectors.
//!
//! `OrthoOptions` fixes the range the helper vector is sampled from and, optionally, a seed
//! so that draws can be reproduced.

use num_traits::Float;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Sampling range & seed for `find_pu_vector_opts`.
#[derive(Clone, Debug)]
pub struct OrthoOptions<T> {
    /// Lower bound of each helper element (default -1)
    pub low: T,

    /// Upper bound of each helper element (default 1)
    pub high: T,

    /// Fixed seed; `None` draws a fresh nondeterministic seed per call
    pub seed: Option<u64>,
}

impl<T: Float> Default for OrthoOptions<T> {
    fn default() -> Self {
        Self { low: -T::one(), high: T::one(), seed: None }
    }
}

impl<T> OrthoOptions<T> {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// A generator owned by a single call.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random::<u64>()),
        }
    }
}
