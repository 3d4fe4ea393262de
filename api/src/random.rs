//! Per-call randomness.
//!
//! Resolvers never share an RNG. Each call asks [`Entropy`] for a fresh
//! [`StdRng`] and owns it for the duration of that call.

use std::{
    fmt,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc,
    },
};

use rand::{rngs::StdRng, SeedableRng};

#[derive(Clone)]
pub struct Entropy(Arc<dyn Fn() -> StdRng + Send + Sync>);

impl Entropy {
    /// RNGs seeded from the operating system.
    #[must_use]
    pub fn os() -> Self {
        Self(Arc::new(StdRng::from_entropy))
    }

    /// Deterministic RNGs: the n-th call is seeded with `seed + n`.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        let next = AtomicU64::new(seed);

        Self(Arc::new(move || {
            StdRng::seed_from_u64(next.fetch_add(1, Ordering::Relaxed))
        }))
    }

    #[must_use]
    pub fn rng(&self) -> StdRng {
        (self.0)()
    }
}

impl Default for Entropy {
    fn default() -> Self {
        Self::os()
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entropy").finish_non_exhaustive()
    }
}
