//! Injectable randomness.
//!
//! The model draws random numbers in exactly two places: the initial
//! placement shuffle and the per-step relocation permutation.  Both go
//! through the [`Permuter`] trait so tests can substitute a deterministic
//! source and runs can be replayed from a seed.
//!
//! [`SimRng`] is the production implementation: a `SmallRng` seeded from a
//! single `u64`.  Same seed, same call sequence ⇒ identical boards.

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

// ── Permuter ──────────────────────────────────────────────────────────────────

/// A source of uniformly random permutations.
///
/// Implementations must make every permutation of `items` reachable; the
/// production impl is Fisher-Yates, which makes them all equally likely.
pub trait Permuter {
    /// Permute `items` in place.
    fn shuffle<T>(&mut self, items: &mut [T]);

    /// Return a permuted copy of `items` (a bijection of the set onto
    /// itself, sampled without replacement).
    fn uniform_permutation<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        self.shuffle(&mut out);
        out
    }
}

impl<P: Permuter> Permuter for &mut P {
    #[inline]
    fn shuffle<T>(&mut self, items: &mut [T]) {
        (**self).shuffle(items);
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts; one instance per run.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl Permuter for SimRng {
    #[inline]
    fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.0);
    }
}
