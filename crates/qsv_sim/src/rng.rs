//! The seeded uniform-`[0,1)` random source shared by every measurement
//! and reset call within a single simulator instance.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A seedable source of uniform `[0,1)` reals.
///
/// Owned exclusively by a [`crate::Simulator`], never shared process-wide:
/// sharing a module-level generator (as the source this crate generalizes
/// does) would make shot-to-shot reproducibility depend on call order
/// across unrelated simulator instances.
pub struct RandomSource {
    seed: u64,
    rng: StdRng,
}

impl RandomSource {
    /// Seeds the source from an explicit seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draws a fresh seed from the OS entropy source and seeds from it.
    /// The drawn seed is retained (see [`RandomSource::seed`]) so a caller
    /// who wants reproducibility can recover and reuse it.
    pub fn from_entropy() -> Self {
        let seed = rand::rngs::OsRng.gen();
        Self::from_seed(seed)
    }

    /// The seed in use. If this source was constructed via
    /// [`RandomSource::from_entropy`], this is the seed that was drawn.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws one uniform real in `[0,1)`. Exactly one draw per call, per
    /// spec: the measurement-decision primitive depends on this.
    pub fn next_uniform(&mut self) -> f64 {
        self.rng.gen()
    }
}
