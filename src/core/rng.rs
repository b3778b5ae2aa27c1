//! Deterministic random number generation for draws.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the same games and the same
//!   winning numbers
//! - **Explicit**: The generator is threaded through the engine rather than
//!   pulled from process-wide state, so tests can pin a seed
//! - **Serializable**: O(1) state capture and restore
//!
//! ## Usage
//!
//! ```
//! use rust_lotto::core::LotteryRng;
//!
//! let mut rng = LotteryRng::new(42);
//! let mut replay = LotteryRng::new(42);
//!
//! assert_eq!(rng.pick_index(60), replay.pick_index(60));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG behind every lottery draw.
///
/// Uses ChaCha8 for speed while keeping a high-quality uniform stream.
/// Cryptographic strength is not a requirement here - reproducibility is.
#[derive(Clone, Debug)]
pub struct LotteryRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl LotteryRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// The seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Pick a uniformly random index in `0..upper`.
    ///
    /// Every index is equally likely. Panics if `upper` is zero - there is
    /// nothing to pick from.
    pub fn pick_index(&mut self, upper: usize) -> usize {
        assert!(upper > 0, "Cannot pick an index from an empty range");
        self.inner.gen_range(0..upper)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> LotteryRngState {
        LotteryRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &LotteryRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of how
/// many numbers have been drawn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotteryRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}
