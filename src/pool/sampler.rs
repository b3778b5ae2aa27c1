//! The number pool and uniform sampling without replacement.

use smallvec::SmallVec;

use crate::core::config::POOL_MAX;
use crate::core::rng::LotteryRng;

/// The full set of numbers eligible for any draw.
///
/// Built once per engine as the ordered sequence `1..=60`. Draws never
/// mutate the pool itself - each draw works on its own copy, so every draw
/// starts from the complete pool.
///
/// ## Usage
///
/// ```
/// use rust_lotto::core::LotteryRng;
/// use rust_lotto::pool::NumberPool;
///
/// let pool = NumberPool::new();
/// let mut rng = LotteryRng::new(42);
///
/// let drawn = pool.draw_unique(6, &mut rng);
/// assert_eq!(drawn.len(), 6);
/// assert!(drawn.windows(2).all(|w| w[0] < w[1]));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberPool {
    numbers: Vec<u8>,
}

impl NumberPool {
    /// Create the standard `1..=60` pool.
    #[must_use]
    pub fn new() -> Self {
        Self {
            numbers: (1..=POOL_MAX).collect(),
        }
    }

    /// How many numbers are eligible.
    #[must_use]
    pub fn size(&self) -> usize {
        self.numbers.len()
    }

    /// All eligible numbers, in ascending order.
    #[must_use]
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// Check whether a number is eligible for drawing.
    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        // The pool is sorted by construction
        self.numbers.binary_search(&number).is_ok()
    }

    /// Draw `count` unique numbers, returned in ascending order.
    ///
    /// Each iteration picks a uniformly random element among those still
    /// remaining in a working copy of the pool and removes it, so a number
    /// can appear at most once per draw. The removal is a `swap_remove`;
    /// the working copy's order does not matter because the result is
    /// sorted before it is returned.
    ///
    /// Panics if `count` exceeds the pool size.
    #[must_use]
    pub fn draw_unique(&self, count: usize, rng: &mut LotteryRng) -> SmallVec<[u8; 10]> {
        assert!(
            count <= self.numbers.len(),
            "Cannot draw {} unique numbers from a pool of {}",
            count,
            self.numbers.len()
        );

        let mut remaining = self.numbers.clone();
        let mut drawn: SmallVec<[u8; 10]> = SmallVec::with_capacity(count);

        for _ in 0..count {
            let index = rng.pick_index(remaining.len());
            drawn.push(remaining.swap_remove(index));
        }

        drawn.sort_unstable();
        drawn
    }
}

impl Default for NumberPool {
    fn default() -> Self {
        Self::new()
    }
}
