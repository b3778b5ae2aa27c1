//! A candidate game: one simulated player ticket.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::POOL_MAX;

/// One candidate combination of numbers, immutable once created.
///
/// Numbers are unique, within `1..=60`, and kept in ascending order. The
/// inline capacity matches the maximum pick size, so games never
/// heap-allocate.
///
/// ## Example
///
/// ```
/// use rust_lotto::tickets::Game;
///
/// let game = Game::new(&[12, 4, 33, 60, 1, 27]);
/// assert_eq!(game.numbers(), &[1, 4, 12, 27, 33, 60]);
/// assert!(game.contains(33));
/// assert_eq!(game.to_string(), "1,4,12,27,33,60");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Game {
    numbers: SmallVec<[u8; 10]>,
}

impl Game {
    /// Create a game from the given numbers, sorting them ascending.
    ///
    /// Panics if the numbers are not unique or fall outside `1..=60`.
    #[must_use]
    pub fn new(numbers: &[u8]) -> Self {
        let mut numbers: SmallVec<[u8; 10]> = SmallVec::from_slice(numbers);
        numbers.sort_unstable();

        assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "Game numbers must be unique"
        );
        assert!(
            numbers.iter().all(|&n| (1..=POOL_MAX).contains(&n)),
            "Game numbers must be within 1..={}",
            POOL_MAX
        );

        Self { numbers }
    }

    /// Wrap numbers coming out of the draw primitive.
    ///
    /// The sampler already guarantees sorted unique pool numbers.
    pub(crate) fn from_drawn(numbers: SmallVec<[u8; 10]>) -> Self {
        debug_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        Self { numbers }
    }

    /// The game's numbers, ascending.
    #[must_use]
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// How many numbers this game picked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// True for a game with no numbers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Check whether the game picked a number.
    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        // Numbers are sorted
        self.numbers.binary_search(&number).is_ok()
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, number) in self.numbers.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", number)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sorts_ascending() {
        let game = Game::new(&[50, 3, 17, 42, 9, 28]);
        assert_eq!(game.numbers(), &[3, 9, 17, 28, 42, 50]);
    }

    #[test]
    fn test_contains() {
        let game = Game::new(&[1, 2, 3, 4, 5, 6]);

        for n in 1..=6 {
            assert!(game.contains(n));
        }
        assert!(!game.contains(7));
        assert!(!game.contains(60));
    }

    #[test]
    fn test_display() {
        let game = Game::new(&[6, 5, 4, 3, 2, 1]);
        assert_eq!(game.to_string(), "1,2,3,4,5,6");
    }

    #[test]
    #[should_panic(expected = "unique")]
    fn test_duplicate_numbers_rejected() {
        let _ = Game::new(&[1, 2, 3, 3, 5, 6]);
    }

    #[test]
    #[should_panic(expected = "within 1..=60")]
    fn test_out_of_range_rejected() {
        let _ = Game::new(&[1, 2, 3, 4, 5, 61]);
    }

    #[test]
    fn test_serde_round_trip() {
        let game = Game::new(&[7, 14, 21, 28, 35, 42, 49]);
        let json = serde_json::to_string(&game).unwrap();
        let deserialized: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(game, deserialized);
    }
}
