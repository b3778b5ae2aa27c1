//! The winning draw: the official combination every game is scored against.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::config::{DRAW_SIZE, POOL_MAX};

/// The official winning combination - always exactly six numbers.
///
/// Produced by the same draw primitive as the games, so it carries the same
/// invariants: unique pool numbers in ascending order, immutable once
/// created.
///
/// ## Example
///
/// ```
/// use rust_lotto::tickets::Draw;
///
/// let draw = Draw::new(&[44, 2, 19, 8, 56, 31]);
/// assert_eq!(draw.numbers(), &[2, 8, 19, 31, 44, 56]);
/// assert!(draw.contains(19));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Draw {
    numbers: SmallVec<[u8; DRAW_SIZE]>,
}

impl Draw {
    /// Create a draw from the given numbers, sorting them ascending.
    ///
    /// Panics unless given exactly six unique numbers within `1..=60`.
    #[must_use]
    pub fn new(numbers: &[u8]) -> Self {
        assert_eq!(
            numbers.len(),
            DRAW_SIZE,
            "A draw holds exactly {} numbers",
            DRAW_SIZE
        );

        let mut numbers: SmallVec<[u8; DRAW_SIZE]> = SmallVec::from_slice(numbers);
        numbers.sort_unstable();

        assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "Draw numbers must be unique"
        );
        assert!(
            numbers.iter().all(|&n| (1..=POOL_MAX).contains(&n)),
            "Draw numbers must be within 1..={}",
            POOL_MAX
        );

        Self { numbers }
    }

    /// Wrap numbers coming out of the draw primitive.
    pub(crate) fn from_drawn(numbers: &[u8]) -> Self {
        debug_assert_eq!(numbers.len(), DRAW_SIZE);
        debug_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        Self {
            numbers: SmallVec::from_slice(numbers),
        }
    }

    /// The winning numbers, ascending.
    #[must_use]
    pub fn numbers(&self) -> &[u8] {
        &self.numbers
    }

    /// Check whether a number was drawn.
    #[must_use]
    pub fn contains(&self, number: u8) -> bool {
        self.numbers.binary_search(&number).is_ok()
    }
}

impl std::fmt::Display for Draw {
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
        let draw = Draw::new(&[60, 1, 30, 15, 45, 7]);
        assert_eq!(draw.numbers(), &[1, 7, 15, 30, 45, 60]);
    }

    #[test]
    fn test_contains() {
        let draw = Draw::new(&[1, 2, 3, 4, 5, 6]);
        assert!(draw.contains(1));
        assert!(draw.contains(6));
        assert!(!draw.contains(7));
    }

    #[test]
    fn test_display() {
        let draw = Draw::new(&[10, 20, 30, 40, 50, 60]);
        assert_eq!(draw.to_string(), "10,20,30,40,50,60");
    }

    #[test]
    #[should_panic(expected = "exactly 6 numbers")]
    fn test_wrong_size_rejected() {
        let _ = Draw::new(&[1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "unique")]
    fn test_duplicate_numbers_rejected() {
        let _ = Draw::new(&[1, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_serde_round_trip() {
        let draw = Draw::new(&[5, 10, 15, 20, 25, 30]);
        let json = serde_json::to_string(&draw).unwrap();
        let deserialized: Draw = serde_json::from_str(&json).unwrap();
        assert_eq!(draw, deserialized);
    }
}
