//! Per-game scoring against the winning draw.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::config::DRAW_SIZE;
use crate::tickets::{Draw, Game};

/// One of a game's numbers, flagged with whether it was drawn.
///
/// The flag is data, not markup - how a matched number is styled (bold,
/// highlighted, whatever) is the renderer's call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedNumber {
    /// The number the game picked.
    pub value: u8,
    /// Whether the number appears in the winning draw.
    pub matched: bool,
}

/// Read-only scoring of one game against the draw.
///
/// ## Example
///
/// ```
/// use rust_lotto::results::GameResult;
/// use rust_lotto::tickets::{Draw, Game};
///
/// let draw = Draw::new(&[1, 2, 3, 4, 5, 6]);
/// let game = Game::new(&[1, 2, 3, 40, 50, 60]);
///
/// let result = GameResult::score(&game, &draw);
/// assert_eq!(result.match_count, 3);
/// assert!(!result.is_winner);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    /// How many of the game's numbers appear in the draw.
    pub match_count: usize,

    /// True iff all six drawn numbers were matched. The threshold is the
    /// draw size, not the game's pick size - a 10-number game still needs
    /// exactly the six winning numbers among its picks.
    pub is_winner: bool,

    /// The game's numbers in ascending order, each flagged matched or not.
    pub annotated: Vec<AnnotatedNumber>,
}

impl GameResult {
    /// Score a game against the winning draw.
    ///
    /// The match count is the size of the set intersection between the
    /// game's numbers and the draw's.
    #[must_use]
    pub fn score(game: &Game, draw: &Draw) -> Self {
        let drawn: FxHashSet<u8> = draw.numbers().iter().copied().collect();

        let annotated: Vec<AnnotatedNumber> = game
            .numbers()
            .iter()
            .map(|&value| AnnotatedNumber {
                value,
                matched: drawn.contains(&value),
            })
            .collect();

        let match_count = annotated.iter().filter(|n| n.matched).count();

        Self {
            match_count,
            is_winner: match_count == DRAW_SIZE,
            annotated,
        }
    }

    /// The matched numbers only, ascending.
    #[must_use]
    pub fn matched_numbers(&self) -> Vec<u8> {
        self.annotated
            .iter()
            .filter(|n| n.matched)
            .map(|n| n.value)
            .collect()
    }
}
