//! The complete run summary handed to an external renderer.

use serde::{Deserialize, Serialize};

use super::score::GameResult;
use crate::tickets::Draw;

/// Everything a renderer needs to show a finished run.
///
/// Results are in generation order, one per game. The winning draw rides
/// along so the page can show the official combination next to the games.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LotterySummary {
    /// Per-game results, in generation order.
    pub results: Vec<GameResult>,

    /// The winning combination the games were scored against.
    pub winning_numbers: Draw,
}

impl LotterySummary {
    /// How many games were scored.
    #[must_use]
    pub fn game_count(&self) -> usize {
        self.results.len()
    }

    /// How many games matched all six drawn numbers.
    #[must_use]
    pub fn winner_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_winner).count()
    }

    /// Whether any game won.
    #[must_use]
    pub fn has_winner(&self) -> bool {
        self.results.iter().any(|r| r.is_winner)
    }
}
