//! Engine error type.
//!
//! Both variants are user-facing: the `Display` message is what an external
//! renderer shows when a run fails.

use thiserror::Error;

/// Errors produced by the lottery engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LotteryError {
    /// The requested pick size is outside the allowed set.
    ///
    /// Raised at configuration time; no engine is constructed.
    #[error("invalid configuration: {numbers_per_game} numbers per game is not allowed (choose 6 to 10)")]
    InvalidConfiguration {
        /// The rejected pick size.
        numbers_per_game: u8,
    },

    /// Results were requested before games were generated and the winning
    /// numbers drawn.
    #[error("results are not ready: generate games and draw the winning numbers first")]
    NotReady,
}
