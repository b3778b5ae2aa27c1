//! The lottery engine: generation, draw, scoring.
//!
//! [`LotteryEngine`] owns the validated config, the number pool, the RNG,
//! and everything drawn so far. Callers drive it through the fixed flow:
//! generate games, draw the winning numbers, compute results - or let
//! [`LotteryEngine::play`] run the whole sequence.

pub mod lottery;

pub use lottery::LotteryEngine;
