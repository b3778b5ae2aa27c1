//! The lottery engine.

use tracing::debug;

use crate::core::config::{LotteryConfig, DRAW_SIZE};
use crate::core::error::LotteryError;
use crate::core::rng::LotteryRng;
use crate::pool::NumberPool;
use crate::results::{GameResult, LotterySummary};
use crate::tickets::{Draw, Game};

/// Simulates one lottery run: candidate games, a winning draw, and scoring.
///
/// The engine is single-flow: one instance per run, driven synchronously.
/// Construction requires an already-validated [`LotteryConfig`], so an
/// engine in hand always has a legal pick size.
///
/// ## Usage
///
/// ```
/// use rust_lotto::core::LotteryConfig;
/// use rust_lotto::engine::LotteryEngine;
///
/// let config = LotteryConfig::new(10, 3).unwrap();
/// let mut engine = LotteryEngine::new(config, 42);
///
/// let summary = engine.play().unwrap();
/// assert_eq!(summary.game_count(), 3);
/// ```
pub struct LotteryEngine {
    config: LotteryConfig,
    pool: NumberPool,
    rng: LotteryRng,
    games: Vec<Game>,
    winning_draw: Option<Draw>,
    games_generated: bool,
}

impl LotteryEngine {
    /// Create an engine seeded for a deterministic run.
    ///
    /// The pool is built once here; games and the draw come later via
    /// explicit calls.
    #[must_use]
    pub fn new(config: LotteryConfig, seed: u64) -> Self {
        Self::with_rng(config, LotteryRng::new(seed))
    }

    /// Create an engine with an explicit generator.
    ///
    /// Useful when the caller manages RNG state itself, e.g. resuming from
    /// a captured [`crate::core::LotteryRngState`].
    #[must_use]
    pub fn with_rng(config: LotteryConfig, rng: LotteryRng) -> Self {
        Self {
            config,
            pool: NumberPool::new(),
            rng,
            games: Vec::with_capacity(config.game_count() as usize),
            winning_draw: None,
            games_generated: false,
        }
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &LotteryConfig {
        &self.config
    }

    /// The games generated so far, in generation order.
    #[must_use]
    pub fn games(&self) -> &[Game] {
        &self.games
    }

    /// The current winning draw, if one has been made.
    #[must_use]
    pub fn winning_draw(&self) -> Option<&Draw> {
        self.winning_draw.as_ref()
    }

    /// Generate the configured number of games.
    ///
    /// Each game comes from the shared draw primitive with the configured
    /// pick size and is appended in generation order. There is no
    /// uniqueness guarantee across games - two games may be identical by
    /// chance, as in a real betting slip stack. Calling this again appends
    /// another batch; the games list only ever grows.
    pub fn generate_games(&mut self) {
        let pick_size = self.config.numbers_per_game() as usize;

        for _ in 0..self.config.game_count() {
            let numbers = self.pool.draw_unique(pick_size, &mut self.rng);
            self.games.push(Game::from_drawn(numbers));
        }

        self.games_generated = true;
        debug!(games = self.games.len(), pick_size, "generated games");
    }

    /// Draw the winning combination.
    ///
    /// Always six numbers, from the same pool and primitive as the games.
    /// Overwrites any previous draw; results computed afterwards reflect
    /// the new one.
    pub fn draw_winning_numbers(&mut self) {
        let numbers = self.pool.draw_unique(DRAW_SIZE, &mut self.rng);
        let draw = Draw::from_drawn(&numbers);
        debug!(%draw, "drew winning numbers");
        self.winning_draw = Some(draw);
    }

    /// Score every game against the winning draw, in generation order.
    ///
    /// Fails with [`LotteryError::NotReady`] unless [`generate_games`] and
    /// [`draw_winning_numbers`] have both run. A completed generation step
    /// with zero configured games is ready - the result is just empty.
    ///
    /// Repeated calls yield identical results while the games and draw
    /// stand.
    ///
    /// [`generate_games`]: LotteryEngine::generate_games
    /// [`draw_winning_numbers`]: LotteryEngine::draw_winning_numbers
    pub fn compute_results(&self) -> Result<Vec<GameResult>, LotteryError> {
        if !self.games_generated {
            return Err(LotteryError::NotReady);
        }
        let draw = self.winning_draw.as_ref().ok_or(LotteryError::NotReady)?;

        Ok(self
            .games
            .iter()
            .map(|game| GameResult::score(game, draw))
            .collect())
    }

    /// Build the renderer-facing summary of a completed run.
    ///
    /// Same readiness rules as [`LotteryEngine::compute_results`].
    pub fn summary(&self) -> Result<LotterySummary, LotteryError> {
        let results = self.compute_results()?;
        let winning_numbers = self.winning_draw.clone().ok_or(LotteryError::NotReady)?;

        Ok(LotterySummary {
            results,
            winning_numbers,
        })
    }

    /// Run the whole flow: generate, draw, score.
    pub fn play(&mut self) -> Result<LotterySummary, LotteryError> {
        self.generate_games();
        self.draw_winning_numbers();
        self.summary()
    }
}
