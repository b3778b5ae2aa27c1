//! # rust-lotto
//!
//! A seedable lottery simulation engine: generate candidate games, draw a
//! winning combination, score every game against it.
//!
//! ## Design Principles
//!
//! 1. **One draw primitive**: Games and the winning draw come from the same
//!    without-replacement sampler over the same `1..=60` pool.
//!
//! 2. **Deterministic by seed**: The RNG is explicit and seedable. The same
//!    seed reproduces the same games, draw, and results - tests pin seeds
//!    instead of mocking randomness.
//!
//! 3. **Valid by construction**: Configuration is validated once, up front.
//!    An engine never exists with an illegal pick size.
//!
//! ## Flow
//!
//! Configure, generate games, draw the winning numbers, compute results.
//! [`LotteryEngine::play`] runs the whole sequence:
//!
//! ```
//! use rust_lotto::{LotteryConfig, LotteryEngine};
//!
//! let config = LotteryConfig::new(10, 3)?;
//! let mut engine = LotteryEngine::new(config, 42);
//!
//! let summary = engine.play()?;
//! for result in &summary.results {
//!     println!("{} matched ({})", result.match_count,
//!              if result.is_winner { "winner!" } else { "no win" });
//! }
//! # Ok::<(), rust_lotto::LotteryError>(())
//! ```
//!
//! Rendering is out of scope: the engine hands a serializable
//! [`LotterySummary`] to whatever presents it.
//!
//! ## Modules
//!
//! - `core`: configuration, error type, deterministic RNG
//! - `pool`: the number pool and the without-replacement draw primitive
//! - `tickets`: `Game` and `Draw` value types
//! - `engine`: the `LotteryEngine` flow
//! - `results`: scoring and the renderer-facing summary

pub mod core;
pub mod engine;
pub mod pool;
pub mod results;
pub mod tickets;

// Re-export commonly used types
pub use crate::core::{
    LotteryConfig, LotteryError, LotteryRng, LotteryRngState,
    ALLOWED_PICK_SIZES, DRAW_SIZE, POOL_MAX,
};

pub use crate::engine::LotteryEngine;

pub use crate::pool::NumberPool;

pub use crate::results::{AnnotatedNumber, GameResult, LotterySummary};

pub use crate::tickets::{Draw, Game};
