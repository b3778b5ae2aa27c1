//! Core engine types: configuration, errors, RNG.
//!
//! These are the building blocks the rest of the crate leans on: the
//! validated run configuration with the lottery's fixed bounds, the error
//! type surfaced to callers, and the deterministic RNG every draw goes
//! through.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{LotteryConfig, ALLOWED_PICK_SIZES, DRAW_SIZE, POOL_MAX};
pub use error::LotteryError;
pub use rng::{LotteryRng, LotteryRngState};
