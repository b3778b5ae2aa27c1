//! Run configuration and the fixed bounds of the lottery.
//!
//! The pool and draw sizes are fixed by the rules; only the pick size per
//! game and the number of games vary per run. Validation happens once, at
//! construction - an engine never sees an invalid config.

use super::error::LotteryError;

/// Largest number in the pool. Every draw picks from `1..=POOL_MAX`.
pub const POOL_MAX: u8 = 60;

/// Size of the winning draw, and the match count required to win.
///
/// A game wins when all six drawn numbers appear in it, regardless of how
/// many numbers the game itself has.
pub const DRAW_SIZE: usize = 6;

/// Pick sizes a game may be configured with.
pub const ALLOWED_PICK_SIZES: [u8; 5] = [6, 7, 8, 9, 10];

/// Validated lottery run configuration.
///
/// Construct with [`LotteryConfig::new`]; the fields are private so a config
/// in hand is always valid. The pick size is fixed for the lifetime of the
/// engine built from it.
///
/// ## Example
///
/// ```
/// use rust_lotto::core::LotteryConfig;
///
/// let config = LotteryConfig::new(10, 3).unwrap();
/// assert_eq!(config.numbers_per_game(), 10);
/// assert_eq!(config.game_count(), 3);
///
/// // 11 numbers per game is not a playable ticket
/// assert!(LotteryConfig::new(11, 3).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LotteryConfig {
    numbers_per_game: u8,
    game_count: u32,
}

impl LotteryConfig {
    /// Create a configuration.
    ///
    /// Fails with [`LotteryError::InvalidConfiguration`] when
    /// `numbers_per_game` is not in [`ALLOWED_PICK_SIZES`]. A `game_count`
    /// of zero is valid - the run simply produces no games.
    pub fn new(numbers_per_game: u8, game_count: u32) -> Result<Self, LotteryError> {
        if !ALLOWED_PICK_SIZES.contains(&numbers_per_game) {
            return Err(LotteryError::InvalidConfiguration { numbers_per_game });
        }

        Ok(Self {
            numbers_per_game,
            game_count,
        })
    }

    /// Numbers picked per game.
    #[must_use]
    pub const fn numbers_per_game(&self) -> u8 {
        self.numbers_per_game
    }

    /// Number of games to generate.
    #[must_use]
    pub const fn game_count(&self) -> u32 {
        self.game_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_pick_sizes() {
        for size in ALLOWED_PICK_SIZES {
            let config = LotteryConfig::new(size, 1);
            assert!(config.is_ok(), "pick size {} should be allowed", size);
            assert_eq!(config.unwrap().numbers_per_game(), size);
        }
    }

    #[test]
    fn test_rejected_pick_sizes() {
        for size in [0, 1, 5, 11, 12, 60, u8::MAX] {
            assert_eq!(
                LotteryConfig::new(size, 1),
                Err(LotteryError::InvalidConfiguration {
                    numbers_per_game: size
                })
            );
        }
    }

    #[test]
    fn test_zero_games_is_valid() {
        let config = LotteryConfig::new(6, 0).unwrap();
        assert_eq!(config.game_count(), 0);
    }

    #[test]
    fn test_draw_fits_in_pool() {
        assert!(DRAW_SIZE <= POOL_MAX as usize);
        for size in ALLOWED_PICK_SIZES {
            assert!((size as usize) <= POOL_MAX as usize);
        }
    }
}
