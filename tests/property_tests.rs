//! Property-based checks over arbitrary seeds and configurations.
//!
//! The engine's universal invariants (uniqueness, range, ordering, match
//! counts) hold for every seed, not just the ones the example tests pin.

use proptest::prelude::*;

use rust_lotto::{LotteryConfig, LotteryEngine, ALLOWED_PICK_SIZES};

fn arb_pick_size() -> impl Strategy<Value = u8> {
    prop::sample::select(ALLOWED_PICK_SIZES.to_vec())
}

proptest! {
    /// Every generated game and the draw are unique, in range, ascending.
    #[test]
    fn run_satisfies_draw_invariants(
        seed in any::<u64>(),
        pick_size in arb_pick_size(),
        game_count in 0u32..16,
    ) {
        let config = LotteryConfig::new(pick_size, game_count).unwrap();
        let mut engine = LotteryEngine::new(config, seed);
        let summary = engine.play().unwrap();

        prop_assert_eq!(summary.game_count(), game_count as usize);

        let draw = summary.winning_numbers.numbers();
        prop_assert_eq!(draw.len(), 6);
        prop_assert!(draw.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(draw.iter().all(|&n| (1..=60).contains(&n)));

        for game in engine.games() {
            prop_assert_eq!(game.len(), pick_size as usize);
            prop_assert!(game.numbers().windows(2).all(|w| w[0] < w[1]));
            prop_assert!(game.numbers().iter().all(|&n| (1..=60).contains(&n)));
        }
    }

    /// The reported match count is the actual intersection size, and the
    /// winner flag fires exactly at six matches.
    #[test]
    fn match_count_is_intersection_size(
        seed in any::<u64>(),
        pick_size in arb_pick_size(),
        game_count in 1u32..16,
    ) {
        let config = LotteryConfig::new(pick_size, game_count).unwrap();
        let mut engine = LotteryEngine::new(config, seed);
        let summary = engine.play().unwrap();

        for (game, result) in engine.games().iter().zip(&summary.results) {
            let expected = game
                .numbers()
                .iter()
                .filter(|&&n| summary.winning_numbers.contains(n))
                .count();

            prop_assert_eq!(result.match_count, expected);
            prop_assert!(result.match_count <= 6);
            prop_assert_eq!(result.is_winner, result.match_count == 6);

            // Flags agree with the draw, number by number
            for annotated in &result.annotated {
                prop_assert_eq!(
                    annotated.matched,
                    summary.winning_numbers.contains(annotated.value)
                );
            }
        }
    }

    /// The same seed replays the same run.
    #[test]
    fn runs_are_deterministic(
        seed in any::<u64>(),
        pick_size in arb_pick_size(),
        game_count in 0u32..8,
    ) {
        let config = LotteryConfig::new(pick_size, game_count).unwrap();

        let first = LotteryEngine::new(config, seed).play().unwrap();
        let second = LotteryEngine::new(config, seed).play().unwrap();

        prop_assert_eq!(first, second);
    }
}
