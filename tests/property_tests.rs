//! Property tests for board invariants.

use proptest::prelude::*;

use mancala_engine::board::{is_store, TOTAL_SEEDS};
use mancala_engine::{GameResult, GameState, KalahGame, Player, TurnOutcome};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Marbles are neither created nor destroyed, whatever is picked.
    #[test]
    fn prop_marbles_conserved(seed in any::<u64>(), choices in prop::collection::vec(any::<usize>(), 0..300)) {
        let mut game = KalahGame::with_seed(seed);
        game.start();

        for choice in choices {
            let spaces = game.valid_spaces();
            if spaces.is_empty() {
                break;
            }
            game.take_turn(spaces[choice % spaces.len()]);
            prop_assert_eq!(game.board().total_marbles(), TOTAL_SEEDS);
        }
    }

    /// Arbitrary (mostly illegal) picks never change the board.
    #[test]
    fn prop_illegal_picks_are_ignored(seed in any::<u64>(), space in 0usize..32) {
        let mut game = KalahGame::with_seed(seed);
        let before = game.snapshot();

        if !game.is_valid_space(space) {
            prop_assert_eq!(game.take_turn(space), TurnOutcome::Rejected);
            prop_assert_eq!(game.snapshot(), before);
        }
    }

    /// After every applied pick the engine is either between turns, waiting
    /// on a relay pit, or sitting in the mover's own store.
    #[test]
    fn prop_last_position_shape(seed in any::<u64>(), choices in prop::collection::vec(any::<usize>(), 1..200)) {
        let mut game = KalahGame::with_seed(seed);

        for choice in choices {
            let spaces = game.valid_spaces();
            if spaces.is_empty() {
                break;
            }
            let mover = game.active_player();
            let outcome = game.take_turn(spaces[choice % spaces.len()]);

            match outcome {
                TurnOutcome::Passed { .. } | TurnOutcome::GameOver(_) => {
                    prop_assert_eq!(game.last_position(), None);
                }
                TurnOutcome::ExtraTurn => {
                    prop_assert_eq!(game.last_position(), Some(mover.store()));
                    prop_assert_eq!(game.active_player(), mover);
                }
                TurnOutcome::Relay { position } => {
                    prop_assert_eq!(game.last_position(), Some(position));
                    prop_assert!(!is_store(position));
                    prop_assert!(game.board().count(position) > 1);
                    prop_assert_eq!(game.valid_spaces(), vec![position]);
                }
                TurnOutcome::Rejected => prop_assert!(false, "legal space rejected"),
            }
        }
    }

    /// The winner always agrees with the store sizes once the game is done.
    #[test]
    fn prop_winner_matches_stores(seed in any::<u64>()) {
        let mut game = KalahGame::with_seed(seed);
        game.auto_play();

        if game.game_state() == GameState::Done {
            let p1 = game.p1_store().len();
            let p2 = game.p2_store().len();
            prop_assert_eq!(p1 + p2, TOTAL_SEEDS);

            let winner = game.winner();
            prop_assert_eq!(winner == GameResult::Winner(Player::One), p1 > p2);
            prop_assert_eq!(winner == GameResult::Winner(Player::Two), p2 > p1);
            prop_assert_eq!(winner == GameResult::Tie, p1 == p2);
        }
    }
}
