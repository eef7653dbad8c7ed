//! Property tests: pruning never changes the decision.

use proptest::prelude::*;

use isolation_agent::core::{GameRng, PlayerId};
use isolation_agent::eval::{Evaluator, EvaluatorKind};
use isolation_agent::games::isolation::Board;
use isolation_agent::rules::GameState;
use isolation_agent::search::{Search, SearchMethod, SimulatedClock};

fn playout(size: i32, plies: usize, seed: u64) -> Board {
    let mut rng = GameRng::new(seed);
    let mut board = Board::new(size, size);
    for _ in 0..plies {
        match rng.choose(&board.legal_moves()) {
            Some(&mv) => board = board.forecast_move(mv),
            None => break,
        }
    }
    board
}

fn kind_strategy() -> impl Strategy<Value = EvaluatorKind> {
    prop::sample::select(EvaluatorKind::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn alphabeta_agrees_with_minimax(
        size in 4i32..=5,
        plies in 0usize..10,
        seed in any::<u64>(),
        depth in 1u32..=3,
        kind in kind_strategy(),
    ) {
        let board = playout(size, plies, seed);
        let eval = kind.build::<Board>(1.5);
        let clock = SimulatedClock::unlimited();
        let player = board.active_player();

        let mut plain: Search<'_, Board> = Search::new(eval.as_ref(), &clock, 0.0, player);
        let expected = plain.run(SearchMethod::Minimax, &board, depth).unwrap();

        let mut pruned: Search<'_, Board> = Search::new(eval.as_ref(), &clock, 0.0, player);
        let actual = pruned.run(SearchMethod::AlphaBeta, &board, depth).unwrap();

        prop_assert_eq!(expected, actual);
        prop_assert!(pruned.stats().leaf_evaluations <= plain.stats().leaf_evaluations);
        prop_assert!(pruned.stats().nodes <= plain.stats().nodes);
    }

    #[test]
    fn chosen_move_is_legal(
        plies in 0usize..12,
        seed in any::<u64>(),
        kind in kind_strategy(),
    ) {
        let board = playout(5, plies, seed);
        let moves = board.legal_moves();
        let eval = kind.build::<Board>(1.5);
        let clock = SimulatedClock::unlimited();
        let mut search: Search<'_, Board> = Search::new(eval.as_ref(), &clock, 0.0, board.active_player());

        let result = search.run(SearchMethod::AlphaBeta, &board, 2).unwrap();

        if moves.is_empty() {
            prop_assert!(result.mv.is_none());
        } else {
            prop_assert!(moves.contains(&result.mv));
        }
    }

    #[test]
    fn heuristics_ignore_reflection(
        plies in 0usize..12,
        seed in any::<u64>(),
        kind in kind_strategy(),
    ) {
        // A left-right reflection keeps every move count
        let board = playout(5, plies, seed);
        let mirror = board.mirrored();
        let eval = kind.build::<Board>(1.5);

        for player in PlayerId::both() {
            prop_assert_eq!(eval.evaluate(&board, player), eval.evaluate(&mirror, player));
        }
    }
}
