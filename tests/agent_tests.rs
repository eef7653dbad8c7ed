//! End-to-end matches between agents on the reference Isolation board.

use isolation_agent::agent::{AgentConfig, IsolationAgent, Player, RandomPlayer};
use isolation_agent::core::{Move, PlayerId, PlayerMap};
use isolation_agent::eval::EvaluatorKind;
use isolation_agent::games::isolation::{Board, BoardBuilder};
use isolation_agent::rules::{GameResult, GameState};
use isolation_agent::search::{SearchMethod, SimulatedClock};

/// Play a match to completion with a fresh clock each turn.
///
/// Returns the result and the number of moves played.
fn play_match(
    mut board: Board,
    players: &mut PlayerMap<Box<dyn Player<Board>>>,
    clock: impl Fn() -> SimulatedClock,
) -> (GameResult, u32) {
    loop {
        if let Some(result) = board.result() {
            return (result, board.move_count());
        }

        let active = board.active_player();
        let moves = board.legal_moves();
        let mv = players[active].get_move(&board, &moves, &clock());

        assert!(moves.contains(&mv), "{} returned illegal move {}", active, mv);
        board = board.forecast_move(mv);
    }
}

fn agent(config: AgentConfig) -> Box<dyn Player<Board>> {
    Box::new(IsolationAgent::<Board>::new(config).unwrap())
}

// =============================================================================
// Full Matches
// =============================================================================

#[test]
fn test_agent_completes_games_against_random() {
    for seed in 0..4 {
        let config = AgentConfig::default()
            .with_method(SearchMethod::AlphaBeta)
            .with_iterative(4)
            .with_seed(seed);
        let mut players = PlayerMap::new(|player| {
            if player == PlayerId::FIRST {
                agent(config.clone())
            } else {
                Box::new(RandomPlayer::new(seed + 100)) as Box<dyn Player<Board>>
            }
        });

        let (result, moves) = play_match(Board::new(5, 5), &mut players, SimulatedClock::unlimited);

        assert!(moves >= 2);
        assert!(moves <= 25);
        assert!(matches!(result, GameResult::Winner(_)));
    }
}

#[test]
fn test_agent_vs_agent_every_heuristic() {
    for kind in EvaluatorKind::ALL {
        let base = AgentConfig::default().with_evaluator(kind).with_fixed_depth(2);
        let mut players = PlayerMap::new(|player| {
            agent(base.clone().with_seed(u64::from(player.0)))
        });

        let (_, moves) = play_match(Board::new(5, 5), &mut players, SimulatedClock::unlimited);
        assert!(moves <= 25, "{}", kind);
    }
}

#[test]
fn test_matches_are_reproducible() {
    let run = || {
        let config = AgentConfig::from_names("weighted_improved", "alphabeta")
            .unwrap()
            .with_iterative(3);
        let mut players = PlayerMap::new(|player| {
            agent(config.clone().with_seed(7 + u64::from(player.0)))
        });
        play_match(Board::new(5, 5), &mut players, SimulatedClock::unlimited)
    };

    assert_eq!(run(), run());
}

#[test]
fn test_games_under_tight_clock_stay_legal() {
    // Each turn gets a budget of a few hundred nodes
    let config = AgentConfig::default()
        .with_method(SearchMethod::Minimax)
        .with_timer_threshold(10.0);
    let mut players =
        PlayerMap::new(|player| agent(config.clone().with_seed(u64::from(player.0))));

    let (_, moves) = play_match(Board::new(7, 7), &mut players, || {
        SimulatedClock::new(300.0, 1.0)
    });

    assert!(moves >= 2);
}

// =============================================================================
// Turn Contract
// =============================================================================

#[test]
fn test_no_legal_moves_returns_sentinel() {
    // Player 1 stands in the corner of a 3x3 with both jumps blocked
    let board = BoardBuilder::new()
        .size(3, 3)
        .location(PlayerId::FIRST, (0, 0))
        .location(PlayerId::SECOND, (2, 2))
        .blocked((1, 2))
        .blocked((2, 1))
        .build();
    assert!(board.legal_moves().is_empty());

    let mut agent = IsolationAgent::<Board>::new(AgentConfig::default().with_seed(1)).unwrap();
    let mv = agent.get_move(&board, &board.legal_moves(), &SimulatedClock::unlimited());

    assert_eq!(mv, Move::NONE);
    assert_eq!(mv.to_pair(), (-1, -1));
}

#[test]
fn test_expired_clock_returns_legal_move() {
    let board = Board::new(7, 7).forecast_move(Move::new(3, 3));
    let moves = board.legal_moves();

    for method in [SearchMethod::Minimax, SearchMethod::AlphaBeta] {
        for iterative in [true, false] {
            let mut config = AgentConfig::default().with_method(method).with_seed(5);
            config.iterative = iterative;
            let mut agent = IsolationAgent::<Board>::new(config).unwrap();

            let mv = agent.get_move(&board, &moves, &SimulatedClock::expired());

            assert!(moves.contains(&mv));
            assert_eq!(agent.last_stats().completed_depth, 0);
        }
    }
}

#[test]
fn test_every_heuristic_takes_the_winning_jump() {
    // (2,1) is player 1's only jump and leaves player 2 stranded
    let board = BoardBuilder::new()
        .size(3, 3)
        .location(PlayerId::FIRST, (0, 0))
        .location(PlayerId::SECOND, (1, 1))
        .blocked((1, 2))
        .build();

    for kind in EvaluatorKind::ALL {
        let config = AgentConfig::default().with_evaluator(kind).with_seed(3);
        let mut agent = IsolationAgent::<Board>::new(config).unwrap();

        let mv = agent.get_move(&board, &board.legal_moves(), &SimulatedClock::unlimited());

        assert_eq!(mv, Move::new(2, 1), "{}", kind);
        assert!(board.forecast_move(mv).is_winner(PlayerId::FIRST));
    }
}

#[test]
fn test_iterative_stats_report_depth() {
    let board = Board::new(5, 5)
        .forecast_move(Move::new(2, 2))
        .forecast_move(Move::new(0, 0));
    let config = AgentConfig::default()
        .with_method(SearchMethod::AlphaBeta)
        .with_iterative(3)
        .with_seed(9);
    let mut agent = IsolationAgent::<Board>::new(config).unwrap();

    agent.get_move(&board, &board.legal_moves(), &SimulatedClock::unlimited());

    let stats = agent.last_stats();
    assert!(!stats.timed_out);
    assert!(stats.completed_depth >= 1 && stats.completed_depth <= 3);
    assert!(stats.leaf_evaluations > 0);
    assert!(stats.nodes >= stats.leaf_evaluations);
}
