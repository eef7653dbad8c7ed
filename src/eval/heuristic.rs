//! Position evaluation heuristics.
//!
//! Every heuristic follows the same contract:
//! - +inf if the player has already won, -inf if already lost; these checks
//!   run before any arithmetic
//! - +inf if the opponent has no legal move, whatever the player's own count
//! - otherwise a finite score built from the two players' move counts

use crate::core::PlayerId;
use crate::rules::GameState;

/// Scores a state from the point of view of `player`. Higher is better.
pub trait Evaluator<S: GameState> {
    /// Evaluate `state` for `player`.
    fn evaluate(&self, state: &S, player: PlayerId) -> f64;
}

impl<S, F> Evaluator<S> for F
where
    S: GameState,
    F: Fn(&S, PlayerId) -> f64,
{
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        self(state, player)
    }
}

/// Legal move counts for a player and their opponent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mobility {
    pub own: usize,
    pub opponent: usize,
}

impl Mobility {
    /// Count moves for `player` and their opponent in `state`.
    pub fn of<S: GameState>(state: &S, player: PlayerId) -> Self {
        Self {
            own: state.legal_moves_for(player).len(),
            opponent: state.legal_moves_for(state.opponent(player)).len(),
        }
    }
}

/// Shared prologue: terminal states and opponent-has-no-move.
///
/// Returns `Err(score)` when the position is decided without arithmetic.
fn mobility_or_decided<S: GameState>(state: &S, player: PlayerId) -> Result<Mobility, f64> {
    if state.is_loser(player) {
        return Err(f64::NEG_INFINITY);
    }
    if state.is_winner(player) {
        return Err(f64::INFINITY);
    }

    let mobility = Mobility::of(state, player);
    if mobility.opponent == 0 {
        return Err(f64::INFINITY);
    }
    Ok(mobility)
}

// =============================================================================
// Move-count heuristics
// =============================================================================

/// Number of moves available to the player.
#[derive(Clone, Debug, Default)]
pub struct OpenMoveScore;

impl<S: GameState> Evaluator<S> for OpenMoveScore {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        match mobility_or_decided(state, player) {
            Ok(m) => m.own as f64,
            Err(decided) => decided,
        }
    }
}

/// Own moves minus opponent moves.
#[derive(Clone, Debug, Default)]
pub struct ImprovedScore;

impl<S: GameState> Evaluator<S> for ImprovedScore {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        match mobility_or_decided(state, player) {
            Ok(m) => m.own as f64 - m.opponent as f64,
            Err(decided) => decided,
        }
    }
}

/// Own moves minus `weight` times opponent moves.
///
/// A weight above 1 plays aggressively: it values taking a move away from
/// the opponent more than keeping one.
#[derive(Clone, Debug)]
pub struct WeightedImprovedScore {
    pub weight: f64,
}

impl Default for WeightedImprovedScore {
    fn default() -> Self {
        Self { weight: 1.5 }
    }
}

impl<S: GameState> Evaluator<S> for WeightedImprovedScore {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        match mobility_or_decided(state, player) {
            Ok(m) => m.own as f64 - self.weight * m.opponent as f64,
            Err(decided) => decided,
        }
    }
}

/// Own moves divided by `weight` times opponent moves.
#[derive(Clone, Debug)]
pub struct WeightedRatioScore {
    pub weight: f64,
}

impl Default for WeightedRatioScore {
    fn default() -> Self {
        Self { weight: 1.5 }
    }
}

impl<S: GameState> Evaluator<S> for WeightedRatioScore {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        match mobility_or_decided(state, player) {
            Ok(m) => m.own as f64 / (self.weight * m.opponent as f64),
            Err(decided) => decided,
        }
    }
}

// =============================================================================
// Board-normalized heuristics
// =============================================================================

/// Move ratio plus own moves normalized by the number of blank cells.
///
/// The mobility term grows in importance as the board fills up.
#[derive(Clone, Debug, Default)]
pub struct RatioMobilityScore;

impl<S: GameState> Evaluator<S> for RatioMobilityScore {
    fn evaluate(&self, state: &S, player: PlayerId) -> f64 {
        let m = match mobility_or_decided(state, player) {
            Ok(m) => m,
            Err(decided) => return decided,
        };

        let own = m.own as f64;
        let blanks = state.blank_spaces().len();
        let mobility = if blanks == 0 { 0.0 } else { own / blanks as f64 };

        own / m.opponent as f64 + mobility
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Move;
    use crate::games::isolation::{Board, BoardBuilder};

    fn all_heuristics() -> Vec<Box<dyn Evaluator<Board>>> {
        vec![
            Box::new(OpenMoveScore),
            Box::new(ImprovedScore),
            Box::new(WeightedImprovedScore::default()),
            Box::new(WeightedRatioScore::default()),
            Box::new(RatioMobilityScore),
        ]
    }

    /// Player 1 in the center with 8 moves, player 2 in a corner with 2
    fn midgame() -> Board {
        BoardBuilder::new()
            .location(PlayerId::FIRST, (3, 3))
            .location(PlayerId::SECOND, (0, 0))
            .build()
    }

    #[test]
    fn test_mobility_counts() {
        let board = midgame();
        let m = Mobility::of(&board, PlayerId::FIRST);
        assert_eq!(m, Mobility { own: 8, opponent: 2 });
    }

    #[test]
    fn test_formulas() {
        let board = midgame();
        let p = PlayerId::FIRST;

        assert_eq!(OpenMoveScore.evaluate(&board, p), 8.0);
        assert_eq!(ImprovedScore.evaluate(&board, p), 6.0);
        assert_eq!(WeightedImprovedScore::default().evaluate(&board, p), 5.0);
        assert!((WeightedRatioScore::default().evaluate(&board, p) - 8.0 / 3.0).abs() < 1e-12);

        // 49 cells minus the two occupied
        let expected = 8.0 / 2.0 + 8.0 / 47.0;
        assert!((RatioMobilityScore.evaluate(&board, p) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_terminal_states_short_circuit() {
        // Player 1 to move from the center of a 3x3 board: no moves, lost
        let board = BoardBuilder::new()
            .size(3, 3)
            .location(PlayerId::FIRST, (1, 1))
            .location(PlayerId::SECOND, (0, 0))
            .build();

        for h in all_heuristics() {
            assert_eq!(h.evaluate(&board, PlayerId::FIRST), f64::NEG_INFINITY);
            assert_eq!(h.evaluate(&board, PlayerId::SECOND), f64::INFINITY);
        }
    }

    #[test]
    fn test_opponent_without_moves_is_infinite() {
        // Player 1 at (0,0) has only (2,1) left; player 2 is stuck in the center
        let board = BoardBuilder::new()
            .size(3, 3)
            .location(PlayerId::FIRST, (0, 0))
            .location(PlayerId::SECOND, (1, 1))
            .blocked((1, 2))
            .build();

        assert_eq!(board.legal_moves().len(), 1);
        for h in all_heuristics() {
            assert_eq!(h.evaluate(&board, PlayerId::FIRST), f64::INFINITY);
        }
    }

    #[test]
    fn test_closure_evaluator() {
        let board = Board::new(3, 3);
        let constant = |_: &Board, _: PlayerId| 4.0;
        assert_eq!(constant.evaluate(&board, PlayerId::FIRST), 4.0);
    }

    #[test]
    fn test_mirrored_states_score_identically() {
        let board = BoardBuilder::new()
            .location(PlayerId::FIRST, (2, 1))
            .location(PlayerId::SECOND, (5, 2))
            .blocked((0, 2))
            .blocked((4, 3))
            .build()
            .forecast_move(Move::new(0, 0));

        let mirrored = board.mirrored();
        for h in all_heuristics() {
            for player in PlayerId::both() {
                assert_eq!(h.evaluate(&board, player), h.evaluate(&mirrored, player));
            }
        }
    }
}
