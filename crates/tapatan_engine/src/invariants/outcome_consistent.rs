//! Outcome consistency: the recorded result agrees with the board.

use super::Invariant;
use crate::rules::check_winner;
use crate::{GameState, Outcome};

/// Invariant: a recorded winner owns a completed line on the board, and a
/// game without a winner has no completed line.
pub struct OutcomeConsistentInvariant;

impl Invariant<GameState> for OutcomeConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let on_board = check_winner(state.board());
        match state.outcome() {
            Some(Outcome::Winner { player, line }) => on_board == Some((player, line)),
            Some(Outcome::Draw) | None => on_board.is_none(),
        }
    }

    fn description() -> &'static str {
        "Recorded outcome matches the lines on the board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player, Position};

    #[test]
    fn test_unrecorded_line_violates() {
        let mut state = GameState::new();
        state.board = Board::parse("XXX.OO...").unwrap();
        assert!(!OutcomeConsistentInvariant::holds(&state));

        state.outcome = Some(Outcome::Winner {
            player: Player::X,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        });
        assert!(OutcomeConsistentInvariant::holds(&state));
    }

    #[test]
    fn test_wrong_winner_violates() {
        let mut state = GameState::new();
        state.board = Board::parse("XXX.OO...").unwrap();
        state.outcome = Some(Outcome::Winner {
            player: Player::O,
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
        });
        assert!(!OutcomeConsistentInvariant::holds(&state));
    }
}
