//! Outcome evaluation: wins, and draws by blockade.

use super::phase::is_placing_phase_complete;
use super::win::check_winner;
use crate::{Board, Outcome, Player};
use tracing::instrument;

/// Whether any of `player`'s pieces can slide to an adjacent empty point.
#[instrument(level = "trace")]
pub fn has_legal_slide(board: &Board, player: Player) -> bool {
    board
        .positions_of(player)
        .any(|from| from.neighbors().iter().any(|to| board.is_empty(*to)))
}

/// Evaluates the board with `to_move` as the side about to act.
///
/// A completed line wins immediately. In the moving phase, a side that
/// cannot slide any piece ends the game in a draw. Placing-phase boards
/// without a line are never terminal.
#[instrument(level = "trace")]
pub fn evaluate_outcome(board: &Board, to_move: Player) -> Option<Outcome> {
    if let Some((player, line)) = check_winner(board) {
        return Some(Outcome::Winner { player, line });
    }

    if is_placing_phase_complete(board) && !has_legal_slide(board, to_move) {
        return Some(Outcome::Draw);
    }

    None
}
