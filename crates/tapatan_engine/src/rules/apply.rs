//! Placement and slide application.
//!
//! Both functions take the board by reference and hand back a new one.
//! Turn order, piece counters and outcomes are the controller's business.

use super::phase::{current_phase, is_placing_phase_complete};
use crate::topology::is_adjacent;
use crate::{Board, IllegalMove, PIECES_PER_SIDE, Player, Position, Square};
use tracing::{instrument, trace};

/// Places a new piece for `player` on `pos`.
///
/// # Errors
///
/// - [`IllegalMove::WrongPhase`] once six pieces are on the board
/// - [`IllegalMove::Occupied`] if `pos` already holds a piece
/// - [`IllegalMove::NoPiecesLeft`] if `player` already has three pieces down
#[instrument(level = "trace")]
pub fn apply_placement(
    board: &Board,
    player: Player,
    pos: Position,
) -> Result<Board, IllegalMove> {
    if is_placing_phase_complete(board) {
        return Err(IllegalMove::WrongPhase(current_phase(board, false)));
    }
    if !board.is_empty(pos) {
        return Err(IllegalMove::Occupied(pos));
    }
    if board.count_of(player) >= usize::from(PIECES_PER_SIDE) {
        return Err(IllegalMove::NoPiecesLeft(player));
    }

    let mut next = *board;
    next.set(pos, Square::Occupied(player));
    trace!(%player, %pos, "placed");
    Ok(next)
}

/// Slides `player`'s piece from `from` to the adjacent empty point `to`.
///
/// # Errors
///
/// - [`IllegalMove::WrongPhase`] while pieces are still being placed
/// - [`IllegalMove::NotOwnPiece`] if `from` does not hold `player`'s piece
/// - [`IllegalMove::Occupied`] if `to` already holds a piece
/// - [`IllegalMove::NotAdjacent`] if no line joins `from` and `to`
#[instrument(level = "trace")]
pub fn apply_move(
    board: &Board,
    player: Player,
    from: Position,
    to: Position,
) -> Result<Board, IllegalMove> {
    if !is_placing_phase_complete(board) {
        return Err(IllegalMove::WrongPhase(current_phase(board, false)));
    }
    if !board.is_owned_by(from, player) {
        return Err(IllegalMove::NotOwnPiece(from, player));
    }
    if !board.is_empty(to) {
        return Err(IllegalMove::Occupied(to));
    }
    if !is_adjacent(from, to) {
        return Err(IllegalMove::NotAdjacent { from, to });
    }

    let mut next = *board;
    next.set(from, Square::Empty);
    next.set(to, Square::Occupied(player));
    trace!(%player, %from, %to, "slid");
    Ok(next)
}
