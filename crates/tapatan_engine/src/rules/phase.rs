//! Phase derivation.
//!
//! The phase is never stored next to the board; it is recomputed from the
//! piece count so the two can not drift apart.

use crate::{Board, Phase};
use tracing::instrument;

/// Pieces on the board once both sides have placed everything.
pub const FULL_PLACEMENT: usize = 6;

/// True once all six pieces are on the board.
#[instrument(level = "trace")]
pub fn is_placing_phase_complete(board: &Board) -> bool {
    board.count_occupied() >= FULL_PLACEMENT
}

/// Phase of a started game.
///
/// `Terminal` when an outcome has been recorded, `Moving` once all pieces
/// are placed, `Placing` otherwise. `PreGame` is the controller's state
/// before the first side is decided and is never returned here.
#[instrument(level = "trace")]
pub fn current_phase(board: &Board, has_outcome: bool) -> Phase {
    if has_outcome {
        Phase::Terminal
    } else if is_placing_phase_complete(board) {
        Phase::Moving
    } else {
        Phase::Placing
    }
}
