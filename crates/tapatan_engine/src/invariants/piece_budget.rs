//! Piece budget: pieces on the board plus pieces in hand is always three.

use super::Invariant;
use crate::{GameState, PIECES_PER_SIDE, Player};

/// Invariant: each side owns exactly [`PIECES_PER_SIDE`] pieces, split
/// between the board and the placement supply.
pub struct PieceBudgetInvariant;

impl Invariant<GameState> for PieceBudgetInvariant {
    fn holds(state: &GameState) -> bool {
        [Player::X, Player::O].into_iter().all(|player| {
            let placed = state.board().count_of(player);
            let in_hand = usize::from(state.remaining().of(player));
            placed + in_hand == usize::from(PIECES_PER_SIDE)
        })
    }

    fn description() -> &'static str {
        "Each side has three pieces between board and supply"
    }
}
