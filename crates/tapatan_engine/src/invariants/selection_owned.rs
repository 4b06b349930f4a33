//! Selection ownership: only the mover's own piece can be picked up.

use super::Invariant;
use crate::{GameState, Phase};

/// Invariant: a selection exists only in the moving phase and always
/// points at a piece of the side to move.
pub struct SelectionOwnedInvariant;

impl Invariant<GameState> for SelectionOwnedInvariant {
    fn holds(state: &GameState) -> bool {
        let Some(selected) = state.selection() else {
            return true;
        };
        state.phase() == Phase::Moving
            && state
                .to_move()
                .is_some_and(|player| state.board().is_owned_by(selected, player))
    }

    fn description() -> &'static str {
        "Selection is a piece of the side to move during the moving phase"
    }
}
