//! Read-only view of a game for presentation layers.

use crate::{
    Board, Difficulty, GameMode, GameState, Outcome, Phase, Player, Position, RemainingPieces,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Everything a front end needs to draw the game.
///
/// Snapshots are plain values; changing one does not affect the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GameSnapshot {
    /// Piece layout.
    pub board: Board,
    /// Current phase.
    pub phase: Phase,
    /// Side to move; the last mover once the game is over.
    pub to_move: Option<Player>,
    /// Selected piece, if any.
    pub selection: Option<Position>,
    /// Empty points the selected piece can slide to.
    pub destinations: Vec<Position>,
    /// Pieces still to place per side.
    pub remaining: RemainingPieces,
    /// Result once the game is over.
    pub outcome: Option<Outcome>,
    /// Single player or local multiplayer.
    pub mode: GameMode,
    /// Computer strength.
    pub difficulty: Difficulty,
}

impl GameSnapshot {
    pub(crate) fn from_state(state: &GameState, mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            board: *state.board(),
            phase: state.phase(),
            to_move: state.to_move(),
            selection: state.selection(),
            destinations: state.destinations(),
            remaining: state.remaining(),
            outcome: state.outcome(),
            mode,
            difficulty,
        }
    }

    /// The winning line, for highlighting.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.outcome.and_then(|outcome| outcome.line())
    }

    /// Whether the game has ended.
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }
}
