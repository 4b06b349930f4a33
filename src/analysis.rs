//! One-shot search on a board given in compact notation.

use serde::Serialize;
use tapatan_engine::rules::{check_winner, current_phase};
use tapatan_engine::{Board, Difficulty, MinimaxAi, Phase, Player};
use tracing::instrument;

/// Result of analysing a single position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    /// Board in compact notation.
    pub board: String,
    /// Side the search played for.
    pub player: Player,
    /// Phase inferred from the board.
    pub phase: Phase,
    /// Chosen move in `to` / `from-to` notation.
    pub best: Option<String>,
    /// Minimax score of the chosen move.
    pub score: Option<i32>,
    /// Positions visited.
    pub nodes: u64,
}

/// Runs the search for `player` on `board`.
///
/// The phase comes from the piece count; a board that already holds a
/// line is terminal and yields no move.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board, player: Player, difficulty: Difficulty) -> Analysis {
    let phase = current_phase(board, check_winner(board).is_some());
    let report = MinimaxAi::new(player, difficulty).analyze(board, phase);

    Analysis {
        board: board.to_string(),
        player,
        phase,
        best: report.best().map(|mv| mv.to_string()),
        score: *report.score(),
        nodes: *report.nodes(),
    }
}
