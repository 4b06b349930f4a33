//! Legal move enumeration.

use crate::{Board, Move, Phase, Player};
use tracing::instrument;

/// Lists every legal move for `player` in `phase`.
///
/// - `Placing`: one placement per empty point
/// - `Moving`: one slide per (own piece, adjacent empty point) pair
/// - `PreGame` / `Terminal`: nothing
///
/// Moves come out ordered by source point, then destination, so searches
/// over the same input always visit the same tree.
#[instrument(level = "trace")]
pub fn legal_moves(board: &Board, player: Player, phase: Phase) -> Vec<Move> {
    match phase {
        Phase::Placing => board.empty_positions().map(Move::place).collect(),
        Phase::Moving => board
            .positions_of(player)
            .flat_map(move |from| {
                from.neighbors()
                    .iter()
                    .copied()
                    .filter(move |to| board.is_empty(*to))
                    .map(move |to| Move::slide(from, to))
            })
            .collect(),
        Phase::PreGame | Phase::Terminal => Vec::new(),
    }
}
