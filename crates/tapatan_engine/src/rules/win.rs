//! Win detection logic for Tapatan.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight lines that win when one side fills them.
///
/// Rows, then columns, then the two diagonals through the centre.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns the player and the first aligned line in [`WINNING_LINES`]
/// order, or `None` when no line is complete.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<(Player, [Position; 3])> {
    for line in WINNING_LINES {
        let [a, b, c] = line;
        if let Square::Occupied(player) = board.get(a)
            && board.get(b) == Square::Occupied(player)
            && board.get(c) == Square::Occupied(player)
        {
            return Some((player, line));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::parse("XXX......").unwrap();
        assert_eq!(
            check_winner(&board),
            Some((
                Player::X,
                [Position::TopLeft, Position::TopCenter, Position::TopRight]
            ))
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::parse("X.O.O.O.X").unwrap();
        assert_eq!(
            check_winner(&board).map(|(p, line)| (p, line.map(Position::to_index))),
            Some((Player::O, [2, 4, 6]))
        );
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let board = Board::parse("XXO.O.X..").unwrap();
        assert_eq!(check_winner(&board), None);
    }
}
