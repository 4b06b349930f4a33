//! Static evaluation used at the depth limit.

use crate::rules::WINNING_LINES;
use crate::{Board, Player, Position, Square};

/// Scores a non-terminal board from `player`'s point of view.
///
/// Higher is better for `player`.
pub trait Evaluator: std::fmt::Debug + Send + Sync {
    /// Evaluates `board` for `player`.
    fn evaluate(&self, board: &Board, player: Player) -> i32;
}

/// Default evaluator: counts open lines and rewards holding the centre.
///
/// Opponent threats weigh more than own threats of the same size
/// (`-500` against `+100` for two in a line), which makes the search
/// prefer blocking over building.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineHeuristic;

impl LineHeuristic {
    /// Bonus for holding the centre point.
    pub const CENTER: i32 = 15;

    fn score_line(own: usize, opp: usize, empty: usize) -> i32 {
        match (own, opp, empty) {
            (3, 0, 0) => 1000,
            (2, 0, 1) => 100,
            (1, 0, 2) => 10,
            (0, 3, 0) => -1000,
            (0, 2, 1) => -500,
            (0, 1, 2) => -5,
            _ => 0,
        }
    }
}

impl Evaluator for LineHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let mut score = 0;

        for line in WINNING_LINES {
            let mut own = 0;
            let mut opp = 0;
            let mut empty = 0;
            for pos in line {
                match board.get(pos) {
                    Square::Occupied(p) if p == player => own += 1,
                    Square::Occupied(_) => opp += 1,
                    Square::Empty => empty += 1,
                }
            }
            score += Self::score_line(own, opp, empty);
        }

        match board.get(Position::Center) {
            Square::Occupied(p) if p == player => score += Self::CENTER,
            Square::Occupied(_) => score -= Self::CENTER,
            Square::Empty => {}
        }

        score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(board: &str, player: Player) -> i32 {
        LineHeuristic.evaluate(&Board::parse(board).unwrap(), player)
    }

    #[test]
    fn test_empty_board_is_neutral() {
        assert_eq!(eval(".........", Player::X), 0);
    }

    #[test]
    fn test_center_piece() {
        // Four open lines through the centre (+10 each) plus the centre bonus.
        assert_eq!(eval("....X....", Player::X), 4 * 10 + 15);
        assert_eq!(eval("....X....", Player::O), 4 * -5 - 15);
    }

    #[test]
    fn test_blocking_bias() {
        // X threatens the top row, O holds the far corner.
        assert_eq!(eval("XX......O", Player::X), 110);
        assert_eq!(eval("XX......O", Player::O), -490);
    }

    #[test]
    fn test_mixed_lines_are_worthless() {
        // Top row holds both sides; only columns 0, 1 and the diagonal count.
        assert_eq!(eval("XO.......", Player::X), 10 - 5 + 10);
        assert_eq!(LineHeuristic::score_line(1, 1, 1), 0);
    }
}
