//! Core domain types for Tapatan.

use super::position::Position;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One of the two sides.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Side X.
    #[serde(alias = "x")]
    X,
    /// Side O.
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Board symbol for this player.
    pub fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A point on the Tapatan board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Square {
    /// Empty point.
    Empty,
    /// Point occupied by a player's piece.
    Occupied(Player),
}

/// 3x3 Tapatan board.
///
/// Boards are small `Copy` values: every transition produces a new board
/// and leaves the old one untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

/// Error returned when parsing a board from its compact notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ParseBoardError {
    /// The notation did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),
    /// A character is not one of `X`, `O`, `.`, `_`, `-`.
    #[display("Unexpected cell symbol {:?}", _0)]
    BadSymbol(char),
}

impl std::error::Error for ParseBoardError {}

impl Board {
    /// Creates a new empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if a square holds one of `player`'s pieces.
    pub fn is_owned_by(&self, pos: Position, player: Player) -> bool {
        self.get(pos) == Square::Occupied(player)
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied points.
    pub fn count_occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Number of pieces `player` has on the board.
    pub fn count_of(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Positions holding `player`'s pieces, ascending.
    pub fn positions_of(&self, player: Player) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(move |pos| self.is_owned_by(*pos, player))
    }

    /// Empty positions, ascending.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(move |pos| self.is_empty(*pos))
    }

    /// Parses the compact notation produced by `Display`.
    ///
    /// Whitespace and `|` separators are ignored, so `"XX./.O./..O"` style
    /// input works as well as `"XX..O...O"`.
    #[instrument]
    pub fn parse(notation: &str) -> Result<Self, ParseBoardError> {
        let cells: Vec<char> = notation
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();
        if cells.len() != 9 {
            return Err(ParseBoardError::WrongLength(cells.len()));
        }

        let mut board = Self::new();
        for (pos, symbol) in Position::ALL.into_iter().zip(cells) {
            let square = match symbol {
                'X' | 'x' => Square::Occupied(Player::X),
                'O' | 'o' => Square::Occupied(Player::O),
                '.' | '_' | '-' => Square::Empty,
                other => return Err(ParseBoardError::BadSymbol(other)),
            };
            board.set(pos, square);
        }
        Ok(board)
    }

    /// Formats the board as a human-readable grid.
    ///
    /// Empty points show their 1-based number so players can type it.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.symbol().to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push_str("---");
                }
            }
            match row {
                0 => result.push_str("\n|\\  |  /|\n"),
                1 => result.push_str("\n|/  |  \\|\n"),
                _ => {}
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in self.squares {
            let c = match square {
                Square::Empty => '.',
                Square::Occupied(player) => player.symbol(),
            };
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Rule phase of a game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Waiting for the coin toss to pick the first side.
    PreGame,
    /// Sides introduce their three pieces onto empty points.
    Placing,
    /// Sides slide pieces to adjacent empty points.
    Moving,
    /// The game is over.
    Terminal,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// A player aligned three pieces.
    Winner {
        /// The winning side.
        player: Player,
        /// The exact line that produced the win.
        line: [Position; 3],
    },
    /// The side to move had no legal slide.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner { player, .. } => Some(*player),
            Outcome::Draw => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn line(&self) -> Option<[Position; 3]> {
        match self {
            Outcome::Winner { line, .. } => Some(*line),
            Outcome::Draw => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner { player, line } => write!(
                f,
                "Player {} wins on {}-{}-{}",
                player,
                line[0].to_index(),
                line[1].to_index(),
                line[2].to_index()
            ),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.count_occupied(), 0);
        assert_eq!(board.empty_positions().count(), 9);
    }

    #[test]
    fn test_parse_and_display_notation() {
        let board: Board = "XX.|.O.|..O".parse().unwrap();
        assert!(board.is_owned_by(Position::TopLeft, Player::X));
        assert!(board.is_owned_by(Position::Center, Player::O));
        assert_eq!(board.count_of(Player::O), 2);
        assert_eq!(board.to_string(), "XX..O...O");
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Board::parse("XX"), Err(ParseBoardError::WrongLength(2)));
        assert_eq!(
            Board::parse("XX.Z....."),
            Err(ParseBoardError::BadSymbol('Z'))
        );
    }

    #[test]
    fn test_positions_of_ascending() {
        let board = Board::parse("O...X...O").unwrap();
        let os: Vec<_> = board.positions_of(Player::O).collect();
        assert_eq!(os, vec![Position::TopLeft, Position::BottomRight]);
    }

    #[test]
    fn test_player_parse_case_insensitive() {
        assert_eq!("x".parse::<Player>().unwrap(), Player::X);
        assert_eq!("O".parse::<Player>().unwrap(), Player::O);
        assert_eq!(Player::X.opponent(), Player::O);
    }

    #[test]
    fn test_grid_display_numbers_empty_points() {
        let board = Board::parse("X........").unwrap();
        let grid = board.display();
        assert!(grid.starts_with("X---2---3"));
        assert!(grid.ends_with("7---8---9"));
    }
}
