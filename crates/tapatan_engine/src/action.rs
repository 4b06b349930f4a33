//! First-class action types for Tapatan.
//!
//! Moves are domain events, not side effects. They represent
//! a side's intent and can be validated independently of execution.

use super::rules;
use super::types::{Board, Phase, Player};
use super::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in Tapatan.
///
/// During the placing phase `from` is `None` and `to` is the empty point
/// receiving a new piece. During the moving phase `from` is the piece
/// being slid and `to` the adjacent empty point it lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema)]
pub struct Move {
    /// The piece being slid, or `None` for a placement.
    pub from: Option<Position>,
    /// Destination point.
    pub to: Position,
}

impl Move {
    /// A placement onto `to`.
    pub fn place(to: Position) -> Self {
        Self { from: None, to }
    }

    /// A slide from `from` to `to`.
    pub fn slide(from: Position, to: Position) -> Self {
        Self {
            from: Some(from),
            to,
        }
    }

    /// Returns true for placing-phase moves.
    pub fn is_placement(&self) -> bool {
        self.from.is_none()
    }

    /// Applies this move for `player`, returning the resulting board.
    ///
    /// Placements and slides go through the same checks the controller
    /// uses, so a move that passes here is legal.
    #[instrument(level = "trace")]
    pub fn apply(&self, board: &Board, player: Player) -> Result<Board, IllegalMove> {
        match self.from {
            None => rules::apply_placement(board, player, self.to),
            Some(from) => rules::apply_move(board, player, from, self.to),
        }
    }
}

/// Compact notation: `4` for a placement, `0-3` for a slide.
impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.from {
            None => write!(f, "{}", self.to.to_index()),
            Some(from) => write!(f, "{}-{}", from.to_index(), self.to.to_index()),
        }
    }
}

/// Error returned when parsing the compact move notation.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
#[display("Invalid move notation {:?}", _0)]
pub struct ParseMoveError(pub String);

impl std::error::Error for ParseMoveError {}

impl std::str::FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_pos = |part: &str| {
            part.trim()
                .parse::<usize>()
                .ok()
                .and_then(Position::from_index)
                .ok_or_else(|| ParseMoveError(s.to_string()))
        };

        match s.split_once('-') {
            Some((from, to)) => Ok(Move::slide(parse_pos(from)?, parse_pos(to)?)),
            None => Ok(Move::place(parse_pos(s)?)),
        }
    }
}

/// Why a placement or slide was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum IllegalMove {
    /// The index does not name a point on the board.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// The destination already holds a piece.
    #[display("{} is already occupied", _0)]
    Occupied(Position),

    /// The action does not fit the current phase.
    #[display("Not allowed during the {} phase", _0)]
    WrongPhase(Phase),

    /// The source point does not hold the mover's piece.
    #[display("{} does not hold one of {}'s pieces", _0, _1)]
    NotOwnPiece(Position, Player),

    /// The destination is not connected to the source.
    #[display("{} is not adjacent to {}", to, from)]
    NotAdjacent {
        /// Source point.
        from: Position,
        /// Requested destination.
        to: Position,
    },

    /// The side already has all three pieces on the board.
    #[display("{} has no pieces left to place", _0)]
    NoPiecesLeft(Player),

    /// A human intent arrived while the computer side is to move.
    #[display("Waiting for the computer ({}) to move", _0)]
    AwaitingComputer(Player),
}

impl std::error::Error for IllegalMove {}

/// Why a selection was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidSelection {
    /// The index does not name a point on the board.
    #[display("Position {} is off the board (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// Nothing to select on an empty point.
    #[display("{} is empty", _0)]
    EmptyCell(Position),

    /// The point holds the other side's piece.
    #[display("{} belongs to the opponent", _0)]
    OpponentPiece(Position),

    /// Pieces can only be selected while moving.
    #[display("Pieces cannot be selected during the {} phase", _0)]
    WrongPhase(Phase),
}

impl std::error::Error for InvalidSelection {}

/// Any rejection the engine reports.
///
/// Both kinds are recoverable: the game state is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum TapatanError {
    /// A placement or slide broke the rules.
    #[display("Illegal move: {}", _0)]
    IllegalMove(IllegalMove),
    /// A selection pointed at the wrong kind of point.
    #[display("Invalid selection: {}", _0)]
    InvalidSelection(InvalidSelection),
}

impl std::error::Error for TapatanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TapatanError::IllegalMove(e) => Some(e),
            TapatanError::InvalidSelection(e) => Some(e),
        }
    }
}
