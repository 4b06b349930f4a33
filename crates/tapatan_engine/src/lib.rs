//! Tapatan game engine - rules, move generation and a minimax opponent.
//!
//! Tapatan is played on a 3x3 grid of points joined by the orthogonal
//! lines and the two diagonals through the centre. Each side places three
//! pieces, then slides them along the lines until one side gets three in
//! a row.
//!
//! # Architecture
//!
//! - **Topology**: static adjacency table for the nine points
//! - **Rules**: phase function, placement and slide legality, win/draw detection
//! - **Movegen**: deterministic legal move enumeration
//! - **Search**: minimax with alpha-beta pruning over a line heuristic
//! - **Controller**: owns one live game and applies human and computer intents
//!
//! # Example
//!
//! ```
//! use tapatan_engine::{GameController, Phase, Player};
//!
//! let mut game = GameController::new();
//! game.decide_first_side(Player::X).unwrap();
//! game.place_or_move(4).unwrap();
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.phase, Phase::Placing);
//! assert_eq!(snapshot.to_move, Some(Player::O));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod invariants;
mod movegen;
mod position;
mod search;
mod snapshot;
mod topology;
mod types;

pub mod rules;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, Outcome, ParseBoardError, Phase, Player, Square};

// Crate-level exports - Moves and errors
pub use action::{IllegalMove, InvalidSelection, Move, ParseMoveError, TapatanError};

// Crate-level exports - Topology
pub use topology::{is_adjacent, neighbors};

// Crate-level exports - Move generation
pub use movegen::legal_moves;

// Crate-level exports - Search
pub use search::{
    Difficulty, Evaluator, LineHeuristic, MinimaxAi, SearchReport, DRAW_SCORE, WIN_SCORE,
};

// Crate-level exports - Controller
pub use controller::{GameController, GameMode, GameState, RemainingPieces, Transition};

// Crate-level exports - Invariants
pub use invariants::{
    Invariant, InvariantSet, InvariantViolation, OutcomeConsistentInvariant,
    PieceBudgetInvariant, SelectionOwnedInvariant, TapatanInvariants,
};

// Crate-level exports - Snapshot
pub use snapshot::GameSnapshot;

/// Pieces each side brings into the game.
pub const PIECES_PER_SIDE: u8 = 3;
