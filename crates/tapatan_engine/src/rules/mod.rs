//! Game rules for Tapatan.
//!
//! This module contains pure functions over boards. Rules are separated
//! from game state so the controller and the search engine share one
//! definition of legality.

pub mod apply;
pub mod draw;
pub mod phase;
pub mod win;

pub use apply::{apply_move, apply_placement};
pub use draw::{evaluate_outcome, has_legal_slide};
pub use phase::{current_phase, is_placing_phase_complete};
pub use win::{WINNING_LINES, check_winner};
