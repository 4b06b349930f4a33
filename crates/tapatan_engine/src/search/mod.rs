//! Computer opponent: minimax with alpha-beta pruning.
//!
//! The search plays on behalf of one side. Terminal positions are scored
//! exactly; positions at the depth limit fall back to a static
//! [`Evaluator`]. There is no randomness, so the same board and
//! difficulty always produce the same move.

mod difficulty;
mod heuristic;
mod minimax;

pub use difficulty::Difficulty;
pub use heuristic::{Evaluator, LineHeuristic};
pub use minimax::{DRAW_SCORE, MinimaxAi, SearchReport, WIN_SCORE};
