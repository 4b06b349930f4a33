//! Alpha-beta minimax over the Tapatan game tree.

use super::difficulty::Difficulty;
use super::heuristic::{Evaluator, LineHeuristic};
use crate::movegen::legal_moves;
use crate::rules::{current_phase, evaluate_outcome};
use crate::{Board, Move, Outcome, Phase, Player};
use derive_getters::Getters;
use tracing::{debug, instrument, trace};

/// Score of a win found at the root; deeper wins score slightly less.
pub const WIN_SCORE: i32 = 10_000;

/// Score of a drawn position.
pub const DRAW_SCORE: i32 = 0;

/// What a search decided and how much work it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct SearchReport {
    /// Chosen move, `None` when the side has no legal move.
    best: Option<Move>,
    /// Minimax value of the chosen move. `None` when nothing was searched.
    score: Option<i32>,
    /// Positions visited below the root.
    nodes: u64,
}

/// Computer opponent playing one side at a fixed difficulty.
#[derive(Debug)]
pub struct MinimaxAi {
    player: Player,
    difficulty: Difficulty,
    evaluator: Box<dyn Evaluator>,
}

impl MinimaxAi {
    /// Creates an opponent using the default [`LineHeuristic`].
    #[instrument]
    pub fn new(player: Player, difficulty: Difficulty) -> Self {
        Self::with_evaluator(player, difficulty, Box::new(LineHeuristic))
    }

    /// Creates an opponent with a custom depth-limit evaluator.
    pub fn with_evaluator(
        player: Player,
        difficulty: Difficulty,
        evaluator: Box<dyn Evaluator>,
    ) -> Self {
        Self {
            player,
            difficulty,
            evaluator,
        }
    }

    /// The side this opponent plays.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The configured difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Picks the move the search ranks highest, or `None` without legal moves.
    #[instrument(skip(self), fields(player = %self.player, difficulty = %self.difficulty))]
    pub fn best_move(&self, board: &Board, phase: Phase) -> Option<Move> {
        self.analyze(board, phase).best
    }

    /// Runs the search and reports the chosen move, its score and effort.
    ///
    /// Every legal move is simulated and its resulting position scored with
    /// the opponent to move. The first move with the strictly greatest score
    /// wins, so ties go to the lowest source point, then the lowest
    /// destination. A lone legal move is returned without searching.
    #[instrument(skip(self), fields(player = %self.player, difficulty = %self.difficulty))]
    pub fn analyze(&self, board: &Board, phase: Phase) -> SearchReport {
        let moves = legal_moves(board, self.player, phase);

        match moves.as_slice() {
            [] => {
                debug!("No legal moves");
                return SearchReport {
                    best: None,
                    score: None,
                    nodes: 0,
                };
            }
            [only] => {
                debug!(mv = %only, "Single legal move");
                return SearchReport {
                    best: Some(*only),
                    score: None,
                    nodes: 0,
                };
            }
            _ => {}
        }

        let mut nodes = 0;
        let mut best: Option<(Move, i32)> = None;

        for mv in moves {
            let Ok(child) = mv.apply(board, self.player) else {
                continue;
            };
            let value = self.minimax(&child, 0, false, i32::MIN, i32::MAX, &mut nodes);
            trace!(mv = %mv, value, "Root move scored");

            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        debug!(best = ?best, nodes, "Search finished");
        SearchReport {
            best: best.map(|(mv, _)| mv),
            score: best.map(|(_, value)| value),
            nodes,
        }
    }

    fn minimax(
        &self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        let to_move = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };

        match evaluate_outcome(board, to_move) {
            Some(Outcome::Winner { player, .. }) if player == self.player => {
                return WIN_SCORE - depth as i32;
            }
            Some(Outcome::Winner { .. }) => return -WIN_SCORE + depth as i32,
            Some(Outcome::Draw) => return DRAW_SCORE,
            None => {}
        }

        if depth >= self.difficulty.depth_limit() {
            return self.evaluator.evaluate(board, self.player);
        }

        let moves = legal_moves(board, to_move, current_phase(board, false));
        if moves.is_empty() {
            return DRAW_SCORE;
        }

        if maximizing {
            let mut max_eval = i32::MIN;
            for mv in moves {
                let Ok(child) = mv.apply(board, to_move) else {
                    continue;
                };
                let eval = self.minimax(&child, depth + 1, false, alpha, beta, nodes);
                max_eval = max_eval.max(eval);
                alpha = alpha.max(eval);
                if beta <= alpha {
                    break;
                }
            }
            max_eval
        } else {
            let mut min_eval = i32::MAX;
            for mv in moves {
                let Ok(child) = mv.apply(board, to_move) else {
                    continue;
                };
                let eval = self.minimax(&child, depth + 1, true, alpha, beta, nodes);
                min_eval = min_eval.min(eval);
                beta = beta.min(eval);
                if beta <= alpha {
                    break;
                }
            }
            min_eval
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[derive(Debug)]
    struct Flat;

    impl Evaluator for Flat {
        fn evaluate(&self, _board: &Board, _player: Player) -> i32 {
            0
        }
    }

    #[test]
    fn test_no_moves_returns_none() {
        let ai = MinimaxAi::new(Player::O, Difficulty::Hard);
        let board = Board::parse("XXX.OO...").unwrap();
        let report = ai.analyze(&board, Phase::Terminal);
        assert_eq!(*report.best(), None);
        assert_eq!(*report.nodes(), 0);
    }

    #[test]
    fn test_single_move_short_circuits() {
        // O on 0, 1, 3 can only slide 3 -> 6.
        let board = Board::parse("OOXOX...X").unwrap();
        let ai = MinimaxAi::new(Player::O, Difficulty::Hard);
        let report = ai.analyze(&board, Phase::Moving);
        assert_eq!(
            *report.best(),
            Some(Move::slide(Position::MiddleLeft, Position::BottomLeft))
        );
        assert_eq!(*report.score(), None);
        assert_eq!(*report.nodes(), 0);
    }

    #[test]
    fn test_takes_immediate_win_at_easy() {
        // O to move can complete the middle column at 7.
        let board = Board::parse("XOX.O.X..").unwrap();
        let ai = MinimaxAi::new(Player::O, Difficulty::Easy);
        let report = ai.analyze(&board, Phase::Placing);
        assert_eq!(*report.best(), Some(Move::place(Position::BottomCenter)));
        assert_eq!(*report.score(), Some(WIN_SCORE));
    }

    #[test]
    fn test_blocks_immediate_threat() {
        // X threatens 0-1-2; O must take 2.
        let board = Board::parse("XX..O....").unwrap();
        let ai = MinimaxAi::new(Player::O, Difficulty::Medium);
        assert_eq!(
            ai.best_move(&board, Phase::Placing),
            Some(Move::place(Position::TopRight))
        );
    }

    #[test]
    fn test_prefers_immediate_win_over_slower_one() {
        // O's first slide 4 -> 7 also wins, two plies later. The later
        // slide 4 -> 8 completes the right column now.
        let board = Board::parse("XXOXOO...").unwrap();
        let ai = MinimaxAi::new(Player::O, Difficulty::Hard);
        let report = ai.analyze(&board, Phase::Moving);
        assert_eq!(
            *report.best(),
            Some(Move::slide(Position::Center, Position::BottomRight))
        );
        assert_eq!(*report.score(), Some(WIN_SCORE));
    }

    #[test]
    fn test_lost_position_scores_loss_one_ply_deep() {
        // Every X slide leaves O free to complete the right column.
        let board = Board::parse("XXOX.O.O.").unwrap();
        let ai = MinimaxAi::new(Player::X, Difficulty::Hard);
        let report = ai.analyze(&board, Phase::Moving);
        assert_eq!(*report.score(), Some(-WIN_SCORE + 1));
        assert_eq!(
            *report.best(),
            Some(Move::slide(Position::TopLeft, Position::Center))
        );
    }

    /// Minimax without cut-offs, counting every visited position.
    fn exhaustive(
        ai: &MinimaxAi,
        board: &Board,
        depth: u32,
        maximizing: bool,
        nodes: &mut u64,
    ) -> i32 {
        *nodes += 1;
        let to_move = if maximizing {
            ai.player
        } else {
            ai.player.opponent()
        };
        match evaluate_outcome(board, to_move) {
            Some(Outcome::Winner { player, .. }) if player == ai.player => {
                return WIN_SCORE - depth as i32;
            }
            Some(Outcome::Winner { .. }) => return -WIN_SCORE + depth as i32,
            Some(Outcome::Draw) => return DRAW_SCORE,
            None => {}
        }
        if depth >= ai.difficulty.depth_limit() {
            return LineHeuristic.evaluate(board, ai.player);
        }

        let values = legal_moves(board, to_move, current_phase(board, false))
            .into_iter()
            .filter_map(|mv| mv.apply(board, to_move).ok())
            .map(|child| exhaustive(ai, &child, depth + 1, !maximizing, nodes));
        let best = if maximizing { values.max() } else { values.min() };
        best.unwrap_or(DRAW_SCORE)
    }

    #[test]
    fn test_pruning_keeps_result_and_skips_positions() {
        let board = Board::parse("X...O....").unwrap();
        let ai = MinimaxAi::new(Player::X, Difficulty::Medium);
        let report = ai.analyze(&board, Phase::Placing);

        let mut nodes = 0;
        let mut best: Option<(Move, i32)> = None;
        for mv in legal_moves(&board, Player::X, Phase::Placing) {
            let child = mv.apply(&board, Player::X).unwrap();
            let value = exhaustive(&ai, &child, 0, false, &mut nodes);
            if best.is_none_or(|(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        assert_eq!(*report.best(), best.map(|(mv, _)| mv));
        assert_eq!(*report.score(), best.map(|(_, value)| value));
        assert!(*report.nodes() < nodes, "{} >= {}", report.nodes(), nodes);
    }

    #[test]
    fn test_ties_go_to_first_generated_move() {
        let ai = MinimaxAi::with_evaluator(Player::X, Difficulty::Easy, Box::new(Flat));
        assert_eq!(
            ai.best_move(&Board::new(), Phase::Placing),
            Some(Move::place(Position::TopLeft))
        );
    }

    #[test]
    fn test_deeper_search_visits_more_nodes() {
        let board = Board::parse("X...O....").unwrap();
        let easy = MinimaxAi::new(Player::X, Difficulty::Easy);
        let hard = MinimaxAi::new(Player::X, Difficulty::Hard);
        let easy = easy.analyze(&board, Phase::Placing);
        let hard = hard.analyze(&board, Phase::Placing);
        assert!(hard.nodes() > easy.nodes());
    }
}
