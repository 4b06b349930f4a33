//! The game controller: one live game and the intents that drive it.
//!
//! Human clicks and computer moves take the same path: the controller
//! resolves an intent into a [`Move`], the rules produce the next board,
//! and the controller updates counters, turn and outcome from it.

use crate::invariants::{InvariantSet, TapatanInvariants};
use crate::rules::{current_phase, evaluate_outcome};
use crate::snapshot::GameSnapshot;
use crate::{
    Board, Difficulty, IllegalMove, InvalidSelection, MinimaxAi, Move, Outcome, PIECES_PER_SIDE,
    Phase, Player, Position, Square, TapatanError,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

/// Pieces each side still has to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct RemainingPieces {
    /// Pieces X has not placed yet.
    pub x: u8,
    /// Pieces O has not placed yet.
    pub o: u8,
}

impl RemainingPieces {
    /// Both sides start with a full set.
    pub fn new() -> Self {
        Self {
            x: PIECES_PER_SIDE,
            o: PIECES_PER_SIDE,
        }
    }

    /// Pieces `player` has left.
    pub fn of(&self, player: Player) -> u8 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    fn take(&mut self, player: Player) {
        let count = match player {
            Player::X => &mut self.x,
            Player::O => &mut self.o,
        };
        *count = count.saturating_sub(1);
    }
}

impl Default for RemainingPieces {
    fn default() -> Self {
        Self::new()
    }
}

/// Who is at the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum GameMode {
    /// One human against the computer, which plays `computer`.
    SinglePlayer {
        /// Side played by the search engine.
        computer: Player,
    },
    /// Two humans taking turns on one device.
    Multiplayer,
}

impl GameMode {
    /// The computer's side, if the computer plays.
    pub fn computer(&self) -> Option<Player> {
        match self {
            GameMode::SinglePlayer { computer } => Some(*computer),
            GameMode::Multiplayer => None,
        }
    }
}

impl Default for GameMode {
    fn default() -> Self {
        GameMode::SinglePlayer {
            computer: Player::O,
        }
    }
}

/// What an accepted intent did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// A new piece went onto the board.
    Placed(Position),
    /// A piece slid between adjacent points.
    Moved {
        /// Point the piece left.
        from: Position,
        /// Point the piece landed on.
        to: Position,
    },
    /// A piece is now selected for moving.
    Selected(Position),
    /// The selection was cleared.
    Deselected,
}

/// One game instance.
///
/// Created fresh, changed only by the controller, replaced wholesale on
/// reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) to_move: Option<Player>,
    pub(crate) selection: Option<Position>,
    pub(crate) remaining: RemainingPieces,
    pub(crate) outcome: Option<Outcome>,
}

impl GameState {
    /// Creates a game waiting for the coin toss.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: None,
            selection: None,
            remaining: RemainingPieces::new(),
            outcome: None,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side to move; `None` before the first side is decided.
    ///
    /// After the game ends this is the side that made the final move.
    pub fn to_move(&self) -> Option<Player> {
        self.to_move
    }

    /// The piece picked up for moving, if any.
    pub fn selection(&self) -> Option<Position> {
        self.selection
    }

    /// Pieces each side still has to place.
    pub fn remaining(&self) -> RemainingPieces {
        self.remaining
    }

    /// The result, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Current phase, derived from the board and outcome.
    pub fn phase(&self) -> Phase {
        match self.to_move {
            None => Phase::PreGame,
            Some(_) => current_phase(&self.board, self.outcome.is_some()),
        }
    }

    /// Empty points the selected piece can slide to.
    pub fn destinations(&self) -> Vec<Position> {
        match self.selection {
            Some(from) if self.phase() == Phase::Moving => from
                .neighbors()
                .iter()
                .copied()
                .filter(|to| self.board.is_empty(*to))
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the live game and applies intents from players and the computer.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
    mode: GameMode,
    difficulty: Difficulty,
}

impl GameController {
    /// Creates a single-player game against a medium-strength computer O.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game with explicit settings.
    #[instrument]
    pub fn with_settings(mode: GameMode, difficulty: Difficulty) -> Self {
        Self {
            state: GameState::new(),
            mode,
            difficulty,
        }
    }

    /// Returns the live game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the game mode.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Returns the computer's difficulty.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from_state(&self.state, self.mode, self.difficulty)
    }

    /// Changes the computer's strength. Takes effect on its next move.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!(%difficulty, "Difficulty changed");
        self.difficulty = difficulty;
    }

    /// Switches between single-player and local multiplayer.
    #[instrument(skip(self))]
    pub fn set_mode(&mut self, mode: GameMode) {
        debug!(?mode, "Mode changed");
        self.mode = mode;
    }

    /// Replaces the game with a fresh one; settings are kept.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        info!("Game reset");
        self.state = GameState::new();
    }

    /// Sets the first side from the coin toss and starts placing.
    ///
    /// # Errors
    ///
    /// [`IllegalMove::WrongPhase`] unless the game is still in `PreGame`.
    #[instrument(skip(self))]
    pub fn decide_first_side(&mut self, player: Player) -> Result<(), TapatanError> {
        let phase = self.state.phase();
        if phase != Phase::PreGame {
            warn!(%phase, "First side already decided");
            return Err(IllegalMove::WrongPhase(phase).into());
        }
        info!(%player, "Coin toss decided first side");
        self.state.to_move = Some(player);
        Ok(())
    }

    /// Whether the computer is due to move.
    pub fn is_computer_turn(&self) -> bool {
        matches!(self.state.phase(), Phase::Placing | Phase::Moving)
            && self.mode.computer().is_some()
            && self.state.to_move == self.mode.computer()
    }

    /// Handles a click on point `index` by the side to move.
    ///
    /// - Placing: places a piece there.
    /// - Moving: a click on one of the mover's pieces selects it (or clears
    ///   the selection if it was already selected); a click elsewhere with a
    ///   piece selected slides it there.
    ///
    /// # Errors
    ///
    /// Rejected intents leave the game unchanged and return why.
    #[instrument(skip(self))]
    pub fn place_or_move(&mut self, index: usize) -> Result<Transition, TapatanError> {
        self.try_place_or_move(index).inspect_err(|err| {
            warn!(%err, "Rejected intent");
        })
    }

    fn try_place_or_move(&mut self, index: usize) -> Result<Transition, TapatanError> {
        let pos = Position::from_index(index).ok_or(IllegalMove::OutOfBounds(index))?;
        let player = self.human_to_move()?;

        match self.state.phase() {
            Phase::Placing => {
                self.apply(Move::place(pos), player)?;
                Ok(Transition::Placed(pos))
            }
            Phase::Moving => {
                if self.state.board.is_owned_by(pos, player) {
                    return Ok(self.toggle_selection(pos));
                }
                match self.state.selection {
                    Some(from) => {
                        self.apply(Move::slide(from, pos), player)?;
                        Ok(Transition::Moved { from, to: pos })
                    }
                    None if self.state.board.is_empty(pos) => {
                        Err(InvalidSelection::EmptyCell(pos).into())
                    }
                    None => Err(InvalidSelection::OpponentPiece(pos).into()),
                }
            }
            phase => Err(IllegalMove::WrongPhase(phase).into()),
        }
    }

    /// Selects the mover's piece at `index`, or clears the selection on `None`.
    ///
    /// Selecting the already selected piece clears it. Returns the selection
    /// after the call. Clearing follows the same phase and turn rules as
    /// selecting.
    ///
    /// # Errors
    ///
    /// [`InvalidSelection`] for empty points, opponent pieces, off-board
    /// indices or outside the moving phase;
    /// [`IllegalMove::AwaitingComputer`] while the computer is to move.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: Option<usize>) -> Result<Option<Position>, TapatanError> {
        self.try_select(index)
            .inspect_err(|err| warn!(%err, "Rejected selection"))
    }

    fn try_select(&mut self, index: Option<usize>) -> Result<Option<Position>, TapatanError> {
        let pos = index
            .map(|index| Position::from_index(index).ok_or(InvalidSelection::OutOfBounds(index)))
            .transpose()?;
        let phase = self.state.phase();
        if phase != Phase::Moving {
            return Err(InvalidSelection::WrongPhase(phase).into());
        }
        let player = self.human_to_move()?;

        let Some(pos) = pos else {
            debug!("Selection cleared");
            self.state.selection = None;
            return Ok(None);
        };

        match self.state.board.get(pos) {
            Square::Empty => Err(InvalidSelection::EmptyCell(pos).into()),
            Square::Occupied(owner) if owner != player => {
                Err(InvalidSelection::OpponentPiece(pos).into())
            }
            Square::Occupied(_) => {
                self.toggle_selection(pos);
                Ok(self.state.selection)
            }
        }
    }

    /// Lets the computer move if it is its turn.
    ///
    /// The search picks a move for the computer's side and the move goes
    /// through the same validation as a human one. Returns the move played,
    /// or `None` when it is not the computer's turn or it has no move.
    #[instrument(skip(self), fields(difficulty = %self.difficulty))]
    pub fn play_computer_turn(&mut self) -> Result<Option<Move>, TapatanError> {
        if !self.is_computer_turn() {
            return Ok(None);
        }
        let Some(computer) = self.mode.computer() else {
            return Ok(None);
        };

        let ai = MinimaxAi::new(computer, self.difficulty);
        let Some(mv) = ai.best_move(&self.state.board, self.state.phase()) else {
            warn!(%computer, "Computer has no legal move");
            return Ok(None);
        };

        self.state.selection = None;
        self.apply(mv, computer)?;
        info!(%computer, %mv, "Computer moved");
        Ok(Some(mv))
    }

    /// The side to move, provided a human may act for it.
    fn human_to_move(&self) -> Result<Player, TapatanError> {
        let phase = self.state.phase();
        let Some(player) = self
            .state
            .to_move
            .filter(|_| matches!(phase, Phase::Placing | Phase::Moving))
        else {
            return Err(IllegalMove::WrongPhase(phase).into());
        };
        if self.mode.computer() == Some(player) {
            return Err(IllegalMove::AwaitingComputer(player).into());
        }
        Ok(player)
    }

    fn toggle_selection(&mut self, pos: Position) -> Transition {
        if self.state.selection == Some(pos) {
            debug!(%pos, "Deselected");
            self.state.selection = None;
            Transition::Deselected
        } else {
            debug!(%pos, "Selected");
            self.state.selection = Some(pos);
            Transition::Selected(pos)
        }
    }

    /// Applies a move for `player` and advances the game.
    fn apply(&mut self, mv: Move, player: Player) -> Result<(), TapatanError> {
        let board = mv.apply(&self.state.board, player)?;
        let next = player.opponent();

        self.state.board = board;
        self.state.selection = None;
        if mv.is_placement() {
            self.state.remaining.take(player);
        }

        match evaluate_outcome(&board, next) {
            Some(outcome) => {
                info!(%outcome, "Game over");
                self.state.outcome = Some(outcome);
            }
            None => self.state.to_move = Some(next),
        }
        debug!(%player, %mv, board = %board, phase = %self.state.phase(), "Move applied");

        assert_invariants(&self.state);
        Ok(())
    }
}

/// Checks all game-state invariants in debug builds.
fn assert_invariants(state: &GameState) {
    if cfg!(debug_assertions)
        && let Err(violations) = TapatanInvariants::check_all(state)
    {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        error!(%descriptions, "Invariant violated");
        debug_assert!(false, "Invariant violated: {}", descriptions);
    }
}
