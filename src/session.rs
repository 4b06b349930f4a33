//! Console game session: reads intents from a line-based input and
//! renders the game after every change.

use crate::config::{AppConfig, FirstPlayer};
use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Duration;
use tapatan_engine::{GameController, GameMode, GameSnapshot, Phase, Transition};
use tracing::{debug, info, instrument};

const HELP: &str = "\
Commands:
  1-9  place a piece, or pick up / drop one of yours while moving
  d    drop the selected piece
  r    start a new game
  h    show this help
  q    quit";

/// A line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Click on the point with this 0-based index.
    Cell(usize),
    /// Clear the selection.
    Deselect,
    /// New game.
    Reset,
    /// Show the commands.
    Help,
    /// Leave the session.
    Quit,
}

impl std::str::FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "d" => Ok(Command::Deselect),
            "r" => Ok(Command::Reset),
            "h" | "?" => Ok(Command::Help),
            "q" => Ok(Command::Quit),
            _ => match s.parse::<usize>() {
                Ok(number @ 1..=9) => Ok(Command::Cell(number - 1)),
                _ => Err(format!("Unknown command {:?}, type h for help", s)),
            },
        }
    }
}

/// Drives one [`GameController`] from a text console.
///
/// Generic over input and output so tests can script a whole game.
pub struct ConsoleSession<R, W> {
    game: GameController,
    first: FirstPlayer,
    think_delay: Duration,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleSession<R, W> {
    /// Creates a session with settings from `config`.
    pub fn new(config: &AppConfig, input: R, output: W) -> Self {
        Self {
            game: GameController::with_settings(config.game_mode(), *config.difficulty()),
            first: *config.first(),
            think_delay: Duration::from_millis(*config.think_delay_ms()),
            input,
            output,
        }
    }

    /// Consumes the session and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Plays until the player quits or the input ends.
    ///
    /// Returns the final snapshot.
    #[instrument(skip(self), fields(mode = ?self.game.mode(), difficulty = %self.game.difficulty()))]
    pub fn run(&mut self) -> Result<GameSnapshot> {
        info!("Starting console session");
        writeln!(self.output, "Tapatan. Type h for help.")?;
        self.start_game()?;

        loop {
            if self.game.is_computer_turn() {
                self.computer_turn()?;
                continue;
            }

            let snapshot = self.game.snapshot();
            self.prompt(&snapshot)?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                debug!("Input closed");
                break;
            }
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(Command::Help) => writeln!(self.output, "{}", HELP)?,
                Ok(Command::Reset) => self.start_game()?,
                Ok(Command::Deselect) => match self.game.select_cell(None) {
                    Ok(_) => writeln!(self.output, "Selection cleared.")?,
                    Err(err) => writeln!(self.output, "{}", err)?,
                },
                Ok(Command::Cell(index)) => self.click(index)?,
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        info!("Console session finished");
        Ok(self.game.snapshot())
    }

    fn start_game(&mut self) -> Result<()> {
        self.game.reset_game();
        let first = self.first.resolve(&mut rand::rng());
        self.game.decide_first_side(first)?;

        if self.first == FirstPlayer::Coin {
            writeln!(self.output, "Coin toss: {} moves first.", first)?;
        } else {
            writeln!(self.output, "{} moves first.", first)?;
        }
        if let GameMode::SinglePlayer { computer } = self.game.mode() {
            writeln!(
                self.output,
                "Playing against the computer ({}, {}).",
                computer,
                self.game.difficulty().label()
            )?;
        }
        self.render()
    }

    fn click(&mut self, index: usize) -> Result<()> {
        match self.game.place_or_move(index) {
            Ok(Transition::Selected(pos)) => {
                let targets = self
                    .game
                    .state()
                    .destinations()
                    .iter()
                    .map(|to| (to.to_index() + 1).to_string())
                    .collect::<Vec<_>>();
                if targets.is_empty() {
                    writeln!(self.output, "Picked up {}; it is blocked.", pos.to_index() + 1)?;
                } else {
                    writeln!(
                        self.output,
                        "Picked up {}; it can go to {}.",
                        pos.to_index() + 1,
                        targets.join(", ")
                    )?;
                }
                Ok(())
            }
            Ok(Transition::Deselected) => {
                writeln!(self.output, "Selection cleared.")?;
                Ok(())
            }
            Ok(Transition::Placed(_) | Transition::Moved { .. }) => self.render(),
            Err(err) => {
                writeln!(self.output, "{}", err)?;
                Ok(())
            }
        }
    }

    fn computer_turn(&mut self) -> Result<()> {
        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }
        match self.game.play_computer_turn()? {
            Some(mv) => {
                writeln!(self.output, "Computer plays {}.", describe_move(mv))?;
                self.render()
            }
            None => anyhow::bail!("Computer had no move in phase {}", self.game.phase()),
        }
    }

    fn render(&mut self) -> Result<()> {
        let snapshot = self.game.snapshot();
        writeln!(self.output)?;
        writeln!(self.output, "{}", snapshot.board.display())?;
        writeln!(
            self.output,
            "Pieces in hand: X {}, O {}",
            snapshot.remaining.x, snapshot.remaining.o
        )?;
        if let Some(line) = snapshot.winning_line() {
            let points = line.map(|pos| (pos.to_index() + 1).to_string());
            writeln!(self.output, "Winning line: {}", points.join("-"))?;
        }
        if let Some(outcome) = snapshot.outcome {
            if outcome.is_draw() {
                writeln!(self.output, "No piece can move.")?;
            }
            writeln!(self.output, "{}. Type r for a new game or q to quit.", outcome)?;
        }
        Ok(())
    }

    fn prompt(&mut self, snapshot: &GameSnapshot) -> Result<()> {
        match (snapshot.phase, snapshot.to_move) {
            (Phase::Placing, Some(player)) => write!(self.output, "{} to place> ", player)?,
            (Phase::Moving, Some(player)) => match snapshot.selection {
                Some(pos) => write!(self.output, "{} to move {}> ", player, pos.to_index() + 1)?,
                None => write!(self.output, "{} to move> ", player)?,
            },
            _ => write!(self.output, "> ")?,
        }
        self.output.flush()?;
        Ok(())
    }
}

/// Move in the 1-based numbering shown on the board.
fn describe_move(mv: tapatan_engine::Move) -> String {
    match mv.from {
        None => (mv.to.to_index() + 1).to_string(),
        Some(from) => format!("{} to {}", from.to_index() + 1, mv.to.to_index() + 1),
    }
}
