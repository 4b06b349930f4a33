//! Command-line interface for tapatan.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tapatan::{Board, Difficulty, FirstPlayer, ModeChoice, Player};

/// Tapatan - three-piece alignment game with a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tapatan")]
#[command(about = "Play Tapatan in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on the console
    Play {
        /// Path to a TOML config file (defaults to ./tapatan.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Computer strength: easy, medium or hard
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Single player against the computer, or two players
        #[arg(short, long, value_enum)]
        mode: Option<ModeChoice>,

        /// Side played by the computer
        #[arg(long)]
        computer: Option<Player>,

        /// Who moves first
        #[arg(long, value_enum)]
        first: Option<FirstPlayer>,
    },

    /// Print the computer's choice for a position
    BestMove {
        /// Board as nine cells of X, O and . in row-major order
        #[arg(short, long)]
        board: Board,

        /// Side to search for
        #[arg(short, long)]
        player: Player,

        /// Search strength
        #[arg(short, long, default_value = "hard")]
        difficulty: Difficulty,
    },

    /// Print the JSON schema of the game snapshot
    Schema,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_play_flags_parse() {
        let cli = Cli::try_parse_from([
            "tapatan", "play", "--difficulty", "easy", "--mode", "multi", "--first", "x",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                difficulty,
                mode,
                first,
                computer,
                config,
            } => {
                assert_eq!(difficulty, Some(Difficulty::Easy));
                assert_eq!(mode, Some(ModeChoice::Multi));
                assert_eq!(first, Some(FirstPlayer::X));
                assert_eq!(computer, None);
                assert_eq!(config, None);
            }
            other => panic!("Expected play, got {:?}", other),
        }
    }

    #[test]
    fn test_best_move_parses_board() {
        let cli = Cli::try_parse_from(["tapatan", "best-move", "-b", "XX..O....", "-p", "o"])
            .unwrap();
        match cli.command {
            Command::BestMove {
                board,
                player,
                difficulty,
            } => {
                assert_eq!(board.to_string(), "XX..O....");
                assert_eq!(player, Player::O);
                assert_eq!(difficulty, Difficulty::Hard);
            }
            other => panic!("Expected best-move, got {:?}", other),
        }
    }

    #[test]
    fn test_bad_board_is_rejected() {
        assert!(Cli::try_parse_from(["tapatan", "best-move", "-b", "XX", "-p", "x"]).is_err());
    }
}
