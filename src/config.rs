//! Application configuration loaded from `tapatan.toml`.

use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tapatan_engine::{Difficulty, GameMode, Player};
use tracing::{debug, info, instrument};

/// Default configuration file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "tapatan.toml";

/// Who sits at the keyboard.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ModeChoice {
    /// Human against the computer.
    #[default]
    Single,
    /// Two humans on one keyboard.
    Multi,
}

/// How the first side is chosen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FirstPlayer {
    /// X always starts.
    X,
    /// O always starts.
    O,
    /// A fair coin decides.
    #[default]
    Coin,
}

impl FirstPlayer {
    /// Resolves the choice to a side, tossing the coin if needed.
    pub fn resolve(self, rng: &mut impl Rng) -> Player {
        match self {
            FirstPlayer::X => Player::X,
            FirstPlayer::O => Player::O,
            FirstPlayer::Coin if rng.random_bool(0.5) => Player::X,
            FirstPlayer::Coin => Player::O,
        }
    }
}

/// Settings for a console game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Computer strength.
    difficulty: Difficulty,

    /// Single player or local multiplayer.
    mode: ModeChoice,

    /// Side the computer plays in single-player mode.
    computer: Player,

    /// Who moves first.
    first: FirstPlayer,

    /// Cosmetic pause before each computer move, in milliseconds.
    think_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::default(),
            mode: ModeChoice::default(),
            computer: Player::O,
            first: FirstPlayer::default(),
            think_delay_ms: 0,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(difficulty = %config.difficulty, mode = %config.mode, "Config loaded successfully");
        Ok(config)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads `path` if given, else [`DEFAULT_CONFIG_FILE`] when it exists,
    /// else the defaults.
    ///
    /// An explicitly named file must exist.
    #[instrument]
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(DEFAULT_CONFIG_FILE),
            None => {
                debug!("No config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Replaces settings with any values given on the command line.
    pub fn with_overrides(
        mut self,
        difficulty: Option<Difficulty>,
        mode: Option<ModeChoice>,
        computer: Option<Player>,
        first: Option<FirstPlayer>,
    ) -> Self {
        if let Some(difficulty) = difficulty {
            self.difficulty = difficulty;
        }
        if let Some(mode) = mode {
            self.mode = mode;
        }
        if let Some(computer) = computer {
            self.computer = computer;
        }
        if let Some(first) = first {
            self.first = first;
        }
        self
    }

    /// Engine mode for these settings.
    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeChoice::Single => GameMode::SinglePlayer {
                computer: self.computer,
            },
            ModeChoice::Multi => GameMode::Multiplayer,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(*config.difficulty(), Difficulty::Medium);
        assert_eq!(
            config.game_mode(),
            GameMode::SinglePlayer {
                computer: Player::O
            }
        );
    }

    #[test]
    fn test_overrides_win() {
        let config = AppConfig::from_toml("difficulty = \"easy\"\nmode = \"single\"").unwrap();
        let config = config.with_overrides(Some(Difficulty::Hard), Some(ModeChoice::Multi), None, None);
        assert_eq!(*config.difficulty(), Difficulty::Hard);
        assert_eq!(config.game_mode(), GameMode::Multiplayer);
        assert_eq!(*config.first(), FirstPlayer::Coin);
    }

    #[test]
    fn test_fixed_first_player_ignores_coin() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(FirstPlayer::X.resolve(&mut rng), Player::X);
        assert_eq!(FirstPlayer::O.resolve(&mut rng), Player::O);
    }

    #[test]
    fn test_coin_lands_on_both_sides() {
        let mut rng = StdRng::seed_from_u64(42);
        let tosses: Vec<Player> = (0..64).map(|_| FirstPlayer::Coin.resolve(&mut rng)).collect();
        assert!(tosses.contains(&Player::X));
        assert!(tosses.contains(&Player::O));
    }

    #[test]
    fn test_unknown_key_is_error() {
        let err = AppConfig::from_toml("colour = \"blue\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
    }
}
