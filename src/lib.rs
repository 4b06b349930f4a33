//! Tapatan in the terminal.
//!
//! This library wraps [`tapatan_engine`] with the pieces a console front
//! end needs.
//!
//! # Architecture
//!
//! - **Config**: TOML settings with command-line overrides
//! - **Session**: line-based console loop driving a [`GameController`]
//! - **Analysis**: one-shot search on a board given in compact notation
//!
//! # Example
//!
//! ```
//! use tapatan::{AppConfig, ConsoleSession};
//!
//! let config = AppConfig::from_toml("mode = \"multi\"\nfirst = \"x\"").unwrap();
//! let input = "5\nq\n".as_bytes();
//! let mut session = ConsoleSession::new(&config, input, Vec::new());
//! let snapshot = session.run().unwrap();
//! assert_eq!(snapshot.remaining.x, 2);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod analysis;
mod config;
mod session;

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE, FirstPlayer, ModeChoice};

// Crate-level exports - Console session
pub use session::{Command, ConsoleSession};

// Crate-level exports - Analysis
pub use analysis::{Analysis, analyze};

// Crate-level exports - Engine
pub use tapatan_engine::*;
