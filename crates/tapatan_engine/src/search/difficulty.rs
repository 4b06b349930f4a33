//! Named strength levels.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Opponent strength.
///
/// The depth limit is the only knob: a deeper search sees further and
/// expands more nodes.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Looks one ply past the candidate move.
    Easy,
    /// Two plies.
    #[default]
    Medium,
    /// Six plies.
    Hard,
}

impl Difficulty {
    /// Maximum search depth below the root move.
    pub fn depth_limit(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 6,
        }
    }

    /// Display name for menus.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}
