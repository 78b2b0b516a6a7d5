//! Session phases, difficulty tiers and game outcomes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stage of the session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum GamePhase {
    /// Waiting for easy, medium or hard.
    #[default]
    SelectingDifficulty,
    /// Waiting for the player to say whether they move first.
    SelectingFirstPlayer,
    /// A game is under way and the player is to move.
    Playing,
    /// The game ended; waiting for "play again?".
    Finished,
}

/// Opponent strength.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Heuristic play mixed with random moves.
    #[default]
    Medium,
    /// Heuristic play only.
    Hard,
}

/// How a finished game ended, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Outcome {
    /// The player completed a line.
    PlayerWon,
    /// The opponent completed a line.
    OpponentWon,
    /// Board full with no line.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::PlayerWon => write!(f, "Player wins"),
            Outcome::OpponentWon => write!(f, "Opponent wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
