//! Per-session state carried between turns by the caller.

use crate::phases::{Difficulty, GamePhase};
use crate::types::{Board, Mark};
use derive_getters::Getters;
use derive_setters::Setters;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Everything the handler needs to resume a session.
///
/// The caller owns this value and persists it between turns; the handler
/// takes it by value and returns the next one.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize, JsonSchema)]
#[setters(prefix = "with_")]
pub struct SessionState {
    /// Current lifecycle stage.
    #[serde(default)]
    phase: GamePhase,
    /// Mark used by the person playing.
    player: Mark,
    /// Mark used by the handler.
    opponent: Mark,
    /// Strength of the handler's play.
    #[serde(default)]
    difficulty: Difficulty,
    /// The board.
    #[serde(default)]
    board: Board,
    /// Last regular message spoken to the player.
    #[serde(default)]
    last_output: String,
    /// Last reprompt given to the player.
    #[serde(default)]
    last_reprompt: String,
}

impl SessionState {
    /// Fresh session with the player on X.
    pub fn new() -> Self {
        Self::for_player(Mark::X)
    }

    /// Fresh session with the player on `player` and the handler on the other mark.
    #[instrument]
    pub fn for_player(player: Mark) -> Self {
        Self {
            phase: GamePhase::SelectingDifficulty,
            player,
            opponent: player.opponent(),
            difficulty: Difficulty::Medium,
            board: Board::new(),
            last_output: String::new(),
            last_reprompt: String::new(),
        }
    }

    /// Same marks, everything else back to the start.
    pub fn reinitialised(&self) -> Self {
        Self::for_player(self.player)
    }

    /// Checks that the two sides hold distinct marks and the board counts agree.
    pub fn is_well_formed(&self) -> bool {
        if self.player == self.opponent {
            warn!(player = %self.player, "Player and opponent share a mark");
            return false;
        }
        self.board.is_consistent()
    }

    /// Records the message and reprompt as the ones to repeat later.
    pub fn remember(mut self, output: impl Into<String>, reprompt: impl Into<String>) -> Self {
        self.last_output = output.into();
        self.last_reprompt = reprompt.into();
        self
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
