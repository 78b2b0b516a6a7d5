//! Events driving the session state machine.
//!
//! Slot values arrive already resolved to text; validation happens in the
//! handler so bad values can be answered with a reprompt.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Event {
    /// Session opened without a specific request.
    Launch,
    /// Player names a difficulty.
    SelectDifficulty(String),
    /// Yes (`true`) or no (`false`).
    ConfirmFirst(bool),
    /// Player places a mark on the named square.
    PlayerMove(String),
    /// Player asks what is on the named square.
    CheckSquare(String),
    /// Player asks for the whole board.
    CheckBoard,
    /// Start over from difficulty selection.
    Restart,
    /// Explain how to play.
    Help,
    /// Leave the session.
    Cancel,
    /// Intent the handler has no behavior for.
    Unrecognized(String),
}

impl Event {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Event::Launch => "Launch",
            Event::SelectDifficulty(_) => "SelectDifficulty",
            Event::ConfirmFirst(true) => "Yes",
            Event::ConfirmFirst(false) => "No",
            Event::PlayerMove(_) => "PlayerMove",
            Event::CheckSquare(_) => "CheckSquare",
            Event::CheckBoard => "CheckBoard",
            Event::Restart => "Restart",
            Event::Help => "Help",
            Event::Cancel => "Cancel",
            Event::Unrecognized(_) => "Unrecognized",
        }
    }
}
