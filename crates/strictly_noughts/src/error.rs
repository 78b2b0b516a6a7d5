//! Recoverable game errors.
//!
//! None of these end a session. Each is answered by re-asking the
//! question of the current phase.

use crate::phases::GamePhase;
use crate::position::Coordinate;
use crate::types::Mark;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Error raised while handling an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema, derive_more::Display)]
pub enum GameError {
    /// Difficulty value is not easy, medium or hard.
    #[display("{} is not a valid difficulty level", _0)]
    InvalidDifficulty(String),

    /// Text is not one of the nine coordinates.
    #[display("{} is not a valid square", _0)]
    InvalidCoordinate(String),

    /// The chosen square already holds a mark.
    #[display("{} is already occupied by a {}", coordinate, mark.word())]
    CellOccupied {
        /// Square the player asked for.
        coordinate: Coordinate,
        /// Mark found there.
        mark: Mark,
    },

    /// Event does not apply to the current phase.
    #[display("Event not valid in phase {:?}", _0)]
    WrongState(GamePhase),

    /// Intent the handler does not know.
    #[display("Unrecognized event {}", _0)]
    UnrecognizedEvent(String),

    /// Board index outside 1..=9.
    #[display("Board index {} out of range (must be 1-9)", _0)]
    IndexOutOfRange(usize),
}

impl std::error::Error for GameError {}
