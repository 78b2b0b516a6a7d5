//! Result descriptor handed to the adapter layer.

use crate::error::GameError;
use crate::phases::Outcome;
use crate::session::SessionState;
use derive_getters::Getters;
use derive_new::new;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Text the adapter speaks and displays for one turn.
#[derive(Debug, Clone, PartialEq, Eq, new, Serialize, Deserialize, JsonSchema)]
pub struct Message {
    /// Card heading.
    pub title: String,
    /// Spoken text.
    pub spoken: String,
    /// Text repeated if the player stays silent.
    pub reprompt: String,
    /// Text shown on the card, usually with the board drawn.
    pub card: String,
}

/// Outcome of handling one event.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, JsonSchema)]
pub struct Reply {
    /// Card heading.
    title: String,
    /// Spoken text, free of speech markup.
    spoken: String,
    /// Reprompt text; empty when the session ends.
    reprompt: String,
    /// Card text.
    card: String,
    /// Whether the adapter should close the session.
    should_end_session: bool,
    /// State to persist for the next turn.
    state: SessionState,
    /// Recoverable error that produced this reply, if any.
    error: Option<GameError>,
    /// Set when this turn finished a game.
    outcome: Option<Outcome>,
}

impl Reply {
    /// Reply that keeps the session open.
    pub fn open(message: Message, state: SessionState) -> Self {
        Self {
            title: message.title,
            spoken: message.spoken,
            reprompt: message.reprompt,
            card: message.card,
            should_end_session: false,
            state,
            error: None,
            outcome: None,
        }
    }

    /// Reply that closes the session.
    pub fn closing(message: Message, state: SessionState) -> Self {
        Self {
            should_end_session: true,
            ..Self::open(message, state)
        }
    }

    /// Attaches the error that caused a reprompt.
    pub fn with_error(mut self, error: GameError) -> Self {
        self.error = Some(error);
        self
    }

    /// Attaches a finished game's outcome.
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    /// Consumes the reply, keeping only the next state.
    pub fn into_state(self) -> SessionState {
        self.state
    }
}
