//! Decoding of voice-platform intents into game events.

use derive_more::{Display, Error};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use strictly_noughts::Event;
use tracing::{debug, instrument, warn};

/// Pseudo-intent sent when the skill is opened without a request.
pub const LAUNCH_REQUEST: &str = "LaunchRequest";

/// A named intent with its resolved slot values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
pub struct IntentRequest {
    /// Intent name, e.g. `PlayerMove` or `AMAZON.YesIntent`.
    pub name: String,
    /// Slot name to resolved value.
    #[serde(default)]
    pub slots: BTreeMap<String, String>,
}

impl IntentRequest {
    /// Intent with no slots.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slots: BTreeMap::new(),
        }
    }

    /// Adds a slot value.
    pub fn with_slot(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.slots.insert(slot.into(), value.into());
        self
    }

    fn slot(&self, slot: &'static str) -> Result<String, RequestError> {
        self.slots.get(slot).cloned().ok_or_else(|| {
            warn!(intent = %self.name, slot, "Missing required slot");
            RequestError::new(format!("Intent {} is missing slot {}", self.name, slot))
        })
    }
}

impl TryFrom<IntentRequest> for Event {
    type Error = RequestError;

    #[instrument(skip(request), fields(intent = %request.name))]
    fn try_from(request: IntentRequest) -> Result<Self, Self::Error> {
        let event = match request.name.as_str() {
            LAUNCH_REQUEST => Event::Launch,
            "SelectDifficulty" => Event::SelectDifficulty(request.slot("Difficulty")?),
            "PlayerMove" => Event::PlayerMove(request.slot("Move")?),
            "CheckSquare" => Event::CheckSquare(request.slot("Square")?),
            "CheckBoard" => Event::CheckBoard,
            "AMAZON.StartOverIntent" | "AMAZON.RepeatIntent" => Event::Restart,
            "AMAZON.HelpIntent" => Event::Help,
            "AMAZON.YesIntent" => Event::ConfirmFirst(true),
            "AMAZON.NoIntent" => Event::ConfirmFirst(false),
            "AMAZON.CancelIntent" | "AMAZON.StopIntent" => Event::Cancel,
            other => Event::Unrecognized(other.to_string()),
        };
        debug!(event = event.name(), "Intent decoded");
        Ok(event)
    }
}

/// Malformed request from the adapter.
#[derive(Debug, Clone, Display, Error)]
#[display("Request error: {} at {}:{}", message, file, line)]
pub struct RequestError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl RequestError {
    /// Creates a new request error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_slots() {
        let event = Event::try_from(IntentRequest::named("PlayerMove").with_slot("Move", "b2")).unwrap();
        assert_eq!(event, Event::PlayerMove("b2".to_string()));
    }

    #[test]
    fn test_decode_builtins() {
        let cases = [
            ("AMAZON.YesIntent", Event::ConfirmFirst(true)),
            ("AMAZON.NoIntent", Event::ConfirmFirst(false)),
            ("AMAZON.StopIntent", Event::Cancel),
            ("AMAZON.RepeatIntent", Event::Restart),
            (LAUNCH_REQUEST, Event::Launch),
            ("Dance", Event::Unrecognized("Dance".to_string())),
        ];
        for (name, expected) in cases {
            assert_eq!(Event::try_from(IntentRequest::named(name)).unwrap(), expected);
        }
    }

    #[test]
    fn test_missing_slot_fails_fast() {
        let err = Event::try_from(IntentRequest::named("SelectDifficulty")).unwrap_err();
        assert!(err.message.contains("Difficulty"));
    }
}
