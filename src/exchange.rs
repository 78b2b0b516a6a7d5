//! One request in, one reply out, with the state blob carried by the caller.

use crate::config::SkillConfig;
use crate::intent::{IntentRequest, RequestError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strictly_noughts::{Event, Handler, RandomSource, Reply, SessionState};
use tracing::{info, instrument};

/// Adapter request: the intent plus the state returned by the previous turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Exchange {
    /// Intent to handle.
    pub request: IntentRequest,
    /// State from the previous reply; absent on a new session.
    #[serde(default)]
    pub state: Option<SessionState>,
}

impl Exchange {
    /// Decodes the intent and runs it through the handler.
    #[instrument(skip(self, handler, config), fields(intent = %self.request.name))]
    pub fn run<R: RandomSource>(
        self,
        handler: &mut Handler<R>,
        config: &SkillConfig,
    ) -> Result<Reply, RequestError> {
        let event = Event::try_from(self.request)?;
        let state = match self.state {
            Some(state) => well_formed(state)?,
            None => config.new_session(),
        };
        let reply = handler.handle(state, event);
        info!(
            title = %reply.title(),
            phase = ?reply.state().phase(),
            ends = reply.should_end_session(),
            "Exchange complete"
        );
        Ok(reply)
    }

    /// Parses a JSON exchange, runs it and encodes the reply as JSON.
    #[instrument(skip_all)]
    pub fn run_json<R: RandomSource>(
        input: &str,
        handler: &mut Handler<R>,
        config: &SkillConfig,
    ) -> anyhow::Result<String> {
        let exchange: Exchange = serde_json::from_str(input)?;
        let reply = exchange.run(handler, config)?;
        Ok(serde_json::to_string_pretty(&reply)?)
    }
}

fn well_formed(state: SessionState) -> Result<SessionState, RequestError> {
    if state.is_well_formed() {
        Ok(state)
    } else {
        Err(RequestError::new(format!(
            "Malformed session state: player {} against {} on board {}",
            state.player(),
            state.opponent(),
            state.board().render().trim_end().replace('\n', "/")
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_noughts::{Board, GamePhase, ScriptedRandom};

    #[test]
    fn test_new_session_when_state_absent() {
        let mut handler = Handler::new(ScriptedRandom::new());
        let exchange = Exchange {
            request: IntentRequest::named("SelectDifficulty").with_slot("Difficulty", "medium"),
            state: None,
        };
        let reply = exchange.run(&mut handler, &SkillConfig::default()).unwrap();
        assert_eq!(*reply.state().phase(), GamePhase::SelectingFirstPlayer);
    }

    #[test]
    fn test_json_round() {
        let mut handler = Handler::new(ScriptedRandom::new());
        let input = r#"{"request":{"name":"LaunchRequest"}}"#;
        let output = Exchange::run_json(input, &mut handler, &SkillConfig::default()).unwrap();
        let reply: Reply = serde_json::from_str(&output).unwrap();
        assert!(reply.spoken().starts_with("Welcome"));
    }

    #[test]
    fn test_shared_mark_state_is_rejected() {
        let mut handler = Handler::new(ScriptedRandom::new());
        let input = r#"{
            "request": {"name": "PlayerMove", "slots": {"Move": "B2"}},
            "state": {"phase": "Playing", "player": "X", "opponent": "X", "difficulty": "hard"}
        }"#;
        let exchange: Exchange = serde_json::from_str(input).unwrap();
        let err = exchange.run(&mut handler, &SkillConfig::default()).unwrap_err();
        assert!(err.message.contains("Malformed session state"));
    }

    #[test]
    fn test_inconsistent_board_is_rejected() {
        let mut handler = Handler::new(ScriptedRandom::new());
        let state = SessionState::new()
            .with_phase(GamePhase::Playing)
            .with_board(Board::from_pattern("XX......."));
        let exchange = Exchange {
            request: IntentRequest::named("PlayerMove").with_slot("Move", "C1"),
            state: Some(state),
        };
        assert!(exchange.run(&mut handler, &SkillConfig::default()).is_err());
    }

    #[test]
    fn test_json_missing_slot_is_error() {
        let mut handler = Handler::new(ScriptedRandom::new());
        let input = r#"{"request":{"name":"PlayerMove"}}"#;
        assert!(Exchange::run_json(input, &mut handler, &SkillConfig::default()).is_err());
    }
}
