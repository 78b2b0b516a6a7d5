//! Session state machine.
//!
//! `Handler::handle` is a function of `(SessionState, Event)`: it consumes
//! the caller's state and returns the next one inside a [`Reply`]. The only
//! thing the handler keeps between calls is its random source.
//!
//! Phases move `SelectingDifficulty -> SelectingFirstPlayer -> Playing ->
//! Finished`, and back to `SelectingDifficulty` on a rematch or restart.

use crate::engine::MoveEngine;
use crate::error::GameError;
use crate::event::Event;
use crate::phases::{Difficulty, GamePhase, Outcome};
use crate::position::Coordinate;
use crate::random::RandomSource;
use crate::reply::{Message, Reply};
use crate::rules::{is_full, is_winner};
use crate::session::SessionState;
use crate::speech;
use crate::types::{Board, Square};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

/// Drives sessions through their phases.
#[derive(Debug, Clone)]
pub struct Handler<R> {
    engine: MoveEngine,
    rng: R,
}

impl<R: RandomSource> Handler<R> {
    /// Creates a handler with the default engine.
    pub fn new(rng: R) -> Self {
        Self::with_engine(MoveEngine::default(), rng)
    }

    /// Creates a handler with a configured engine.
    pub fn with_engine(engine: MoveEngine, rng: R) -> Self {
        Self { engine, rng }
    }

    /// The engine choosing opponent moves.
    pub fn engine(&self) -> &MoveEngine {
        &self.engine
    }

    /// Handles one event against the caller's state.
    #[instrument(skip(self, state, event), fields(phase = ?state.phase(), event = event.name()))]
    pub fn handle(&mut self, state: SessionState, event: Event) -> Reply {
        let reply = match event {
            Event::Launch | Event::Restart => welcome(state.reinitialised()),
            Event::SelectDifficulty(value) => self.select_difficulty(state, &value),
            Event::ConfirmFirst(answer) => self.confirm(state, answer),
            Event::PlayerMove(value) => self.player_move(state, &value),
            Event::CheckSquare(value) => check_square(state, &value),
            Event::CheckBoard => check_board(state),
            Event::Help => help(state),
            Event::Cancel => self.goodbye(state),
            Event::Unrecognized(name) => not_understood(state, name),
        };
        debug!(
            next_phase = ?reply.state().phase(),
            error = ?reply.error(),
            ends = reply.should_end_session(),
            "Event handled"
        );
        reply
    }

    #[instrument(skip(self, state))]
    fn select_difficulty(&mut self, state: SessionState, value: &str) -> Reply {
        if *state.phase() != GamePhase::SelectingDifficulty {
            return wrong_state(state);
        }

        let value = value.trim().to_lowercase();
        let Ok(difficulty) = Difficulty::from_str(&value) else {
            warn!(%value, "Invalid difficulty");
            let message = speech::invalid_difficulty(&value);
            return say(
                state,
                "Invalid difficulty level",
                message.clone(),
                speech::SELECT_DIFFICULTY,
                message,
            )
            .with_error(GameError::InvalidDifficulty(value));
        };

        info!(%difficulty, "Difficulty selected");
        let message = speech::difficulty_set(&difficulty.to_string());
        say(
            state
                .with_difficulty(difficulty)
                .with_phase(GamePhase::SelectingFirstPlayer),
            "Who goes first?",
            message.clone(),
            speech::WHO_STARTS,
            message,
        )
    }

    #[instrument(skip(self, state))]
    fn confirm(&mut self, state: SessionState, answer: bool) -> Reply {
        match (*state.phase(), answer) {
            (GamePhase::SelectingFirstPlayer, true) => {
                let state = state
                    .with_board(Board::new())
                    .with_phase(GamePhase::Playing);
                let card = speech::with_board(speech::YOU_START, state.board());
                say(
                    state,
                    "Your move",
                    speech::YOU_START.to_string(),
                    speech::WHAT_IS_YOUR_MOVE,
                    card,
                )
            }
            (GamePhase::SelectingFirstPlayer, false) => self.opponent_opens(state),
            (GamePhase::Finished, true) => {
                info!("Rematch requested");
                let state = state
                    .with_board(Board::new())
                    .with_phase(GamePhase::SelectingDifficulty);
                say(
                    state,
                    "Select difficulty",
                    speech::SELECT_DIFFICULTY.to_string(),
                    speech::SELECT_DIFFICULTY,
                    speech::SELECT_DIFFICULTY.to_string(),
                )
            }
            (GamePhase::Finished, false) => self.goodbye(state),
            (phase, answer) => {
                debug!(?phase, answer, "Unsolicited confirmation");
                let prefix = if answer {
                    speech::UNSOLICITED_YES
                } else {
                    speech::UNSOLICITED_NO
                };
                let spoken = format!("{prefix}{}", last_output_or_default(&state));
                let reprompt = reprompt_or_default(&state);
                let error = GameError::WrongState(phase);
                side_channel(state, speech::NOT_SURE_TITLE, spoken.clone(), reprompt, spoken)
                    .with_error(error)
            }
        }
    }

    fn opponent_opens(&mut self, state: SessionState) -> Reply {
        let board = Board::new();
        let state = state.with_board(board).with_phase(GamePhase::Playing);
        let Some(at) = self
            .engine
            .choose(&board, *state.opponent(), *state.difficulty(), &mut self.rng)
        else {
            // Only reachable with an engine that declines to open.
            warn!("Engine found no move on an empty board");
            let card = speech::with_board(speech::YOU_START, state.board());
            return say(
                state,
                "Your move",
                speech::YOU_START.to_string(),
                speech::WHAT_IS_YOUR_MOVE,
                card,
            );
        };

        let board = board.place_at(*state.opponent(), at);
        info!(%at, "Opponent opens");
        let message = speech::opponent_starts(*state.opponent(), at);
        let card = speech::with_board(&message, &board);
        say(
            state.with_board(board),
            "Your move",
            message,
            speech::WHAT_IS_YOUR_MOVE,
            card,
        )
    }

    #[instrument(skip(self, state))]
    fn player_move(&mut self, state: SessionState, value: &str) -> Reply {
        if *state.phase() != GamePhase::Playing {
            return wrong_state(state);
        }

        let coordinate = match Coordinate::parse(value) {
            Ok(coordinate) => coordinate,
            Err(_) => {
                let shown = value.trim().to_uppercase();
                warn!(value = %shown, "Invalid square");
                let card = speech::with_board(
                    "Please select another square. What is your move?",
                    state.board(),
                );
                return say(
                    state,
                    "Invalid move",
                    speech::invalid_square(&shown),
                    speech::WHAT_IS_YOUR_MOVE,
                    card,
                )
                .with_error(GameError::InvalidCoordinate(shown));
            }
        };

        if let Square::Occupied(mark) = state.board().at(coordinate) {
            warn!(%coordinate, %mark, "Square already occupied");
            let message = speech::occupied(coordinate, mark);
            let card = speech::with_board(&message, state.board());
            return say(state, "Your move", message, speech::WHAT_IS_YOUR_MOVE, card)
                .with_error(GameError::CellOccupied { coordinate, mark });
        }

        let player = *state.player();
        let opponent = *state.opponent();
        let board = state.board().place_at(player, coordinate);
        debug!(%coordinate, "Player placed mark");
        board.is_consistent();

        if is_winner(&board, player) {
            return finish(state.with_board(board), Outcome::PlayerWon);
        }
        if is_full(&board) {
            return finish(state.with_board(board), Outcome::Draw);
        }

        let Some(answer) = self
            .engine
            .choose(&board, opponent, *state.difficulty(), &mut self.rng)
        else {
            return finish(state.with_board(board), Outcome::Draw);
        };
        let board = board.place_at(opponent, answer);
        debug!(%answer, "Opponent placed mark");
        board.is_consistent();

        if is_winner(&board, opponent) {
            return finish(state.with_board(board), Outcome::OpponentWon);
        }
        if is_full(&board) {
            return finish(state.with_board(board), Outcome::Draw);
        }

        let message = speech::turn_result(player, coordinate, opponent, answer);
        let card = speech::with_board(&message, &board);
        say(
            state.with_board(board),
            "Your move",
            message,
            speech::WHAT_IS_YOUR_MOVE,
            card,
        )
    }

    fn goodbye(&mut self, state: SessionState) -> Reply {
        let line = speech::GOODBYES[self.rng.pick(speech::GOODBYES.len())];
        info!("Session ending");
        Reply::closing(
            Message::new(
                "Goodbye".to_string(),
                line.to_string(),
                String::new(),
                line.to_string(),
            ),
            state.reinitialised(),
        )
    }
}

/// Regular reply: remembered as the message to repeat later.
fn say(
    state: SessionState,
    title: &str,
    spoken: String,
    reprompt: &str,
    card: String,
) -> Reply {
    let state = state.remember(spoken.clone(), reprompt);
    Reply::open(
        Message::new(title.to_string(), spoken, reprompt.to_string(), card),
        state,
    )
}

/// Side-channel reply: leaves the remembered message untouched.
fn side_channel(
    state: SessionState,
    title: &str,
    spoken: String,
    reprompt: String,
    card: String,
) -> Reply {
    Reply::open(Message::new(title.to_string(), spoken, reprompt, card), state)
}

fn reprompt_or_default(state: &SessionState) -> String {
    if state.last_reprompt().is_empty() {
        speech::default_reprompt(*state.phase()).to_string()
    } else {
        state.last_reprompt().clone()
    }
}

fn last_output_or_default(state: &SessionState) -> String {
    if state.last_output().is_empty() {
        speech::default_reprompt(*state.phase()).to_string()
    } else {
        state.last_output().clone()
    }
}

fn welcome(state: SessionState) -> Reply {
    let spoken = format!("{}{}", speech::WELCOME, speech::SELECT_DIFFICULTY);
    let state = state.remember(speech::SELECT_DIFFICULTY, speech::SELECT_DIFFICULTY);
    Reply::open(
        Message::new(
            speech::WELCOME_TITLE.to_string(),
            spoken.clone(),
            speech::SELECT_DIFFICULTY.to_string(),
            spoken,
        ),
        state,
    )
}

#[instrument(skip(state, outcome), fields(outcome = %outcome))]
fn finish(state: SessionState, outcome: Outcome) -> Reply {
    info!(board = %state.board().render().replace('\n', "/"), "Game finished");
    let (title, message) = match outcome {
        Outcome::PlayerWon => ("You win!", speech::YOU_WIN),
        Outcome::OpponentWon => ("You lose!", speech::YOU_LOSE),
        Outcome::Draw => ("It's a draw!", speech::DRAW),
    };
    let card = speech::with_board(message, state.board());
    say(
        state.with_phase(GamePhase::Finished),
        title,
        message.to_string(),
        speech::PLAY_AGAIN,
        card,
    )
    .with_outcome(outcome)
}

fn check_square(state: SessionState, value: &str) -> Reply {
    if *state.phase() != GamePhase::Playing {
        return wrong_state(state);
    }

    let reprompt = reprompt_or_default(&state);
    match Coordinate::parse(value) {
        Ok(coordinate) => {
            let content = speech::square_content(coordinate, state.board());
            let spoken = format!("{content} {reprompt}");
            let card = format!("{content}\n{reprompt}\n\n{}", state.board().render());
            side_channel(state, "Square Content", spoken, reprompt, card)
        }
        Err(_) => {
            let shown = value.trim().to_uppercase();
            let content = speech::invalid_check(&shown);
            let spoken = format!("{content} {reprompt}");
            let card = format!("{content}\n{reprompt}\n\n{}", state.board().render());
            side_channel(state, "Invalid square", spoken, reprompt, card)
                .with_error(GameError::InvalidCoordinate(shown))
        }
    }
}

fn check_board(state: SessionState) -> Reply {
    if *state.phase() != GamePhase::Playing {
        return wrong_state(state);
    }

    let reprompt = reprompt_or_default(&state);
    let spoken = format!("{}{reprompt}", state.board().describe());
    let card = format!("{}\n{reprompt}", state.board().render());
    side_channel(state, "Board Content", spoken, reprompt, card)
}

fn help(state: SessionState) -> Reply {
    let reprompt = reprompt_or_default(&state);
    let spoken = format!("{}{reprompt}", speech::HELP);
    side_channel(state, "Help", spoken.clone(), reprompt, spoken)
}

fn not_understood(state: SessionState, name: String) -> Reply {
    warn!(intent = %name, "Unrecognized event");
    let spoken = format!("{}{}", speech::NOT_UNDERSTOOD, last_output_or_default(&state));
    let reprompt = reprompt_or_default(&state);
    side_channel(state, speech::NOT_SURE_TITLE, spoken.clone(), reprompt, spoken)
        .with_error(GameError::UnrecognizedEvent(name))
}

fn wrong_state(state: SessionState) -> Reply {
    let phase = *state.phase();
    debug!(?phase, "Event not valid in this phase");
    let reprompt = reprompt_or_default(&state);
    let spoken = format!("{}{reprompt}", speech::WRONG_STATE);
    side_channel(state, "Sorry I cannot do it now", spoken.clone(), reprompt, spoken)
        .with_error(GameError::WrongState(phase))
}
