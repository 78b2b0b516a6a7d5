//! Strictly Noughts - noughts and crosses for voice sessions
//!
//! Pure game logic for a turn-based noughts and crosses skill: the board,
//! win detection, a heuristic opponent with three difficulty tiers and the
//! session state machine that turns user intents into replies.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid addressed 1..=9, coordinates A1..C3
//! - **Rules**: win, full and draw detection
//! - **Engine**: opponent move choice (win, block, corner, center, side)
//! - **Handler**: `(SessionState, Event) -> Reply`
//!
//! # Example
//!
//! ```
//! use strictly_noughts::{Event, GamePhase, Handler, SessionState, ScriptedRandom};
//!
//! let mut handler = Handler::new(ScriptedRandom::new());
//! let reply = handler.handle(SessionState::new(), Event::SelectDifficulty("hard".into()));
//! assert_eq!(*reply.state().phase(), GamePhase::SelectingFirstPlayer);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
mod event;
mod handler;
mod phases;
mod position;
mod random;
mod reply;
pub mod rules;
mod session;
pub mod speech;
mod testing;
mod types;

pub use engine::{
    ALL_INDICES, CENTER, CORNERS, DEFAULT_MEDIUM_THRESHOLD, MoveEngine, SIDES, completing_move,
    heuristic_move, random_from,
};
pub use error::GameError;
pub use event::Event;
pub use handler::Handler;
pub use phases::{Difficulty, GamePhase, Outcome};
pub use position::Coordinate;
pub use random::RandomSource;
pub use reply::{Message, Reply};
pub use rules::{WINNING_LINES, is_draw, is_full, is_winner, winner};
pub use session::SessionState;
pub use testing::ScriptedRandom;
pub use types::{Board, Mark, Square};
