//! Game rules for noughts and crosses.
//!
//! Pure functions evaluating terminal conditions of a board. Rules are
//! kept apart from board storage so the move engine can probe simulated
//! boards with the same checks the state machine uses.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WINNING_LINES, is_winner, winner};
