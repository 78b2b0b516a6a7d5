//! Full-board and draw detection.

use super::win::winner;
use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if every square 1..=9 is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// A full board with no winner.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && winner(board).is_none()
}
