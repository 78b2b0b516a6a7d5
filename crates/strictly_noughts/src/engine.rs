//! Opponent move selection.
//!
//! The heuristic plays, in order of priority: an immediate win, a block of
//! the player's immediate win, a random free corner, the center, a random
//! free side. Win and block candidates are tested in scan order 1..=9 and
//! the first hit is taken.

use crate::phases::Difficulty;
use crate::position::Coordinate;
use crate::random::RandomSource;
use crate::rules::is_winner;
use crate::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Corner indices.
pub const CORNERS: [usize; 4] = [1, 3, 7, 9];

/// Center index.
pub const CENTER: usize = 5;

/// Side (edge-middle) indices.
pub const SIDES: [usize; 4] = [2, 4, 6, 8];

/// Every board index in scan order.
pub const ALL_INDICES: [usize; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];

/// Default medium-tier threshold: a roll above it plays randomly.
pub const DEFAULT_MEDIUM_THRESHOLD: u32 = 60;

/// Chooses the opponent's moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEngine {
    /// Medium tier plays a random square when a 0..=100 roll exceeds this.
    medium_random_threshold: u32,
}

impl MoveEngine {
    /// Creates an engine with a custom medium-tier threshold.
    pub fn new(medium_random_threshold: u32) -> Self {
        Self {
            medium_random_threshold,
        }
    }

    /// Medium-tier threshold.
    pub fn medium_random_threshold(&self) -> u32 {
        self.medium_random_threshold
    }

    /// Picks a square for `opponent` on `board`.
    ///
    /// Returns `None` only when the board is full.
    #[instrument(skip(self, board, rng), fields(board = %board.render().replace('\n', "/")))]
    pub fn choose<R: RandomSource + ?Sized>(
        &self,
        board: &Board,
        opponent: Mark,
        difficulty: Difficulty,
        rng: &mut R,
    ) -> Option<Coordinate> {
        let index = match difficulty {
            Difficulty::Hard => heuristic_move(board, opponent, rng),
            Difficulty::Medium => {
                let roll = rng.percent();
                if roll > self.medium_random_threshold {
                    debug!(roll, threshold = self.medium_random_threshold, "Medium tier plays randomly");
                    random_from(board, &ALL_INDICES, rng)
                } else {
                    heuristic_move(board, opponent, rng)
                }
            }
            Difficulty::Easy => random_from(board, &ALL_INDICES, rng),
        };
        let choice = index.and_then(Coordinate::from_index);
        debug!(?choice, "Opponent move chosen");
        choice
    }
}

impl Default for MoveEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIUM_THRESHOLD)
    }
}

/// Full heuristic: win, block, corner, center, side.
#[instrument(skip(board, rng))]
pub fn heuristic_move<R: RandomSource + ?Sized>(
    board: &Board,
    opponent: Mark,
    rng: &mut R,
) -> Option<usize> {
    if let Some(win) = completing_move(board, opponent) {
        debug!(index = win, "Taking winning square");
        return Some(win);
    }

    if let Some(block) = completing_move(board, opponent.opponent()) {
        debug!(index = block, "Blocking player's line");
        return Some(block);
    }

    if let Some(corner) = random_from(board, &CORNERS, rng) {
        return Some(corner);
    }

    if board.is_cell_empty(CENTER) {
        return Some(CENTER);
    }

    random_from(board, &SIDES, rng)
}

/// First empty index (scan order) where placing `mark` wins.
pub fn completing_move(board: &Board, mark: Mark) -> Option<usize> {
    board.empty_indices().into_iter().find(|&index| {
        board
            .place(mark, index)
            .is_ok_and(|simulated| is_winner(&simulated, mark))
    })
}

/// Uniform choice among the empty squares of `candidates`.
pub fn random_from<R: RandomSource + ?Sized>(
    board: &Board,
    candidates: &[usize],
    rng: &mut R,
) -> Option<usize> {
    let free: Vec<usize> = candidates
        .iter()
        .copied()
        .filter(|&i| board.is_cell_empty(i))
        .collect();
    if free.is_empty() {
        return None;
    }
    Some(free[rng.pick(free.len())])
}
