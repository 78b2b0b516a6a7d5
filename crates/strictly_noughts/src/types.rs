//! Core domain types for noughts and crosses.

use crate::error::GameError;
use crate::position::Coordinate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Mark placed by one side of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Mark {
    /// Cross.
    X,
    /// Nought.
    O,
}

impl Mark {
    /// Returns the other side's mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Spoken name of the mark.
    pub fn word(self) -> &'static str {
        match self {
            Mark::X => "cross",
            Mark::O => "nought",
        }
    }

    /// Single-character symbol used in board drawings.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square holding a mark.
    Occupied(Mark),
}

impl Square {
    /// Spoken description, e.g. "a cross" or "free".
    pub fn spoken(self) -> String {
        match self {
            Square::Empty => "free".to_string(),
            Square::Occupied(mark) => format!("a {}", mark.word()),
        }
    }
}

/// 3x3 board addressed by indices 1..=9 in row-major order.
///
/// Index 1 is A1 (top-left) and index 9 is C3 (bottom-right).
/// Boards are plain values: `place` returns a new board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Board {
    /// Squares in row-major order; slot `i` holds board index `i + 1`.
    squares: [Square; 9],
}

impl Board {
    /// Number of squares on the board.
    pub const SIZE: usize = 9;

    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from a row-major pattern such as `"OX.~X..O."`.
    ///
    /// `X` and `O` (any case) are marks; every other character is empty.
    /// Only the first nine characters are read.
    pub fn from_pattern(pattern: &str) -> Self {
        let mut board = Self::new();
        for (slot, ch) in pattern.chars().take(Self::SIZE).enumerate() {
            board.squares[slot] = match ch.to_ascii_uppercase() {
                'X' => Square::Occupied(Mark::X),
                'O' => Square::Occupied(Mark::O),
                _ => Square::Empty,
            };
        }
        board
    }

    /// Content of the square at `index` (1..=9), `None` when out of range.
    pub fn cell(&self, index: usize) -> Option<Square> {
        index
            .checked_sub(1)
            .and_then(|slot| self.squares.get(slot))
            .copied()
    }

    /// Content of the square at a coordinate.
    pub fn at(&self, coordinate: Coordinate) -> Square {
        self.squares[coordinate.index() - 1]
    }

    /// Checks if the square at `index` is empty. Out-of-range indices are never empty.
    pub fn is_cell_empty(&self, index: usize) -> bool {
        matches!(self.cell(index), Some(Square::Empty))
    }

    /// Returns a copy of the board with `mark` placed at `index` (1..=9).
    ///
    /// Occupancy is not checked here; callers validate before placing.
    #[instrument(skip(self))]
    pub fn place(&self, mark: Mark, index: usize) -> Result<Board, GameError> {
        if !(1..=Self::SIZE).contains(&index) {
            warn!(index, "Placement outside the board");
            return Err(GameError::IndexOutOfRange(index));
        }
        let mut next = *self;
        next.squares[index - 1] = Square::Occupied(mark);
        Ok(next)
    }

    /// Returns a copy of the board with `mark` placed at `coordinate`.
    pub fn place_at(&self, mark: Mark, coordinate: Coordinate) -> Board {
        let mut next = *self;
        next.squares[coordinate.index() - 1] = Square::Occupied(mark);
        next
    }

    /// Empty board indices in scan order 1..=9.
    pub fn empty_indices(&self) -> Vec<usize> {
        (1..=Self::SIZE).filter(|&i| self.is_cell_empty(i)).collect()
    }

    /// Number of squares holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(mark))
            .count()
    }

    /// Checks that the two sides' mark counts differ by at most one.
    pub fn is_consistent(&self) -> bool {
        let crosses = self.count(Mark::X);
        let noughts = self.count(Mark::O);
        let valid = crosses.abs_diff(noughts) <= 1;
        if !valid {
            warn!(crosses, noughts, "Board consistency violated");
        }
        valid
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Draws the board as three lines of symbols, `~` marking empty squares.
    pub fn render(&self) -> String {
        let mut result = String::with_capacity(12);
        for row in self.squares.chunks(3) {
            for square in row {
                result.push(match square {
                    Square::Empty => '~',
                    Square::Occupied(mark) => mark.symbol(),
                });
            }
            result.push('\n');
        }
        result
    }

    /// Spoken listing of every square, e.g. "A1 is a nought. A2 is free. ...".
    pub fn describe(&self) -> String {
        Coordinate::ALL
            .iter()
            .map(|&c| format!("{} is {}. ", c, self.at(c).spoken()))
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
