//! Win detection.

use crate::types::{Board, Mark, Square};
use tracing::instrument;

/// The eight winning triples (rows, columns, diagonals) as board indices 1..=9.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    // Rows
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    // Columns
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    // Diagonals
    [1, 5, 9],
    [3, 5, 7],
];

/// Checks whether `mark` occupies all three squares of any winning line.
#[instrument(skip(board))]
pub fn is_winner(board: &Board, mark: Mark) -> bool {
    WINNING_LINES.iter().any(|line| {
        line.iter()
            .all(|&i| board.cell(i) == Some(Square::Occupied(mark)))
    })
}

/// Returns the mark holding a complete line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Mark> {
    [Mark::X, Mark::O]
        .into_iter()
        .find(|&mark| is_winner(board, mark))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!is_winner(&board, Mark::X));
        assert!(!is_winner(&board, Mark::O));
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_every_line_wins_for_its_mark_only() {
        for mark in [Mark::X, Mark::O] {
            for line in WINNING_LINES {
                let mut board = Board::new();
                for index in line {
                    board = board.place(mark, index).unwrap();
                }
                assert!(is_winner(&board, mark), "{line:?} should win for {mark}");
                assert!(!is_winner(&board, mark.opponent()));
                assert_eq!(winner(&board), Some(mark));
            }
        }
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_pattern("XX.O.O...");
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::from_pattern("XOX......");
        assert!(!is_winner(&board, Mark::X));
    }
}
