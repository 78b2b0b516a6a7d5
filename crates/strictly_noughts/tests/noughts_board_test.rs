//! Tests for board, coordinates and terminal detection.

use strictly_noughts::{Board, Coordinate, Mark, Square, WINNING_LINES, is_full, is_winner};
use strum::IntoEnumIterator;

#[test]
fn test_coordinate_index_bijection() {
    for index in 1..=9 {
        let coordinate = Coordinate::from_index(index).expect("valid index");
        assert_eq!(coordinate.index(), index);
    }
    for coordinate in Coordinate::iter() {
        assert_eq!(Coordinate::from_index(coordinate.index()), Some(coordinate));
        assert_eq!(Coordinate::parse(&coordinate.to_string()), Ok(coordinate));
        assert_eq!(
            Coordinate::parse(&coordinate.to_string().to_lowercase()),
            Ok(coordinate)
        );
    }
}

#[test]
fn test_winning_lines_only_for_their_mark() {
    for line in WINNING_LINES {
        for mark in [Mark::X, Mark::O] {
            let board = line
                .iter()
                .try_fold(Board::new(), |board, &i| board.place(mark, i))
                .expect("indices in range");
            assert!(is_winner(&board, mark));
            assert!(!is_winner(&board, mark.opponent()));
        }
    }
}

#[test]
fn test_full_only_when_every_square_taken() {
    let mut board = Board::new();
    for index in 1..=9 {
        assert!(!is_full(&board));
        let mark = if index % 2 == 0 { Mark::O } else { Mark::X };
        board = board.place(mark, index).expect("in range");
    }
    assert!(is_full(&board));
}

#[test]
fn test_place_rejects_out_of_range() {
    let board = Board::new();
    assert!(board.place(Mark::X, 0).is_err());
    assert!(board.place(Mark::X, 10).is_err());
    assert_eq!(board, Board::new());
}

#[test]
fn test_cell_content() {
    let board = Board::from_pattern("x.o......");
    assert_eq!(board.cell(1), Some(Square::Occupied(Mark::X)));
    assert_eq!(board.cell(2), Some(Square::Empty));
    assert_eq!(board.at(Coordinate::A3), Square::Occupied(Mark::O));
    assert!(board.is_cell_empty(2));
    assert!(!board.is_cell_empty(3));
}
