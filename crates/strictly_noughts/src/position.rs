//! Board coordinates: row letter A-C followed by column digit 1-3.

use crate::error::GameError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// A square named by row (A, B, C) and column (1, 2, 3).
///
/// Parsing is case-insensitive; display is canonical uppercase.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Coordinate {
    /// Top-left (index 1).
    A1,
    /// Top-center (index 2).
    A2,
    /// Top-right (index 3).
    A3,
    /// Middle-left (index 4).
    B1,
    /// Center (index 5).
    B2,
    /// Middle-right (index 6).
    B3,
    /// Bottom-left (index 7).
    C1,
    /// Bottom-center (index 8).
    C2,
    /// Bottom-right (index 9).
    C3,
}

impl Coordinate {
    /// All nine coordinates in scan order.
    pub const ALL: [Coordinate; 9] = [
        Coordinate::A1,
        Coordinate::A2,
        Coordinate::A3,
        Coordinate::B1,
        Coordinate::B2,
        Coordinate::B3,
        Coordinate::C1,
        Coordinate::C2,
        Coordinate::C3,
    ];

    /// Board index (1..=9).
    pub fn index(self) -> usize {
        match self {
            Coordinate::A1 => 1,
            Coordinate::A2 => 2,
            Coordinate::A3 => 3,
            Coordinate::B1 => 4,
            Coordinate::B2 => 5,
            Coordinate::B3 => 6,
            Coordinate::C1 => 7,
            Coordinate::C2 => 8,
            Coordinate::C3 => 9,
        }
    }

    /// Coordinate for a board index, `None` outside 1..=9.
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|slot| Self::ALL.get(slot))
            .copied()
    }

    /// Parses user input such as `"b2"` or `" C3 "`.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, GameError> {
        Self::from_str(input.trim())
            .map_err(|_| GameError::InvalidCoordinate(input.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for index in 1..=9 {
            let coordinate = Coordinate::from_index(index).unwrap();
            assert_eq!(coordinate.index(), index);
        }
        assert_eq!(Coordinate::from_index(0), None);
        assert_eq!(Coordinate::from_index(10), None);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Coordinate::parse("b2"), Ok(Coordinate::B2));
        assert_eq!(Coordinate::parse(" c3 "), Ok(Coordinate::C3));
        assert_eq!(Coordinate::B2.to_string(), "B2");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            Coordinate::parse("D4"),
            Err(GameError::InvalidCoordinate("D4".to_string()))
        );
        assert!(Coordinate::parse("").is_err());
        assert!(Coordinate::parse("A12").is_err());
    }
}
