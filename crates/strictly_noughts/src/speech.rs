//! Canned phrases for the handler's replies.
//!
//! Spoken strings are plain text. Card strings add the drawn board.

use crate::phases::GamePhase;
use crate::position::Coordinate;
use crate::types::{Board, Mark};

/// Card title of the launch reply.
pub const WELCOME_TITLE: &str = "Welcome to Noughts and Crosses";
/// Greeting preceding the difficulty prompt.
pub const WELCOME: &str = "Welcome to Noughts and Crosses! ";
/// Difficulty question.
pub const SELECT_DIFFICULTY: &str = "Please select difficulty: easy, medium or hard. ";
/// First-player question.
pub const WHO_STARTS: &str = "Who should go first, do you want to make the first move? Say yes or no. ";
/// Move question.
pub const WHAT_IS_YOUR_MOVE: &str = "What is your move? Say row followed by column, for example A1. ";
/// Rematch question.
pub const PLAY_AGAIN: &str = "Do you want to play again? ";
/// Fallback reprompt for a finished game.
pub const SAY_SOMETHING_ELSE: &str = "Try to say something else";

/// Rules explanation read by the help reply.
pub const HELP: &str = "Noughts and crosses is a game played on a 3 by 3 square board, on which two players place noughts and crosses in turns. \
Whoever first places 3 of the same marks in a line, wins. Rows are marked: A, B and C, and columns: 1, 2 and 3. \
During your turn, you say in which square you want to place your mark, for example A2 or C3. \
You can also ask to check what is already in a given square by saying check square, \
check what's on the entire board by saying check board, restart the game or quit. ";

/// Goodbye lines; one is chosen at random.
pub const GOODBYES: [&str; 4] = [
    "OK then... Goodbye for now! ",
    "Bye bye, come back soon! ",
    "I will be a bit sad while you are gone, so come back soon. Goodbye! ",
    "Thank you and talk to you later! ",
];

/// Reprompt used when nothing has been stored for the phase yet.
pub fn default_reprompt(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::SelectingDifficulty => SELECT_DIFFICULTY,
        GamePhase::SelectingFirstPlayer => WHO_STARTS,
        GamePhase::Playing => WHAT_IS_YOUR_MOVE,
        GamePhase::Finished => SAY_SOMETHING_ELSE,
    }
}

/// Joins a message with the board drawing for the card.
pub fn with_board(message: &str, board: &Board) -> String {
    format!("{}\n\n{}", message.trim_end(), board.render())
}

/// Confirmation after choosing a difficulty.
pub fn difficulty_set(difficulty: &str) -> String {
    format!("Difficulty set to {difficulty}. Do you want to make the first move?")
}

/// Reply to a difficulty outside easy, medium and hard.
pub fn invalid_difficulty(value: &str) -> String {
    let value = if value.is_empty() { "This" } else { value };
    format!("{value} is not a valid difficulty level. Please select difficulty: easy, medium or hard.")
}

/// Reply to a move naming no real square.
pub fn invalid_square(value: &str) -> String {
    format!(
        "{} is not a valid square. Please select another square. What is your move?",
        or_nothing(value)
    )
}

/// Reply to a move on an occupied square.
pub fn occupied(coordinate: Coordinate, mark: Mark) -> String {
    format!(
        "{coordinate} is already occupied by a {}. Please select another square. What is your move?",
        mark.word()
    )
}

/// Reply when the handler opens the game.
pub fn opponent_starts(opponent: Mark, at: Coordinate) -> String {
    format!("I start and place a {} in {at}. What is your move?", opponent.word())
}

/// Reply after an ordinary exchange of moves.
pub fn turn_result(player: Mark, played: Coordinate, opponent: Mark, answered: Coordinate) -> String {
    format!(
        "You place a {} in {played}. I place a {} in {answered}. What is your next move?",
        player.word(),
        opponent.word()
    )
}

/// Player completed a line.
pub const YOU_WIN: &str = "Congratulations, you win! Do you want to play again? ";
/// Handler completed a line.
pub const YOU_LOSE: &str = "I win, you lose! Thank you for the good game. Do you want to play again? ";
/// Board filled without a line.
pub const DRAW: &str = "It's a draw, nobody won! Do you want to play again? ";

/// Player opens the game.
pub const YOU_START: &str = "You start. What is your first move?";

/// Spoken content of a single square.
pub fn square_content(coordinate: Coordinate, board: &Board) -> String {
    format!("{coordinate} is {}.", board.at(coordinate).spoken())
}

/// Reply to checking a square that does not exist.
pub fn invalid_check(value: &str) -> String {
    format!("{} is not a valid square to check.", or_nothing(value))
}

/// Prefix for an unexpected yes.
pub const UNSOLICITED_YES: &str = "I am glad you agree with me, but not sure what you want me to do. ";
/// Prefix for an unexpected no.
pub const UNSOLICITED_NO: &str = "I am not sure why you said no. ";
/// Prefix for an unknown request.
pub const NOT_UNDERSTOOD: &str = "I am sorry but I did not understand what you wanted me to do. ";
/// Prefix for a request out of phase.
pub const WRONG_STATE: &str = "Sorry I cannot do that right now. ";
/// Card title shared by the unsure replies.
pub const NOT_SURE_TITLE: &str = "Not sure what you want me to do";

fn or_nothing(value: &str) -> &str {
    if value.is_empty() { "Nothing" } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_difficulty_names_value() {
        assert!(invalid_difficulty("silly").starts_with("silly is not"));
        assert!(invalid_difficulty("").starts_with("This is not"));
    }

    #[test]
    fn test_turn_result() {
        let text = turn_result(Mark::X, Coordinate::B2, Mark::O, Coordinate::A3);
        assert_eq!(
            text,
            "You place a cross in B2. I place a nought in A3. What is your next move?"
        );
    }

    #[test]
    fn test_with_board() {
        let card = with_board("Hello. ", &Board::from_pattern("X........"));
        assert_eq!(card, "Hello.\n\nX~~\n~~~\n~~~\n");
    }
}
