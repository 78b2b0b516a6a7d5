//! End-to-end session tests with scripted randomness.

use strictly_noughts::{
    Board, Coordinate, Event, GameError, GamePhase, Handler, Mark, Outcome, ScriptedRandom,
    SessionState, Square,
};

fn play(
    handler: &mut Handler<ScriptedRandom>,
    state: SessionState,
    event: Event,
) -> strictly_noughts::Reply {
    handler.handle(state, event)
}

fn mv(square: &str) -> Event {
    Event::PlayerMove(square.to_string())
}

/// Hard game where the handler opens and the player holds it to a draw.
#[test]
fn test_hard_game_ends_in_draw() {
    let mut handler = Handler::new(ScriptedRandom::new());
    let reply = play(&mut handler, SessionState::new(), Event::Launch);
    let reply = play(
        &mut handler,
        reply.into_state(),
        Event::SelectDifficulty("hard".to_string()),
    );
    assert_eq!(*reply.state().phase(), GamePhase::SelectingFirstPlayer);

    let reply = play(&mut handler, reply.into_state(), Event::ConfirmFirst(false));
    assert_eq!(*reply.state().phase(), GamePhase::Playing);
    assert_eq!(reply.state().board().at(Coordinate::A1), Square::Occupied(Mark::O));

    // Player centers; opponent takes the next free corner A3
    let reply = play(&mut handler, reply.into_state(), mv("B2"));
    assert_eq!(*reply.state().board(), Board::from_pattern("O.O.X...."));

    // Player blocks A2; opponent blocks C2
    let reply = play(&mut handler, reply.into_state(), mv("a2"));
    assert_eq!(*reply.state().board(), Board::from_pattern("OXO.X..O."));

    // Player takes B1; opponent blocks B3
    let reply = play(&mut handler, reply.into_state(), mv("B1"));
    assert_eq!(*reply.state().board(), Board::from_pattern("OXOXXO.O."));
    assert_eq!(*reply.state().phase(), GamePhase::Playing);

    // Player takes C3; opponent fills C1 and the board is full
    let reply = play(&mut handler, reply.into_state(), mv("C3"));
    assert_eq!(*reply.state().board(), Board::from_pattern("OXOXXOOOX"));
    assert_eq!(*reply.state().phase(), GamePhase::Finished);
    assert_eq!(reply.outcome(), &Some(Outcome::Draw));
}

/// Same opening, but the player leaves the right column open.
#[test]
fn test_hard_game_ends_in_loss() {
    let mut handler = Handler::new(ScriptedRandom::new());
    let state = SessionState::new()
        .with_difficulty(strictly_noughts::Difficulty::Hard)
        .with_phase(GamePhase::SelectingFirstPlayer);

    let mut state = play(&mut handler, state, Event::ConfirmFirst(false)).into_state();
    for square in ["B2", "A2", "B1"] {
        state = play(&mut handler, state, mv(square)).into_state();
    }
    let reply = play(&mut handler, state, mv("C1"));
    assert_eq!(reply.outcome(), &Some(Outcome::OpponentWon));
    assert_eq!(*reply.state().board(), Board::from_pattern("OXOXXOXOO"));
}

#[test]
fn test_occupied_square_never_mutates() {
    let mut handler = Handler::new(ScriptedRandom::new());
    let state = SessionState::new()
        .with_phase(GamePhase::Playing)
        .with_board(Board::from_pattern("O...X...."));
    for square in ["A1", "b2"] {
        let reply = play(&mut handler, state.clone(), mv(square));
        assert_eq!(reply.state().board(), state.board());
        assert!(matches!(reply.error(), Some(GameError::CellOccupied { .. })));
    }
}

#[test]
fn test_queries_leave_state_alone() {
    let mut handler = Handler::new(ScriptedRandom::new());
    let state = SessionState::new()
        .with_phase(GamePhase::Playing)
        .with_board(Board::from_pattern("O...X...."))
        .remember("I place a nought in A1.", "What is your move?");
    for event in [
        Event::CheckBoard,
        Event::CheckSquare("A1".to_string()),
        Event::CheckSquare("nowhere".to_string()),
        Event::Help,
    ] {
        let reply = play(&mut handler, state.clone(), event);
        assert_eq!(reply.state(), &state);
        assert_eq!(reply.reprompt(), "What is your move?");
    }
}

#[test]
fn test_queries_outside_playing_are_wrong_state() {
    let mut handler = Handler::new(ScriptedRandom::new());
    let state = SessionState::new().with_phase(GamePhase::SelectingFirstPlayer);
    for event in [Event::CheckBoard, Event::CheckSquare("A1".to_string())] {
        let reply = play(&mut handler, state.clone(), event);
        assert_eq!(
            reply.error(),
            &Some(GameError::WrongState(GamePhase::SelectingFirstPlayer))
        );
        assert_eq!(reply.state(), &state);
    }
}

#[test]
fn test_difficulty_only_accepted_once() {
    let mut handler = Handler::new(ScriptedRandom::new());
    let state = play(
        &mut handler,
        SessionState::new(),
        Event::SelectDifficulty("easy".to_string()),
    )
    .into_state();
    let reply = play(
        &mut handler,
        state.clone(),
        Event::SelectDifficulty("hard".to_string()),
    );
    assert_eq!(*reply.state().difficulty(), strictly_noughts::Difficulty::Easy);
    assert_eq!(reply.state(), &state);
}
