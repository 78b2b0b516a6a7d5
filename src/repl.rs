//! Terminal session: typed commands stand in for spoken intents.

use std::io::{BufRead, Write};
use strictly_noughts::{Event, Handler, RandomSource, Reply, SessionState};
use tracing::{debug, instrument};

/// Maps a typed line onto an event.
///
/// Accepted: `easy`/`medium`/`hard`, `yes`/`no`, a square such as `b2`
/// (optionally prefixed by `move`), `check <square>`, `board`, `help`,
/// `restart` and `quit`. Anything else is unrecognized.
pub fn parse_command(line: &str) -> Event {
    let line = line.trim();
    let lower = line.to_lowercase();
    let mut words = lower.split_whitespace();
    let first = words.next().unwrap_or("");
    let rest: Vec<&str> = words.collect();

    match (first, rest.as_slice()) {
        ("easy" | "medium" | "hard", []) => Event::SelectDifficulty(first.to_string()),
        ("difficulty" | "level", [value]) => Event::SelectDifficulty(value.to_string()),
        ("yes" | "y" | "sure", []) => Event::ConfirmFirst(true),
        ("no" | "n", []) => Event::ConfirmFirst(false),
        ("move" | "mark", [square]) => Event::PlayerMove(square.to_string()),
        ("check", [square]) => Event::CheckSquare(square.to_string()),
        ("board", []) => Event::CheckBoard,
        ("help", []) => Event::Help,
        ("restart" | "again", []) => Event::Restart,
        ("quit" | "exit" | "stop" | "cancel", []) => Event::Cancel,
        (square, []) if square.len() == 2 => Event::PlayerMove(square.to_string()),
        _ => Event::Unrecognized(line.to_string()),
    }
}

/// Runs a session until the handler ends it or input runs out.
///
/// Returns the last state so callers can persist it.
#[instrument(skip_all)]
pub fn run<R, I, O>(
    handler: &mut Handler<R>,
    state: SessionState,
    input: I,
    mut output: O,
) -> anyhow::Result<SessionState>
where
    R: RandomSource,
    I: BufRead,
    O: Write,
{
    let reply = handler.handle(state, Event::Launch);
    print_reply(&mut output, &reply)?;
    let mut state = reply.into_state();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event = parse_command(&line);
        debug!(event = event.name(), "Command parsed");
        let reply = handler.handle(state, event);
        print_reply(&mut output, &reply)?;
        let ends = *reply.should_end_session();
        state = reply.into_state();
        if ends {
            break;
        }
    }
    Ok(state)
}

fn print_reply(output: &mut impl Write, reply: &Reply) -> std::io::Result<()> {
    writeln!(output, "== {} ==", reply.title())?;
    writeln!(output, "{}", reply.card().trim_end())?;
    writeln!(output)?;
    output.flush()
}
