//! Deterministic randomness for tests and replays.

use crate::random::RandomSource;
use std::collections::VecDeque;
use tracing::debug;

/// Replays a fixed sequence of draws.
///
/// Picks and percentages are consumed from separate queues. An exhausted
/// queue yields 0. Picks are clamped into range so a script written for a
/// longer candidate list never escapes the current one.
#[derive(Debug, Clone, Default)]
pub struct ScriptedRandom {
    picks: VecDeque<usize>,
    percents: VecDeque<u32>,
}

impl ScriptedRandom {
    /// Creates a source with no scripted draws (always 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues candidate-list picks.
    pub fn with_picks(mut self, picks: impl IntoIterator<Item = usize>) -> Self {
        self.picks.extend(picks);
        self
    }

    /// Queues percentage rolls for the medium tier.
    pub fn with_percents(mut self, percents: impl IntoIterator<Item = u32>) -> Self {
        self.percents.extend(percents);
        self
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        let draw = self.picks.pop_front().unwrap_or(0);
        debug!(draw, len, "Scripted pick");
        draw.min(len.saturating_sub(1))
    }

    fn percent(&mut self) -> u32 {
        let draw = self.percents.pop_front().unwrap_or(0);
        debug!(draw, "Scripted percent");
        draw.min(100)
    }
}
