//! Phase sequencer: HTML -> CSS -> JavaScript -> everything revealed.

use crate::phase::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The sequencer moved on to a new single-view phase.
    Entered(Phase),
    /// The last phase was showing; every snippet is now revealed.
    Exhausted,
    /// Already exhausted; the tick is a no-op until restart.
    Inert,
}

pub fn advance(current: Phase, all_revealed: bool) -> Advance {
    if all_revealed {
        return Advance::Inert;
    }
    match current.next() {
        Some(next) => Advance::Entered(next),
        None => Advance::Exhausted,
    }
}

#[cfg(test)]
#[path = "tests/sequencer_tests.rs"]
mod tests;
