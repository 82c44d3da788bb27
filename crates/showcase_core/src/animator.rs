//! Header animator: immediate literals for static phases, a character-by-
//! character reveal for the scripted one.

use crate::phase::Phase;

/// Cursor over the scripted header literal. `cursor` counts characters, not
/// bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    target: &'static str,
    cursor: usize,
}

impl Reveal {
    pub fn new(target: &'static str) -> Self {
        Self { target, cursor: 0 }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.target.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.target.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.len()
    }

    /// Moves the cursor one character forward and returns the revealed
    /// character, or `None` when the literal is exhausted.
    pub fn step(&mut self) -> Option<char> {
        let next = self.target.chars().nth(self.cursor)?;
        self.cursor += 1;
        Some(next)
    }

    pub fn prefix(&self) -> &'static str {
        match self.target.char_indices().nth(self.cursor) {
            Some((byte_offset, _)) => &self.target[..byte_offset],
            None => self.target,
        }
    }
}

/// What the header does when a phase becomes active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderEntry {
    Static(&'static str),
    Revealing(Reveal),
}

impl HeaderEntry {
    pub fn text(&self) -> &'static str {
        match self {
            HeaderEntry::Static(text) => text,
            HeaderEntry::Revealing(reveal) => reveal.prefix(),
        }
    }
}

pub fn enter_phase(phase: Phase) -> HeaderEntry {
    if phase.is_scripted() {
        HeaderEntry::Revealing(Reveal::new(phase.header_literal()))
    } else {
        HeaderEntry::Static(phase.header_literal())
    }
}

#[cfg(test)]
#[path = "tests/animator_tests.rs"]
mod tests;
