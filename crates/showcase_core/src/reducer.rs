//! Pure state transitions for the showcase view.
//!
//! `reduce` never touches a clock. Timer work is returned as [`Effect`]s for
//! the runtime to apply against its scheduler.

use crate::{
    animator::{self, HeaderEntry},
    phase::Phase,
    sequencer::{self, Advance},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewState {
    pub phase: Phase,
    pub header: HeaderEntry,
    pub all_revealed: bool,
    pub hovering: bool,
    pub restart_token: bool,
}

impl ViewState {
    pub fn initial() -> Self {
        let phase = Phase::first();
        Self {
            phase,
            header: animator::enter_phase(phase),
            all_revealed: false,
            hovering: false,
            restart_token: false,
        }
    }

    pub fn header_text(&self) -> &'static str {
        self.header.text()
    }

    /// Header text shown on a card for `phase`. Only the active scripted
    /// phase shows a partial reveal; every other card shows its literal.
    pub fn header_for(&self, phase: Phase) -> &'static str {
        if phase.is_scripted() && self.phase == phase {
            self.header_text()
        } else {
            phase.header_literal()
        }
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::initial()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowcaseEvent {
    PhaseTimerFired,
    RevealTimerFired,
    RestartRequested,
    RestartSettled,
    PointerEntered,
    PointerLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ArmPhaseTimer,
    CancelPhaseTimer,
    ArmRevealTimer,
    CancelRevealTimer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ViewState,
    pub effects: Vec<Effect>,
}

impl Transition {
    fn unchanged(state: &ViewState) -> Self {
        Self {
            state: *state,
            effects: Vec::new(),
        }
    }
}

/// Transition applied when the view mounts.
pub fn mount() -> Transition {
    Transition {
        state: ViewState::initial(),
        effects: vec![Effect::CancelRevealTimer, Effect::ArmPhaseTimer],
    }
}

pub fn reduce(state: &ViewState, event: ShowcaseEvent) -> Transition {
    match event {
        ShowcaseEvent::PhaseTimerFired => on_phase_timer(state),
        ShowcaseEvent::RevealTimerFired => on_reveal_timer(state),
        ShowcaseEvent::RestartRequested => on_restart(state),
        ShowcaseEvent::RestartSettled => Transition {
            state: ViewState {
                restart_token: false,
                ..*state
            },
            effects: Vec::new(),
        },
        ShowcaseEvent::PointerEntered => Transition {
            state: ViewState {
                hovering: true,
                ..*state
            },
            effects: Vec::new(),
        },
        ShowcaseEvent::PointerLeft => Transition {
            state: ViewState {
                hovering: false,
                ..*state
            },
            effects: Vec::new(),
        },
    }
}

fn on_phase_timer(state: &ViewState) -> Transition {
    match sequencer::advance(state.phase, state.all_revealed) {
        Advance::Entered(phase) => {
            let mut next = ViewState { phase, ..*state };
            let effects = enter_header(&mut next, phase);
            Transition {
                state: next,
                effects,
            }
        }
        Advance::Exhausted => Transition {
            state: ViewState {
                all_revealed: true,
                ..*state
            },
            effects: vec![Effect::CancelPhaseTimer],
        },
        Advance::Inert => Transition::unchanged(state),
    }
}

fn on_reveal_timer(state: &ViewState) -> Transition {
    let HeaderEntry::Revealing(mut reveal) = state.header else {
        return Transition {
            state: *state,
            effects: vec![Effect::CancelRevealTimer],
        };
    };

    reveal.step();
    let effects = if reveal.is_complete() {
        vec![Effect::CancelRevealTimer]
    } else {
        Vec::new()
    };
    Transition {
        state: ViewState {
            header: HeaderEntry::Revealing(reveal),
            ..*state
        },
        effects,
    }
}

fn on_restart(state: &ViewState) -> Transition {
    let phase = Phase::first();
    let mut next = ViewState {
        phase,
        all_revealed: false,
        // The control disappears with the gallery, so no pointer-leave follows.
        hovering: false,
        restart_token: true,
        ..*state
    };
    let mut effects = enter_header(&mut next, phase);
    effects.push(Effect::ArmPhaseTimer);
    Transition {
        state: next,
        effects,
    }
}

fn enter_header(state: &mut ViewState, phase: Phase) -> Vec<Effect> {
    let entry = animator::enter_phase(phase);
    state.header = entry;
    match entry {
        // Arming bumps the reveal epoch, which strands any chain in flight.
        HeaderEntry::Revealing(_) => vec![Effect::ArmRevealTimer],
        HeaderEntry::Static(_) => vec![Effect::CancelRevealTimer],
    }
}

#[cfg(test)]
#[path = "tests/reducer_tests.rs"]
mod tests;
