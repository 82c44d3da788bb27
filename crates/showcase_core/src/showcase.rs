//! Runtime that owns the view state and its timers.

use std::time::Duration;

use crate::{
    config::Timing,
    reducer::{self, Effect, ShowcaseEvent, Transition, ViewState},
    scheduler::{Scheduler, TimerSlot},
    view::{self, ViewModel},
};

/// Host-driven showcase.
///
/// The host reports elapsed time since mount through [`Showcase::advance_to`]
/// and pointer input through [`Showcase::restart`] and
/// [`Showcase::set_hovering`]. Dropping the runtime drops every timer.
#[derive(Debug)]
pub struct Showcase {
    timing: Timing,
    scheduler: Scheduler,
    state: ViewState,
    now: Duration,
    restart_pulses: u64,
}

impl Showcase {
    pub fn mount(timing: Timing) -> Self {
        let mut showcase = Self {
            timing,
            scheduler: Scheduler::new(),
            state: ViewState::initial(),
            now: Duration::ZERO,
            restart_pulses: 0,
        };
        let transition = reducer::mount();
        showcase.apply(transition, Duration::ZERO);
        tracing::info!(
            phase_interval_ms = timing.phase_interval().as_millis() as u64,
            char_interval_ms = timing.char_interval().as_millis() as u64,
            "showcase mounted"
        );
        showcase
    }

    pub fn timing(&self) -> Timing {
        self.timing
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> ViewModel {
        view::render(&self.state)
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// How many times the restart token has been pulsed since mount.
    pub fn restart_pulses(&self) -> u64 {
        self.restart_pulses
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    /// Delivers every timer firing due at or before `now`, in order, and
    /// returns how many were applied. A clock that runs backwards is
    /// treated as standing still.
    pub fn advance_to(&mut self, now: Duration) -> usize {
        if now < self.now {
            tracing::debug!(
                requested_ms = now.as_millis() as u64,
                current_ms = self.now.as_millis() as u64,
                "ignoring clock regression"
            );
            return 0;
        }

        let mut applied = 0;
        while let Some(firing) = self.scheduler.pop_due(now) {
            let event = match firing.slot {
                TimerSlot::PhaseAdvance => ShowcaseEvent::PhaseTimerFired,
                TimerSlot::Reveal => ShowcaseEvent::RevealTimerFired,
            };
            self.dispatch(event, firing.due);
            applied += 1;
        }
        self.now = now;
        applied
    }

    pub fn restart(&mut self) {
        tracing::info!(
            at_ms = self.now.as_millis() as u64,
            all_revealed = self.state.all_revealed,
            "restarting showcase"
        );
        self.dispatch(ShowcaseEvent::RestartRequested, self.now);
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        if self.state.hovering == hovering {
            return;
        }
        let event = if hovering {
            ShowcaseEvent::PointerEntered
        } else {
            ShowcaseEvent::PointerLeft
        };
        self.dispatch(event, self.now);
    }

    fn dispatch(&mut self, event: ShowcaseEvent, at: Duration) {
        let transition = reducer::reduce(&self.state, event);
        self.apply(transition, at);

        if self.state.restart_token {
            self.restart_pulses += 1;
            let settled = reducer::reduce(&self.state, ShowcaseEvent::RestartSettled);
            self.apply(settled, at);
        }
    }

    fn apply(&mut self, transition: Transition, at: Duration) {
        let previous = self.state;
        self.state = transition.state;

        if previous.phase != self.state.phase {
            tracing::debug!(
                phase = %self.state.phase,
                at_ms = at.as_millis() as u64,
                "entered phase"
            );
        }
        if !previous.all_revealed && self.state.all_revealed {
            tracing::debug!(at_ms = at.as_millis() as u64, "all snippets revealed");
        }

        for effect in transition.effects {
            match effect {
                Effect::ArmPhaseTimer => {
                    self.scheduler.arm_repeating(
                        TimerSlot::PhaseAdvance,
                        at,
                        self.timing.phase_interval(),
                    );
                }
                Effect::CancelPhaseTimer => self.scheduler.cancel(TimerSlot::PhaseAdvance),
                Effect::ArmRevealTimer => {
                    self.scheduler.arm_repeating(
                        TimerSlot::Reveal,
                        at,
                        self.timing.char_interval(),
                    );
                }
                Effect::CancelRevealTimer => self.scheduler.cancel(TimerSlot::Reveal),
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/showcase_tests.rs"]
mod tests;
