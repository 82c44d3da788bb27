//! Deterministic single-threaded timer queue driven by a host clock.
//!
//! Time is measured as a [`Duration`] since the view was mounted. Each timer
//! slot carries an epoch; arming or cancelling a slot bumps the epoch, and
//! queued firings from an older epoch are dropped when they come due.

use std::{
    cmp::Reverse,
    collections::BinaryHeap,
    time::Duration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TimerSlot {
    PhaseAdvance,
    Reveal,
}

impl TimerSlot {
    const COUNT: usize = 2;

    fn index(self) -> usize {
        match self {
            TimerSlot::PhaseAdvance => 0,
            TimerSlot::Reveal => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TimerSlot::PhaseAdvance => "phase_advance",
            TimerSlot::Reveal => "reveal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Firing {
    pub slot: TimerSlot,
    pub due: Duration,
    pub epoch: u64,
}

// Field order drives the derived ordering: earliest due first, then FIFO.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct Pending {
    due: Duration,
    seq: u64,
    slot: TimerSlot,
    epoch: u64,
}

#[derive(Debug, Clone, Copy, Default)]
struct SlotState {
    epoch: u64,
    period: Option<Duration>,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Reverse<Pending>>,
    slots: [SlotState; TimerSlot::COUNT],
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arms `slot` to fire every `period`, first at `now + period`.
    /// Any firing still queued for the slot becomes stale.
    pub fn arm_repeating(&mut self, slot: TimerSlot, now: Duration, period: Duration) -> u64 {
        debug_assert!(!period.is_zero(), "repeating timer with zero period");
        let state = &mut self.slots[slot.index()];
        state.epoch += 1;
        state.period = Some(period);
        let epoch = state.epoch;
        self.push(slot, now + period, epoch);
        tracing::trace!(timer = slot.name(), epoch, "armed timer");
        epoch
    }

    pub fn cancel(&mut self, slot: TimerSlot) {
        let state = &mut self.slots[slot.index()];
        if state.period.take().is_some() {
            state.epoch += 1;
            tracing::trace!(timer = slot.name(), epoch = state.epoch, "cancelled timer");
        }
    }

    pub fn is_armed(&self, slot: TimerSlot) -> bool {
        self.slots[slot.index()].period.is_some()
    }

    pub fn epoch(&self, slot: TimerSlot) -> u64 {
        self.slots[slot.index()].epoch
    }

    /// Earliest instant at which a live firing is queued.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.queue
            .iter()
            .filter(|Reverse(pending)| self.is_live(pending))
            .map(|Reverse(pending)| pending.due)
            .min()
    }

    /// Pops the next live firing due at or before `now`, scheduling the
    /// following period of a repeating slot before returning it.
    pub fn pop_due(&mut self, now: Duration) -> Option<Firing> {
        while let Some(Reverse(head)) = self.queue.peek().copied() {
            if head.due > now {
                return None;
            }
            self.queue.pop();

            if !self.is_live(&head) {
                tracing::trace!(
                    timer = head.slot.name(),
                    epoch = head.epoch,
                    "discarded stale timer firing"
                );
                continue;
            }

            if let Some(period) = self.slots[head.slot.index()].period {
                self.push(head.slot, head.due + period, head.epoch);
            }
            return Some(Firing {
                slot: head.slot,
                due: head.due,
                epoch: head.epoch,
            });
        }
        None
    }

    fn is_live(&self, pending: &Pending) -> bool {
        let state = &self.slots[pending.slot.index()];
        state.period.is_some() && state.epoch == pending.epoch
    }

    fn push(&mut self, slot: TimerSlot, due: Duration, epoch: u64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.queue.push(Reverse(Pending {
            due,
            seq,
            slot,
            epoch,
        }));
    }
}

#[cfg(test)]
#[path = "tests/scheduler_tests.rs"]
mod tests;
