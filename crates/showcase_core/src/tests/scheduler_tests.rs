use super::*;

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

#[test]
fn repeating_timer_fires_every_period() {
    let mut scheduler = Scheduler::new();
    scheduler.arm_repeating(TimerSlot::PhaseAdvance, ms(0), ms(2_000));

    assert_eq!(scheduler.pop_due(ms(1_999)), None);
    let first = scheduler.pop_due(ms(2_000)).expect("first firing");
    assert_eq!(first.due, ms(2_000));
    assert_eq!(scheduler.next_deadline(), Some(ms(4_000)));
}

#[test]
fn catches_up_in_due_order_after_a_late_poll() {
    let mut scheduler = Scheduler::new();
    scheduler.arm_repeating(TimerSlot::PhaseAdvance, ms(0), ms(300));
    scheduler.arm_repeating(TimerSlot::Reveal, ms(0), ms(200));

    let mut fired = Vec::new();
    while let Some(firing) = scheduler.pop_due(ms(600)) {
        fired.push((firing.slot, firing.due));
    }

    assert_eq!(
        fired,
        vec![
            (TimerSlot::Reveal, ms(200)),
            (TimerSlot::PhaseAdvance, ms(300)),
            (TimerSlot::Reveal, ms(400)),
            (TimerSlot::PhaseAdvance, ms(600)),
            (TimerSlot::Reveal, ms(600)),
        ]
    );
}

#[test]
fn rearming_discards_firings_from_the_previous_epoch() {
    let mut scheduler = Scheduler::new();
    let old = scheduler.arm_repeating(TimerSlot::Reveal, ms(0), ms(100));
    let new = scheduler.arm_repeating(TimerSlot::Reveal, ms(50), ms(100));
    assert!(new > old);

    let firing = scheduler.pop_due(ms(150)).expect("re-armed firing");
    assert_eq!(firing.due, ms(150));
    assert_eq!(firing.epoch, new);
    assert_eq!(scheduler.pop_due(ms(150)), None);
}

#[test]
fn cancelled_slot_never_fires_and_has_no_deadline() {
    let mut scheduler = Scheduler::new();
    scheduler.arm_repeating(TimerSlot::Reveal, ms(0), ms(100));
    scheduler.cancel(TimerSlot::Reveal);

    assert!(!scheduler.is_armed(TimerSlot::Reveal));
    assert_eq!(scheduler.next_deadline(), None);
    assert_eq!(scheduler.pop_due(ms(10_000)), None);
}

#[test]
fn cancelling_an_idle_slot_keeps_its_epoch() {
    let mut scheduler = Scheduler::new();
    scheduler.cancel(TimerSlot::PhaseAdvance);
    assert_eq!(scheduler.epoch(TimerSlot::PhaseAdvance), 0);
}

#[test]
fn cancel_after_pop_drops_the_rescheduled_period() {
    let mut scheduler = Scheduler::new();
    scheduler.arm_repeating(TimerSlot::Reveal, ms(0), ms(100));
    assert!(scheduler.pop_due(ms(100)).is_some());

    scheduler.cancel(TimerSlot::Reveal);
    assert_eq!(scheduler.pop_due(ms(1_000)), None);
}

#[test]
fn simultaneous_firings_keep_scheduling_order() {
    let mut scheduler = Scheduler::new();
    scheduler.arm_repeating(TimerSlot::Reveal, ms(0), ms(100));
    scheduler.arm_repeating(TimerSlot::PhaseAdvance, ms(0), ms(100));

    assert_eq!(
        scheduler.pop_due(ms(100)).map(|f| f.slot),
        Some(TimerSlot::Reveal)
    );
    assert_eq!(
        scheduler.pop_due(ms(100)).map(|f| f.slot),
        Some(TimerSlot::PhaseAdvance)
    );
}
