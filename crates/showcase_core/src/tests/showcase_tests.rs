use super::*;
use crate::{phase::Phase, view::Layout};

fn ms(value: u64) -> Duration {
    Duration::from_millis(value)
}

fn mounted() -> Showcase {
    Showcase::mount(Timing::default())
}

/// Steps through every deadline up to `until`, one firing at a time.
fn step_through(showcase: &mut Showcase, until: Duration) {
    while let Some(deadline) = showcase.next_deadline() {
        if deadline > until {
            break;
        }
        showcase.advance_to(deadline);
    }
    showcase.advance_to(until);
}

#[test]
fn mount_scenario_walks_every_phase() {
    let mut showcase = mounted();
    assert_eq!(showcase.state().phase, Phase::Html);
    assert_eq!(showcase.state().header_text(), "Hello, World!");
    assert_eq!(showcase.next_deadline(), Some(ms(2_000)));

    showcase.advance_to(ms(2_000));
    assert_eq!(showcase.state().phase, Phase::Css);
    assert_eq!(showcase.state().header_text(), "Hello, CSS!");

    showcase.advance_to(ms(4_000));
    assert_eq!(showcase.state().phase, Phase::JavaScript);
    assert_eq!(showcase.state().header_text(), "");

    showcase.advance_to(ms(4_100));
    assert_eq!(showcase.state().header_text(), "H");

    showcase.advance_to(ms(6_000));
    assert!(showcase.state().all_revealed);
    let view = showcase.view();
    assert!(matches!(view.layout, Layout::Gallery(_)));
    assert_eq!(view.cards().len(), 3);
    assert!(view.restart.is_some());
}

#[test]
fn reveal_shows_first_n_characters_after_n_ticks() {
    let mut showcase = mounted();
    showcase.advance_to(ms(4_000));

    for n in 0..=10u64 {
        showcase.advance_to(ms(4_000 + n * 100));
        assert_eq!(showcase.state().header_text(), &"Hello, JS!"[..n as usize]);
    }

    showcase.advance_to(ms(5_900));
    assert_eq!(showcase.state().header_text(), "Hello, JS!");
    assert!(!showcase.scheduler.is_armed(TimerSlot::Reveal));
}

#[test]
fn all_revealed_stays_set_until_restart() {
    let mut showcase = mounted();
    showcase.advance_to(ms(6_000));
    assert!(showcase.state().all_revealed);
    assert_eq!(showcase.next_deadline(), None);

    showcase.advance_to(ms(60_000));
    assert!(showcase.state().all_revealed);
    assert_eq!(showcase.state().phase, Phase::JavaScript);
}

#[test]
fn restart_returns_to_html_and_pulses_once() {
    let mut showcase = mounted();
    showcase.advance_to(ms(7_000));
    showcase.set_hovering(true);

    showcase.restart();

    let state = showcase.state();
    assert_eq!(state.phase, Phase::Html);
    assert_eq!(state.header_text(), "Hello, World!");
    assert!(!state.all_revealed);
    assert!(!state.restart_token);
    assert_eq!(showcase.restart_pulses(), 1);
    assert_eq!(showcase.next_deadline(), Some(ms(9_000)));

    showcase.advance_to(ms(9_000));
    assert_eq!(showcase.state().phase, Phase::Css);
}

#[test]
fn restart_mid_reveal_strands_the_old_chain() {
    let mut showcase = mounted();
    showcase.advance_to(ms(4_250));
    assert_eq!(showcase.state().header_text(), "He");

    showcase.restart();
    showcase.advance_to(ms(5_000));
    assert_eq!(showcase.state().phase, Phase::Html);
    assert_eq!(showcase.state().header_text(), "Hello, World!");
}

#[test]
fn reentering_script_phase_restarts_reveal_from_empty() {
    let mut showcase = mounted();
    showcase.advance_to(ms(4_550));
    assert_eq!(showcase.state().header_text(), "Hello");

    showcase.restart();
    let restarted_at = showcase.now();
    showcase.advance_to(restarted_at + ms(4_000));
    assert_eq!(showcase.state().phase, Phase::JavaScript);
    assert_eq!(showcase.state().header_text(), "");

    showcase.advance_to(restarted_at + ms(4_100));
    assert_eq!(showcase.state().header_text(), "H");
}

#[test]
fn late_frame_catches_up_to_the_same_state() {
    let mut stepped = mounted();
    step_through(&mut stepped, ms(6_500));

    let mut jumped = mounted();
    let applied = jumped.advance_to(ms(6_500));

    assert_eq!(jumped.state(), stepped.state());
    // Three phase ticks plus ten reveal ticks.
    assert_eq!(applied, 13);
}

#[test]
fn hover_never_changes_phase_or_header() {
    let mut showcase = mounted();
    showcase.advance_to(ms(4_300));
    let before = *showcase.state();

    showcase.set_hovering(true);
    assert!(showcase.state().hovering);
    assert_eq!(showcase.state().phase, before.phase);
    assert_eq!(showcase.state().header, before.header);

    showcase.set_hovering(false);
    assert_eq!(*showcase.state(), before);
}

#[test]
fn clock_regression_is_ignored() {
    let mut showcase = mounted();
    showcase.advance_to(ms(2_500));
    assert_eq!(showcase.advance_to(ms(1_000)), 0);
    assert_eq!(showcase.now(), ms(2_500));
    assert_eq!(showcase.state().phase, Phase::Css);
}

#[test]
fn custom_timing_drives_both_timers() {
    let timing = Timing::from_millis(500, 10).expect("timing");
    let mut showcase = Showcase::mount(timing);
    showcase.advance_to(ms(1_000));
    assert_eq!(showcase.state().phase, Phase::JavaScript);

    showcase.advance_to(ms(1_050));
    assert_eq!(showcase.state().header_text(), "Hello");
}

#[test]
fn slow_reveal_keeps_typing_inside_the_gallery() {
    let timing = Timing::from_millis(100, 50).expect("timing");
    let mut showcase = Showcase::mount(timing);
    showcase.advance_to(ms(300));
    assert!(showcase.state().all_revealed);
    assert_eq!(showcase.state().header_text(), "He");

    showcase.advance_to(ms(1_000));
    assert_eq!(showcase.view().cards()[2].header, "Hello, JS!");
}
