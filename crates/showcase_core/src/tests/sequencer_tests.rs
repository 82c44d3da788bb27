use super::*;

#[test]
fn advances_in_display_order() {
    assert_eq!(advance(Phase::Html, false), Advance::Entered(Phase::Css));
    assert_eq!(advance(Phase::Css, false), Advance::Entered(Phase::JavaScript));
    assert_eq!(advance(Phase::JavaScript, false), Advance::Exhausted);
}

#[test]
fn exhausted_sequencer_is_inert() {
    for phase in Phase::ORDER {
        assert_eq!(advance(phase, true), Advance::Inert);
    }
}

#[test]
fn exhausts_after_one_tick_per_phase() {
    let mut phase = Phase::first();
    let mut ticks = 0;
    loop {
        ticks += 1;
        match advance(phase, false) {
            Advance::Entered(next) => phase = next,
            Advance::Exhausted => break,
            Advance::Inert => unreachable!("not yet revealed"),
        }
    }
    assert_eq!(ticks, Phase::ORDER.len());
}
