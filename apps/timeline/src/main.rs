use std::{collections::VecDeque, path::PathBuf, time::Duration};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use showcase_core::{load_timing, Phase, Showcase, Timing, TimingOverrides};
use tokio::time::{sleep_until, Instant};
use tracing_subscriber::EnvFilter;

/// Runs the showcase without a window and prints every state transition.
#[derive(Parser, Debug)]
struct Args {
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    phase_interval_ms: Option<u64>,
    #[arg(long)]
    char_interval_ms: Option<u64>,
    /// Stop after this much showcase time.
    #[arg(long, default_value_t = 8_000)]
    duration_ms: u64,
    /// Press restart at this offset; repeatable.
    #[arg(long = "restart-at-ms")]
    restart_at_ms: Vec<u64>,
    /// Skip real sleeping and jump straight between deadlines.
    #[arg(long = "virtual")]
    virtual_clock: bool,
    /// Emit one JSON object per transition.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum Cause {
    Mount,
    Timer,
    Restart,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
struct Frame {
    at_ms: u64,
    cause: Cause,
    phase: Phase,
    header: String,
    all_revealed: bool,
    cards: usize,
    restart_pulses: u64,
}

impl Frame {
    fn capture(showcase: &Showcase, cause: Cause) -> Self {
        let state = showcase.state();
        Self {
            at_ms: showcase.now().as_millis() as u64,
            cause,
            phase: state.phase,
            header: state.header_text().to_string(),
            all_revealed: state.all_revealed,
            cards: showcase.view().cards().len(),
            restart_pulses: showcase.restart_pulses(),
        }
    }

    fn same_state(&self, other: &Frame) -> bool {
        self.phase == other.phase
            && self.header == other.header
            && self.all_revealed == other.all_revealed
            && self.restart_pulses == other.restart_pulses
    }

    fn render_text(&self) -> String {
        format!(
            "{:>7}ms  {:<7} {:<10} cards={} header={:?}",
            self.at_ms,
            format!("{:?}", self.cause).to_lowercase(),
            self.phase.label(),
            self.cards,
            self.header
        )
    }
}

struct Timeline {
    showcase: Showcase,
    restarts: VecDeque<Duration>,
    until: Duration,
    last: Frame,
}

impl Timeline {
    fn new(timing: Timing, mut restart_at_ms: Vec<u64>, until: Duration) -> Self {
        restart_at_ms.sort_unstable();
        let showcase = Showcase::mount(timing);
        let last = Frame::capture(&showcase, Cause::Mount);
        Self {
            showcase,
            restarts: restart_at_ms
                .into_iter()
                .map(Duration::from_millis)
                .filter(|at| *at <= until)
                .collect(),
            until,
            last,
        }
    }

    fn mount_frame(&self) -> Frame {
        self.last.clone()
    }

    /// Next instant something can change, within the run.
    fn next_wake(&self) -> Option<Duration> {
        let timer = self.showcase.next_deadline();
        let restart = self.restarts.front().copied();
        let wake = match (timer, restart) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }?;
        (wake <= self.until).then_some(wake)
    }

    fn step(&mut self, at: Duration) -> Vec<Frame> {
        let mut frames = Vec::new();

        while let Some(deadline) = self.showcase.next_deadline().filter(|d| *d <= at) {
            self.showcase.advance_to(deadline);
            self.record(Cause::Timer, &mut frames);
        }
        self.showcase.advance_to(at);

        while self.restarts.front().is_some_and(|restart| *restart <= at) {
            self.restarts.pop_front();
            self.showcase.restart();
            self.record(Cause::Restart, &mut frames);
        }
        frames
    }

    fn record(&mut self, cause: Cause, frames: &mut Vec<Frame>) {
        let frame = Frame::capture(&self.showcase, cause);
        if cause == Cause::Restart || !frame.same_state(&self.last) {
            self.last = frame.clone();
            frames.push(frame);
        }
    }

    fn run_virtual(mut self) -> Vec<Frame> {
        let mut frames = vec![self.mount_frame()];
        while let Some(wake) = self.next_wake() {
            frames.extend(self.step(wake));
        }
        frames
    }
}

fn emit(frame: &Frame, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(frame).context("failed to encode frame")?);
    } else {
        println!("{}", frame.render_text());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let timing = load_timing(
        args.config.as_deref(),
        TimingOverrides {
            phase_interval_ms: args.phase_interval_ms,
            char_interval_ms: args.char_interval_ms,
        },
    )
    .context("failed to resolve showcase timing")?;
    let until = Duration::from_millis(args.duration_ms);
    let mut timeline = Timeline::new(timing, args.restart_at_ms, until);

    if args.virtual_clock {
        for frame in timeline.run_virtual() {
            emit(&frame, args.json)?;
        }
        return Ok(());
    }

    let started = Instant::now();
    emit(&timeline.mount_frame(), args.json)?;
    while let Some(wake) = timeline.next_wake() {
        sleep_until(started + wake).await;
        for frame in timeline.step(wake) {
            emit(&frame, args.json)?;
        }
    }
    tracing::info!(duration_ms = args.duration_ms, "timeline finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn default_run_records_every_transition() {
        let frames = Timeline::new(Timing::default(), Vec::new(), ms(8_000)).run_virtual();

        // Mount, CSS, JavaScript, ten reveal steps, gallery.
        assert_eq!(frames.len(), 14);
        assert_eq!(frames[0].cause, Cause::Mount);
        assert_eq!(frames[1].at_ms, 2_000);
        assert_eq!(frames[1].phase, Phase::Css);
        assert_eq!(frames[2].header, "");
        assert_eq!(frames[12].header, "Hello, JS!");

        let last = frames.last().expect("frames");
        assert_eq!(last.at_ms, 6_000);
        assert!(last.all_revealed);
        assert_eq!(last.cards, 3);
    }

    #[test]
    fn scheduled_restart_replays_the_sequence() {
        let frames = Timeline::new(Timing::default(), vec![7_000], ms(9_000)).run_virtual();

        let restart = frames
            .iter()
            .find(|frame| frame.cause == Cause::Restart)
            .expect("restart frame");
        assert_eq!(restart.at_ms, 7_000);
        assert_eq!(restart.phase, Phase::Html);
        assert_eq!(restart.header, "Hello, World!");
        assert_eq!(restart.restart_pulses, 1);

        let last = frames.last().expect("frames");
        assert_eq!(last.at_ms, 9_000);
        assert_eq!(last.phase, Phase::Css);
    }

    #[test]
    fn restarts_past_the_run_are_dropped() {
        let frames = Timeline::new(Timing::default(), vec![20_000], ms(3_000)).run_virtual();
        assert!(frames.iter().all(|frame| frame.cause != Cause::Restart));
        assert_eq!(frames.len(), 2);
    }

    #[test]
    fn frames_encode_as_snake_case_json() {
        let showcase = Showcase::mount(Timing::default());
        let encoded = serde_json::to_string(&Frame::capture(&showcase, Cause::Mount)).expect("json");
        assert!(encoded.contains("\"cause\":\"mount\""));
        assert!(encoded.contains("\"phase\":\"html\""));
    }

    #[test]
    fn parses_repeated_restart_flags() {
        let args = Args::try_parse_from([
            "timeline",
            "--restart-at-ms",
            "100",
            "--restart-at-ms",
            "50",
            "--virtual",
        ])
        .expect("args");
        assert_eq!(args.restart_at_ms, vec![100, 50]);
        assert!(args.virtual_clock);
        assert_eq!(args.duration_ms, 8_000);
    }
}
