mod controller;
mod ui;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use showcase_core::{load_timing, TimingOverrides};
use tracing_subscriber::EnvFilter;

use crate::ui::ShowcaseApp;

const WINDOW_TITLE: &str = "Snippet Showcase";

#[derive(Parser, Debug)]
#[command(about = "Cycles through HTML, CSS and JavaScript snippets")]
struct Args {
    /// TOML file with `phase_interval_ms` / `char_interval_ms`.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    phase_interval_ms: Option<u64>,
    #[arg(long)]
    char_interval_ms: Option<u64>,
}

impl Args {
    fn overrides(&self) -> TimingOverrides {
        TimingOverrides {
            phase_interval_ms: self.phase_interval_ms,
            char_interval_ms: self.char_interval_ms,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let timing = load_timing(args.config.as_deref(), args.overrides())
        .context("failed to resolve showcase timing")?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    };
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(ShowcaseApp::new(timing)))),
    )
    .map_err(|err| {
        tracing::error!("showcase window failed: {err}");
        anyhow::anyhow!("showcase window failed: {err}")
    })
}
