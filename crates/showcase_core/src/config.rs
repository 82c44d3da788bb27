use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::Deserialize;

use crate::error::ShowcaseError;

pub const DEFAULT_PHASE_INTERVAL_MS: u64 = 2_000;
pub const DEFAULT_CHAR_INTERVAL_MS: u64 = 100;
pub const DEFAULT_CONFIG_FILE: &str = "showcase.toml";

const PHASE_INTERVAL_VARS: [&str; 2] = ["SHOWCASE_PHASE_INTERVAL_MS", "APP__PHASE_INTERVAL_MS"];
const CHAR_INTERVAL_VARS: [&str; 2] = ["SHOWCASE_CHAR_INTERVAL_MS", "APP__CHAR_INTERVAL_MS"];

/// Timer periods for the phase sequencer and the header reveal.
///
/// Both periods are strictly positive; a zero period would make a repeating
/// timer fire forever at a single instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    phase_interval: Duration,
    char_interval: Duration,
}

impl Timing {
    pub fn new(phase_interval: Duration, char_interval: Duration) -> Result<Self, ShowcaseError> {
        if phase_interval.is_zero() {
            return Err(ShowcaseError::ZeroInterval {
                name: "phase_interval_ms",
            });
        }
        if char_interval.is_zero() {
            return Err(ShowcaseError::ZeroInterval {
                name: "char_interval_ms",
            });
        }
        Ok(Self {
            phase_interval,
            char_interval,
        })
    }

    pub fn from_millis(phase_interval_ms: u64, char_interval_ms: u64) -> Result<Self, ShowcaseError> {
        Self::new(
            Duration::from_millis(phase_interval_ms),
            Duration::from_millis(char_interval_ms),
        )
    }

    pub fn phase_interval(&self) -> Duration {
        self.phase_interval
    }

    pub fn char_interval(&self) -> Duration {
        self.char_interval
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            phase_interval: Duration::from_millis(DEFAULT_PHASE_INTERVAL_MS),
            char_interval: Duration::from_millis(DEFAULT_CHAR_INTERVAL_MS),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FileSettings {
    phase_interval_ms: Option<u64>,
    char_interval_ms: Option<u64>,
}

/// Millisecond overrides collected from files, environment and CLI flags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingOverrides {
    pub phase_interval_ms: Option<u64>,
    pub char_interval_ms: Option<u64>,
}

impl TimingOverrides {
    fn layer(self, top: TimingOverrides) -> Self {
        Self {
            phase_interval_ms: top.phase_interval_ms.or(self.phase_interval_ms),
            char_interval_ms: top.char_interval_ms.or(self.char_interval_ms),
        }
    }

    fn resolve(self) -> Result<Timing, ShowcaseError> {
        Timing::from_millis(
            self.phase_interval_ms.unwrap_or(DEFAULT_PHASE_INTERVAL_MS),
            self.char_interval_ms.unwrap_or(DEFAULT_CHAR_INTERVAL_MS),
        )
    }
}

/// Resolves timing as defaults < config file < environment < `cli`.
///
/// With no explicit `config_path`, `showcase.toml` in the working directory
/// is read when present. An explicit path must exist.
pub fn load_timing(
    config_path: Option<&Path>,
    cli: TimingOverrides,
) -> Result<Timing, ShowcaseError> {
    let file = match config_path {
        Some(path) => read_config_file(path)?,
        None => {
            let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default_path.is_file() {
                read_config_file(&default_path)?
            } else {
                TimingOverrides::default()
            }
        }
    };
    let env = env_overrides(|name| std::env::var(name).ok())?;

    let timing = file.layer(env).layer(cli).resolve()?;
    tracing::debug!(
        phase_interval_ms = timing.phase_interval.as_millis() as u64,
        char_interval_ms = timing.char_interval.as_millis() as u64,
        "resolved showcase timing"
    );
    Ok(timing)
}

pub fn read_config_file(path: &Path) -> Result<TimingOverrides, ShowcaseError> {
    let raw = fs::read_to_string(path).map_err(|source| ShowcaseError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    parse_config(&raw).map_err(|source| ShowcaseError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_config(raw: &str) -> Result<TimingOverrides, toml::de::Error> {
    let file: FileSettings = toml::from_str(raw)?;
    Ok(TimingOverrides {
        phase_interval_ms: file.phase_interval_ms,
        char_interval_ms: file.char_interval_ms,
    })
}

/// Reads overrides through `lookup`; the `APP__` spelling wins over the
/// plain one when both are set.
pub fn env_overrides(
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<TimingOverrides, ShowcaseError> {
    Ok(TimingOverrides {
        phase_interval_ms: read_millis(&lookup, &PHASE_INTERVAL_VARS)?,
        char_interval_ms: read_millis(&lookup, &CHAR_INTERVAL_VARS)?,
    })
}

fn read_millis(
    lookup: &impl Fn(&str) -> Option<String>,
    names: &[&str],
) -> Result<Option<u64>, ShowcaseError> {
    let mut resolved = None;
    for name in names {
        let Some(value) = lookup(name) else {
            continue;
        };
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        let parsed = trimmed
            .parse::<u64>()
            .map_err(|_| ShowcaseError::InvalidOverride {
                name: (*name).to_string(),
                value: value.clone(),
            })?;
        resolved = Some(parsed);
    }
    Ok(resolved)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
