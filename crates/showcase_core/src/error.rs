use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config file '{}': {source}", .path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("{name} must be a whole number of milliseconds, got '{value}'")]
    InvalidOverride { name: String, value: String },
    #[error("{name} must be greater than zero")]
    ZeroInterval { name: &'static str },
}
