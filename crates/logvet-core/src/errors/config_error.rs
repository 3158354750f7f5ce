//! Configuration errors.

use std::path::PathBuf;

use super::error_code::{self, VetErrorCode};

/// Errors that can occur loading or validating verification config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A zero threshold would never trigger; rejected outright rather
    /// than guessed at.
    #[error("failure threshold must be a positive integer, got {value}")]
    InvalidThreshold { value: u32 },

    #[error("'{token}' is not a valid failing log level")]
    InvalidLevel { token: String },

    #[error("invalid value '{value}' for {key}")]
    InvalidEnvValue { key: String, value: String },

    /// The same variable is set in both plain and remote-runner-prefixed
    /// form; refusing to pick one silently.
    #[error("environment variable collision, original: {key}, prefixed: {prefixed}")]
    EnvCollision { key: String, prefixed: String },

    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl VetErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
