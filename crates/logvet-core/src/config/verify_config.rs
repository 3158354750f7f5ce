//! Verification configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::{ENV_FAILING_LEVEL, ENV_FAILURE_THRESHOLD, REMOTE_RUNNER_ENV_PREFIX};
use crate::errors::ConfigError;
use crate::types::allowed::AllowedMessage;
use crate::types::severity::LogLevel;

/// Configuration for one verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Events at or above this level count toward the threshold.
    pub failing_level: LogLevel,
    /// Qualifying unallowed events required before a source fails.
    /// Must be positive; validated, never silently corrected.
    pub failure_threshold: u32,
    /// Caller-supplied allow-list entries, appended after the built-ins.
    pub allowed_messages: Vec<AllowedMessage>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            failing_level: LogLevel::Error,
            failure_threshold: 1,
            allowed_messages: Vec::new(),
        }
    }
}

impl VerifyConfig {
    /// Validate invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.failure_threshold == 0 {
            return Err(ConfigError::InvalidThreshold {
                value: self.failure_threshold,
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    /// Apply `LOGVET_FAILING_LEVEL` / `LOGVET_FAILURE_THRESHOLD` env
    /// overrides, then re-validate. A variable set in both plain and
    /// remote-runner-prefixed form is a collision, not a preference.
    pub fn with_env_overrides(mut self) -> Result<Self, ConfigError> {
        if let Some(token) = fetch_env(ENV_FAILING_LEVEL)? {
            self.failing_level =
                LogLevel::parse(&token).map_err(|_| ConfigError::InvalidLevel { token })?;
        }
        if let Some(raw) = fetch_env(ENV_FAILURE_THRESHOLD)? {
            self.failure_threshold =
                raw.parse::<u32>()
                    .map_err(|_| ConfigError::InvalidEnvValue {
                        key: ENV_FAILURE_THRESHOLD.to_string(),
                        value: raw,
                    })?;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Read an env var, rejecting a collision with its prefixed form.
/// Forwarding values to the remote runner is the runner's concern.
fn fetch_env(key: &str) -> Result<Option<String>, ConfigError> {
    let value = std::env::var(key).ok().filter(|v| !v.is_empty());
    if value.is_some() {
        let prefixed = format!("{REMOTE_RUNNER_ENV_PREFIX}{key}");
        if std::env::var(&prefixed).is_ok_and(|v| !v.is_empty()) {
            return Err(ConfigError::EnvCollision {
                key: key.to_string(),
                prefixed,
            });
        }
    }
    Ok(value)
}
