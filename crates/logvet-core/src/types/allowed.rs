//! Allowed log message entries.

use serde::{Deserialize, Serialize};

use super::severity::LogLevel;

/// A log message a node may emit during a test that is not a concern.
///
/// Immutable once constructed. `pattern` matches by substring containment
/// against the event message. `warn_when_found` asks the scanner to
/// surface a warning when the entry matches (this can get noisy).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowedMessage {
    pub pattern: String,
    /// Why this message is benign; surfaced alongside any warning.
    pub reason: String,
    /// The level this message is typically emitted at, for display.
    pub level: LogLevel,
    #[serde(default)]
    pub warn_when_found: bool,
}

impl AllowedMessage {
    pub fn new(pattern: &str, reason: &str, level: LogLevel, warn_when_found: bool) -> Self {
        Self {
            pattern: pattern.to_string(),
            reason: reason.to_string(),
            level,
            warn_when_found,
        }
    }
}
