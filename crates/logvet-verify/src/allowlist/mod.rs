//! Allow-list registry: known-benign message patterns.
//!
//! The registry is read-only once built and shared across all concurrent
//! scans. The built-in default set is a process-wide immutable constant;
//! callers extend it per run via [`AllowList::with_defaults`], never by
//! mutating the defaults.

use std::sync::OnceLock;

use logvet_core::types::allowed::AllowedMessage;
use logvet_core::types::severity::LogLevel;

static DEFAULTS: OnceLock<Vec<AllowedMessage>> = OnceLock::new();

/// Messages a node may throw during a test that are not a concern,
/// regardless of what the caller supplies.
pub fn default_allowed_messages() -> &'static [AllowedMessage] {
    DEFAULTS.get_or_init(|| {
        vec![AllowedMessage::new(
            "No EVM primary nodes available: 0/1 nodes are alive",
            "Sometimes geth gets unlucky in the start up process and the node starts before geth is ready",
            LogLevel::DPanic,
            false,
        )]
    })
}

/// The allow-list consulted for every qualifying event.
///
/// Entries are ordered: built-ins first, then caller-supplied entries,
/// and the first match wins.
#[derive(Debug, Clone)]
pub struct AllowList {
    entries: Vec<AllowedMessage>,
}

impl AllowList {
    /// Build a registry from the built-in defaults plus caller entries.
    pub fn with_defaults(extra: &[AllowedMessage]) -> Self {
        let mut entries = default_allowed_messages().to_vec();
        entries.extend_from_slice(extra);
        Self { entries }
    }

    /// First entry whose pattern is contained in `message`, if any.
    /// No I/O happens here; `warn_when_found` is a signal to the caller.
    pub fn match_message(&self, message: &str) -> Option<&AllowedMessage> {
        self.entries
            .iter()
            .find(|entry| message.contains(&entry.pattern))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
