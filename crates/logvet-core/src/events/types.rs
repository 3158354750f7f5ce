//! Event payload types emitted during verification.

use crate::types::severity::LogLevel;

/// A source scan has started.
#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub source_id: String,
}

/// An allow-list entry matched a qualifying event.
/// Emitted only when the entry is flagged `warn_when_found`.
#[derive(Debug, Clone)]
pub struct AllowedMatchEvent {
    pub source_id: String,
    pub message: String,
    pub reason: String,
    pub level: LogLevel,
}

/// A source scan reached its terminal verdict.
#[derive(Debug, Clone)]
pub struct SourceVerdictEvent {
    pub source_id: String,
    pub failed: bool,
    pub failure_count: u32,
}

/// All sources have been scanned.
#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub sources_scanned: usize,
    pub sources_failed: usize,
    pub overall_failed: bool,
}
