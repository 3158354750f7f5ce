//! VetEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing verification events.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about. The trait requires
/// `Send + Sync` because scans fan out across worker threads.
pub trait VetEventHandler: Send + Sync {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}
    fn on_allowed_match(&self, _event: &AllowedMatchEvent) {}
    fn on_source_verdict(&self, _event: &SourceVerdictEvent) {}
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}
}

/// Default handler that forwards events to `tracing`.
///
/// Allowed matches are logged at warn level with the entry's reason so
/// known-benign noise stays visible without failing the run.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingEventHandler;

impl VetEventHandler for TracingEventHandler {
    fn on_scan_started(&self, event: &ScanStartedEvent) {
        tracing::debug!(source = %event.source_id, "scanning log source");
    }

    fn on_allowed_match(&self, event: &AllowedMatchEvent) {
        tracing::warn!(
            source = %event.source_id,
            reason = %event.reason,
            level = %event.level,
            msg = %event.message,
            "found allowed log message, ignoring"
        );
    }

    fn on_source_verdict(&self, event: &SourceVerdictEvent) {
        if event.failed {
            tracing::error!(
                source = %event.source_id,
                failure_count = event.failure_count,
                "log source failed verification"
            );
        } else {
            tracing::debug!(source = %event.source_id, "log source passed verification");
        }
    }

    fn on_scan_complete(&self, event: &ScanCompleteEvent) {
        tracing::info!(
            sources = event.sources_scanned,
            failed = event.sources_failed,
            overall_failed = event.overall_failed,
            "log verification complete"
        );
    }
}
