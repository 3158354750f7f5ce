//! Verdict types: log events, per-source scan verdicts, the aggregate.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::collections::{BTreeMap, FxHashMap};
use super::severity::LogLevel;
use crate::errors::VetErrorCode;

/// One structured log line, decoded and leveled.
///
/// Ephemeral: produced by the classifier and consumed immediately by the
/// scanner. `message` is `None` when the record carries no `msg` key;
/// such an event still counts toward the failure threshold but can never
/// match an allow-list entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEvent {
    pub level: LogLevel,
    pub message: Option<String>,
    /// The raw line exactly as read, kept for evidence.
    pub raw: String,
    /// Remaining decoded key/value pairs (timestamps, caller, fields).
    pub attributes: FxHashMap<String, Value>,
}

/// Structured description of a scan-failing error, stable enough to be
/// embedded in a persisted report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanErrorDetail {
    /// Stable error code string (e.g. `FATAL_MARKER`, `SOURCE_READ`).
    pub code: String,
    pub message: String,
}

impl ScanErrorDetail {
    /// Capture an engine error as report evidence.
    pub fn from_error<E>(err: &E) -> Self
    where
        E: VetErrorCode + fmt::Display,
    {
        Self {
            code: err.error_code().to_string(),
            message: err.to_string(),
        }
    }
}

/// The verdict for a single log source.
///
/// Invariant: `failed` is true iff `failure_count` reached the configured
/// threshold, or `error` is set (fatal raw marker, format-contract
/// violation, or read failure).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanVerdict {
    pub failed: bool,
    pub failure_count: u32,
    /// The exact line that tripped the verdict, when one exists.
    pub last_offending_line: Option<String>,
    pub error: Option<ScanErrorDetail>,
}

impl ScanVerdict {
    /// A passing verdict. Qualifying-but-allowed events leave the count
    /// at whatever it reached below the threshold.
    pub fn pass(failure_count: u32) -> Self {
        Self {
            failed: false,
            failure_count,
            last_offending_line: None,
            error: None,
        }
    }

    /// A verdict failed by reaching the failure threshold.
    pub fn fail(failure_count: u32, last_offending_line: String) -> Self {
        Self {
            failed: true,
            failure_count,
            last_offending_line: Some(last_offending_line),
            error: None,
        }
    }

    /// A verdict failed by a scan error (fatal marker, classify error,
    /// or source read failure), independent of the threshold.
    pub fn fail_with_error(failure_count: u32, error: ScanErrorDetail) -> Self {
        Self {
            failed: true,
            failure_count,
            last_offending_line: None,
            error: Some(error),
        }
    }
}

/// Combined verdict across all scanned sources.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregateVerdict {
    /// Per-source verdicts, keyed by source identifier (file path).
    /// BTreeMap keeps report iteration deterministic.
    pub per_source: BTreeMap<String, ScanVerdict>,
    /// Logical OR of all per-source `failed` flags.
    pub overall_failed: bool,
}

impl AggregateVerdict {
    /// Combine per-source verdicts. Order-independent: the overall flag
    /// is a commutative OR and the map is keyed by source id.
    pub fn from_verdicts(verdicts: impl IntoIterator<Item = (String, ScanVerdict)>) -> Self {
        let per_source: BTreeMap<String, ScanVerdict> = verdicts.into_iter().collect();
        let overall_failed = per_source.values().any(|v| v.failed);
        Self {
            per_source,
            overall_failed,
        }
    }

    /// Identifiers of every failed source, in report order.
    pub fn failed_sources(&self) -> Vec<&str> {
        self.per_source
            .iter()
            .filter(|(_, v)| v.failed)
            .map(|(id, _)| id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aggregate_is_or_of_per_source_verdicts() {
        let agg = AggregateVerdict::from_verdicts(vec![
            ("a".to_string(), ScanVerdict::pass(0)),
            ("b".to_string(), ScanVerdict::fail(1, "line".to_string())),
            ("c".to_string(), ScanVerdict::pass(0)),
        ]);
        assert!(agg.overall_failed);
        assert_eq!(agg.failed_sources(), vec!["b"]);
    }

    #[test]
    fn aggregate_of_passing_sources_passes() {
        let agg = AggregateVerdict::from_verdicts(vec![
            ("a".to_string(), ScanVerdict::pass(0)),
            ("b".to_string(), ScanVerdict::pass(2)),
        ]);
        assert!(!agg.overall_failed);
        assert!(agg.failed_sources().is_empty());
    }
}
