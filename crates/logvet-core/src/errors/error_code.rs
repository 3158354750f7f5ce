//! VetErrorCode trait for report-stable error codes.

/// Trait for tagging engine errors with a stable code string.
/// The code is embedded in per-source verdicts and persisted reports,
/// so a failure is reproducible from the report alone.
pub trait VetErrorCode {
    /// Returns the stable error code string (e.g. "FATAL_MARKER").
    fn error_code(&self) -> &'static str;
}

// Error code constants embedded in reports.
pub const UNKNOWN_LEVEL: &str = "UNKNOWN_LEVEL";
pub const STRUCTURAL_PARSE: &str = "STRUCTURAL_PARSE";
pub const MISSING_LEVEL: &str = "MISSING_LEVEL";
pub const FATAL_MARKER: &str = "FATAL_MARKER";
pub const SOURCE_READ: &str = "SOURCE_READ";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const REPORT_ERROR: &str = "REPORT_ERROR";
