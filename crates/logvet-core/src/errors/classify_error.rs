//! Line classification errors.
//!
//! All of these mean the logging format contract was violated, not that
//! the log is noisy. The scanner fails the source immediately on any of
//! them; none is subject to the allow-list or the failure threshold.

use super::error_code::{self, VetErrorCode};

/// Errors that can occur classifying one structured-looking log line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClassifyError {
    #[error("structured log line failed to decode ({reason}): {line}")]
    StructuralParse { line: String, reason: String },

    #[error("found no log level in node log line: {line}")]
    MissingLevel { line: String },

    #[error("'{token}' is not a valid log level")]
    UnknownLevel { token: String },
}

impl VetErrorCode for ClassifyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::StructuralParse { .. } => error_code::STRUCTURAL_PARSE,
            Self::MissingLevel { .. } => error_code::MISSING_LEVEL,
            Self::UnknownLevel { .. } => error_code::UNKNOWN_LEVEL,
        }
    }
}
