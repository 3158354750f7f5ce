//! Report generation errors.

use std::path::PathBuf;

use super::error_code::{self, VetErrorCode};

/// Errors that can occur generating or persisting a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl VetErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_ERROR
    }
}
