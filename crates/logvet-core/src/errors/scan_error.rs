//! Per-source scan errors.

use std::path::PathBuf;

use super::classify_error::ClassifyError;
use super::error_code::{self, VetErrorCode};

/// Errors that fail a single source's scan.
///
/// All variants are local to one source: the aggregator captures them in
/// that source's verdict and keeps scanning the others.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    /// An unstructured crash marker. One strike, threshold-independent.
    #[error("found panic: {line}")]
    FatalMarker { line: String },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl VetErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Classify(inner) => inner.error_code(),
            Self::FatalMarker { .. } => error_code::FATAL_MARKER,
            Self::Io { .. } => error_code::SOURCE_READ,
        }
    }
}
