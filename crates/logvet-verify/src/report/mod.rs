//! Report generation — the aggregate verdict as a persistable artifact.
//!
//! The engine's output is the abstract [`AggregateVerdict`]; reporters
//! turn it into something a caller can store or forward. Rendering for
//! chat or dashboards is the caller's concern.

mod json;

use std::fs;
use std::path::{Path, PathBuf};

use logvet_core::errors::ReportError;
use logvet_core::types::resources::ResourcesSummary;
use logvet_core::types::verdict::AggregateVerdict;

pub use json::JsonReporter;

/// Trait for report output formats.
pub trait Reporter {
    /// Format name, also used as the report file extension.
    fn name(&self) -> &'static str;

    /// Generate the report body for an aggregate verdict, optionally
    /// embedding the resource summary obtained from the metrics backend.
    fn generate(
        &self,
        verdict: &AggregateVerdict,
        resources: Option<&ResourcesSummary>,
    ) -> Result<String, ReportError>;
}

/// Generate a report and persist it under `dir` as
/// `verification-report.<format>`. Creates the directory if needed.
pub fn write_report(
    reporter: &dyn Reporter,
    dir: &Path,
    verdict: &AggregateVerdict,
    resources: Option<&ResourcesSummary>,
) -> Result<PathBuf, ReportError> {
    let body = reporter.generate(verdict, resources)?;
    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    let path = dir.join(format!("verification-report.{}", reporter.name()));
    fs::write(&path, body).map_err(|source| ReportError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
