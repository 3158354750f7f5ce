//! Multi-source aggregator: fan the scanner out across all log sources.
//!
//! One worker per source over rayon's pool. Workers share only the
//! read-only config and allow-list; each owns its source handle and
//! running count. There is no early cancellation: every source runs to
//! its own terminal verdict so the report describes all failing sources,
//! not just the first one found.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use logvet_core::config::VerifyConfig;
use logvet_core::constants::NODE_LOG_FILENAME;
use logvet_core::errors::{ConfigError, ScanError};
use logvet_core::events::types::ScanCompleteEvent;
use logvet_core::events::VetEventHandler;
use logvet_core::types::verdict::AggregateVerdict;

use crate::allowlist::AllowList;
use crate::discover::find_log_files;
use crate::scanner::SourceScanner;

/// Verification entry point: holds the validated config and the
/// allow-list built once per run (built-ins plus caller entries).
pub struct Verifier {
    config: VerifyConfig,
    allowlist: AllowList,
}

impl Verifier {
    /// Build a verifier from a validated config.
    pub fn new(config: VerifyConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let allowlist = AllowList::with_defaults(&config.allowed_messages);
        Ok(Self { config, allowlist })
    }

    pub fn config(&self) -> &VerifyConfig {
        &self.config
    }

    /// Scan the given log files concurrently and combine the verdicts.
    ///
    /// Per-source errors land in that source's verdict; they never abort
    /// the other scans. The overall flag is the OR of all per-source
    /// flags, so the combination is order-independent.
    pub fn verify_files(
        &self,
        paths: &[PathBuf],
        handler: &dyn VetEventHandler,
    ) -> AggregateVerdict {
        let verdicts: Vec<_> = paths
            .par_iter()
            .map(|path| {
                let scanner = SourceScanner::new(&self.config, &self.allowlist, handler);
                (path.display().to_string(), scanner.scan_file(path))
            })
            .collect();

        let aggregate = AggregateVerdict::from_verdicts(verdicts);
        handler.on_scan_complete(&ScanCompleteEvent {
            sources_scanned: aggregate.per_source.len(),
            sources_failed: aggregate.failed_sources().len(),
            overall_failed: aggregate.overall_failed,
        });
        aggregate
    }

    /// Discover node log files under an artifacts directory and verify
    /// them all. `node.log` is the conventional partial filename for
    /// node logs inside a pod dump.
    pub fn verify_artifacts(
        &self,
        artifacts_dir: &Path,
        handler: &dyn VetEventHandler,
    ) -> Result<AggregateVerdict, ScanError> {
        let files = find_log_files(artifacts_dir, NODE_LOG_FILENAME)?;
        tracing::debug!(
            dir = %artifacts_dir.display(),
            files = files.len(),
            "discovered node log files"
        );
        Ok(self.verify_files(&files, handler))
    }
}
