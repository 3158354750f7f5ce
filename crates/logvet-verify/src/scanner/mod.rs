//! Stream scanner: per-source state machine over classified lines.
//!
//! One scanner instance owns one scan's running failure count; no two
//! scans share state. The allow-list and config are borrowed read-only
//! and shared safely across the fan-out.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use logvet_core::config::VerifyConfig;
use logvet_core::errors::ScanError;
use logvet_core::events::types::{AllowedMatchEvent, ScanStartedEvent, SourceVerdictEvent};
use logvet_core::events::VetEventHandler;
use logvet_core::types::verdict::{ScanErrorDetail, ScanVerdict};

use crate::allowlist::AllowList;
use crate::classify::{classify_line, Classification};

/// Scans one log source line by line and produces its verdict.
pub struct SourceScanner<'a> {
    config: &'a VerifyConfig,
    allowlist: &'a AllowList,
    handler: &'a dyn VetEventHandler,
}

impl<'a> SourceScanner<'a> {
    pub fn new(
        config: &'a VerifyConfig,
        allowlist: &'a AllowList,
        handler: &'a dyn VetEventHandler,
    ) -> Self {
        Self {
            config,
            allowlist,
            handler,
        }
    }

    /// Open and scan a log file. An open failure is a source-read error
    /// captured in the verdict; the file handle is released on every
    /// exit path by RAII.
    pub fn scan_file(&self, path: &Path) -> ScanVerdict {
        let source_id = path.display().to_string();
        match File::open(path) {
            Ok(file) => self.scan(&source_id, BufReader::new(file)),
            Err(source) => {
                let err = ScanError::Io {
                    path: path.to_path_buf(),
                    source,
                };
                self.finish(
                    &source_id,
                    ScanVerdict::fail_with_error(0, ScanErrorDetail::from_error(&err)),
                )
            }
        }
    }

    /// Scan an already-open line-oriented source to a terminal verdict.
    ///
    /// Per line, in order:
    /// 1. unstructured crash marker → fail immediately, one strike;
    /// 2. any classification error → fail immediately (format contract
    ///    violation, never allow-listed, never counted);
    /// 3. event at or above the failing level and not allow-listed →
    ///    count it; reaching the threshold fails the scan with the
    ///    offending line recorded;
    /// 4. source exhausted → pass.
    pub fn scan<R: BufRead>(&self, source_id: &str, reader: R) -> ScanVerdict {
        self.handler.on_scan_started(&ScanStartedEvent {
            source_id: source_id.to_string(),
        });

        let mut failure_count = 0u32;
        let mut last_offending_line = None;

        for line in reader.lines() {
            let line = match line {
                Ok(line) => line,
                Err(source) => {
                    // No retry: report the read error and release the source.
                    let err = ScanError::Io {
                        path: PathBuf::from(source_id),
                        source,
                    };
                    return self.finish(
                        source_id,
                        ScanVerdict::fail_with_error(
                            failure_count,
                            ScanErrorDetail::from_error(&err),
                        ),
                    );
                }
            };

            let event = match classify_line(&line) {
                Ok(Classification::Skip) => continue,
                Ok(Classification::FatalRaw) => {
                    let err = ScanError::FatalMarker { line };
                    return self.finish(
                        source_id,
                        ScanVerdict::fail_with_error(
                            failure_count,
                            ScanErrorDetail::from_error(&err),
                        ),
                    );
                }
                Ok(Classification::Event(event)) => event,
                Err(err) => {
                    return self.finish(
                        source_id,
                        ScanVerdict::fail_with_error(
                            failure_count,
                            ScanErrorDetail::from_error(&ScanError::from(err)),
                        ),
                    );
                }
            };

            if event.level < self.config.failing_level {
                continue;
            }

            if let Some(message) = &event.message {
                if let Some(entry) = self.allowlist.match_message(message) {
                    if entry.warn_when_found {
                        self.handler.on_allowed_match(&AllowedMatchEvent {
                            source_id: source_id.to_string(),
                            message: message.clone(),
                            reason: entry.reason.clone(),
                            level: entry.level,
                        });
                    }
                    continue;
                }
            }

            failure_count += 1;
            last_offending_line = Some(line);
            if failure_count >= self.config.failure_threshold {
                let offending = last_offending_line.take().unwrap_or_default();
                return self.finish(source_id, ScanVerdict::fail(failure_count, offending));
            }
        }

        self.finish(source_id, ScanVerdict::pass(failure_count))
    }

    fn finish(&self, source_id: &str, verdict: ScanVerdict) -> ScanVerdict {
        self.handler.on_source_verdict(&SourceVerdictEvent {
            source_id: source_id.to_string(),
            failed: verdict.failed,
            failure_count: verdict.failure_count,
        });
        verdict
    }
}
