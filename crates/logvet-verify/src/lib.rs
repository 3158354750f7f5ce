//! Verification engine for post-test node log dumps.
//!
//! Subsystems:
//! - `classify` — one raw line → skip / fatal raw marker / leveled event
//! - `allowlist` — known-benign message patterns, built-ins checked first
//! - `scanner` — per-source state machine with threshold counting
//! - `discover` — artifact directory walk for node log files
//! - `aggregate` — rayon fan-out across sources, OR of verdicts
//! - `report` — machine-readable report generation and persistence

pub mod aggregate;
pub mod allowlist;
pub mod classify;
pub mod discover;
pub mod report;
pub mod scanner;

pub use aggregate::Verifier;
pub use allowlist::AllowList;
pub use classify::{classify_line, Classification};
pub use scanner::SourceScanner;
