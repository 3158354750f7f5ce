//! Process-wide constants: artifact layout, line markers, env var names.

/// Default directory test artifacts (pod log dumps) are written under.
pub const DEFAULT_ARTIFACTS_DIR: &str = "logs";

/// Partial filename identifying node log files inside an artifact dump.
pub const NODE_LOG_FILENAME: &str = "node.log";

/// A line starting with this byte is treated as a structured record.
pub const STRUCTURED_RECORD_MARKER: char = '{';

/// An unstructured line starting with this token signals a process crash.
/// Always fails the scan, independent of the failure threshold.
pub const FATAL_RAW_MARKER: &str = "panic";

/// Env var overriding the failing log level (e.g. `error`, `warn`).
pub const ENV_FAILING_LEVEL: &str = "LOGVET_FAILING_LEVEL";

/// Env var overriding the failure threshold (positive integer).
pub const ENV_FAILURE_THRESHOLD: &str = "LOGVET_FAILURE_THRESHOLD";

/// Prefix the remote test runner applies when forwarding env vars.
/// A variable set in both plain and prefixed form is a config error.
pub const REMOTE_RUNNER_ENV_PREFIX: &str = "E2E_";

/// Env var controlling tracing filter directives (`LOGVET_LOG=scanner=debug`).
pub const ENV_LOG_FILTER: &str = "LOGVET_LOG";
