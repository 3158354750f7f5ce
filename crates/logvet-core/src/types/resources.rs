//! Resource usage summary embedded in reports.

use serde::{Deserialize, Serialize};

/// CPU and memory usage over the test window, as reported by the
/// metrics backend. Opaque to the engine: the numbers are embedded in
/// the report verbatim, nothing is computed from them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ResourcesSummary {
    /// Host CPU busy percentage.
    pub cpu_busy_percentage: f64,
    /// Memory usage percentage over the query interval.
    pub memory_usage: f64,
}
