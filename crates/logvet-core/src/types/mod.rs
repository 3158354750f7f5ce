//! Shared data types: severity scale, log events, verdicts, collections.

pub mod allowed;
pub mod collections;
pub mod resources;
pub mod severity;
pub mod verdict;

pub use allowed::AllowedMessage;
pub use resources::ResourcesSummary;
pub use severity::LogLevel;
pub use verdict::{AggregateVerdict, LogEvent, ScanErrorDetail, ScanVerdict};
