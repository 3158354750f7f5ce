//! Error taxonomy for the verification engine.
//!
//! One file per subsystem, each a `thiserror` enum. Every enum implements
//! [`VetErrorCode`] so failures carry a stable code string into persisted
//! reports.

pub mod classify_error;
pub mod config_error;
pub mod error_code;
pub mod report_error;
pub mod scan_error;

pub use classify_error::ClassifyError;
pub use config_error::ConfigError;
pub use error_code::VetErrorCode;
pub use report_error::ReportError;
pub use scan_error::ScanError;
