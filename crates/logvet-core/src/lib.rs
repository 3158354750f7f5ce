//! Core types, traits, errors, config, events, tracing, and constants for
//! the logvet verification engine.
//!
//! This crate holds everything shared between the verification engine and
//! its callers: the severity model, verdict types, the error taxonomy,
//! configuration loading, the event handler trait, and tracing setup.
//! It performs no I/O on log sources itself.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;
