//! Event system for the verification engine.
//! Trait with no-op defaults, synchronous dispatch, zero overhead when unused.

pub mod handler;
pub mod types;

pub use handler::{TracingEventHandler, VetEventHandler};
