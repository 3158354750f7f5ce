//! Tracing initialization for the verification engine.

pub mod setup;

pub use setup::init_tracing;
