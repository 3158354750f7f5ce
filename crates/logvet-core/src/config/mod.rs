//! Verification configuration: defaults, TOML loading, env overrides.

pub mod verify_config;

pub use verify_config::VerifyConfig;
