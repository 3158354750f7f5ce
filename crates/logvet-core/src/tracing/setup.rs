//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::ENV_LOG_FILTER;

static INIT: Once = Once::new();

/// Initialize the logvet tracing/logging system.
///
/// Reads the `LOGVET_LOG` environment variable for per-subsystem log
/// levels, e.g. `LOGVET_LOG=scanner=debug,aggregate=info`.
///
/// Falls back to `logvet=info` if `LOGVET_LOG` is not set or is invalid.
///
/// This function is idempotent — calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(ENV_LOG_FILTER)
            .unwrap_or_else(|_| EnvFilter::new("logvet=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
