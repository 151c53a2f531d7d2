//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directive.
pub const LOG_ENV_VAR: &str = "FAULTLINE_LOG";

/// Initialize the Faultline tracing/logging system.
///
/// Reads `FAULTLINE_LOG` for per-module log levels, e.g.
/// `FAULTLINE_LOG=faultline_analysis::traversal=debug,faultline_analysis=info`.
///
/// Falls back to `faultline=info` if the variable is unset or invalid.
/// Safe to call more than once.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new("faultline=info"));

        // A host service may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
