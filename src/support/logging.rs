//! Tracing initialization for the command-line tool.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding the log filter directives.
pub const LOG_ENV: &str = "LMOD_WRAPPER_LOG";

static INIT: Once = Once::new();

/// Initializes the tracing subscriber.
///
/// Reads filter directives from [`LOG_ENV`], e.g.
/// `LMOD_WRAPPER_LOG=lmod_wrapper=debug`, and falls back to `warn` when the
/// variable is unset or invalid.
///
/// Events go to stderr; stdout is reserved for the progress report.
/// Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .init();
    });
}
