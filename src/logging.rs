//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding a full `EnvFilter` directive, e.g.
/// `STARTUP_SEER_LOG=startup_seer::analysis=trace`
pub const ENV_LOG_VAR: &str = "STARTUP_SEER_LOG";

static INIT: Once = Once::new();

/// Initialize logging to stderr.
///
/// `STARTUP_SEER_LOG` wins when set and valid; otherwise `--verbose` selects
/// debug level and the default is warnings only. Safe to call more than once.
pub fn init_logging(verbose: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(ENV_LOG_VAR)
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .without_time(),
            )
            .with(filter)
            .init();
    });
}

fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "startup_seer=debug"
    } else {
        "startup_seer=warn"
    }
}
