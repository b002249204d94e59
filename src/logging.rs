//! Logging initialization
//!
//! Diagnostics go to stderr through `tracing`, filtered by
//! `EXPENSE_TRACKER_LOG` (e.g. `expense=debug`). Default level is `warn`
//! so regular command output on stdout stays clean.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "EXPENSE_TRACKER_LOG";

static INIT_ONCE: Once = Once::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    INIT_ONCE.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        // Another subscriber may already be installed (e.g. by a test harness)
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
