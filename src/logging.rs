//! Diagnostic logging
//!
//! Logs go to stderr so table output on stdout stays pipeable. `RUST_LOG`
//! overrides the default filter.

use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Default filter directive for the given verbosity
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "spendlog=debug"
    } else {
        "spendlog=warn"
    }
}

/// Initializes the global tracing subscriber once per process
pub fn init_tracing(verbose: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

        // A subscriber installed elsewhere (e.g. by a test harness) takes precedence
        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
