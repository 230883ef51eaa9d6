//! Tracing initialization for hosts and tests.
//!
//! Diagnostics go to stderr; the result batch owns stdout.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber with env-filter control.
/// Calling more than once is a no-op.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
