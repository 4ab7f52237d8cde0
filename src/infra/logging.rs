//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_tracing(filter: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .try_init();
}
