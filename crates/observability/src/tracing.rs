//! Tracing/logging initialization.
//!
//! Logs go to stderr so stdout stays reserved for inventory reports.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "info";

/// Initialize tracing/logging for the process.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // JSON logs + timestamps, configurable via RUST_LOG.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_installs_a_global_subscriber_once() {
        init();
        assert!(
            tracing_subscriber::fmt().try_init().is_err(),
            "a global subscriber should already be installed"
        );
        // Second call is a no-op.
        init();
    }
}
