//! Tracing initialization for Lattice hosts.

use tracing_subscriber::{EnvFilter, fmt};

use lattice_core::config::logging::LoggingConfig;

/// Initialize tracing from the logging configuration.
///
/// `RUST_LOG` takes precedence over the configured level. Panics if a
/// global subscriber is already installed; hosts call this once at startup.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    match config.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}
