//! Logging Infrastructure

use crate::ClientConfig;
use tracing_subscriber::EnvFilter;

/// Initialize the logger at `info`, honoring `RUST_LOG` when set
pub fn init_logger() {
    init_logger_with_level("info");
}

/// Initialize the logger with the configured `log_level`
pub fn init_logger_from_config(config: &ClientConfig) {
    init_logger_with_level(&config.log_level);
}

/// Initialize the logger with a default filter
///
/// `RUST_LOG` takes precedence over `level`. Calling this twice is harmless;
/// the first subscriber stays installed.
pub fn init_logger_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!(level, "Logger initialized");
    }
}
