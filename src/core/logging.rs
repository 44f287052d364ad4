//! Logging setup
//!
//! The library only emits `tracing` events; binaries call [`init_logging`]
//! once to install a subscriber.

use crate::core::config::LoggingConfig;
use crate::core::error::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber for the given settings.
///
/// `RUST_LOG` takes precedence over the configured level when set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| Error::config(format!("Invalid log filter: {}", e)))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };

    installed.map_err(|e| Error::config(format!("Failed to install logger: {}", e)))
}
