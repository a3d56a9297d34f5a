//! Structured logging setup.
//!
//! Logs go to stderr so that stdout carries only command output. The filter
//! comes from `RUST_LOG` when set, otherwise from the configured level.

use crate::cli::LogFormat;
use crate::errors::{AppError, AppResult};
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

/// Builds the log filter: `RUST_LOG` first, then `default_level`.
fn build_filter(default_level: &str) -> AppResult<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .map_err(|e| AppError::Config(format!("Invalid log level '{}': {}", default_level, e)))
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns `AppError::Config` if the log level cannot be parsed or a global
/// subscriber is already installed.
pub fn init(format: LogFormat, default_level: &str) -> AppResult<()> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(build_filter(default_level)?)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339());

    let result = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    result.map_err(|e| AppError::Config(format!("Failed to initialize logging: {}", e)))
}
