//! Logging initialization with environment-based formatters
//!
//! The library itself only emits `tracing` events. Hosts that want them
//! printed call [`init_logging`] once at startup.

use crate::config::get_environment;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// `production` and `prod` select JSON output.
pub fn is_production(env: &str) -> bool {
    matches!(env, "production" | "prod")
}

/// Install a global subscriber for the current `APP_ENV`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_logging() -> bool {
    init_logging_for(&get_environment())
}

/// Install a global subscriber for an explicit environment name.
///
/// - Production: JSON structured logs
/// - Anything else: human-readable logs with colors
pub fn init_logging_for(env: &str) -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let installed = if is_production(env) {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_ansi(true)
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };
    installed.is_ok()
}
