//! Tracing Setup
//!
//! Installs the global `tracing` subscriber from [`LoggingConfig`].
//!
//! # Configuration
//!
//! - `RUST_LOG`: overrides `observability.logging.level` when set
//!
//! # Usage
//!
//! ```rust,ignore
//! use trade_journal::config::LoggingConfig;
//! use trade_journal::telemetry::init_tracing;
//!
//! init_tracing(&LoggingConfig::default())?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Error returned when a global subscriber is already installed.
pub type TelemetryError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Install the global subscriber.
///
/// Output goes to stderr so stdout stays reserved for reports.
///
/// # Errors
///
/// Returns an error if a global subscriber was already set.
pub fn init_tracing(config: &LoggingConfig) -> Result<(), TelemetryError> {
    let env_filter = build_filter(&config.level);

    if config.format == "pretty" {
        tracing_subscriber::fmt()
            .pretty()
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .json()
            .with_current_span(config.include_spans)
            .with_span_list(config.include_spans)
            .with_env_filter(env_filter)
            .with_writer(std::io::stderr)
            .try_init()
    }
}

fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}
