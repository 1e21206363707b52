//! Configuration module for the trade journal.
//!
//! Loads YAML configuration with environment variable interpolation and
//! validates it before use.
//!
//! # Usage
//!
//! ```rust,ignore
//! use trade_journal::config::load_config;
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//! ```

mod instruments;
mod observability;
mod reporting;

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use instruments::InstrumentConfig;
pub use observability::{LoggingConfig, ObservabilityConfig};
pub use reporting::ReportingConfig;

use crate::domain::instrument::Instrument;

const MINUTES_PER_DAY: i32 = 24 * 60;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
    /// Instrument overrides on top of the built-in table.
    #[serde(default)]
    pub instruments: Vec<InstrumentConfig>,
    /// Reporting configuration.
    #[serde(default)]
    pub reporting: ReportingConfig,
}

impl Config {
    /// Instrument overrides as domain instruments.
    #[must_use]
    pub fn instrument_overrides(&self) -> Vec<Instrument> {
        self.instruments.iter().map(InstrumentConfig::to_instrument).collect()
    }
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or("config.yaml");

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string.
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax. Unset variables
/// without a default become empty.
#[allow(clippy::expect_used)] // Regex is a constant pattern
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |caps: &regex::Captures<'_>| {
        let default_value = caps.get(2).map(|m| m.as_str());
        match std::env::var(&caps[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.map_or_else(String::new, str::to_string),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let logging = &config.observability.logging;
    if !observability::LOG_FORMATS.contains(&logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {:?}",
            observability::LOG_FORMATS
        )));
    }

    let mut seen = HashSet::new();
    for entry in &config.instruments {
        let instrument = entry.to_instrument();
        instrument
            .validate()
            .map_err(|e| ConfigError::ValidationError(format!("instruments: {e}")))?;
        if !seen.insert(instrument.symbol.clone()) {
            return Err(ConfigError::ValidationError(format!(
                "instruments: duplicate symbol {}",
                instrument.symbol
            )));
        }
    }

    let reporting = &config.reporting;
    if reporting.signal_duration_hours <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "reporting.signal_duration_hours must be positive".to_string(),
        ));
    }
    if reporting
        .utc_offset_minutes
        .is_some_and(|m| m.abs() >= MINUTES_PER_DAY)
    {
        return Err(ConfigError::ValidationError(
            "reporting.utc_offset_minutes must be within one day".to_string(),
        ));
    }

    Ok(())
}
