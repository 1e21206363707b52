//! Results reporting configuration.

use chrono::FixedOffset;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::results_reporting::{DEFAULT_SIGNAL_DURATION_HOURS, ReportOptions, ResultSource};

/// Reporting configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// Whether results are measured as signals (pips) or trades (money).
    #[serde(default)]
    pub source: ResultSource,
    /// Assumed duration of a completed signal.
    #[serde(default = "default_signal_duration_hours")]
    pub signal_duration_hours: Decimal,
    /// Fixed UTC offset for calendar days. The local zone is used when unset.
    #[serde(default)]
    pub utc_offset_minutes: Option<i32>,
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            source: ResultSource::default(),
            signal_duration_hours: default_signal_duration_hours(),
            utc_offset_minutes: None,
        }
    }
}

impl ReportingConfig {
    /// Options for the statistics calculator.
    #[must_use]
    pub const fn report_options(&self) -> ReportOptions {
        ReportOptions {
            source: self.source,
            signal_duration_hours: self.signal_duration_hours,
        }
    }

    /// Configured fixed offset, if any and in range.
    #[must_use]
    pub fn fixed_offset(&self) -> Option<FixedOffset> {
        self.utc_offset_minutes
            .and_then(|minutes| FixedOffset::east_opt(minutes.checked_mul(60)?))
    }
}

const fn default_signal_duration_hours() -> Decimal {
    DEFAULT_SIGNAL_DURATION_HOURS
}
