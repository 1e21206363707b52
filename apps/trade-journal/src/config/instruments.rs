//! Instrument metadata overrides.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::instrument::{Instrument, InstrumentCategory};

/// One instrument entry. Replaces the built-in entry with the same symbol
/// or adds a new one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentConfig {
    /// Symbol.
    pub symbol: String,
    /// Market category.
    pub category: InstrumentCategory,
    /// Price delta of one pip/point.
    pub pip_size: Decimal,
    /// Value of one pip per 1.0 lot.
    pub pip_value: Decimal,
    /// Scalar applied to the displayed result.
    #[serde(default = "default_display_multiplier")]
    pub pip_display_multiplier: Decimal,
}

impl InstrumentConfig {
    /// Convert to a domain instrument.
    #[must_use]
    pub fn to_instrument(&self) -> Instrument {
        Instrument::new(self.symbol.as_str(), self.category, self.pip_size, self.pip_value)
            .with_display_multiplier(self.pip_display_multiplier)
    }
}

const fn default_display_multiplier() -> Decimal {
    Decimal::ONE
}
