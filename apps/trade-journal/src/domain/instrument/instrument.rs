//! Instrument metadata value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::{DomainError, Symbol};

/// Market category of an instrument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentCategory {
    /// Currency pairs.
    Forex,
    /// Stock indices (US30, NAS100, ...).
    Indices,
    /// Metals and energies.
    Commodities,
    /// Cryptocurrencies.
    Crypto,
}

impl fmt::Display for InstrumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forex => write!(f, "forex"),
            Self::Indices => write!(f, "indices"),
            Self::Commodities => write!(f, "commodities"),
            Self::Crypto => write!(f, "crypto"),
        }
    }
}

const fn default_display_multiplier() -> Decimal {
    Decimal::ONE
}

/// Pip metadata for a tradeable instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    /// Unique symbol.
    pub symbol: Symbol,
    /// Market category.
    pub category: InstrumentCategory,
    /// Price delta representing one pip/point.
    pub pip_size: Decimal,
    /// Monetary value of one pip per 1.0 lot.
    pub pip_value: Decimal,
    /// Scalar applied only to the displayed pip count.
    #[serde(default = "default_display_multiplier")]
    pub pip_display_multiplier: Decimal,
}

impl Instrument {
    /// Create an instrument with a display multiplier of 1.
    #[must_use]
    pub fn new(
        symbol: impl Into<Symbol>,
        category: InstrumentCategory,
        pip_size: Decimal,
        pip_value: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            category,
            pip_size,
            pip_value,
            pip_display_multiplier: Decimal::ONE,
        }
    }

    /// Override the display multiplier.
    #[must_use]
    pub fn with_display_multiplier(mut self, multiplier: Decimal) -> Self {
        self.pip_display_multiplier = multiplier;
        self
    }

    /// Monetary value per pip used when a trade is marked as a LOSS.
    ///
    /// Indices are valued at 1.0 per point here while every other category uses
    /// `pip_value`. The general profit formula does not make this distinction.
    #[must_use]
    pub fn loss_value_per_pip(&self) -> Decimal {
        match self.category {
            InstrumentCategory::Indices => Decimal::ONE,
            _ => self.pip_value,
        }
    }

    /// Validate the metadata before it is used in calculations.
    ///
    /// # Errors
    ///
    /// Returns error if the symbol is invalid, `pip_size` or the display
    /// multiplier is not positive, or `pip_value` is negative.
    pub fn validate(&self) -> Result<(), DomainError> {
        self.symbol.validate()?;

        if self.pip_size <= Decimal::ZERO {
            return Err(DomainError::invalid(
                "pip_size",
                format!("{}: pip size must be positive", self.symbol),
            ));
        }
        if self.pip_value < Decimal::ZERO {
            return Err(DomainError::invalid(
                "pip_value",
                format!("{}: pip value cannot be negative", self.symbol),
            ));
        }
        if self.pip_display_multiplier <= Decimal::ZERO {
            return Err(DomainError::invalid(
                "pip_display_multiplier",
                format!("{}: display multiplier must be positive", self.symbol),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use test_case::test_case;

    #[test_case(InstrumentCategory::Forex, dec!(10) ; "forex uses pip value")]
    #[test_case(InstrumentCategory::Commodities, dec!(10) ; "commodities use pip value")]
    #[test_case(InstrumentCategory::Crypto, dec!(10) ; "crypto uses pip value")]
    #[test_case(InstrumentCategory::Indices, dec!(1) ; "indices use one per point")]
    fn loss_value_per_pip(category: InstrumentCategory, expected: Decimal) {
        let instrument = Instrument::new("TEST", category, dec!(0.1), dec!(10));
        assert_eq!(instrument.loss_value_per_pip(), expected);
    }

    #[test]
    fn default_multiplier_is_one() {
        let instrument = Instrument::new("EURUSD", InstrumentCategory::Forex, dec!(0.0001), dec!(10));
        assert_eq!(instrument.pip_display_multiplier, Decimal::ONE);
    }

    #[test]
    fn deserialize_without_multiplier() {
        let json = r#"{"symbol":"us30","category":"indices","pip_size":"1","pip_value":"1"}"#;
        let instrument: Instrument = serde_json::from_str(json).unwrap();
        assert_eq!(instrument.symbol.as_str(), "US30");
        assert_eq!(instrument.category, InstrumentCategory::Indices);
        assert_eq!(instrument.pip_display_multiplier, Decimal::ONE);
    }

    #[test]
    fn validate_rejects_bad_metadata() {
        let base = Instrument::new("EURUSD", InstrumentCategory::Forex, dec!(0.0001), dec!(10));
        assert!(base.validate().is_ok());

        let mut zero_pip = base.clone();
        zero_pip.pip_size = Decimal::ZERO;
        assert!(zero_pip.validate().is_err());

        let mut negative_value = base.clone();
        negative_value.pip_value = dec!(-1);
        assert!(negative_value.validate().is_err());

        let zero_multiplier = base.with_display_multiplier(Decimal::ZERO);
        assert!(zero_multiplier.validate().is_err());
    }

    #[test]
    fn category_display() {
        assert_eq!(InstrumentCategory::Commodities.to_string(), "commodities");
        assert_eq!(InstrumentCategory::Indices.to_string(), "indices");
    }
}
