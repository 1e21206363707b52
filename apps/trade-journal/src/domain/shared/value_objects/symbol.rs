//! Symbol value object for instrument identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::shared::DomainError;

const MAX_SYMBOL_LEN: usize = 16;

/// An instrument symbol as shown in the journal.
///
/// Examples: "EURUSD", "XAUUSD", "US30", "BTCUSD".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a new Symbol.
    ///
    /// The symbol is trimmed and normalized to uppercase.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_uppercase())
    }

    /// Get the symbol string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// True when no symbol has been entered yet.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.0.is_empty()
    }

    /// Validate the symbol for storage.
    ///
    /// # Errors
    ///
    /// Returns error if symbol is empty, too long, or contains invalid characters.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_blank() {
            return Err(DomainError::invalid("symbol", "Symbol cannot be empty"));
        }

        if self.0.len() > MAX_SYMBOL_LEN {
            return Err(DomainError::invalid(
                "symbol",
                "Symbol exceeds maximum length",
            ));
        }

        // Brokers suffix some symbols (e.g. "US30.cash"), so dots are allowed.
        if !self
            .0
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.')
        {
            return Err(DomainError::invalid(
                "symbol",
                "Symbol contains invalid characters",
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Symbol {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Symbol {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_new_normalizes_case_and_whitespace() {
        let s = Symbol::new(" eurusd ");
        assert_eq!(s.as_str(), "EURUSD");
    }

    #[test]
    fn symbol_blank() {
        assert!(Symbol::new("").is_blank());
        assert!(Symbol::new("   ").is_blank());
        assert!(!Symbol::new("US30").is_blank());
    }

    #[test]
    fn symbol_validate() {
        assert!(Symbol::new("XAUUSD").validate().is_ok());
        assert!(Symbol::new("US30.cash").validate().is_ok());
        assert!(Symbol::new("").validate().is_err());
        assert!(Symbol::new("EUR/USD").validate().is_err());
        assert!(Symbol::new("A".repeat(20)).validate().is_err());
    }

    #[test]
    fn symbol_serde_roundtrip() {
        let s = Symbol::new("GBPJPY");
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "\"GBPJPY\"");

        let parsed: Symbol = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, s);
    }
}
