//! Trade journal errors.

use thiserror::Error;

use crate::domain::shared::DomainError;

/// Errors surfaced to callers of the trade journal.
///
/// Incomplete form input is not an error (it yields zeroed results); these
/// variants indicate rejected input or data-integrity problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeJournalError {
    /// A trade id was empty or whitespace.
    #[error("Trade id cannot be blank")]
    BlankTradeId,

    /// No trade exists with the given id.
    #[error("Trade not found: {id}")]
    TradeNotFound {
        /// Trade ID.
        id: String,
    },

    /// The instrument symbol could not be resolved.
    #[error("Instrument not found: {symbol}")]
    InstrumentNotFound {
        /// Instrument symbol.
        symbol: String,
    },

    /// The instrument metadata source failed.
    #[error("Instrument lookup failed: {0}")]
    InstrumentLookup(String),

    /// Instrument metadata does not belong to the trade.
    #[error("Instrument {actual} does not match trade symbol {expected}")]
    InstrumentMismatch {
        /// Symbol recorded on the trade.
        expected: String,
        /// Symbol of the supplied instrument.
        actual: String,
    },

    /// Invalid trade parameters.
    #[error("Invalid trade field '{field}': {message}")]
    InvalidTrade {
        /// Field with invalid value.
        field: String,
        /// Error message.
        message: String,
    },

    /// Derived figures do not fit in a `Decimal`.
    #[error("Trade levels are too large to calculate results")]
    Overflow,

    /// The persistence layer failed.
    #[error("Trade repository error: {0}")]
    Repository(String),
}

impl TradeJournalError {
    /// True for lookup failures (unknown trade or instrument).
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::TradeNotFound { .. } | Self::InstrumentNotFound { .. }
        )
    }
}

impl From<DomainError> for TradeJournalError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::InvalidValue { field, message } => Self::InvalidTrade { field, message },
            DomainError::NotFound { entity_type, id } if entity_type == "Instrument" => {
                Self::InstrumentNotFound { symbol: id }
            }
            DomainError::NotFound { id, .. } => Self::TradeNotFound { id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_classification() {
        assert!(TradeJournalError::TradeNotFound { id: "t".into() }.is_not_found());
        assert!(
            TradeJournalError::InstrumentNotFound {
                symbol: "XYZ".into()
            }
            .is_not_found()
        );
        assert!(!TradeJournalError::BlankTradeId.is_not_found());
    }

    #[test]
    fn from_domain_invalid_value() {
        let err: TradeJournalError = DomainError::invalid("lot_size", "must be positive").into();
        assert_eq!(
            err,
            TradeJournalError::InvalidTrade {
                field: "lot_size".into(),
                message: "must be positive".into()
            }
        );
    }

    #[test]
    fn from_domain_instrument_not_found() {
        let err: TradeJournalError = DomainError::NotFound {
            entity_type: "Instrument".into(),
            id: "FOO".into(),
        }
        .into();
        assert_eq!(err.to_string(), "Instrument not found: FOO");
    }
}
