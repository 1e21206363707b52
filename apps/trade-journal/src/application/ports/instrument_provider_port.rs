//! Instrument Provider Port (Driven Port)
//!
//! Resolves pip metadata for a symbol.

use async_trait::async_trait;

use crate::domain::instrument::Instrument;
use crate::domain::shared::Symbol;

/// Instrument lookup error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InstrumentLookupError {
    /// The metadata source could not be reached.
    #[error("Instrument source unavailable: {message}")]
    Unavailable {
        /// Error details.
        message: String,
    },

    /// The source returned metadata that failed validation.
    #[error("Invalid metadata for {symbol}: {message}")]
    InvalidMetadata {
        /// Symbol looked up.
        symbol: String,
        /// Error details.
        message: String,
    },
}

/// Port for instrument metadata lookup.
#[async_trait]
pub trait InstrumentProviderPort: Send + Sync {
    /// Look up an instrument by symbol.
    ///
    /// Returns `Ok(None)` when the symbol is unknown.
    ///
    /// # Errors
    ///
    /// Returns error if the source is unavailable.
    async fn lookup(&self, symbol: &Symbol) -> Result<Option<Instrument>, InstrumentLookupError>;
}
