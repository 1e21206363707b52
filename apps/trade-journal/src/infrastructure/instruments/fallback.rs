//! Instrument provider that falls back to a static table.

use async_trait::async_trait;

use super::StaticInstrumentProvider;
use crate::application::ports::{InstrumentLookupError, InstrumentProviderPort};
use crate::domain::instrument::Instrument;
use crate::domain::shared::Symbol;

/// Consults a primary source first and the static table when the primary
/// does not know the symbol, is unavailable, or returns invalid metadata.
#[derive(Debug)]
pub struct FallbackInstrumentProvider<P>
where
    P: InstrumentProviderPort,
{
    primary: P,
    fallback: StaticInstrumentProvider,
}

impl<P> FallbackInstrumentProvider<P>
where
    P: InstrumentProviderPort,
{
    /// Create a provider over `primary` and `fallback`.
    pub const fn new(primary: P, fallback: StaticInstrumentProvider) -> Self {
        Self { primary, fallback }
    }
}

#[async_trait]
impl<P> InstrumentProviderPort for FallbackInstrumentProvider<P>
where
    P: InstrumentProviderPort,
{
    async fn lookup(&self, symbol: &Symbol) -> Result<Option<Instrument>, InstrumentLookupError> {
        match self.primary.lookup(symbol).await {
            Ok(Some(instrument)) => match instrument.validate() {
                Ok(()) => return Ok(Some(instrument)),
                Err(e) => {
                    tracing::warn!(symbol = %symbol, error = %e, "Primary instrument metadata invalid, using fallback");
                }
            },
            Ok(None) => {
                tracing::debug!(symbol = %symbol, "Symbol unknown to primary source, using fallback");
            }
            Err(e) => {
                tracing::warn!(symbol = %symbol, error = %e, "Primary instrument source failed, using fallback");
            }
        }

        Ok(self.fallback.get(symbol).cloned())
    }
}
