//! Instrument provider backed by a fixed table.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::application::ports::{InstrumentLookupError, InstrumentProviderPort};
use crate::domain::instrument::{Instrument, fallback_instruments};
use crate::domain::shared::Symbol;

/// In-process instrument table. Lookups never fail.
#[derive(Debug, Clone, Default)]
pub struct StaticInstrumentProvider {
    instruments: HashMap<Symbol, Instrument>,
}

impl StaticInstrumentProvider {
    /// Create a provider over `instruments`. Later entries replace earlier
    /// ones with the same symbol.
    #[must_use]
    pub fn new(instruments: Vec<Instrument>) -> Self {
        Self {
            instruments: instruments
                .into_iter()
                .map(|i| (i.symbol.clone(), i))
                .collect(),
        }
    }

    /// Provider over the built-in fallback table.
    #[must_use]
    pub fn with_fallback_table() -> Self {
        Self::new(fallback_instruments())
    }

    /// Built-in table extended or overridden by `overrides`.
    #[must_use]
    pub fn with_overrides(overrides: Vec<Instrument>) -> Self {
        let mut provider = Self::with_fallback_table();
        for instrument in overrides {
            provider.instruments.insert(instrument.symbol.clone(), instrument);
        }
        provider
    }

    /// Synchronous lookup.
    #[must_use]
    pub fn get(&self, symbol: &Symbol) -> Option<&Instrument> {
        self.instruments.get(symbol)
    }

    /// All instruments, ordered by symbol.
    #[must_use]
    pub fn instruments(&self) -> Vec<&Instrument> {
        let mut all: Vec<&Instrument> = self.instruments.values().collect();
        all.sort_by(|a, b| a.symbol.cmp(&b.symbol));
        all
    }

    /// Number of instruments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

#[async_trait]
impl InstrumentProviderPort for StaticInstrumentProvider {
    async fn lookup(&self, symbol: &Symbol) -> Result<Option<Instrument>, InstrumentLookupError> {
        Ok(self.get(symbol).cloned())
    }
}
