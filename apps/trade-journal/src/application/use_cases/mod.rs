//! Application Use Cases
//!
//! Use cases orchestrate domain logic to fulfill application requirements.
//! Each one loads the authoritative trade state before recomputing, so
//! derived fields are never built from a stale copy.

mod change_trade_status;
mod delete_trade;
mod journal_report;
mod record_trade;
mod update_trade_prices;

pub use change_trade_status::ChangeTradeStatusUseCase;
pub use delete_trade::DeleteTradeUseCase;
pub use journal_report::{JournalReport, JournalReportUseCase};
pub use record_trade::RecordTradeUseCase;
pub use update_trade_prices::UpdateTradePricesUseCase;

use crate::application::ports::InstrumentProviderPort;
use crate::domain::instrument::Instrument;
use crate::domain::shared::{Symbol, TradeId};
use crate::domain::trade_journal::{Trade, TradeJournalError, TradeRepository};

async fn resolve_instrument<I>(instruments: &I, symbol: &Symbol) -> Result<Instrument, TradeJournalError>
where
    I: InstrumentProviderPort + ?Sized,
{
    match instruments.lookup(symbol).await {
        Ok(Some(instrument)) => Ok(instrument),
        Ok(None) => {
            tracing::warn!(symbol = %symbol, "Instrument not found");
            Err(TradeJournalError::InstrumentNotFound {
                symbol: symbol.to_string(),
            })
        }
        Err(e) => {
            tracing::error!(symbol = %symbol, error = %e, "Instrument lookup failed");
            Err(TradeJournalError::InstrumentLookup(e.to_string()))
        }
    }
}

async fn load_trade<R>(trades: &R, id: &TradeId) -> Result<Trade, TradeJournalError>
where
    R: TradeRepository + ?Sized,
{
    if id.is_blank() {
        tracing::warn!("Rejected blank trade id");
        return Err(TradeJournalError::BlankTradeId);
    }

    trades.find_by_id(id).await?.ok_or_else(|| {
        tracing::warn!(trade_id = %id, "Trade not found");
        TradeJournalError::TradeNotFound { id: id.to_string() }
    })
}
