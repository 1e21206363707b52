//! Update Trade Prices Use Case

use std::sync::Arc;

use super::{load_trade, resolve_instrument};
use crate::application::ports::{ClockPort, InstrumentProviderPort};
use crate::domain::shared::TradeId;
use crate::domain::trade_journal::{Trade, TradeJournalError, TradeLevels, TradePatch, TradeRepository};

/// Use case for editing a trade's entry, exit, lot size and risk.
pub struct UpdateTradePricesUseCase<R, I, C>
where
    R: TradeRepository,
    I: InstrumentProviderPort,
    C: ClockPort,
{
    trades: Arc<R>,
    instruments: Arc<I>,
    clock: Arc<C>,
}

impl<R, I, C> UpdateTradePricesUseCase<R, I, C>
where
    R: TradeRepository,
    I: InstrumentProviderPort,
    C: ClockPort,
{
    /// Create a new `UpdateTradePricesUseCase`.
    pub const fn new(trades: Arc<R>, instruments: Arc<I>, clock: Arc<C>) -> Self {
        Self {
            trades,
            instruments,
            clock,
        }
    }

    /// Replace the levels of a stored trade and recompute its results under
    /// the trade's current status.
    ///
    /// # Errors
    ///
    /// Returns error if the id is blank or unknown, the levels are invalid,
    /// the instrument cannot be resolved, or the repository fails.
    pub async fn execute(&self, id: &TradeId, levels: TradeLevels) -> Result<Trade, TradeJournalError> {
        levels.validate()?;

        let trade = load_trade(self.trades.as_ref(), id).await?;
        let instrument = resolve_instrument(self.instruments.as_ref(), trade.symbol()).await?;
        let updated = trade.with_levels(levels, &instrument, self.clock.now())?;

        let stored = self.trades.update(id, TradePatch::snapshot(&updated)).await?;

        tracing::info!(
            trade_id = %id,
            status = %stored.status(),
            pips = %stored.pips(),
            result = %stored.result(),
            "Trade levels updated"
        );

        Ok(stored)
    }
}
