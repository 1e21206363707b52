//! Change Trade Status Use Case

use std::sync::Arc;

use super::{load_trade, resolve_instrument};
use crate::application::ports::{ClockPort, InstrumentProviderPort};
use crate::domain::shared::TradeId;
use crate::domain::trade_journal::{
    StatusTransitionHandler, Trade, TradeJournalError, TradePatch, TradeRepository, TradeStatus,
};

/// Use case for moving a trade between OPEN, CLOSED, LOSS and BREAKEVEN.
///
/// Blank ids, unknown ids and unresolvable instruments are rejected before
/// anything is written.
pub struct ChangeTradeStatusUseCase<R, I, C>
where
    R: TradeRepository,
    I: InstrumentProviderPort,
    C: ClockPort,
{
    trades: Arc<R>,
    instruments: Arc<I>,
    clock: Arc<C>,
}

impl<R, I, C> ChangeTradeStatusUseCase<R, I, C>
where
    R: TradeRepository,
    I: InstrumentProviderPort,
    C: ClockPort,
{
    /// Create a new `ChangeTradeStatusUseCase`.
    pub const fn new(trades: Arc<R>, instruments: Arc<I>, clock: Arc<C>) -> Self {
        Self {
            trades,
            instruments,
            clock,
        }
    }

    /// Apply a status change and persist the recomputed fields.
    ///
    /// # Errors
    ///
    /// Returns error if the id is blank or unknown, the instrument cannot be
    /// resolved, or the repository fails.
    pub async fn execute(&self, id: &TradeId, new_status: TradeStatus) -> Result<Trade, TradeJournalError> {
        let trade = load_trade(self.trades.as_ref(), id).await?;
        let instrument = resolve_instrument(self.instruments.as_ref(), trade.symbol()).await?;

        let previous = trade.status();
        let updated = StatusTransitionHandler::apply(&trade, new_status, &instrument, self.clock.now())?;
        let stored = self.trades.update(id, TradePatch::snapshot(&updated)).await?;

        tracing::info!(
            trade_id = %id,
            from = %previous,
            to = %new_status,
            result = %stored.result(),
            profit = %stored.profit(),
            "Trade status changed"
        );

        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::FixedClock;
    use crate::domain::instrument::{Instrument, InstrumentCategory};
    use crate::domain::shared::{OwnerId, Symbol, Timestamp};
    use crate::domain::trade_journal::aggregate::{RecordTradeCommand, TradeDraft};
    use crate::domain::trade_journal::repository::MockTradeRepository;
    use crate::domain::trade_journal::{Direction, TradeLevels};
    use crate::infrastructure::instruments::StaticInstrumentProvider;
    use rust_decimal_macros::dec;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn nas100() -> Instrument {
        Instrument::new("NAS100", InstrumentCategory::Indices, dec!(1), dec!(2))
    }

    fn stored_trade(symbol: &str) -> Trade {
        let draft = TradeDraft::new(
            RecordTradeCommand {
                owner_id: OwnerId::new("user-1"),
                symbol: Symbol::new(symbol),
                direction: Direction::Buy,
                levels: TradeLevels {
                    entry_price: Some(dec!(18000)),
                    exit_price: Some(dec!(18120)),
                    lot_size: dec!(0.5),
                    risk_pips: dec!(60),
                },
                status: TradeStatus::Open,
                opened_at: Some(ts("2026-07-01T13:30:00Z")),
                closed_at: None,
                notes: None,
            },
            &Instrument::new(symbol, InstrumentCategory::Indices, dec!(1), dec!(2)),
            ts("2026-07-01T13:30:00Z"),
        )
        .unwrap();
        Trade::from_draft(TradeId::new("trd-42"), draft)
    }

    fn use_case(
        repo: MockTradeRepository,
    ) -> ChangeTradeStatusUseCase<MockTradeRepository, StaticInstrumentProvider, FixedClock> {
        ChangeTradeStatusUseCase::new(
            Arc::new(repo),
            Arc::new(StaticInstrumentProvider::new(vec![nas100()])),
            Arc::new(FixedClock::new(ts("2026-07-01T20:00:00Z"))),
        )
    }

    #[tokio::test]
    async fn blank_id_never_reaches_the_repository() {
        let mut repo = MockTradeRepository::new();
        repo.expect_find_by_id().never();
        repo.expect_update().never();

        let err = use_case(repo)
            .execute(&TradeId::new("   "), TradeStatus::Closed)
            .await
            .unwrap_err();

        assert_eq!(err, TradeJournalError::BlankTradeId);
    }

    #[tokio::test]
    async fn unknown_id_is_reported_without_update() {
        let mut repo = MockTradeRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_update().never();

        let err = use_case(repo)
            .execute(&TradeId::new("trd-404"), TradeStatus::Loss)
            .await
            .unwrap_err();

        assert_eq!(
            err,
            TradeJournalError::TradeNotFound {
                id: "trd-404".to_string()
            }
        );
    }

    #[tokio::test]
    async fn unresolvable_instrument_is_reported_without_update() {
        let trade = stored_trade("DAX40");
        let mut repo = MockTradeRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(trade.clone())));
        repo.expect_update().never();

        let err = use_case(repo)
            .execute(&TradeId::new("trd-42"), TradeStatus::Closed)
            .await
            .unwrap_err();

        assert!(matches!(err, TradeJournalError::InstrumentNotFound { symbol } if symbol == "DAX40"));
    }

    #[tokio::test]
    async fn loss_transition_persists_forced_loss() {
        let trade = stored_trade("NAS100");
        let mut repo = MockTradeRepository::new();
        repo.expect_find_by_id()
            .withf(|id| id.as_str() == "trd-42")
            .returning(move |_| Ok(Some(trade.clone())));
        repo.expect_update()
            .withf(|id, patch| {
                id.as_str() == "trd-42"
                    && patch.status() == TradeStatus::Loss
                    && patch.derived().result == dec!(-60)
                    && patch.derived().profit.amount() == dec!(-30)
            })
            .times(1)
            .returning(|_, patch| {
                let mut trade = stored_trade("NAS100");
                trade.apply_patch(patch);
                Ok(trade)
            });

        let updated = use_case(repo)
            .execute(&TradeId::new("trd-42"), TradeStatus::Loss)
            .await
            .unwrap();

        assert_eq!(updated.status(), TradeStatus::Loss);
        assert_eq!(updated.closed_at(), Some(ts("2026-07-01T20:00:00Z")));
    }

    #[tokio::test]
    async fn repository_failure_is_propagated() {
        let trade = stored_trade("NAS100");
        let mut repo = MockTradeRepository::new();
        repo.expect_find_by_id()
            .returning(move |_| Ok(Some(trade.clone())));
        repo.expect_update()
            .returning(|_, _| Err(TradeJournalError::Repository("disk full".to_string())));

        let err = use_case(repo)
            .execute(&TradeId::new("trd-42"), TradeStatus::Breakeven)
            .await
            .unwrap_err();

        assert_eq!(err, TradeJournalError::Repository("disk full".to_string()));
    }
}
