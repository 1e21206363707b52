//! Journal Report Use Case

use std::sync::Arc;

use chrono::TimeZone;

use crate::domain::results_reporting::{
    AggregateStatistics, ClosedPosition, ReportOptions, ResultSource, ResultsSummary,
};
use crate::domain::shared::OwnerId;
use crate::domain::trade_journal::{Trade, TradeJournalError, TradeRepository};

/// An owner's trades and the statistics over the closed ones.
#[derive(Debug, Clone)]
pub struct JournalReport {
    /// Owner the report belongs to.
    pub owner_id: OwnerId,
    /// Every trade of the owner, OPEN ones included.
    pub trades: Vec<Trade>,
    /// Statistics over CLOSED, LOSS and BREAKEVEN trades.
    pub summary: ResultsSummary,
}

/// Use case for building an owner's results report.
pub struct JournalReportUseCase<R>
where
    R: TradeRepository,
{
    trades: Arc<R>,
    options: ReportOptions,
}

impl<R> JournalReportUseCase<R>
where
    R: TradeRepository,
{
    /// Create a new `JournalReportUseCase`.
    pub const fn new(trades: Arc<R>, options: ReportOptions) -> Self {
        Self { trades, options }
    }

    /// Build the report, grouping days in `tz`.
    ///
    /// # Errors
    ///
    /// Returns error if the owner id is blank or the repository fails.
    pub async fn execute<Tz: TimeZone>(
        &self,
        owner_id: &OwnerId,
        tz: &Tz,
    ) -> Result<JournalReport, TradeJournalError> {
        if owner_id.is_blank() {
            return Err(TradeJournalError::InvalidTrade {
                field: "owner_id".to_string(),
                message: "Owner id cannot be blank".to_string(),
            });
        }

        let trades = self.trades.list_by_owner(owner_id).await?;
        let positions: Vec<ClosedPosition> = trades
            .iter()
            .filter_map(|t| closed_position(t, self.options.source))
            .collect();

        let summary = AggregateStatistics::summarize(&positions, &self.options, tz);

        tracing::debug!(
            owner_id = %owner_id,
            trades = trades.len(),
            closed = positions.len(),
            total_result = %summary.total_result,
            "Journal report built"
        );

        Ok(JournalReport {
            owner_id: owner_id.clone(),
            trades,
            summary,
        })
    }
}

/// Reduce a trade to a closed position, or `None` while it is OPEN.
///
/// Signal-style reports measure in display pips; trade reports in money.
fn closed_position(trade: &Trade, source: ResultSource) -> Option<ClosedPosition> {
    if !trade.status().is_closed() {
        return None;
    }

    let result = match source {
        ResultSource::Signals => trade.result(),
        ResultSource::Trades => trade.profit().amount(),
    };

    Some(ClosedPosition {
        trade_id: Some(trade.id().clone()),
        symbol: Some(trade.symbol().clone()),
        opened_at: Some(trade.opened_at()),
        closed_at: trade.closed_at().unwrap_or_else(|| trade.updated_at()),
        result,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::{Instrument, InstrumentCategory};
    use crate::domain::shared::{Symbol, Timestamp, TradeId};
    use crate::domain::trade_journal::aggregate::{RecordTradeCommand, TradeDraft};
    use crate::domain::trade_journal::repository::MockTradeRepository;
    use crate::domain::trade_journal::{Direction, TradeLevels, TradeStatus};
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse(s).unwrap()
    }

    fn trade(id: &str, status: TradeStatus, exit: Decimal, opened: &str, closed: &str) -> Trade {
        let audusd = Instrument::new("AUDUSD", InstrumentCategory::Forex, dec!(0.0001), dec!(10));
        let draft = TradeDraft::new(
            RecordTradeCommand {
                owner_id: OwnerId::new("user-1"),
                symbol: Symbol::new("AUDUSD"),
                direction: Direction::Buy,
                levels: TradeLevels {
                    entry_price: Some(dec!(0.6600)),
                    exit_price: Some(exit),
                    lot_size: dec!(1),
                    risk_pips: dec!(20),
                },
                status,
                opened_at: Some(ts(opened)),
                closed_at: Some(ts(closed)),
                notes: None,
            },
            &audusd,
            ts(closed),
        )
        .unwrap();
        Trade::from_draft(TradeId::new(id), draft)
    }

    fn journal() -> Vec<Trade> {
        vec![
            trade("a", TradeStatus::Closed, dec!(0.6630), "2026-08-03T08:00:00Z", "2026-08-03T12:00:00Z"),
            trade("b", TradeStatus::Loss, dec!(0.6650), "2026-08-04T08:00:00Z", "2026-08-04T10:00:00Z"),
            trade("c", TradeStatus::Open, dec!(0.6700), "2026-08-05T08:00:00Z", "2026-08-05T09:00:00Z"),
            trade("d", TradeStatus::Breakeven, dec!(0.6620), "2026-08-05T08:00:00Z", "2026-08-05T14:00:00Z"),
        ]
    }

    fn repo_with(trades: Vec<Trade>) -> MockTradeRepository {
        let mut repo = MockTradeRepository::new();
        repo.expect_list_by_owner()
            .withf(|owner| owner.as_str() == "user-1")
            .returning(move |_| Ok(trades.clone()));
        repo
    }

    #[tokio::test]
    async fn open_trades_are_listed_but_not_counted() {
        let uc = JournalReportUseCase::new(Arc::new(repo_with(journal())), ReportOptions::default());

        let report = uc.execute(&OwnerId::new("user-1"), &Utc).await.unwrap();

        assert_eq!(report.trades.len(), 4);
        assert_eq!(report.summary.total_positions, 3);
        assert_eq!(report.summary.winning_positions, 1);
        assert_eq!(report.summary.losing_positions, 1);
        assert_eq!(report.summary.breakeven_positions, 1);
        // 300 - 200 + 0
        assert_eq!(report.summary.total_result, dec!(100));
        assert_eq!(report.summary.drawdown.max_drawdown, dec!(200));
        assert_eq!(report.summary.average_duration_hours, dec!(4));
    }

    #[tokio::test]
    async fn signal_reports_measure_in_pips() {
        let options = ReportOptions {
            source: ResultSource::Signals,
            ..ReportOptions::default()
        };
        let uc = JournalReportUseCase::new(Arc::new(repo_with(journal())), options);

        let report = uc.execute(&OwnerId::new("user-1"), &Utc).await.unwrap();

        assert_eq!(report.summary.total_result, dec!(10));
        assert_eq!(report.summary.average_duration_hours, dec!(48));
    }

    #[tokio::test]
    async fn blank_owner_is_rejected() {
        let mut repo = MockTradeRepository::new();
        repo.expect_list_by_owner().never();
        let uc = JournalReportUseCase::new(Arc::new(repo), ReportOptions::default());

        assert!(uc.execute(&OwnerId::new(""), &Utc).await.is_err());
    }
}
