//! Record Trade Use Case

use std::sync::Arc;

use super::resolve_instrument;
use crate::application::ports::{ClockPort, InstrumentProviderPort};
use crate::domain::trade_journal::aggregate::{RecordTradeCommand, TradeDraft};
use crate::domain::trade_journal::{
    Calculation, IncompleteInput, ResultCalculator, Trade, TradeInput, TradeJournalError,
    TradeRepository,
};

/// Use case for recording new trades and previewing their results.
pub struct RecordTradeUseCase<R, I, C>
where
    R: TradeRepository,
    I: InstrumentProviderPort,
    C: ClockPort,
{
    trades: Arc<R>,
    instruments: Arc<I>,
    clock: Arc<C>,
}

impl<R, I, C> RecordTradeUseCase<R, I, C>
where
    R: TradeRepository,
    I: InstrumentProviderPort,
    C: ClockPort,
{
    /// Create a new `RecordTradeUseCase`.
    pub const fn new(trades: Arc<R>, instruments: Arc<I>, clock: Arc<C>) -> Self {
        Self {
            trades,
            instruments,
            clock,
        }
    }

    /// Validate, compute and store a new trade.
    ///
    /// # Errors
    ///
    /// Returns error if the command is invalid, the instrument cannot be
    /// resolved, or the repository fails.
    pub async fn execute(&self, cmd: RecordTradeCommand) -> Result<Trade, TradeJournalError> {
        cmd.validate()?;

        let instrument = resolve_instrument(self.instruments.as_ref(), &cmd.symbol).await?;
        let draft = TradeDraft::new(cmd, &instrument, self.clock.now())?;
        let trade = self.trades.create(draft).await?;

        if trade.id().is_blank() {
            tracing::error!(symbol = %trade.symbol(), "Repository assigned a blank trade id");
            return Err(TradeJournalError::Repository(
                "Repository assigned a blank trade id".to_string(),
            ));
        }

        tracing::info!(
            trade_id = %trade.id(),
            owner_id = %trade.owner_id(),
            symbol = %trade.symbol(),
            status = %trade.status(),
            result = %trade.result(),
            "Trade recorded"
        );

        Ok(trade)
    }

    /// Live calculation for a trade form that may not be filled in yet.
    ///
    /// Nothing is stored. An unknown symbol is reported as
    /// [`Calculation::UnknownInstrument`] rather than an error.
    ///
    /// # Errors
    ///
    /// Returns error only if the instrument source fails.
    pub async fn preview(&self, input: &TradeInput) -> Result<Calculation, TradeJournalError> {
        if input.symbol.is_blank() {
            return Ok(Calculation::Incomplete(IncompleteInput::MissingSymbol));
        }

        let instrument = match resolve_instrument(self.instruments.as_ref(), &input.symbol).await {
            Ok(instrument) => Some(instrument),
            Err(TradeJournalError::InstrumentNotFound { .. }) => None,
            Err(e) => return Err(e),
        };

        let calculation = ResultCalculator::calculate(input, instrument.as_ref());
        tracing::debug!(symbol = %input.symbol, ?calculation, "Trade preview calculated");
        Ok(calculation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::FixedClock;
    use crate::domain::shared::{OwnerId, Symbol, Timestamp};
    use crate::domain::trade_journal::{Direction, TradeLevels, TradeStatus};
    use crate::infrastructure::instruments::StaticInstrumentProvider;
    use crate::infrastructure::persistence::InMemoryTradeRepository;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn now() -> Timestamp {
        Timestamp::parse("2026-06-01T14:00:00Z").unwrap()
    }

    fn use_case() -> (
        RecordTradeUseCase<InMemoryTradeRepository, StaticInstrumentProvider, FixedClock>,
        Arc<InMemoryTradeRepository>,
    ) {
        let repo = Arc::new(InMemoryTradeRepository::new());
        let uc = RecordTradeUseCase::new(
            Arc::clone(&repo),
            Arc::new(StaticInstrumentProvider::with_fallback_table()),
            Arc::new(FixedClock::new(now())),
        );
        (uc, repo)
    }

    fn command(symbol: &str, status: TradeStatus) -> RecordTradeCommand {
        RecordTradeCommand {
            owner_id: OwnerId::new("user-7"),
            symbol: Symbol::new(symbol),
            direction: Direction::Buy,
            levels: TradeLevels {
                entry_price: Some(dec!(2000.00)),
                exit_price: Some(dec!(2012.34)),
                lot_size: dec!(0.5),
                risk_pips: dec!(500),
            },
            status,
            opened_at: None,
            closed_at: None,
            notes: None,
        }
    }

    #[tokio::test]
    async fn records_open_trade_with_pips_but_no_result() {
        let (uc, repo) = use_case();

        let trade = uc.execute(command("XAUUSD", TradeStatus::Open)).await.unwrap();

        assert!(!trade.id().is_blank());
        assert_eq!(trade.pips(), dec!(1234));
        assert_eq!(trade.result(), Decimal::ZERO);
        assert!(trade.profit().is_zero());
        assert_eq!(trade.opened_at(), now());
        assert_eq!(trade.closed_at(), None);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn records_closed_trade_with_close_time() {
        let (uc, _repo) = use_case();

        let trade = uc.execute(command("xauusd", TradeStatus::Closed)).await.unwrap();

        assert_eq!(trade.symbol().as_str(), "XAUUSD");
        assert_eq!(trade.result(), dec!(1234));
        assert_eq!(trade.closed_at(), Some(now()));
    }

    #[tokio::test]
    async fn unknown_instrument_is_rejected_without_storing() {
        let (uc, repo) = use_case();

        let err = uc.execute(command("FOOBAR", TradeStatus::Open)).await.unwrap_err();

        assert_eq!(
            err,
            TradeJournalError::InstrumentNotFound {
                symbol: "FOOBAR".to_string()
            }
        );
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn invalid_levels_are_rejected_before_lookup() {
        let (uc, repo) = use_case();
        let mut cmd = command("NOPE", TradeStatus::Open);
        cmd.levels.lot_size = Decimal::ZERO;

        let err = uc.execute(cmd).await.unwrap_err();

        assert!(matches!(err, TradeJournalError::InvalidTrade { field, .. } if field == "lot_size"));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn overflowing_row_is_rejected_without_storing() {
        let (uc, repo) = use_case();
        let mut cmd = command("EURUSD", TradeStatus::Open);
        cmd.levels.entry_price = Some(dec!(1.1));
        cmd.levels.exit_price = Some(dec!(100000000000000000000));
        cmd.levels.lot_size = dec!(100000000000000000000);

        let err = uc.execute(cmd).await.unwrap_err();

        assert_eq!(err, TradeJournalError::Overflow);
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn preview_distinguishes_incomplete_from_unknown() {
        let (uc, _repo) = use_case();
        let mut input = TradeInput {
            symbol: Symbol::new("EURUSD"),
            direction: Direction::Sell,
            levels: TradeLevels {
                entry_price: Some(dec!(1.1000)),
                exit_price: None,
                lot_size: dec!(1),
                risk_pips: dec!(20),
            },
        };

        let calc = uc.preview(&input).await.unwrap();
        assert_eq!(calc, Calculation::Incomplete(IncompleteInput::MissingExitPrice));

        input.levels.exit_price = Some(dec!(1.0960));
        let calc = uc.preview(&input).await.unwrap();
        assert_eq!(calc.fields_or_zero().pips, dec!(40));

        input.symbol = Symbol::new("FOOBAR");
        let calc = uc.preview(&input).await.unwrap();
        assert_eq!(calc, Calculation::UnknownInstrument(Symbol::new("FOOBAR")));

        input.symbol = Symbol::new("");
        let calc = uc.preview(&input).await.unwrap();
        assert_eq!(calc, Calculation::Incomplete(IncompleteInput::MissingSymbol));
    }
}
