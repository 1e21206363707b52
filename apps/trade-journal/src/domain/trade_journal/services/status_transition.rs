//! Status Transition Handler
//!
//! Re-derives pips, result and profit when a trade changes status. Every
//! transition recomputes from the authoritative levels; nothing is adjusted
//! incrementally. Any status may move to any other status.
//!
//! [`StatusTransitionHandler::derive`] is the only source of stored derived
//! fields: recording, price edits and status changes all go through it.

use rust_decimal::Decimal;

use super::ResultCalculator;
use crate::domain::instrument::Instrument;
use crate::domain::shared::{Money, Timestamp};
use crate::domain::trade_journal::aggregate::Trade;
use crate::domain::trade_journal::errors::TradeJournalError;
use crate::domain::trade_journal::value_objects::{DerivedFields, TradeInput, TradeStatus};

/// Applies per-status recomputation rules.
pub struct StatusTransitionHandler;

impl StatusTransitionHandler {
    /// Derived fields for `input` in the given status.
    ///
    /// - OPEN: pips kept from the levels, result and profit zero
    /// - CLOSED: result equals the raw pips, profit from entry/exit/lot size
    /// - LOSS: pips and result forced to `-|risk_pips|`, profit valued with
    ///   [`Instrument::loss_value_per_pip`]
    /// - BREAKEVEN: pips, result and profit zero
    ///
    /// The risk:reward ratio always reflects the entry/exit levels.
    ///
    /// # Errors
    ///
    /// Returns [`TradeJournalError::Overflow`] when the levels are too large
    /// for the figures to be computed.
    pub fn derive(
        input: &TradeInput,
        status: TradeStatus,
        instrument: &Instrument,
    ) -> Result<DerivedFields, TradeJournalError> {
        let calculated = ResultCalculator::calculate(input, Some(instrument)).into_result()?;

        let derived = match status {
            TradeStatus::Open => DerivedFields {
                pips: calculated.pips,
                result: Decimal::ZERO,
                profit: Money::ZERO,
                risk_reward_ratio: calculated.risk_reward_ratio,
            },
            TradeStatus::Closed => DerivedFields {
                pips: calculated.pips,
                result: calculated.pips,
                profit: calculated.profit,
                risk_reward_ratio: calculated.risk_reward_ratio,
            },
            TradeStatus::Loss => {
                let loss = Self::forced_loss_pips(input.levels.risk_pips);
                let profit =
                    ResultCalculator::profit(loss, instrument.loss_value_per_pip(), input.levels.lot_size)
                        .ok_or(TradeJournalError::Overflow)?;
                DerivedFields {
                    pips: loss,
                    result: loss,
                    profit,
                    risk_reward_ratio: calculated.risk_reward_ratio,
                }
            }
            TradeStatus::Breakeven => DerivedFields {
                risk_reward_ratio: calculated.risk_reward_ratio,
                ..DerivedFields::ZERO
            },
        };
        Ok(derived)
    }

    /// Apply a status change and return the updated trade.
    ///
    /// # Errors
    ///
    /// Returns [`TradeJournalError::BlankTradeId`] when the trade has no id and
    /// [`TradeJournalError::InstrumentMismatch`] when `instrument` belongs to
    /// another symbol. Propagates [`TradeJournalError::Overflow`] from
    /// [`Self::derive`].
    pub fn apply(
        trade: &Trade,
        new_status: TradeStatus,
        instrument: &Instrument,
        now: Timestamp,
    ) -> Result<Trade, TradeJournalError> {
        if trade.id().is_blank() {
            return Err(TradeJournalError::BlankTradeId);
        }
        if &instrument.symbol != trade.symbol() {
            return Err(TradeJournalError::InstrumentMismatch {
                expected: trade.symbol().to_string(),
                actual: instrument.symbol.to_string(),
            });
        }

        let derived = Self::derive(&trade.input(), new_status, instrument)?;
        let closed_at = match (trade.status().is_closed(), new_status.is_closed()) {
            (_, false) => None,
            (true, true) => trade.closed_at().or(Some(now)),
            (false, true) => Some(now),
        };

        Ok(trade.transitioned(new_status, derived, closed_at, now))
    }

    fn forced_loss_pips(risk_pips: Decimal) -> Decimal {
        if risk_pips.is_zero() {
            Decimal::ZERO
        } else {
            -risk_pips.abs()
        }
    }
}
