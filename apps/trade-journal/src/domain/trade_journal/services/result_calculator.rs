//! Trade Result Calculator
//!
//! Computes pips, monetary profit, risk:reward and the display result of a
//! trade from its levels and the instrument's pip metadata.
//!
//! The calculator never fails. Form state that is not filled in yet produces
//! [`Calculation::Incomplete`]; a symbol with no metadata produces
//! [`Calculation::UnknownInstrument`]; levels too large for `Decimal` produce
//! [`Calculation::Overflow`]. Callers decide whether the latter two are
//! errors (see [`Calculation::into_result`]).
//!
//! All arithmetic is checked.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::domain::instrument::Instrument;
use crate::domain::shared::{Money, Symbol};
use crate::domain::trade_journal::errors::TradeJournalError;
use crate::domain::trade_journal::value_objects::{DerivedFields, Direction, TradeInput};

/// Which required input is missing or unusable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IncompleteInput {
    /// No instrument symbol entered.
    MissingSymbol,
    /// No entry price entered.
    MissingEntryPrice,
    /// No exit price entered.
    MissingExitPrice,
    /// Entry price is zero or negative.
    NonPositiveEntryPrice,
    /// Exit price is zero or negative.
    NonPositiveExitPrice,
}

/// Outcome of a result calculation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Calculation {
    /// All inputs were present.
    Computed(DerivedFields),
    /// Form input not complete yet.
    Incomplete(IncompleteInput),
    /// Symbol has no instrument metadata.
    UnknownInstrument(Symbol),
    /// An intermediate value exceeded the `Decimal` range.
    Overflow,
}

impl Calculation {
    /// Derived fields, or all zeros when nothing could be computed.
    #[must_use]
    pub const fn fields_or_zero(&self) -> DerivedFields {
        match self {
            Self::Computed(fields) => *fields,
            Self::Incomplete(_) | Self::UnknownInstrument(_) | Self::Overflow => DerivedFields::ZERO,
        }
    }

    /// Returns true if the calculation produced real figures.
    #[must_use]
    pub const fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    /// Convert to a result, keeping the zero fallback for incomplete input.
    ///
    /// # Errors
    ///
    /// Returns [`TradeJournalError::InstrumentNotFound`] for an unknown
    /// instrument and [`TradeJournalError::Overflow`] when the figures do not
    /// fit in a `Decimal`.
    pub fn into_result(self) -> Result<DerivedFields, TradeJournalError> {
        match self {
            Self::Computed(fields) => Ok(fields),
            Self::Incomplete(_) => Ok(DerivedFields::ZERO),
            Self::UnknownInstrument(symbol) => Err(TradeJournalError::InstrumentNotFound {
                symbol: symbol.into_inner(),
            }),
            Self::Overflow => Err(TradeJournalError::Overflow),
        }
    }
}

/// Pure trade result calculator.
pub struct ResultCalculator;

impl ResultCalculator {
    /// Calculate derived fields for a trade.
    ///
    /// `instrument` is the metadata resolved for `input.symbol`, if any.
    #[must_use]
    pub fn calculate(input: &TradeInput, instrument: Option<&Instrument>) -> Calculation {
        if input.symbol.is_blank() {
            return Calculation::Incomplete(IncompleteInput::MissingSymbol);
        }
        let Some(entry) = input.levels.entry_price else {
            return Calculation::Incomplete(IncompleteInput::MissingEntryPrice);
        };
        let Some(exit) = input.levels.exit_price else {
            return Calculation::Incomplete(IncompleteInput::MissingExitPrice);
        };
        if entry <= Decimal::ZERO {
            return Calculation::Incomplete(IncompleteInput::NonPositiveEntryPrice);
        }
        if exit <= Decimal::ZERO {
            return Calculation::Incomplete(IncompleteInput::NonPositiveExitPrice);
        }
        let Some(instrument) = instrument else {
            return Calculation::UnknownInstrument(input.symbol.clone());
        };

        Self::compute(input, entry, exit, instrument).map_or(Calculation::Overflow, Calculation::Computed)
    }

    fn compute(input: &TradeInput, entry: Decimal, exit: Decimal, instrument: &Instrument) -> Option<DerivedFields> {
        let pips = Self::raw_pips(input.direction, entry, exit, instrument.pip_size)?;

        Some(DerivedFields {
            pips,
            result: Self::display_result(pips, instrument.pip_display_multiplier)?,
            profit: Self::profit(pips, instrument.pip_value, input.levels.lot_size)?,
            risk_reward_ratio: Self::risk_reward(pips, input.levels.risk_pips)?,
        })
    }

    /// Signed pip distance; positive always means profit.
    ///
    /// A non-positive `pip_size` yields zero; `None` on overflow.
    #[must_use]
    pub fn raw_pips(direction: Direction, entry: Decimal, exit: Decimal, pip_size: Decimal) -> Option<Decimal> {
        if pip_size <= Decimal::ZERO {
            return Some(Decimal::ZERO);
        }
        let distance = match direction {
            Direction::Buy => exit.checked_sub(entry)?,
            Direction::Sell => entry.checked_sub(exit)?,
        };
        distance.checked_div(pip_size)
    }

    /// Monetary profit: `pips * pip_value * lot_size`, for every category.
    #[must_use]
    pub fn profit(pips: Decimal, pip_value: Decimal, lot_size: Decimal) -> Option<Money> {
        pips.checked_mul(pip_value)?.checked_mul(lot_size).map(Money::new)
    }

    /// `|pips| / risk_pips`, or zero without a risk distance.
    #[must_use]
    pub fn risk_reward(pips: Decimal, risk_pips: Decimal) -> Option<Decimal> {
        if risk_pips > Decimal::ZERO {
            pips.abs().checked_div(risk_pips)
        } else {
            Some(Decimal::ZERO)
        }
    }

    /// Display result: `pips * multiplier` rounded to a whole number.
    ///
    /// Midpoints round away from zero so BUY and SELL mirror exactly.
    #[must_use]
    pub fn display_result(pips: Decimal, multiplier: Decimal) -> Option<Decimal> {
        pips.checked_mul(multiplier)
            .map(|v| v.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
    }
}
