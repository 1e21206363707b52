//! Core types for results reporting.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::constants::DEFAULT_SIGNAL_DURATION_HOURS;
use crate::domain::shared::{Symbol, Timestamp, TradeId};

/// Where the closed positions come from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResultSource {
    /// Published signals; results are in pips and there is no close-time tracking.
    Signals,
    /// Executed trades; results are in account currency.
    #[default]
    Trades,
}

/// A completed position reduced to what the statistics need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosedPosition {
    /// Originating trade, when known.
    pub trade_id: Option<TradeId>,
    /// Instrument symbol, when known.
    pub symbol: Option<Symbol>,
    /// Open time, when tracked.
    pub opened_at: Option<Timestamp>,
    /// Close time.
    pub closed_at: Timestamp,
    /// Signed result (pips or money depending on the source).
    pub result: Decimal,
}

impl ClosedPosition {
    /// Create a position with only a close time and a result.
    #[must_use]
    pub const fn new(closed_at: Timestamp, result: Decimal) -> Self {
        Self {
            trade_id: None,
            symbol: None,
            opened_at: None,
            closed_at,
            result,
        }
    }

    /// Set the open time.
    #[must_use]
    pub fn with_opened_at(mut self, opened_at: Timestamp) -> Self {
        self.opened_at = Some(opened_at);
        self
    }

    /// Check if the position made money.
    #[must_use]
    pub fn is_winner(&self) -> bool {
        self.result > Decimal::ZERO
    }

    /// Check if the position lost money.
    #[must_use]
    pub fn is_loser(&self) -> bool {
        self.result < Decimal::ZERO
    }

    /// Hours between open and close, if the open time is known.
    #[must_use]
    pub fn holding_hours(&self) -> Option<Decimal> {
        self.opened_at.map(|opened| self.closed_at.hours_since(opened))
    }
}

/// Summed result of one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayResult {
    /// Calendar date in the reporting time zone.
    pub date: NaiveDate,
    /// Sum of results closed on that day.
    pub total: Decimal,
    /// Number of positions closed on that day.
    pub positions: u64,
}

/// Summed result of one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthResult {
    /// Year.
    pub year: i32,
    /// Month (1-12).
    pub month: u32,
    /// Sum of results closed in that month.
    pub total: Decimal,
    /// Number of positions closed in that month.
    pub positions: u64,
}

/// Longest runs of same-sign results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSummary {
    /// Longest run of winners.
    pub max_win_streak: u64,
    /// Longest run of losers.
    pub max_loss_streak: u64,
}

/// Running-equity drawdown figures.
///
/// Equity starts at zero and accumulates each result in close-time order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawdownSummary {
    /// Largest `peak - equity` observed.
    pub max_drawdown: Decimal,
    /// Highest running equity.
    pub peak_equity: Decimal,
    /// Equity after the last position.
    pub final_equity: Decimal,
}

/// Options controlling how a summary is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Where the positions come from.
    pub source: ResultSource,
    /// Assumed duration of each completed signal.
    pub signal_duration_hours: Decimal,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            source: ResultSource::default(),
            signal_duration_hours: DEFAULT_SIGNAL_DURATION_HOURS,
        }
    }
}

/// Results dashboard summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultsSummary {
    /// Source of the positions.
    pub source: ResultSource,
    /// Number of closed positions.
    pub total_positions: u64,
    /// Positions with a positive result.
    pub winning_positions: u64,
    /// Positions with a negative result.
    pub losing_positions: u64,
    /// Positions with a zero result.
    pub breakeven_positions: u64,
    /// Winners as a percentage of all positions.
    pub win_rate: Decimal,
    /// Sum of all results.
    pub total_result: Decimal,
    /// Drawdown figures.
    pub drawdown: DrawdownSummary,
    /// Streak figures.
    pub streaks: StreakSummary,
    /// Day with the highest total.
    pub best_day: Option<DayResult>,
    /// Day with the lowest total.
    pub worst_day: Option<DayResult>,
    /// Average duration of a position in hours.
    pub average_duration_hours: Decimal,
    /// Per-day totals in date order.
    pub daily: Vec<DayResult>,
    /// Per-month totals in date order.
    pub monthly: Vec<MonthResult>,
}
