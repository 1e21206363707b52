//! Aggregate statistics over closed positions.
//!
//! Every operation orders its input by close time (stable, so positions
//! closed at the same instant keep their given order) and returns the zero
//! value for an empty input. Sums saturate at the `Decimal` bounds.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, TimeZone};
use rust_decimal::Decimal;

use super::constants::HUNDRED;
use super::types::{
    ClosedPosition, DayResult, DrawdownSummary, MonthResult, ReportOptions, ResultSource,
    ResultsSummary, StreakSummary,
};

/// Aggregate statistics calculator.
pub struct AggregateStatistics;

impl AggregateStatistics {
    /// Build the full results summary.
    ///
    /// Calendar days are taken in `tz`.
    #[must_use]
    pub fn summarize<Tz: TimeZone>(
        positions: &[ClosedPosition],
        options: &ReportOptions,
        tz: &Tz,
    ) -> ResultsSummary {
        let ordered = Self::ordered(positions);
        let daily = Self::group_by_day(&ordered, tz);
        let (best_day, worst_day) = Self::extremes(&daily).unzip();

        let winning = ordered.iter().filter(|p| p.is_winner()).count() as u64;
        let losing = ordered.iter().filter(|p| p.is_loser()).count() as u64;
        let total = ordered.len() as u64;

        ResultsSummary {
            source: options.source,
            total_positions: total,
            winning_positions: winning,
            losing_positions: losing,
            breakeven_positions: total - winning - losing,
            win_rate: Self::win_rate(positions),
            total_result: ordered.iter().fold(Decimal::ZERO, |acc, p| acc.saturating_add(p.result)),
            drawdown: Self::drawdown_over(&ordered),
            streaks: Self::streaks_over(&ordered),
            best_day,
            worst_day,
            average_duration_hours: Self::average_duration_hours(positions, options),
            monthly: Self::group_by_month(&daily),
            daily,
        }
    }

    /// Maximum drawdown of the running equity curve.
    #[must_use]
    pub fn max_drawdown(positions: &[ClosedPosition]) -> DrawdownSummary {
        Self::drawdown_over(&Self::ordered(positions))
    }

    /// Longest win and loss streaks.
    ///
    /// A zero result ends both streaks without extending either.
    #[must_use]
    pub fn streaks(positions: &[ClosedPosition]) -> StreakSummary {
        Self::streaks_over(&Self::ordered(positions))
    }

    /// Best and worst calendar day in `tz`, or `None` without positions.
    ///
    /// On ties the earliest day wins.
    #[must_use]
    pub fn best_and_worst_day<Tz: TimeZone>(
        positions: &[ClosedPosition],
        tz: &Tz,
    ) -> Option<(DayResult, DayResult)> {
        Self::extremes(&Self::daily_totals(positions, tz))
    }

    /// Per-day totals in `tz`, in date order.
    #[must_use]
    pub fn daily_totals<Tz: TimeZone>(positions: &[ClosedPosition], tz: &Tz) -> Vec<DayResult> {
        Self::group_by_day(&Self::ordered(positions), tz)
    }

    /// Per-month totals in `tz`, in date order.
    #[must_use]
    pub fn monthly_totals<Tz: TimeZone>(positions: &[ClosedPosition], tz: &Tz) -> Vec<MonthResult> {
        Self::group_by_month(&Self::daily_totals(positions, tz))
    }

    /// Average position duration in hours.
    ///
    /// Trades average `closed_at - opened_at` over positions that carry an
    /// open time. Signals have no close-time tracking and use the configured
    /// estimate for every position.
    #[must_use]
    pub fn average_duration_hours(positions: &[ClosedPosition], options: &ReportOptions) -> Decimal {
        if positions.is_empty() {
            return Decimal::ZERO;
        }

        match options.source {
            ResultSource::Signals => options.signal_duration_hours,
            ResultSource::Trades => {
                let hours: Vec<Decimal> = positions.iter().filter_map(ClosedPosition::holding_hours).collect();
                if hours.is_empty() {
                    Decimal::ZERO
                } else {
                    let total = hours.iter().fold(Decimal::ZERO, |acc, h| acc.saturating_add(*h));
                    total / Decimal::from(hours.len())
                }
            }
        }
    }

    /// Winning positions as a percentage of all positions.
    #[must_use]
    pub fn win_rate(positions: &[ClosedPosition]) -> Decimal {
        if positions.is_empty() {
            return Decimal::ZERO;
        }
        let winners = positions.iter().filter(|p| p.is_winner()).count();
        Decimal::from(winners) / Decimal::from(positions.len()) * HUNDRED
    }

    fn ordered(positions: &[ClosedPosition]) -> Vec<&ClosedPosition> {
        let mut ordered: Vec<&ClosedPosition> = positions.iter().collect();
        ordered.sort_by_key(|p| p.closed_at);
        ordered
    }

    fn drawdown_over(ordered: &[&ClosedPosition]) -> DrawdownSummary {
        let mut equity = Decimal::ZERO;
        let mut peak = Decimal::ZERO;
        let mut max_drawdown = Decimal::ZERO;

        for position in ordered {
            equity = equity.saturating_add(position.result);
            peak = peak.max(equity);
            max_drawdown = max_drawdown.max(peak.saturating_sub(equity));
        }

        DrawdownSummary {
            max_drawdown,
            peak_equity: peak,
            final_equity: equity,
        }
    }

    fn streaks_over(ordered: &[&ClosedPosition]) -> StreakSummary {
        let mut max_wins = 0u64;
        let mut max_losses = 0u64;
        let mut current_wins = 0u64;
        let mut current_losses = 0u64;

        for position in ordered {
            if position.is_winner() {
                current_wins += 1;
                current_losses = 0;
                max_wins = max_wins.max(current_wins);
            } else if position.is_loser() {
                current_losses += 1;
                current_wins = 0;
                max_losses = max_losses.max(current_losses);
            } else {
                current_wins = 0;
                current_losses = 0;
            }
        }

        StreakSummary {
            max_win_streak: max_wins,
            max_loss_streak: max_losses,
        }
    }

    // Keyed by date: when a zone's clocks go back across midnight, a later
    // close can fall on an earlier local date.
    fn group_by_day<Tz: TimeZone>(ordered: &[&ClosedPosition], tz: &Tz) -> Vec<DayResult> {
        let mut days: BTreeMap<NaiveDate, DayResult> = BTreeMap::new();

        for position in ordered {
            let date = position.closed_at.date_in(tz);
            let day = days.entry(date).or_insert(DayResult {
                date,
                total: Decimal::ZERO,
                positions: 0,
            });
            day.total = day.total.saturating_add(position.result);
            day.positions += 1;
        }

        days.into_values().collect()
    }

    fn group_by_month(days: &[DayResult]) -> Vec<MonthResult> {
        let mut months: Vec<MonthResult> = Vec::new();

        for day in days {
            let (year, month) = (day.date.year(), day.date.month());
            match months.last_mut() {
                Some(m) if m.year == year && m.month == month => {
                    m.total = m.total.saturating_add(day.total);
                    m.positions += day.positions;
                }
                _ => months.push(MonthResult {
                    year,
                    month,
                    total: day.total,
                    positions: day.positions,
                }),
            }
        }

        months
    }

    fn extremes(days: &[DayResult]) -> Option<(DayResult, DayResult)> {
        let first = days.first()?;
        let mut best = first;
        let mut worst = first;

        for day in &days[1..] {
            if day.total > best.total {
                best = day;
            }
            if day.total < worst.total {
                worst = day;
            }
        }

        Some((best.clone(), worst.clone()))
    }
}
