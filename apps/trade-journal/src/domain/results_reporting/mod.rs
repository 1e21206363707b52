//! Results Reporting Bounded Context
//!
//! Pure reductions over closed positions for the results dashboard:
//! - Maximum drawdown over the running equity curve
//! - Win/loss streaks
//! - Best and worst calendar day
//! - Average position duration
//! - Daily and monthly totals

mod calculator;
mod constants;
mod types;

pub use calculator::AggregateStatistics;
pub use constants::DEFAULT_SIGNAL_DURATION_HOURS;
pub use types::{
    ClosedPosition, DayResult, DrawdownSummary, MonthResult, ReportOptions, ResultSource,
    ResultsSummary, StreakSummary,
};
