//! Domain Layer
//!
//! Business logic with zero infrastructure dependencies.
//!
//! # Bounded Contexts
//!
//! - [`instrument`]: Instrument metadata (pip size, pip value, display multiplier)
//! - [`trade_journal`]: Trade aggregate, result calculation, status transitions
//! - [`results_reporting`]: Drawdown, streak, best/worst day and duration rollups

pub mod instrument;
pub mod results_reporting;
pub mod shared;
pub mod trade_journal;
