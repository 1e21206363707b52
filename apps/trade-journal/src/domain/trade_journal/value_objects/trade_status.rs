//! Trade lifecycle status.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a journal trade.
///
/// Any status may move to any other status; the status is a manual
/// correction tool, not an enforced lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeStatus {
    /// Position still running.
    Open,
    /// Closed at the recorded exit price.
    Closed,
    /// Stopped out for exactly the defined risk.
    Loss,
    /// Closed flat.
    Breakeven,
}

impl TradeStatus {
    /// All statuses, in display order.
    pub const ALL: [Self; 4] = [Self::Open, Self::Closed, Self::Loss, Self::Breakeven];

    /// Returns true once the trade no longer runs.
    #[must_use]
    pub const fn is_closed(&self) -> bool {
        !matches!(self, Self::Open)
    }
}

impl fmt::Display for TradeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Closed => write!(f, "CLOSED"),
            Self::Loss => write!(f, "LOSS"),
            Self::Breakeven => write!(f, "BREAKEVEN"),
        }
    }
}
