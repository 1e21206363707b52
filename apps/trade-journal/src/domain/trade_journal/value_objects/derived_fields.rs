//! Fields derived from a trade's levels and status.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::Money;

/// Derived results of a trade. Never edited directly.
///
/// `pips` is the raw signed pip distance and `result` the display-adjusted
/// figure; both are kept so recomputation never applies the display
/// multiplier twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivedFields {
    /// Signed raw pip distance (positive means profit).
    pub pips: Decimal,
    /// Display-adjusted pip result.
    pub result: Decimal,
    /// Signed monetary profit/loss.
    pub profit: Money,
    /// Realized pips relative to the risk distance.
    pub risk_reward_ratio: Decimal,
}

impl DerivedFields {
    /// All-zero derived fields.
    pub const ZERO: Self = Self {
        pips: Decimal::ZERO,
        result: Decimal::ZERO,
        profit: Money::ZERO,
        risk_reward_ratio: Decimal::ZERO,
    };

    /// Risk:reward rounded to 2 decimal places for display.
    #[must_use]
    pub fn risk_reward_display(&self) -> Decimal {
        self.risk_reward_ratio.round_dp(2)
    }

    /// True when every field is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.pips.is_zero()
            && self.result.is_zero()
            && self.profit.is_zero()
            && self.risk_reward_ratio.is_zero()
    }
}

impl Default for DerivedFields {
    fn default() -> Self {
        Self::ZERO
    }
}
