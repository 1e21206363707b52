//! Decimal constants for results reporting.

use rust_decimal::Decimal;

pub const HUNDRED: Decimal = Decimal::ONE_HUNDRED;

/// Duration assumed for a completed signal, which carries no close time.
pub const DEFAULT_SIGNAL_DURATION_HOURS: Decimal = Decimal::from_parts(48, 0, 0, false, 0);
