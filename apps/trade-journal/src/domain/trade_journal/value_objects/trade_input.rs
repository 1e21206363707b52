//! Calculator inputs: price levels and the trade they belong to.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Direction;
use crate::domain::shared::{DomainError, Symbol};

/// Authoritative price levels and sizing of a trade.
///
/// Prices are optional while a trade is being filled in; an OPEN trade
/// usually has no exit price yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeLevels {
    /// Entry price.
    pub entry_price: Option<Decimal>,
    /// Exit price.
    pub exit_price: Option<Decimal>,
    /// Position size in lots.
    pub lot_size: Decimal,
    /// Stop-loss distance in pips.
    pub risk_pips: Decimal,
}

impl TradeLevels {
    /// Validate levels for storage.
    ///
    /// Missing prices are allowed; present prices must be positive.
    ///
    /// # Errors
    ///
    /// Returns error if a present price is not positive, the lot size is not
    /// positive, or the risk distance is negative.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.entry_price.is_some_and(|p| p <= Decimal::ZERO) {
            return Err(DomainError::invalid("entry_price", "must be positive"));
        }
        if self.exit_price.is_some_and(|p| p <= Decimal::ZERO) {
            return Err(DomainError::invalid("exit_price", "must be positive"));
        }
        if self.lot_size <= Decimal::ZERO {
            return Err(DomainError::invalid("lot_size", "must be positive"));
        }
        if self.risk_pips < Decimal::ZERO {
            return Err(DomainError::invalid("risk_pips", "cannot be negative"));
        }
        Ok(())
    }
}

/// Everything the result calculator needs from a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeInput {
    /// Instrument symbol (may still be blank in form state).
    pub symbol: Symbol,
    /// Trade direction.
    pub direction: Direction,
    /// Price levels and sizing.
    pub levels: TradeLevels,
}
