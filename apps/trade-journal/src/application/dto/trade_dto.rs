//! Trade DTOs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::shared::{OwnerId, Symbol, Timestamp};
use crate::domain::trade_journal::aggregate::RecordTradeCommand;
use crate::domain::trade_journal::{Direction, Trade, TradeLevels, TradeStatus};

const fn default_status() -> TradeStatus {
    TradeStatus::Open
}

/// DTO for recording a trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordTradeDto {
    /// Owner ID.
    pub owner_id: String,
    /// Symbol.
    pub symbol: String,
    /// Direction.
    pub direction: Direction,
    /// Entry price.
    #[serde(default)]
    pub entry_price: Option<Decimal>,
    /// Exit price.
    #[serde(default)]
    pub exit_price: Option<Decimal>,
    /// Lot size.
    pub lot_size: Decimal,
    /// Risk distance in pips.
    #[serde(default)]
    pub risk_pips: Decimal,
    /// Status.
    #[serde(default = "default_status")]
    pub status: TradeStatus,
    /// Opened at.
    #[serde(default)]
    pub opened_at: Option<Timestamp>,
    /// Closed at.
    #[serde(default)]
    pub closed_at: Option<Timestamp>,
    /// Notes.
    #[serde(default)]
    pub notes: Option<String>,
}

impl RecordTradeDto {
    /// Convert to a domain command.
    #[must_use]
    pub fn to_command(&self) -> RecordTradeCommand {
        RecordTradeCommand {
            owner_id: OwnerId::new(&self.owner_id),
            symbol: Symbol::new(&self.symbol),
            direction: self.direction,
            levels: TradeLevels {
                entry_price: self.entry_price,
                exit_price: self.exit_price,
                lot_size: self.lot_size,
                risk_pips: self.risk_pips,
            },
            status: self.status,
            opened_at: self.opened_at,
            closed_at: self.closed_at,
            notes: self.notes.clone(),
        }
    }
}

/// DTO representing a stored trade.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeDto {
    /// Trade ID.
    pub trade_id: String,
    /// Owner ID.
    pub owner_id: String,
    /// Symbol.
    pub symbol: String,
    /// Direction.
    pub direction: Direction,
    /// Status.
    pub status: TradeStatus,
    /// Entry price.
    pub entry_price: Option<Decimal>,
    /// Exit price.
    pub exit_price: Option<Decimal>,
    /// Lot size.
    pub lot_size: Decimal,
    /// Risk distance in pips.
    pub risk_pips: Decimal,
    /// Raw pips.
    pub pips: Decimal,
    /// Display result.
    pub result: Decimal,
    /// Profit rounded to cents.
    pub profit: Decimal,
    /// Risk:reward rounded to 2 places.
    pub risk_reward_ratio: Decimal,
    /// Opened at.
    pub opened_at: Timestamp,
    /// Closed at.
    pub closed_at: Option<Timestamp>,
    /// Notes.
    pub notes: Option<String>,
    /// Created at.
    pub created_at: Timestamp,
    /// Updated at.
    pub updated_at: Timestamp,
}

impl TradeDto {
    /// Create from domain Trade.
    #[must_use]
    pub fn from_trade(trade: &Trade) -> Self {
        let levels = trade.levels();
        Self {
            trade_id: trade.id().to_string(),
            owner_id: trade.owner_id().to_string(),
            symbol: trade.symbol().to_string(),
            direction: trade.direction(),
            status: trade.status(),
            entry_price: levels.entry_price,
            exit_price: levels.exit_price,
            lot_size: levels.lot_size,
            risk_pips: levels.risk_pips,
            pips: trade.pips(),
            result: trade.result(),
            profit: trade.profit().round().amount(),
            risk_reward_ratio: trade.derived().risk_reward_display(),
            opened_at: trade.opened_at(),
            closed_at: trade.closed_at(),
            notes: trade.notes().map(str::to_string),
            created_at: trade.created_at(),
            updated_at: trade.updated_at(),
        }
    }
}
