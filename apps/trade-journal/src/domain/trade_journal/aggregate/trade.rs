//! Trade Aggregate Root
//!
//! A trade owns its authoritative levels (entry, exit, lot size, risk) and a
//! status. Pips, result, profit and risk:reward are derived from the levels
//! and the current status alone, and are recomputed on every change.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::instrument::Instrument;
use crate::domain::shared::{Money, OwnerId, Symbol, Timestamp, TradeId};
use crate::domain::trade_journal::errors::TradeJournalError;
use crate::domain::trade_journal::services::StatusTransitionHandler;
use crate::domain::trade_journal::value_objects::{
    DerivedFields, Direction, TradeInput, TradeLevels, TradeStatus,
};

/// Command to record a new trade.
#[derive(Debug, Clone)]
pub struct RecordTradeCommand {
    /// Owner of the trade.
    pub owner_id: OwnerId,
    /// Instrument symbol.
    pub symbol: Symbol,
    /// Trade direction.
    pub direction: Direction,
    /// Price levels and sizing.
    pub levels: TradeLevels,
    /// Initial status.
    pub status: TradeStatus,
    /// When the position was opened. Defaults to the recording time.
    pub opened_at: Option<Timestamp>,
    /// When the position was closed. Ignored for OPEN trades; defaults to
    /// the recording time otherwise.
    pub closed_at: Option<Timestamp>,
    /// Free-form notes.
    pub notes: Option<String>,
}

impl RecordTradeCommand {
    /// Validate the command parameters.
    ///
    /// # Errors
    ///
    /// Returns error if the owner is blank, the symbol or levels are invalid,
    /// or the close time precedes the open time.
    pub fn validate(&self) -> Result<(), TradeJournalError> {
        if self.owner_id.is_blank() {
            return Err(TradeJournalError::InvalidTrade {
                field: "owner_id".to_string(),
                message: "Owner id cannot be blank".to_string(),
            });
        }

        self.symbol.validate()?;
        self.levels.validate()?;

        if let (Some(opened), Some(closed)) = (self.opened_at, self.closed_at)
            && closed < opened
        {
            return Err(TradeJournalError::InvalidTrade {
                field: "closed_at".to_string(),
                message: "Close time precedes open time".to_string(),
            });
        }

        Ok(())
    }
}

/// A validated trade that has not been assigned an id yet.
///
/// Produced by [`TradeDraft::new`] and turned into a [`Trade`] by the
/// repository when it is stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeDraft {
    owner_id: OwnerId,
    symbol: Symbol,
    direction: Direction,
    levels: TradeLevels,
    status: TradeStatus,
    derived: DerivedFields,
    opened_at: Timestamp,
    closed_at: Option<Timestamp>,
    notes: Option<String>,
    created_at: Timestamp,
}

impl TradeDraft {
    /// Validate a command and compute its derived fields.
    ///
    /// # Errors
    ///
    /// Returns error if validation fails, `instrument` belongs to another
    /// symbol, or the levels overflow the result calculation.
    pub fn new(
        cmd: RecordTradeCommand,
        instrument: &Instrument,
        now: Timestamp,
    ) -> Result<Self, TradeJournalError> {
        cmd.validate()?;
        ensure_instrument(&cmd.symbol, instrument)?;

        let input = TradeInput {
            symbol: cmd.symbol.clone(),
            direction: cmd.direction,
            levels: cmd.levels,
        };
        let derived = StatusTransitionHandler::derive(&input, cmd.status, instrument)?;

        let opened_at = cmd.opened_at.unwrap_or(now);
        let closed_at = if cmd.status.is_closed() {
            Some(cmd.closed_at.unwrap_or(now).max(opened_at))
        } else {
            None
        };

        Ok(Self {
            owner_id: cmd.owner_id,
            symbol: cmd.symbol,
            direction: cmd.direction,
            levels: cmd.levels,
            status: cmd.status,
            derived,
            opened_at,
            closed_at,
            notes: cmd.notes,
            created_at: now,
        })
    }

    /// Owner of the trade.
    #[must_use]
    pub const fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    /// Instrument symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Initial status.
    #[must_use]
    pub const fn status(&self) -> TradeStatus {
        self.status
    }

    /// Derived fields computed at creation.
    #[must_use]
    pub const fn derived(&self) -> &DerivedFields {
        &self.derived
    }
}

/// Changes persisted by [`crate::domain::trade_journal::TradeRepository::update`].
///
/// Always carries the full recomputed state so stored derived fields can
/// never drift from the levels they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradePatch {
    levels: TradeLevels,
    status: TradeStatus,
    derived: DerivedFields,
    closed_at: Option<Timestamp>,
    notes: Option<String>,
    updated_at: Timestamp,
}

impl TradePatch {
    /// Capture the mutable state of an updated trade.
    #[must_use]
    pub fn snapshot(trade: &Trade) -> Self {
        Self {
            levels: trade.levels,
            status: trade.status,
            derived: trade.derived,
            closed_at: trade.closed_at,
            notes: trade.notes.clone(),
            updated_at: trade.updated_at,
        }
    }

    /// Status carried by the patch.
    #[must_use]
    pub const fn status(&self) -> TradeStatus {
        self.status
    }

    /// Derived fields carried by the patch.
    #[must_use]
    pub const fn derived(&self) -> &DerivedFields {
        &self.derived
    }
}

/// Trade Aggregate Root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trade {
    id: TradeId,
    owner_id: OwnerId,
    symbol: Symbol,
    direction: Direction,
    levels: TradeLevels,
    status: TradeStatus,
    derived: DerivedFields,
    opened_at: Timestamp,
    closed_at: Option<Timestamp>,
    notes: Option<String>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Trade {
    /// Assign an id to a draft.
    #[must_use]
    pub fn from_draft(id: TradeId, draft: TradeDraft) -> Self {
        Self {
            id,
            owner_id: draft.owner_id,
            symbol: draft.symbol,
            direction: draft.direction,
            levels: draft.levels,
            status: draft.status,
            derived: draft.derived,
            opened_at: draft.opened_at,
            closed_at: draft.closed_at,
            notes: draft.notes,
            created_at: draft.created_at,
            updated_at: draft.created_at,
        }
    }

    /// Apply a stored patch.
    pub fn apply_patch(&mut self, patch: TradePatch) {
        self.levels = patch.levels;
        self.status = patch.status;
        self.derived = patch.derived;
        self.closed_at = patch.closed_at;
        self.notes = patch.notes;
        self.updated_at = patch.updated_at;
    }

    /// Replace the levels and recompute every derived field under the
    /// current status.
    ///
    /// # Errors
    ///
    /// Returns error if the levels are invalid, `instrument` belongs to
    /// another symbol, or the levels overflow the result calculation.
    pub fn with_levels(
        &self,
        levels: TradeLevels,
        instrument: &Instrument,
        now: Timestamp,
    ) -> Result<Self, TradeJournalError> {
        levels.validate()?;
        ensure_instrument(&self.symbol, instrument)?;

        let mut updated = self.clone();
        updated.levels = levels;
        updated.derived = StatusTransitionHandler::derive(&updated.input(), updated.status, instrument)?;
        updated.updated_at = now;
        Ok(updated)
    }

    /// Replace the notes.
    #[must_use]
    pub fn with_notes(&self, notes: Option<String>, now: Timestamp) -> Self {
        let mut updated = self.clone();
        updated.notes = notes;
        updated.updated_at = now;
        updated
    }

    pub(crate) fn transitioned(
        &self,
        status: TradeStatus,
        derived: DerivedFields,
        closed_at: Option<Timestamp>,
        now: Timestamp,
    ) -> Self {
        let mut updated = self.clone();
        updated.status = status;
        updated.derived = derived;
        updated.closed_at = closed_at;
        updated.updated_at = now;
        updated
    }

    /// Calculator input for this trade.
    #[must_use]
    pub fn input(&self) -> TradeInput {
        TradeInput {
            symbol: self.symbol.clone(),
            direction: self.direction,
            levels: self.levels,
        }
    }

    // Accessors

    /// Get trade ID.
    #[must_use]
    pub const fn id(&self) -> &TradeId {
        &self.id
    }

    /// Get owner ID.
    #[must_use]
    pub const fn owner_id(&self) -> &OwnerId {
        &self.owner_id
    }

    /// Get symbol.
    #[must_use]
    pub const fn symbol(&self) -> &Symbol {
        &self.symbol
    }

    /// Get direction.
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Get levels.
    #[must_use]
    pub const fn levels(&self) -> &TradeLevels {
        &self.levels
    }

    /// Get status.
    #[must_use]
    pub const fn status(&self) -> TradeStatus {
        self.status
    }

    /// Get all derived fields.
    #[must_use]
    pub const fn derived(&self) -> &DerivedFields {
        &self.derived
    }

    /// Signed raw pips.
    #[must_use]
    pub const fn pips(&self) -> Decimal {
        self.derived.pips
    }

    /// Display-adjusted result.
    #[must_use]
    pub const fn result(&self) -> Decimal {
        self.derived.result
    }

    /// Monetary profit.
    #[must_use]
    pub const fn profit(&self) -> Money {
        self.derived.profit
    }

    /// Risk:reward ratio.
    #[must_use]
    pub const fn risk_reward_ratio(&self) -> Decimal {
        self.derived.risk_reward_ratio
    }

    /// Get open timestamp.
    #[must_use]
    pub const fn opened_at(&self) -> Timestamp {
        self.opened_at
    }

    /// Get close timestamp, if the trade is closed.
    #[must_use]
    pub const fn closed_at(&self) -> Option<Timestamp> {
        self.closed_at
    }

    /// Get notes.
    #[must_use]
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Get creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// Get last update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> Timestamp {
        self.updated_at
    }
}

fn ensure_instrument(symbol: &Symbol, instrument: &Instrument) -> Result<(), TradeJournalError> {
    if &instrument.symbol == symbol {
        Ok(())
    } else {
        Err(TradeJournalError::InstrumentMismatch {
            expected: symbol.to_string(),
            actual: instrument.symbol.to_string(),
        })
    }
}
