//! Trade Repository Trait
//!
//! Persistence abstraction for journal trades, implemented by adapters in
//! the infrastructure layer.

use async_trait::async_trait;

use super::aggregate::{Trade, TradeDraft, TradePatch};
use super::errors::TradeJournalError;
use crate::domain::shared::{OwnerId, TradeId};

/// Repository trait for Trade persistence.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TradeRepository: Send + Sync {
    /// Store a new trade and assign its id.
    ///
    /// # Errors
    ///
    /// Returns error if persistence fails.
    async fn create(&self, draft: TradeDraft) -> Result<Trade, TradeJournalError>;

    /// Find a trade by id.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn find_by_id(&self, id: &TradeId) -> Result<Option<Trade>, TradeJournalError>;

    /// Persist a patch to an existing trade.
    ///
    /// # Errors
    ///
    /// Returns [`TradeJournalError::TradeNotFound`] if no trade has this id.
    async fn update(&self, id: &TradeId, patch: TradePatch) -> Result<Trade, TradeJournalError>;

    /// Delete a trade.
    ///
    /// # Errors
    ///
    /// Returns [`TradeJournalError::TradeNotFound`] if no trade has this id.
    async fn delete(&self, id: &TradeId) -> Result<(), TradeJournalError>;

    /// All trades of an owner, oldest first by open time.
    ///
    /// # Errors
    ///
    /// Returns error if the query fails.
    async fn list_by_owner(&self, owner_id: &OwnerId) -> Result<Vec<Trade>, TradeJournalError>;
}
