//! In-memory trade repository.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::shared::{OwnerId, TradeId};
use crate::domain::trade_journal::{Trade, TradeDraft, TradeJournalError, TradePatch, TradeRepository};

/// In-memory implementation of `TradeRepository`.
///
/// Ids are generated as UUID v4. Suitable for tests and the CLI.
#[derive(Debug, Default)]
pub struct InMemoryTradeRepository {
    trades: RwLock<HashMap<String, Trade>>,
}

impl InMemoryTradeRepository {
    /// Create a new empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            trades: RwLock::new(HashMap::new()),
        }
    }

    /// Get the number of trades in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trades
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// Check if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Distinct owners with at least one trade, sorted.
    #[must_use]
    pub fn owners(&self) -> Vec<OwnerId> {
        let trades = self
            .trades
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut owners: Vec<OwnerId> = trades.values().map(|t| t.owner_id().clone()).collect();
        owners.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        owners.dedup();
        owners
    }
}

#[async_trait]
impl TradeRepository for InMemoryTradeRepository {
    async fn create(&self, draft: TradeDraft) -> Result<Trade, TradeJournalError> {
        let trade = Trade::from_draft(TradeId::generate(), draft);
        let mut trades = self
            .trades
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        trades.insert(trade.id().to_string(), trade.clone());
        Ok(trade)
    }

    async fn find_by_id(&self, id: &TradeId) -> Result<Option<Trade>, TradeJournalError> {
        let trades = self
            .trades
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(trades.get(id.as_str()).cloned())
    }

    async fn update(&self, id: &TradeId, patch: TradePatch) -> Result<Trade, TradeJournalError> {
        let mut trades = self
            .trades
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let trade = trades
            .get_mut(id.as_str())
            .ok_or_else(|| TradeJournalError::TradeNotFound { id: id.to_string() })?;
        trade.apply_patch(patch);
        Ok(trade.clone())
    }

    async fn delete(&self, id: &TradeId) -> Result<(), TradeJournalError> {
        let mut trades = self
            .trades
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        trades
            .remove(id.as_str())
            .ok_or_else(|| TradeJournalError::TradeNotFound { id: id.to_string() })?;
        Ok(())
    }

    async fn list_by_owner(&self, owner_id: &OwnerId) -> Result<Vec<Trade>, TradeJournalError> {
        let trades = self
            .trades
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let mut owned: Vec<Trade> = trades
            .values()
            .filter(|t| t.owner_id() == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| {
            a.opened_at()
                .cmp(&b.opened_at())
                .then_with(|| a.created_at().cmp(&b.created_at()))
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(owned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::instrument::{Instrument, InstrumentCategory};
    use crate::domain::shared::{Symbol, Timestamp};
    use crate::domain::trade_journal::aggregate::RecordTradeCommand;
    use crate::domain::trade_journal::{Direction, TradeLevels, TradeStatus};
    use rust_decimal_macros::dec;

    fn draft(owner: &str, opened: &str) -> TradeDraft {
        let eurjpy = Instrument::new("EURJPY", InstrumentCategory::Forex, dec!(0.01), dec!(6.7));
        let opened = Timestamp::parse(opened).unwrap();
        TradeDraft::new(
            RecordTradeCommand {
                owner_id: OwnerId::new(owner),
                symbol: Symbol::new("EURJPY"),
                direction: Direction::Sell,
                levels: TradeLevels {
                    entry_price: Some(dec!(163.40)),
                    exit_price: None,
                    lot_size: dec!(0.2),
                    risk_pips: dec!(35),
                },
                status: TradeStatus::Open,
                opened_at: Some(opened),
                closed_at: None,
                notes: None,
            },
            &eurjpy,
            opened,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_assigns_non_blank_ids() {
        let repo = InMemoryTradeRepository::new();
        let a = repo.create(draft("u1", "2026-01-02T10:00:00Z")).await.unwrap();
        let b = repo.create(draft("u1", "2026-01-02T10:00:00Z")).await.unwrap();

        assert!(!a.id().is_blank());
        assert_ne!(a.id(), b.id());
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn update_applies_patch() {
        let repo = InMemoryTradeRepository::new();
        let trade = repo.create(draft("u1", "2026-01-02T10:00:00Z")).await.unwrap();

        let closed = trade.with_notes(Some("moved stop".to_string()), Timestamp::parse("2026-01-02T11:00:00Z").unwrap());
        let stored = repo.update(trade.id(), TradePatch::snapshot(&closed)).await.unwrap();

        assert_eq!(stored.notes(), Some("moved stop"));
        let found = repo.find_by_id(trade.id()).await.unwrap();
        assert_eq!(found, Some(stored));
    }

    #[tokio::test]
    async fn update_and_delete_unknown_id() {
        let repo = InMemoryTradeRepository::new();
        let trade = Trade::from_draft(TradeId::new("ghost"), draft("u1", "2026-01-02T10:00:00Z"));

        let err = repo.update(trade.id(), TradePatch::snapshot(&trade)).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(repo.delete(trade.id()).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn list_by_owner_filters_and_orders() {
        let repo = InMemoryTradeRepository::new();
        let late = repo.create(draft("u1", "2026-01-05T10:00:00Z")).await.unwrap();
        let early = repo.create(draft("u1", "2026-01-03T10:00:00Z")).await.unwrap();
        repo.create(draft("u2", "2026-01-04T10:00:00Z")).await.unwrap();

        let listed = repo.list_by_owner(&OwnerId::new("u1")).await.unwrap();
        let ids: Vec<&TradeId> = listed.iter().map(Trade::id).collect();
        assert_eq!(ids, vec![early.id(), late.id()]);
        assert_eq!(repo.owners(), vec![OwnerId::new("u1"), OwnerId::new("u2")]);
    }

    #[tokio::test]
    async fn delete_removes_trade() {
        let repo = InMemoryTradeRepository::new();
        let trade = repo.create(draft("u1", "2026-01-02T10:00:00Z")).await.unwrap();

        repo.delete(trade.id()).await.unwrap();
        assert!(repo.is_empty());
        assert_eq!(repo.find_by_id(trade.id()).await.unwrap(), None);
    }
}
