//! Delete Trade Use Case

use std::sync::Arc;

use crate::domain::shared::TradeId;
use crate::domain::trade_journal::{TradeJournalError, TradeRepository};

/// Use case for removing a trade from the journal.
pub struct DeleteTradeUseCase<R>
where
    R: TradeRepository,
{
    trades: Arc<R>,
}

impl<R> DeleteTradeUseCase<R>
where
    R: TradeRepository,
{
    /// Create a new `DeleteTradeUseCase`.
    pub const fn new(trades: Arc<R>) -> Self {
        Self { trades }
    }

    /// Delete a trade by id.
    ///
    /// # Errors
    ///
    /// Returns error if the id is blank or unknown, or the repository fails.
    pub async fn execute(&self, id: &TradeId) -> Result<(), TradeJournalError> {
        if id.is_blank() {
            tracing::warn!("Rejected blank trade id");
            return Err(TradeJournalError::BlankTradeId);
        }

        self.trades.delete(id).await?;
        tracing::info!(trade_id = %id, "Trade deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::trade_journal::repository::MockTradeRepository;

    #[tokio::test]
    async fn deletes_by_id() {
        let mut repo = MockTradeRepository::new();
        repo.expect_delete()
            .withf(|id| id.as_str() == "trd-1")
            .times(1)
            .returning(|_| Ok(()));

        let uc = DeleteTradeUseCase::new(Arc::new(repo));
        assert!(uc.execute(&TradeId::new("trd-1")).await.is_ok());
    }

    #[tokio::test]
    async fn blank_id_is_rejected() {
        let mut repo = MockTradeRepository::new();
        repo.expect_delete().never();

        let uc = DeleteTradeUseCase::new(Arc::new(repo));
        assert_eq!(
            uc.execute(&TradeId::new("")).await,
            Err(TradeJournalError::BlankTradeId)
        );
    }

    #[tokio::test]
    async fn missing_trade_is_surfaced() {
        let mut repo = MockTradeRepository::new();
        repo.expect_delete().returning(|id| {
            Err(TradeJournalError::TradeNotFound {
                id: id.to_string(),
            })
        });

        let uc = DeleteTradeUseCase::new(Arc::new(repo));
        let err = uc.execute(&TradeId::new("gone")).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
