use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use super::transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
use crate::errors::Result;

/// Service for recording and editing ledger transactions.
pub struct TransactionService {
    repository: Arc<dyn TransactionRepositoryTrait>,
}

impl TransactionService {
    pub fn new(repository: Arc<dyn TransactionRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl TransactionServiceTrait for TransactionService {
    fn get_transaction(&self, owner_id: &str, transaction_id: &str) -> Result<Transaction> {
        self.repository.get_transaction(owner_id, transaction_id)
    }

    fn list_transactions(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        self.repository.list_transactions(owner_id)
    }

    /// Validates the input before anything reaches the store.
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction> {
        let transaction = match new_transaction.into_transaction(Utc::now().naive_utc()) {
            Ok(t) => t,
            Err(e) => {
                warn!("Rejected new transaction: {}", e);
                return Err(e);
            }
        };

        debug!(
            "Creating {} transaction {} on {} (channel {})",
            transaction.kind, transaction.id, transaction.date, transaction.channel
        );
        self.repository.create_transaction(transaction).await
    }

    async fn update_transaction(&self, update: TransactionUpdate) -> Result<Transaction> {
        let existing = self
            .repository
            .get_transaction(&update.owner_id, &update.id)?;

        let updated = match update.apply_to(&existing, Utc::now().naive_utc()) {
            Ok(t) => t,
            Err(e) => {
                warn!("Rejected update for transaction {}: {}", existing.id, e);
                return Err(e);
            }
        };

        debug!("Updating transaction {}", updated.id);
        self.repository.update_transaction(updated).await
    }

    async fn delete_transaction(
        &self,
        owner_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction> {
        debug!("Deleting transaction {} for owner {}", transaction_id, owner_id);
        self.repository
            .delete_transaction(owner_id, transaction_id)
            .await
    }
}
