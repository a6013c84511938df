use async_trait::async_trait;

use super::transactions_model::{NewTransaction, Transaction, TransactionUpdate};
use crate::errors::Result;

/// Trait defining the contract for the transaction store.
///
/// Every operation is scoped by the ledger owner. Implementations map
/// storage failures to `Error::Repository` and missing rows to
/// `TransactionError::NotFound`.
#[async_trait]
pub trait TransactionRepositoryTrait: Send + Sync {
    fn list_transactions(&self, owner_id: &str) -> Result<Vec<Transaction>>;
    fn get_transaction(&self, owner_id: &str, transaction_id: &str) -> Result<Transaction>;
    async fn create_transaction(&self, transaction: Transaction) -> Result<Transaction>;
    async fn update_transaction(&self, transaction: Transaction) -> Result<Transaction>;
    async fn delete_transaction(&self, owner_id: &str, transaction_id: &str)
        -> Result<Transaction>;
}

/// Trait defining the contract for transaction service operations.
#[async_trait]
pub trait TransactionServiceTrait: Send + Sync {
    fn get_transaction(&self, owner_id: &str, transaction_id: &str) -> Result<Transaction>;
    fn list_transactions(&self, owner_id: &str) -> Result<Vec<Transaction>>;
    async fn create_transaction(&self, new_transaction: NewTransaction) -> Result<Transaction>;
    async fn update_transaction(&self, update: TransactionUpdate) -> Result<Transaction>;
    async fn delete_transaction(&self, owner_id: &str, transaction_id: &str)
        -> Result<Transaction>;
}
