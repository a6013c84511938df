//! Shared fixtures for unit tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::sync::Mutex;

use crate::errors::{Error, Result};
use crate::transactions::{
    Channel, Transaction, TransactionError, TransactionKind, TransactionRepositoryTrait,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Day `n` of January 2024 (day 1 = 2024-01-01).
pub fn day(n: u32) -> NaiveDate {
    date(2024, 1, n)
}

pub fn credit(id: &str, amount: Decimal, date: NaiveDate) -> Transaction {
    Transaction::new(id, TransactionKind::Credit, amount, date, Channel::A)
}

pub fn debit(id: &str, amount: Decimal, date: NaiveDate) -> Transaction {
    Transaction::new(id, TransactionKind::Debit, amount, date, Channel::A)
}

pub fn on_channel(mut transaction: Transaction, channel: Channel) -> Transaction {
    transaction.channel = channel;
    transaction
}

pub fn owned_by(mut transaction: Transaction, owner_id: &str) -> Transaction {
    transaction.owner_id = owner_id.to_string();
    transaction
}

/// In-memory transaction store keyed by owner.
#[derive(Default)]
pub struct InMemoryTransactionRepository {
    pub transactions: Mutex<Vec<Transaction>>,
    pub fail_reads: bool,
}

impl InMemoryTransactionRepository {
    pub fn with(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Mutex::new(transactions),
            fail_reads: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            transactions: Mutex::new(Vec::new()),
            fail_reads: true,
        }
    }
}

#[async_trait]
impl TransactionRepositoryTrait for InMemoryTransactionRepository {
    fn list_transactions(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        if self.fail_reads {
            return Err(Error::Repository("store unavailable".to_string()));
        }
        Ok(self
            .transactions
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    fn get_transaction(&self, owner_id: &str, transaction_id: &str) -> Result<Transaction> {
        self.list_transactions(owner_id)?
            .into_iter()
            .find(|t| t.id == transaction_id)
            .ok_or_else(|| TransactionError::NotFound(transaction_id.to_string()).into())
    }

    async fn create_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        self.transactions.lock().unwrap().push(transaction.clone());
        Ok(transaction)
    }

    async fn update_transaction(&self, transaction: Transaction) -> Result<Transaction> {
        let mut stored = self.transactions.lock().unwrap();
        let slot = stored
            .iter_mut()
            .find(|t| t.id == transaction.id && t.owner_id == transaction.owner_id)
            .ok_or_else(|| Error::from(TransactionError::NotFound(transaction.id.clone())))?;
        *slot = transaction.clone();
        Ok(transaction)
    }

    async fn delete_transaction(
        &self,
        owner_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction> {
        let mut stored = self.transactions.lock().unwrap();
        let index = stored
            .iter()
            .position(|t| t.id == transaction_id && t.owner_id == owner_id)
            .ok_or_else(|| Error::from(TransactionError::NotFound(transaction_id.to_string())))?;
        Ok(stored.remove(index))
    }
}
