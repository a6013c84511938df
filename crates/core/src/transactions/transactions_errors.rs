use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors raised while ingesting or validating ledger transactions.
#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Invalid transaction date: {0}")]
    InvalidDate(String),

    #[error("Transaction {id} has a negative amount ({amount}); direction is carried by its kind")]
    NegativeAmount { id: String, amount: Decimal },

    #[error("Invalid transaction data: {0}")]
    InvalidData(String),

    #[error("Running total overflowed on {date}")]
    AmountOverflow { date: NaiveDate },

    #[error("Transaction not found: {0}")]
    NotFound(String),
}
