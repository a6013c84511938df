//! Transactions module - ledger entries, ingestion validation, and services.

mod transactions_errors;
mod transactions_model;
mod transactions_service;
mod transactions_traits;



pub use transactions_errors::TransactionError;
pub use transactions_model::{
    Channel, NewTransaction, Transaction, TransactionKind, TransactionUpdate,
};
pub use transactions_service::TransactionService;
pub use transactions_traits::{TransactionRepositoryTrait, TransactionServiceTrait};
