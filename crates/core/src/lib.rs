//! Cash Pool Core - Domain entities, services, and the ledger projection engine.
//!
//! This crate contains the business logic for tracking a shared cash pool fed by
//! partner contributions and drained by expenses. It is storage-agnostic and
//! defines repository traits that a persistence layer implements.

pub mod constants;
pub mod errors;
pub mod ledger;
pub mod partners;
pub mod settings;
pub mod transactions;
pub mod utils;

#[cfg(test)]
mod test_support;

// Re-export the projection engine and transaction types
pub use ledger::*;
pub use transactions::{Channel, Transaction, TransactionKind};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
