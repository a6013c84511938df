//! Core error types for the cash pool ledger.
//!
//! Storage-specific errors are converted to `Error::Repository` by whichever
//! layer implements the repository traits, keeping this type storage-agnostic.

use thiserror::Error;

use crate::partners::PartnerError;
use crate::transactions::TransactionError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the cash pool crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Transaction error: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Partner error: {0}")]
    Partner(#[from] PartnerError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Repository error: {0}")]
    Repository(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field '{0}' is missing")]
    MissingField(String),
}
