use log::warn;
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::transactions::{Channel, Transaction, TransactionError};

/// Puts a ledger into projection order.
///
/// Keeps only transactions in `filter` (`None` keeps everything) and sorts
/// them by date ascending. The sort is stable, so same-day entries stay in
/// input order. A negative amount is a broken ingestion precondition and is
/// reported instead of being dropped.
pub fn normalize(
    transactions: &[Transaction],
    filter: Option<Channel>,
) -> Result<Vec<&Transaction>> {
    let mut ledger = Vec::with_capacity(transactions.len());

    for transaction in transactions.iter().filter(|t| t.in_channel(filter)) {
        if transaction.amount < Decimal::ZERO {
            warn!(
                "Transaction {} reached the ledger with negative amount {}",
                transaction.id, transaction.amount
            );
            return Err(TransactionError::NegativeAmount {
                id: transaction.id.clone(),
                amount: transaction.amount,
            }
            .into());
        }
        ledger.push(transaction);
    }

    ledger.sort_by_key(|t| t.date);
    Ok(ledger)
}
