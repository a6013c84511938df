use super::accumulator::checked_sum;
use super::normalizer::normalize;
use super::projection_model::LedgerSummary;
use crate::errors::Result;
use crate::transactions::{Channel, Transaction, TransactionKind};

/// Totals for the ledger restricted to `filter`.
pub fn summarize(transactions: &[Transaction], filter: Option<Channel>) -> Result<LedgerSummary> {
    let ledger = normalize(transactions, filter)?;
    summarize_normalized(&ledger)
}

pub(super) fn summarize_normalized(ledger: &[&Transaction]) -> Result<LedgerSummary> {
    let mut summary = LedgerSummary {
        transaction_count: ledger.len(),
        first_date: ledger.first().map(|t| t.date),
        last_date: ledger.last().map(|t| t.date),
        ..LedgerSummary::default()
    };

    for transaction in ledger {
        let total = match transaction.kind {
            TransactionKind::Credit => &mut summary.total_credits,
            TransactionKind::Debit => &mut summary.total_debits,
        };
        *total = checked_sum(*total, transaction.amount, transaction)?;
    }
    // both totals are non-negative, so the difference stays in range
    summary.balance = summary.total_credits - summary.total_debits;
    Ok(summary)
}
