use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::projection_model::DayBalance;
use crate::errors::Result;
use crate::transactions::{Transaction, TransactionError, TransactionKind};

/// Cumulative post-day balances, one per distinct transaction date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DayWalk {
    days: Vec<DayBalance>,
    debit_count: usize,
}

impl DayWalk {
    pub fn days(&self) -> &[DayBalance] {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether any debit was seen, regardless of its amount.
    pub fn has_debits(&self) -> bool {
        self.debit_count > 0
    }

    /// Balance after the last day, zero for an empty walk.
    pub fn final_balance(&self) -> Decimal {
        self.days.last().map_or(Decimal::ZERO, |d| d.balance)
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|d| d.date)
    }
}

/// Walks a normalized ledger and records the balance after each day's batch.
///
/// Expects the output of [`normalize`](super::normalize): same-date entries
/// must be adjacent. They collapse into one `DayBalance`, so a day is only
/// ever observed net of all its transactions. The walk starts from zero.
///
/// Fails with [`TransactionError::AmountOverflow`] when a running total leaves
/// the `Decimal` range.
pub fn build_day_walk(ledger: &[&Transaction]) -> Result<DayWalk> {
    let mut walk = DayWalk::default();
    let mut balance = Decimal::ZERO;

    for transaction in ledger {
        if transaction.kind == TransactionKind::Debit {
            walk.debit_count += 1;
        }
        balance = checked_sum(balance, transaction.signed_amount(), transaction)?;

        let same_day = walk
            .days
            .last()
            .is_some_and(|last| last.date == transaction.date);
        if !same_day {
            walk.days.push(DayBalance {
                date: transaction.date,
                balance,
                credits: Decimal::ZERO,
                debits: Decimal::ZERO,
                transaction_count: 0,
            });
        }

        if let Some(day) = walk.days.last_mut() {
            day.balance = balance;
            day.transaction_count += 1;
            let total = match transaction.kind {
                TransactionKind::Credit => &mut day.credits,
                TransactionKind::Debit => &mut day.debits,
            };
            *total = checked_sum(*total, transaction.amount, transaction)?;
        }
    }

    Ok(walk)
}

/// `total + amount`, or an overflow error naming the transaction's date.
pub(crate) fn checked_sum(
    total: Decimal,
    amount: Decimal,
    transaction: &Transaction,
) -> Result<Decimal> {
    total.checked_add(amount).ok_or_else(|| {
        TransactionError::AmountOverflow {
            date: transaction.date,
        }
        .into()
    })
}
