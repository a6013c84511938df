use rust_decimal::Decimal;
use std::collections::HashMap;

use super::partners_model::PartnerContribution;
use crate::errors::Result;
use crate::ledger::{checked_sum, normalize};
use crate::transactions::{Channel, Transaction};

/// Sums credits per partner for the ledger restricted to `filter`.
///
/// Debits are ignored. Groups are ordered by total descending, then by
/// partner id; the unattributed group always comes last.
pub fn partner_contributions(
    transactions: &[Transaction],
    filter: Option<Channel>,
) -> Result<Vec<PartnerContribution>> {
    let ledger = normalize(transactions, filter)?;
    let mut groups: HashMap<Option<&str>, PartnerContribution> = HashMap::new();

    for transaction in ledger.into_iter().filter(|t| t.is_credit()) {
        let key = transaction.partner_id.as_deref();
        let entry = groups.entry(key).or_insert_with(|| PartnerContribution {
            partner_id: key.map(str::to_string),
            total: Decimal::ZERO,
            contribution_count: 0,
            last_contribution_date: None,
        });
        entry.total = checked_sum(entry.total, transaction.amount, transaction)?;
        entry.contribution_count += 1;
        // ledger is date-ordered
        entry.last_contribution_date = Some(transaction.date);
    }

    let mut contributions: Vec<PartnerContribution> = groups.into_values().collect();
    contributions.sort_by(|a, b| {
        a.partner_id
            .is_none()
            .cmp(&b.partner_id.is_none())
            .then_with(|| b.total.cmp(&a.total))
            .then_with(|| a.partner_id.cmp(&b.partner_id))
    });
    Ok(contributions)
}
