//! Transaction domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::TransactionError;
use crate::errors::{Error, Result, ValidationError};
use crate::utils::time_utils::parse_ledger_date;

/// Direction of a ledger entry. The amount itself is always a magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    /// Money entering the pool (partner contribution)
    Credit,
    /// Money leaving the pool (expense)
    Debit,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Credit => "CREDIT",
            TransactionKind::Debit => "DEBIT",
        }
    }

    /// Applies the direction to a magnitude.
    pub fn signed(&self, amount: Decimal) -> Decimal {
        match self {
            TransactionKind::Credit => amount,
            TransactionKind::Debit => -amount,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = TransactionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CREDIT" => Ok(TransactionKind::Credit),
            "DEBIT" => Ok(TransactionKind::Debit),
            other => Err(TransactionError::InvalidData(format!(
                "Unknown transaction kind '{}'",
                other
            ))),
        }
    }
}

/// Payment channel. Each channel is an independent sub-ledger with its own
/// balance and runway (e.g. declared vs undeclared funds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Channel {
    A,
    B,
}

impl Channel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::A => "A",
            Channel::B => "B",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = TransactionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "A" => Ok(Channel::A),
            "B" => Ok(Channel::B),
            other => Err(TransactionError::InvalidData(format!(
                "Unknown channel '{}'",
                other
            ))),
        }
    }
}

/// Domain model representing a ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub owner_id: String,
    pub kind: TransactionKind,
    /// Magnitude, never negative
    pub amount: Decimal,
    pub date: NaiveDate,
    pub channel: Channel,
    /// Contributing partner; only meaningful on credits
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub partner_id: Option<String>,
    pub description: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Transaction {
    /// Builds an in-memory transaction without owner or audit data.
    ///
    /// Intended for callers that feed the projection engine directly. The
    /// amount is not checked here; the normalizer rejects negative amounts.
    pub fn new(
        id: impl Into<String>,
        kind: TransactionKind,
        amount: Decimal,
        date: NaiveDate,
        channel: Channel,
    ) -> Self {
        let stamp = date.and_hms_opt(0, 0, 0).unwrap_or_default();
        Self {
            id: id.into(),
            owner_id: String::new(),
            kind,
            amount,
            date,
            channel,
            partner_id: None,
            description: None,
            created_at: stamp,
            updated_at: stamp,
        }
    }

    pub fn with_partner(mut self, partner_id: impl Into<String>) -> Self {
        self.partner_id = Some(partner_id.into());
        self
    }

    /// Amount with the sign implied by the kind.
    pub fn signed_amount(&self) -> Decimal {
        self.kind.signed(self.amount)
    }

    pub fn is_credit(&self) -> bool {
        self.kind == TransactionKind::Credit
    }

    pub fn is_debit(&self) -> bool {
        self.kind == TransactionKind::Debit
    }

    /// `None` matches every channel.
    pub fn in_channel(&self, filter: Option<Channel>) -> bool {
        filter.map_or(true, |channel| self.channel == channel)
    }
}

/// Raw input for recording a new transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTransaction {
    pub id: Option<String>,
    pub owner_id: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    /// `YYYY-MM-DD` or an RFC 3339 timestamp
    pub date: String,
    pub channel: Channel,
    pub partner_id: Option<String>,
    pub description: Option<String>,
}

impl NewTransaction {
    /// Validates the input and returns the parsed transaction date.
    pub fn validate(&self) -> Result<NaiveDate> {
        let label = self.id.as_deref().unwrap_or("<new>");
        validate_entry(
            label,
            &self.owner_id,
            self.kind,
            self.amount,
            &self.date,
            self.partner_id.as_deref(),
        )
    }

    /// Validates and converts into a stored transaction, assigning an id when absent.
    pub fn into_transaction(self, now: NaiveDateTime) -> Result<Transaction> {
        let date = self.validate()?;
        let id = self
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        Ok(Transaction {
            id,
            owner_id: self.owner_id,
            kind: self.kind,
            amount: self.amount,
            date,
            channel: self.channel,
            partner_id: normalize_optional(self.partner_id),
            description: normalize_optional(self.description),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Raw input for editing an existing transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionUpdate {
    pub id: String,
    pub owner_id: String,
    pub kind: TransactionKind,
    pub amount: Decimal,
    pub date: String,
    pub channel: Channel,
    pub partner_id: Option<String>,
    pub description: Option<String>,
}

impl TransactionUpdate {
    pub fn validate(&self) -> Result<NaiveDate> {
        if self.id.trim().is_empty() {
            return Err(ValidationError::MissingField("id".to_string()).into());
        }
        validate_entry(
            &self.id,
            &self.owner_id,
            self.kind,
            self.amount,
            &self.date,
            self.partner_id.as_deref(),
        )
    }

    /// Applies the update on top of the stored record, keeping its creation time.
    pub fn apply_to(self, existing: &Transaction, now: NaiveDateTime) -> Result<Transaction> {
        let date = self.validate()?;
        if existing.id != self.id || existing.owner_id != self.owner_id {
            return Err(TransactionError::NotFound(self.id).into());
        }

        Ok(Transaction {
            id: self.id,
            owner_id: self.owner_id,
            kind: self.kind,
            amount: self.amount,
            date,
            channel: self.channel,
            partner_id: normalize_optional(self.partner_id),
            description: normalize_optional(self.description),
            created_at: existing.created_at,
            updated_at: now,
        })
    }
}

fn validate_entry(
    label: &str,
    owner_id: &str,
    kind: TransactionKind,
    amount: Decimal,
    date: &str,
    partner_id: Option<&str>,
) -> Result<NaiveDate> {
    if owner_id.trim().is_empty() {
        return Err(ValidationError::MissingField("ownerId".to_string()).into());
    }

    if amount < Decimal::ZERO {
        return Err(Error::Transaction(TransactionError::NegativeAmount {
            id: label.to_string(),
            amount,
        }));
    }

    if kind == TransactionKind::Debit && partner_id.is_some_and(|p| !p.trim().is_empty()) {
        return Err(TransactionError::InvalidData(format!(
            "Transaction {} is a debit and cannot reference a partner",
            label
        ))
        .into());
    }

    parse_ledger_date(date).ok_or_else(|| {
        TransactionError::InvalidDate(format!("'{}' on transaction {}", date, label)).into()
    })
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
