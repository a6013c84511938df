//! Partner domain models.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PartnerError;
use crate::errors::{Result, ValidationError};

/// A party contributing credits to the pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub email: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Input model for creating a new partner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPartner {
    pub id: Option<String>,
    pub owner_id: String,
    pub name: String,
    pub email: Option<String>,
}

impl NewPartner {
    pub fn validate(&self) -> Result<()> {
        validate_fields(&self.owner_id, &self.name)
    }

    pub fn into_partner(self, now: NaiveDateTime) -> Result<Partner> {
        self.validate()?;
        Ok(Partner {
            id: self
                .id
                .filter(|id| !id.trim().is_empty())
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            owner_id: self.owner_id,
            name: self.name.trim().to_string(),
            email: self.email.filter(|e| !e.trim().is_empty()),
            created_at: now,
            updated_at: now,
        })
    }
}

/// Input model for renaming or re-addressing a partner
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerUpdate {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub email: Option<String>,
}

impl PartnerUpdate {
    pub fn apply_to(self, existing: &Partner, now: NaiveDateTime) -> Result<Partner> {
        validate_fields(&self.owner_id, &self.name)?;
        Ok(Partner {
            id: existing.id.clone(),
            owner_id: existing.owner_id.clone(),
            name: self.name.trim().to_string(),
            email: self.email.filter(|e| !e.trim().is_empty()),
            created_at: existing.created_at,
            updated_at: now,
        })
    }
}

fn validate_fields(owner_id: &str, name: &str) -> Result<()> {
    if owner_id.trim().is_empty() {
        return Err(ValidationError::MissingField("ownerId".to_string()).into());
    }
    if name.trim().is_empty() {
        return Err(PartnerError::InvalidData("Partner name cannot be empty".to_string()).into());
    }
    Ok(())
}

/// Credits attributed to one partner. `partner_id = None` groups the credits
/// that carry no partner reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerContribution {
    pub partner_id: Option<String>,
    pub total: Decimal,
    pub contribution_count: usize,
    pub last_contribution_date: Option<NaiveDate>,
}
