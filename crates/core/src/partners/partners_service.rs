use async_trait::async_trait;
use chrono::Utc;
use log::{debug, warn};
use std::sync::Arc;

use super::contributions::partner_contributions;
use super::partners_model::{NewPartner, Partner, PartnerContribution, PartnerUpdate};
use super::partners_traits::{PartnerRepositoryTrait, PartnerServiceTrait};
use super::PartnerError;
use crate::errors::Result;
use crate::transactions::{Channel, TransactionRepositoryTrait};

pub struct PartnerService {
    partner_repository: Arc<dyn PartnerRepositoryTrait>,
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
}

impl PartnerService {
    pub fn new(
        partner_repository: Arc<dyn PartnerRepositoryTrait>,
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    ) -> Self {
        Self {
            partner_repository,
            transaction_repository,
        }
    }
}

#[async_trait]
impl PartnerServiceTrait for PartnerService {
    fn get_partners(&self, owner_id: &str) -> Result<Vec<Partner>> {
        self.partner_repository.list_partners(owner_id)
    }

    async fn create_partner(&self, new_partner: NewPartner) -> Result<Partner> {
        let partner = new_partner.into_partner(Utc::now().naive_utc())?;
        debug!("Creating partner {} ({})", partner.id, partner.name);
        self.partner_repository.create_partner(partner).await
    }

    async fn update_partner(&self, update: PartnerUpdate) -> Result<Partner> {
        let existing = self
            .partner_repository
            .get_partner(&update.owner_id, &update.id)?;
        let partner = update.apply_to(&existing, Utc::now().naive_utc())?;
        self.partner_repository.update_partner(partner).await
    }

    async fn delete_partner(&self, owner_id: &str, partner_id: &str) -> Result<usize> {
        let transaction_count = self
            .transaction_repository
            .list_transactions(owner_id)?
            .iter()
            .filter(|t| t.partner_id.as_deref() == Some(partner_id))
            .count();

        if transaction_count > 0 {
            warn!(
                "Refusing to delete partner {}: {} transaction(s) reference it",
                partner_id, transaction_count
            );
            return Err(PartnerError::InUse {
                partner_id: partner_id.to_string(),
                transaction_count,
            }
            .into());
        }

        self.partner_repository
            .delete_partner(owner_id, partner_id)
            .await
    }

    fn get_contributions(
        &self,
        owner_id: &str,
        filter: Option<Channel>,
    ) -> Result<Vec<PartnerContribution>> {
        let transactions = self.transaction_repository.list_transactions(owner_id)?;
        partner_contributions(&transactions, filter)
    }
}
