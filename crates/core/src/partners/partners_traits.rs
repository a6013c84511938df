use async_trait::async_trait;

use super::partners_model::{NewPartner, Partner, PartnerContribution, PartnerUpdate};
use crate::errors::Result;
use crate::transactions::Channel;

/// Trait for partner repository operations, scoped by ledger owner.
#[async_trait]
pub trait PartnerRepositoryTrait: Send + Sync {
    fn list_partners(&self, owner_id: &str) -> Result<Vec<Partner>>;
    fn get_partner(&self, owner_id: &str, partner_id: &str) -> Result<Partner>;
    async fn create_partner(&self, partner: Partner) -> Result<Partner>;
    async fn update_partner(&self, partner: Partner) -> Result<Partner>;
    async fn delete_partner(&self, owner_id: &str, partner_id: &str) -> Result<usize>;
}

/// Trait for partner service operations
#[async_trait]
pub trait PartnerServiceTrait: Send + Sync {
    fn get_partners(&self, owner_id: &str) -> Result<Vec<Partner>>;
    async fn create_partner(&self, new_partner: NewPartner) -> Result<Partner>;
    async fn update_partner(&self, update: PartnerUpdate) -> Result<Partner>;
    /// Fails with `PartnerError::InUse` while transactions still reference the partner.
    async fn delete_partner(&self, owner_id: &str, partner_id: &str) -> Result<usize>;
    fn get_contributions(
        &self,
        owner_id: &str,
        filter: Option<Channel>,
    ) -> Result<Vec<PartnerContribution>>;
}
