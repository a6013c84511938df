use chrono::NaiveDate;
use log::{debug, error};
use std::sync::Arc;

use super::accumulator::build_day_walk;
use super::daily_series::build_daily_series;
use super::funding::project_funding_needs;
use super::normalizer::normalize;
use super::projection::{project, project_channels};
use super::projection_model::{
    ChannelOverview, DailyBalanceSeries, FundingNeed, LedgerProjection, LedgerSummary,
    RunwayResult,
};
use super::projection_traits::ProjectionServiceTrait;
use super::runway::calculate_runway;
use super::summary::summarize;
use crate::errors::Result;
use crate::settings::SettingsRepositoryTrait;
use crate::transactions::{Channel, Transaction, TransactionRepositoryTrait};

/// Service that feeds stored ledgers into the projection engine.
pub struct ProjectionService {
    transaction_repository: Arc<dyn TransactionRepositoryTrait>,
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl ProjectionService {
    pub fn new(
        transaction_repository: Arc<dyn TransactionRepositoryTrait>,
        settings_repository: Arc<dyn SettingsRepositoryTrait>,
    ) -> Self {
        Self {
            transaction_repository,
            settings_repository,
        }
    }

    fn load_ledger(&self, owner_id: &str) -> Result<Vec<Transaction>> {
        match self.transaction_repository.list_transactions(owner_id) {
            Ok(transactions) => {
                debug!(
                    "Loaded {} transactions for owner {}",
                    transactions.len(),
                    owner_id
                );
                Ok(transactions)
            }
            Err(e) => {
                error!("Failed to load transactions for owner {}: {}", owner_id, e);
                Err(e)
            }
        }
    }

    fn today(&self) -> Result<NaiveDate> {
        self.settings_repository.get_settings()?.today()
    }
}

impl ProjectionServiceTrait for ProjectionService {
    fn get_summary(&self, owner_id: &str, filter: Option<Channel>) -> Result<LedgerSummary> {
        let transactions = self.load_ledger(owner_id)?;
        summarize(&transactions, filter)
    }

    fn get_runway(&self, owner_id: &str, filter: Option<Channel>) -> Result<RunwayResult> {
        self.get_runway_as_of(owner_id, filter, self.today()?)
    }

    fn get_runway_as_of(
        &self,
        owner_id: &str,
        filter: Option<Channel>,
        today: NaiveDate,
    ) -> Result<RunwayResult> {
        let transactions = self.load_ledger(owner_id)?;
        let ledger = normalize(&transactions, filter)?;
        Ok(calculate_runway(&build_day_walk(&ledger)?, today))
    }

    fn get_funding_needs(
        &self,
        owner_id: &str,
        filter: Option<Channel>,
    ) -> Result<Vec<FundingNeed>> {
        self.get_funding_needs_as_of(owner_id, filter, self.today()?)
    }

    fn get_funding_needs_as_of(
        &self,
        owner_id: &str,
        filter: Option<Channel>,
        today: NaiveDate,
    ) -> Result<Vec<FundingNeed>> {
        let transactions = self.load_ledger(owner_id)?;
        let ledger = normalize(&transactions, filter)?;
        let walk = build_day_walk(&ledger)?;
        let runway = calculate_runway(&walk, today);
        Ok(project_funding_needs(&runway, &walk))
    }

    fn get_daily_series(
        &self,
        owner_id: &str,
        filter: Option<Channel>,
    ) -> Result<DailyBalanceSeries> {
        let transactions = self.load_ledger(owner_id)?;
        let ledger = normalize(&transactions, filter)?;
        Ok(build_daily_series(&build_day_walk(&ledger)?))
    }

    fn get_projection(&self, owner_id: &str, filter: Option<Channel>) -> Result<LedgerProjection> {
        self.get_projection_as_of(owner_id, filter, self.today()?)
    }

    fn get_projection_as_of(
        &self,
        owner_id: &str,
        filter: Option<Channel>,
        today: NaiveDate,
    ) -> Result<LedgerProjection> {
        let transactions = self.load_ledger(owner_id)?;
        project(&transactions, filter, today)
    }

    fn get_channel_overview(&self, owner_id: &str) -> Result<ChannelOverview> {
        self.get_channel_overview_as_of(owner_id, self.today()?)
    }

    fn get_channel_overview_as_of(
        &self,
        owner_id: &str,
        today: NaiveDate,
    ) -> Result<ChannelOverview> {
        let transactions = self.load_ledger(owner_id)?;
        project_channels(&transactions, today)
    }
}
