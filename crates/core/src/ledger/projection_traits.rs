//! Projection service traits.

use chrono::NaiveDate;

use super::projection_model::{
    ChannelOverview, DailyBalanceSeries, FundingNeed, LedgerProjection, LedgerSummary,
    RunwayResult,
};
use crate::errors::Result;
use crate::transactions::Channel;

/// Trait defining the contract for projecting an owner's stored ledger.
///
/// Every call loads the owner's transactions afresh. The plain methods resolve
/// "today" from the configured timezone; the `_as_of` forms take it pinned.
/// `filter = None` projects the combined ledger.
pub trait ProjectionServiceTrait: Send + Sync {
    fn get_summary(&self, owner_id: &str, filter: Option<Channel>) -> Result<LedgerSummary>;

    fn get_runway(&self, owner_id: &str, filter: Option<Channel>) -> Result<RunwayResult>;

    fn get_runway_as_of(
        &self,
        owner_id: &str,
        filter: Option<Channel>,
        today: NaiveDate,
    ) -> Result<RunwayResult>;

    /// Shortfalls strictly after the exhaustion date, ordered by date.
    fn get_funding_needs(&self, owner_id: &str, filter: Option<Channel>)
        -> Result<Vec<FundingNeed>>;

    fn get_funding_needs_as_of(
        &self,
        owner_id: &str,
        filter: Option<Channel>,
        today: NaiveDate,
    ) -> Result<Vec<FundingNeed>>;

    fn get_daily_series(
        &self,
        owner_id: &str,
        filter: Option<Channel>,
    ) -> Result<DailyBalanceSeries>;

    fn get_projection(&self, owner_id: &str, filter: Option<Channel>) -> Result<LedgerProjection>;

    fn get_projection_as_of(
        &self,
        owner_id: &str,
        filter: Option<Channel>,
        today: NaiveDate,
    ) -> Result<LedgerProjection>;

    /// Combined, channel A and channel B projections in one call.
    fn get_channel_overview(&self, owner_id: &str) -> Result<ChannelOverview>;

    fn get_channel_overview_as_of(&self, owner_id: &str, today: NaiveDate)
        -> Result<ChannelOverview>;
}
