//! Projection result models. All of these are derived on demand and never persisted.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::transactions::Channel;

/// One entry of the day-walk: the cumulative balance after every
/// transaction dated `date` has been applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBalance {
    pub date: NaiveDate,
    /// Cumulative balance after the day's batch
    pub balance: Decimal,
    /// Sum of the day's credits
    pub credits: Decimal,
    /// Sum of the day's debits (positive magnitude)
    pub debits: Decimal,
    pub transaction_count: usize,
}

impl DayBalance {
    /// Net effect of the day's batch.
    pub fn net(&self) -> Decimal {
        self.credits - self.debits
    }
}

/// How long the pool lasts before its post-day balance first drops below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunwayResult {
    /// `false` means the pool never runs out on the recorded history
    pub is_bounded: bool,
    /// First day with a negative post-day balance
    pub exhaustion_date: Option<NaiveDate>,
    /// Days from "today" to the exhaustion date. Negative when the pool has
    /// already been exhausted for that many days.
    pub days_remaining: Option<i64>,
    /// Shortfall on the exhaustion date (positive magnitude), zero when unbounded
    pub amount_short: Decimal,
}

impl RunwayResult {
    pub fn unbounded() -> Self {
        Self {
            is_bounded: false,
            exhaustion_date: None,
            days_remaining: None,
            amount_short: Decimal::ZERO,
        }
    }

    pub fn bounded(exhaustion_date: NaiveDate, days_remaining: i64, amount_short: Decimal) -> Self {
        Self {
            is_bounded: true,
            exhaustion_date: Some(exhaustion_date),
            days_remaining: Some(days_remaining),
            amount_short,
        }
    }

    /// True when the exhaustion date is before "today".
    pub fn is_exhausted(&self) -> bool {
        self.days_remaining.is_some_and(|days| days < 0)
    }
}

/// Additional credit needed on `date` to bring the cumulative balance back to zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundingNeed {
    pub date: NaiveDate,
    pub amount_needed: Decimal,
}

/// One calendar day of the charting series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyBalancePoint {
    pub date: NaiveDate,
    pub balance: Decimal,
    /// `false` for days whose balance is carried forward from the previous day
    pub had_activity: bool,
}

/// Continuous day-by-day balance series with its extrema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DailyBalanceSeries {
    pub points: Vec<DailyBalancePoint>,
    /// Lowest balance in the series, never above zero
    pub min_balance: Decimal,
    /// Highest balance in the series, never below zero
    pub max_balance: Decimal,
}

/// Totals for a (possibly channel-filtered) ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct LedgerSummary {
    pub total_credits: Decimal,
    /// Positive magnitude
    pub total_debits: Decimal,
    /// total_credits - total_debits
    pub balance: Decimal,
    pub transaction_count: usize,
    pub first_date: Option<NaiveDate>,
    pub last_date: Option<NaiveDate>,
}

/// Everything the engine derives for one channel filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerProjection {
    /// `None` for the combined ledger
    pub channel: Option<Channel>,
    /// The "today" used for `runway.days_remaining`
    pub as_of: NaiveDate,
    pub summary: LedgerSummary,
    pub runway: RunwayResult,
    pub funding_needs: Vec<FundingNeed>,
    pub daily_series: DailyBalanceSeries,
}

/// Projections for the combined ledger and each channel, computed independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelOverview {
    pub combined: LedgerProjection,
    pub channel_a: LedgerProjection,
    pub channel_b: LedgerProjection,
}

impl ChannelOverview {
    pub fn get(&self, filter: Option<Channel>) -> &LedgerProjection {
        match filter {
            None => &self.combined,
            Some(Channel::A) => &self.channel_a,
            Some(Channel::B) => &self.channel_b,
        }
    }
}
