use chrono::NaiveDate;
use log::debug;

use super::accumulator::build_day_walk;
use super::daily_series::build_daily_series;
use super::funding::project_funding_needs;
use super::normalizer::normalize;
use super::projection_model::{ChannelOverview, LedgerProjection};
use super::runway::calculate_runway;
use super::summary::summarize_normalized;
use crate::errors::Result;
use crate::transactions::{Channel, Transaction};

/// Runs the whole engine for one channel filter.
///
/// The filter selects an independent sub-ledger: channel B is projected from
/// channel B's transactions only. `None` projects the combined ledger.
pub fn project(
    transactions: &[Transaction],
    filter: Option<Channel>,
    today: NaiveDate,
) -> Result<LedgerProjection> {
    let ledger = normalize(transactions, filter)?;
    let walk = build_day_walk(&ledger)?;

    let runway = calculate_runway(&walk, today);
    let funding_needs = project_funding_needs(&runway, &walk);
    let daily_series = build_daily_series(&walk);

    debug!(
        "Projected channel {}: {} transactions over {} active days, {} funding needs, {} series points",
        filter.map_or("ALL", |c| c.as_str()),
        ledger.len(),
        walk.len(),
        funding_needs.len(),
        daily_series.points.len()
    );

    Ok(LedgerProjection {
        channel: filter,
        as_of: today,
        summary: summarize_normalized(&ledger)?,
        runway,
        funding_needs,
        daily_series,
    })
}

/// Projects the combined ledger and both channels in parallel.
pub fn project_channels(transactions: &[Transaction], today: NaiveDate) -> Result<ChannelOverview> {
    let (combined, (channel_a, channel_b)) = rayon::join(
        || project(transactions, None, today),
        || {
            rayon::join(
                || project(transactions, Some(Channel::A), today),
                || project(transactions, Some(Channel::B), today),
            )
        },
    );

    Ok(ChannelOverview {
        combined: combined?,
        channel_a: channel_a?,
        channel_b: channel_b?,
    })
}
