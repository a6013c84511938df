use rust_decimal::Decimal;

use super::accumulator::DayWalk;
use super::projection_model::{FundingNeed, RunwayResult};

/// Schedules the shortfalls that follow the exhaustion date.
///
/// The exhaustion day itself is already reported as
/// `RunwayResult::amount_short` and never appears here. After it, each day
/// with a negative balance yields one need, unless its shortfall equals the
/// previously tracked one. Tracking starts at `amount_short` and resets to
/// zero whenever the balance recovers.
pub fn project_funding_needs(runway: &RunwayResult, walk: &DayWalk) -> Vec<FundingNeed> {
    let exhaustion_date = match runway.exhaustion_date {
        Some(date) if runway.is_bounded => date,
        _ => return Vec::new(),
    };

    let mut tracked = runway.amount_short;
    let mut needs = Vec::new();

    for day in walk.days().iter().filter(|d| d.date > exhaustion_date) {
        if day.balance < Decimal::ZERO {
            let shortfall = -day.balance;
            if shortfall != tracked {
                needs.push(FundingNeed {
                    date: day.date,
                    amount_needed: shortfall,
                });
            }
            tracked = shortfall;
        } else {
            tracked = Decimal::ZERO;
        }
    }

    needs
}
