use chrono::NaiveDate;
use log::debug;
use rust_decimal::Decimal;

use super::accumulator::DayWalk;
use super::projection_model::RunwayResult;
use crate::utils::time_utils::days_between;

/// Finds the first day whose post-day balance is strictly negative.
///
/// An empty walk, a walk without debits, and a walk that never dips below
/// zero are all unbounded. `days_remaining` counts from `today` and goes
/// negative once the exhaustion date is in the past.
pub fn calculate_runway(walk: &DayWalk, today: NaiveDate) -> RunwayResult {
    if walk.is_empty() || !walk.has_debits() {
        return RunwayResult::unbounded();
    }

    match walk.days().iter().find(|d| d.balance < Decimal::ZERO) {
        Some(day) => {
            let days_remaining = days_between(today, day.date);
            debug!(
                "Pool exhausted on {} ({} days from {}), short {}",
                day.date, days_remaining, today, -day.balance
            );
            RunwayResult::bounded(day.date, days_remaining, -day.balance)
        }
        None => RunwayResult::unbounded(),
    }
}
