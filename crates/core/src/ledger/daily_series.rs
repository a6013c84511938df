use rust_decimal::Decimal;

use super::accumulator::DayWalk;
use super::projection_model::{DailyBalancePoint, DailyBalanceSeries};
use crate::utils::time_utils::calendar_days;

/// Expands the day-walk into one point per calendar day between the first
/// and last transaction dates. Quiet days carry the previous balance forward.
/// The extrema always include zero.
pub fn build_daily_series(walk: &DayWalk) -> DailyBalanceSeries {
    let (first, last) = match (walk.first_date(), walk.last_date()) {
        (Some(first), Some(last)) => (first, last),
        _ => return DailyBalanceSeries::default(),
    };

    let mut active_days = walk.days().iter().peekable();
    let mut balance = Decimal::ZERO;
    let mut min_balance = Decimal::ZERO;
    let mut max_balance = Decimal::ZERO;
    let mut points = Vec::new();

    for date in calendar_days(first, last) {
        let had_activity = match active_days.next_if(|d| d.date == date) {
            Some(day) => {
                balance = day.balance;
                true
            }
            None => false,
        };

        min_balance = min_balance.min(balance);
        max_balance = max_balance.max(balance);
        points.push(DailyBalancePoint {
            date,
            balance,
            had_activity,
        });
    }

    DailyBalanceSeries {
        points,
        min_balance,
        max_balance,
    }
}
