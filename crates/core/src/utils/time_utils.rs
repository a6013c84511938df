use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::constants::DATE_FORMAT;

/// Converts a UTC instant to a calendar date in the given timezone.
///
/// This is the single source of truth for deriving the ledger's "today".
pub fn ledger_date_from_utc(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// Today's calendar date in the given timezone.
pub fn ledger_date_today(tz: Tz) -> NaiveDate {
    ledger_date_from_utc(Utc::now(), tz)
}

/// Parses a caller-supplied transaction date.
///
/// Accepts a plain `YYYY-MM-DD` date or an RFC 3339 timestamp, in which case
/// the date component of the timestamp (in its own offset) is used.
pub fn parse_ledger_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(date);
    }
    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.date_naive())
}

/// Signed number of whole days from `from` to `to`.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Every calendar day from `start` to `end`, both inclusive. Empty when
/// `start` is after `end`.
pub fn calendar_days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_ledger_date("2024-03-01"), Some(date(2024, 3, 1)));
        assert_eq!(parse_ledger_date(" 2024-03-01 "), Some(date(2024, 3, 1)));
    }

    #[test]
    fn test_parse_rfc3339_uses_local_date() {
        assert_eq!(
            parse_ledger_date("2024-03-01T23:30:00-05:00"),
            Some(date(2024, 3, 1))
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_ledger_date("not a date"), None);
        assert_eq!(parse_ledger_date("2024-02-30"), None);
        assert_eq!(parse_ledger_date(""), None);
    }

    #[test]
    fn test_days_between_is_signed() {
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 11)), 10);
        assert_eq!(days_between(date(2024, 1, 11), date(2024, 1, 1)), -10);
        assert_eq!(days_between(date(2024, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_calendar_days_inclusive() {
        let days: Vec<NaiveDate> = calendar_days(date(2024, 2, 27), date(2024, 3, 1)).collect();
        assert_eq!(
            days,
            vec![
                date(2024, 2, 27),
                date(2024, 2, 28),
                date(2024, 2, 29),
                date(2024, 3, 1)
            ]
        );
        assert_eq!(calendar_days(date(2024, 3, 2), date(2024, 3, 1)).count(), 0);
        assert_eq!(calendar_days(date(2024, 3, 1), date(2024, 3, 1)).count(), 1);
    }

    #[test]
    fn test_ledger_date_from_utc_respects_timezone() {
        let instant = Utc.with_ymd_and_hms(2024, 6, 1, 2, 0, 0).unwrap();
        assert_eq!(
            ledger_date_from_utc(instant, chrono_tz::America::New_York),
            date(2024, 5, 31)
        );
        assert_eq!(ledger_date_from_utc(instant, chrono_tz::UTC), date(2024, 6, 1));
    }
}
