//! Formatting helpers shared by the issue components.

use chrono::{DateTime, Utc};

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const MONTH: i64 = 30 * DAY;
const YEAR: i64 = 365 * DAY;

/// Relative description of `date` as seen from `now` ("5 minutes ago").
///
/// Dates in the future (clock skew) read as "just now".
pub fn format_time_ago(date: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - date).num_seconds();
    let (count, unit) = match seconds {
        s if s < MINUTE => return "just now".to_string(),
        s if s < HOUR => (s / MINUTE, "minute"),
        s if s < DAY => (s / HOUR, "hour"),
        s if s < MONTH => (s / DAY, "day"),
        s if s < YEAR => (s / MONTH, "month"),
        s => (s / YEAR, "year"),
    };
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

/// Absolute timestamp for tooltips, e.g. "Mar 1, 2024, 12:00 UTC".
pub fn format_timestamp(date: DateTime<Utc>) -> String {
    date.format("%b %-d, %Y, %H:%M UTC").to_string()
}

/// Number shown next to an issue, e.g. "#42". Empty when unknown.
pub fn format_issue_number(number: Option<u64>) -> String {
    number.map(|n| format!("#{n}")).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    fn ago(delta: Duration) -> String {
        format_time_ago(now() - delta, now())
    }

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(ago(Duration::seconds(0)), "just now");
        assert_eq!(ago(Duration::seconds(59)), "just now");
    }

    #[test]
    fn future_dates_are_just_now() {
        assert_eq!(format_time_ago(now() + Duration::hours(2), now()), "just now");
    }

    #[test]
    fn singular_and_plural_units() {
        assert_eq!(ago(Duration::minutes(1)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::hours(1)), "1 hour ago");
        assert_eq!(ago(Duration::hours(23)), "23 hours ago");
        assert_eq!(ago(Duration::days(1)), "1 day ago");
        assert_eq!(ago(Duration::days(29)), "29 days ago");
        assert_eq!(ago(Duration::days(90)), "3 months ago");
        assert_eq!(ago(Duration::days(365 * 2)), "2 years ago");
    }

    #[test]
    fn timestamp_is_human_readable() {
        assert_eq!(format_timestamp(now()), "Mar 1, 2024, 12:00 UTC");
    }

    #[test]
    fn issue_number_has_hash_prefix() {
        assert_eq!(format_issue_number(Some(42)), "#42");
        assert_eq!(format_issue_number(None), "");
    }
}
