use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};

/// Today's calendar date in local time.
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a stored ISO-8601 value down to its calendar date.
///
/// Accepts a bare date (`2025-01-05`), a local date-time without offset
/// (`2025-01-05T18:30:00`) and an RFC 3339 timestamp
/// (`2025-01-05T18:30:00.000Z`). Timestamps with an offset are converted to
/// local time before the time of day is dropped.
#[must_use]
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Local).date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|dt| dt.date())
}
