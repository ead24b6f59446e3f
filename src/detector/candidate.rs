use chrono::NaiveDate;
use regex::{Captures, Regex};
use std::sync::LazyLock;

use super::DateCandidate;

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static ISO_DATE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<token>(\d{4})-(\d{1,2})-(\d{1,2}))\b")
        .expect("ISO_DATE_REGEX is a valid regex literal")
});

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static DAY_FIRST_SLASH_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<token>(\d{1,2})/(\d{1,2})/(\d{4}))\b")
        .expect("DAY_FIRST_SLASH_REGEX is a valid regex literal")
});

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static DAY_FIRST_DOT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<token>(\d{1,2})\.(\d{1,2})\.(\d{4}))\b")
        .expect("DAY_FIRST_DOT_REGEX is a valid regex literal")
});

#[expect(
    clippy::expect_used,
    reason = "Regex literal is compile-time constant and cannot fail"
)]
static MONTH_YEAR_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^0-9./])(?P<token>(\d{1,2})[./](\d{4}))\b")
        .expect("MONTH_YEAR_REGEX is a valid regex literal")
});

fn number<T: std::str::FromStr>(caps: &Captures<'_>, group: usize) -> Option<T> {
    caps.get(group)?.as_str().parse().ok()
}

fn candidate(caps: &Captures<'_>, date: Option<NaiveDate>) -> Option<DateCandidate> {
    Some(DateCandidate {
        raw: caps.name("token")?.as_str().to_string(),
        date: date?,
    })
}

/// Extract an expiry date from text read off a label.
///
/// Tries, in order: `YYYY-MM-DD`, `DD/MM/YYYY` (or `DD.MM.YYYY`) and
/// `MM/YYYY`, which resolves to the first of the month. Matches that are not
/// real calendar dates are skipped, and a month-year match never starts in
/// the middle of a longer date.
#[must_use]
pub fn parse_candidate(text: &str) -> Option<DateCandidate> {
    let iso = ISO_DATE_REGEX.captures_iter(text).find_map(|caps| {
        let date =
            NaiveDate::from_ymd_opt(number(&caps, 2)?, number(&caps, 3)?, number(&caps, 4)?);
        candidate(&caps, date)
    });
    if iso.is_some() {
        return iso;
    }

    // Both separators must be the same, so each style has its own pattern
    let day_first = [&*DAY_FIRST_SLASH_REGEX, &*DAY_FIRST_DOT_REGEX]
        .into_iter()
        .filter_map(|re| {
            re.captures_iter(text).find_map(|caps| {
                let start = caps.name("token")?.start();
                let date = NaiveDate::from_ymd_opt(
                    number(&caps, 4)?,
                    number(&caps, 3)?,
                    number(&caps, 2)?,
                );
                candidate(&caps, date).map(|found| (start, found))
            })
        })
        .min_by_key(|(start, _)| *start)
        .map(|(_, found)| found);
    if day_first.is_some() {
        return day_first;
    }

    MONTH_YEAR_REGEX.captures_iter(text).find_map(|caps| {
        let date = NaiveDate::from_ymd_opt(number(&caps, 3)?, number(&caps, 2)?, 1);
        candidate(&caps, date)
    })
}
