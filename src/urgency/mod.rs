//! Urgency engine.
//!
//! Pure functions of an item and the current calendar date: days left until
//! expiry, the four-bucket status and the display order of the home list.
//! Nothing here caches "today"; callers pass it in on every render.

mod dates;

pub use dates::{parse_calendar_date, today};

use chrono::NaiveDate;
use serde::Serialize;
use std::cmp::Ordering;

use crate::item::FoodItem;

/// Last day count (inclusive) classified as [`Urgency::Critical`]
pub const CRITICAL_MAX_DAYS: i64 = 3;

/// Last day count (inclusive) classified as [`Urgency::Soon`]
pub const SOON_MAX_DAYS: i64 = 7;

/// How soon an item expires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    /// Already past its expiry date (red)
    Expired,
    /// Expires within 0..=3 days (amber)
    Critical,
    /// Expires within 4..=7 days (blue)
    Soon,
    /// More than a week left (green)
    Fresh,
}

impl Urgency {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Urgency::Expired => "expired",
            Urgency::Critical => "critical",
            Urgency::Soon => "soon",
            Urgency::Fresh => "fresh",
        }
    }

    /// Accent color used for the item card and the days-left text
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Urgency::Expired => "#ef4444",
            Urgency::Critical => "#f59e0b",
            Urgency::Soon => "#3b82f6",
            Urgency::Fresh => "#10b981",
        }
    }

    /// [`Self::color`] as red, green and blue components, for terminals
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            Urgency::Expired => (0xef, 0x44, 0x44),
            Urgency::Critical => (0xf5, 0x9e, 0x0b),
            Urgency::Soon => (0x3b, 0x82, 0xf6),
            Urgency::Fresh => (0x10, 0xb9, 0x81),
        }
    }
}

impl std::fmt::Display for Urgency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Calendar-day difference between `expiry` and `today`.
///
/// Both sides are plain dates, so the time of day of the stored expiry can
/// never shift the result by one.
#[must_use]
pub fn days_until_expiry(expiry: NaiveDate, today: NaiveDate) -> i64 {
    expiry.signed_duration_since(today).num_days()
}

/// [`days_until_expiry`] for a stored ISO-8601 value.
#[must_use]
pub fn days_until_expiry_str(expiry: &str, today: NaiveDate) -> Option<i64> {
    parse_calendar_date(expiry).map(|date| days_until_expiry(date, today))
}

/// Classify a day count. Buckets are checked in order: expired, critical,
/// soon, fresh.
#[must_use]
pub fn status_color(days: i64) -> Urgency {
    if days < 0 {
        Urgency::Expired
    } else if days <= CRITICAL_MAX_DAYS {
        Urgency::Critical
    } else if days <= SOON_MAX_DAYS {
        Urgency::Soon
    } else {
        Urgency::Fresh
    }
}

/// Human-readable days-left text shown under each item.
#[must_use]
pub fn describe_days_left(days: i64) -> String {
    match days.cmp(&0) {
        Ordering::Less => format!("Expired {} days ago", days.unsigned_abs()),
        Ordering::Equal => "Expires today!".to_string(),
        Ordering::Greater => format!("{days} days left"),
    }
}

/// Stable ascending sort by days until expiry.
///
/// Expired items come first, most overdue on top. Items with an unreadable
/// expiry date go last, in their original relative order.
#[must_use]
pub fn sort_by_urgency(mut items: Vec<FoodItem>, today: NaiveDate) -> Vec<FoodItem> {
    items.sort_by_cached_key(|item| match item.days_until_expiry(today) {
        Some(days) => (false, days),
        None => (true, 0),
    });
    items
}

#[cfg(test)]
#[path = "urgency_tests.rs"]
mod tests;
