use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, ItemError};
use crate::urgency::{days_until_expiry, parse_calendar_date};
use crate::utils::to_iso;

/// Storage format used for newly created expiry dates
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// A tracked perishable good, as stored in the item blob.
///
/// Items are never edited in place: delete and re-create is the only edit
/// path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodItem {
    /// Creation timestamp in milliseconds since the Unix epoch
    pub id: i64,
    /// Trimmed, non-empty label
    pub name: String,
    pub category: Category,
    /// ISO-8601 date or date-time
    pub expiry_date: String,
    /// ISO-8601 creation timestamp
    pub added_date: String,
}

impl FoodItem {
    /// Calendar date the item expires on, if the stored value is a date.
    #[must_use]
    pub fn expiry(&self) -> Option<NaiveDate> {
        parse_calendar_date(&self.expiry_date)
    }

    /// Days left relative to `today`; negative once expired.
    #[must_use]
    pub fn days_until_expiry(&self, today: NaiveDate) -> Option<i64> {
        self.expiry().map(|expiry| days_until_expiry(expiry, today))
    }
}

/// Parse an expiry typed into the add-item form (`YYYY-MM-DD`).
pub fn parse_expiry_input(value: &str) -> Result<NaiveDate, ItemError> {
    NaiveDate::parse_from_str(value.trim(), EXPIRY_DATE_FORMAT)
        .map_err(|_| ItemError::InvalidDate(value.to_string()))
}

/// Input collected by the add-item form before it becomes a [`FoodItem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFoodItem {
    pub name: String,
    pub category: Category,
    pub expiry_date: NaiveDate,
}

impl NewFoodItem {
    #[must_use]
    pub fn new(name: impl Into<String>, category: Category, expiry_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            category,
            expiry_date,
        }
    }

    /// The name as it will be stored.
    pub fn validated_name(&self) -> Result<&str, ItemError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ItemError::EmptyName);
        }
        Ok(name)
    }

    /// Validate the input and build the stored item.
    pub fn into_item(self, id: i64, added_at: DateTime<Utc>) -> Result<FoodItem, ItemError> {
        let name = self.validated_name()?.to_string();
        Ok(FoodItem {
            id,
            name,
            category: self.category,
            expiry_date: self.expiry_date.format(EXPIRY_DATE_FORMAT).to_string(),
            added_date: to_iso(added_at),
        })
    }
}

#[cfg(test)]
#[path = "food_item_tests.rs"]
mod tests;
