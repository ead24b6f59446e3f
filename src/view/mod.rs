//! Home list view.
//!
//! Holds an in-memory copy of the collection for rendering. The store stays
//! the source of truth: every mutation goes to the store first and the copy
//! is then reloaded from it, never patched speculatively. A failed write
//! therefore shows up as "nothing changed" instead of a list that silently
//! disagrees with disk.

mod scan;

pub use scan::{scan_expiry, ScanOutcome};

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info};

use crate::item::{next_item_id, Category, FoodItem, ItemError, NewFoodItem};
use crate::prompt::Prompt;
use crate::store::{ItemStore, KeyValueStore};
use crate::urgency::{describe_days_left, sort_by_urgency, status_color, Urgency};

pub const DELETE_TITLE: &str = "Delete Item";
pub const DELETE_MESSAGE: &str = "Are you sure you want to delete this item?";
pub const EMPTY_TITLE: &str = "No items yet";
pub const EMPTY_HINT: &str = "Scan a label photo to add an expiry date";

/// Display state of one item on the home list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRow {
    pub id: i64,
    pub name: String,
    pub category: Category,
    pub expiry_date: Option<NaiveDate>,
    pub days_left: Option<i64>,
    pub urgency: Option<Urgency>,
    /// Accent color of the row, `None` when the expiry is unreadable
    pub color: Option<&'static str>,
    pub label: String,
}

impl ItemRow {
    fn from_item(item: FoodItem, today: NaiveDate) -> Self {
        let expiry_date = item.expiry();
        let days_left = item.days_until_expiry(today);
        let urgency = days_left.map(status_color);
        Self {
            id: item.id,
            name: item.name,
            category: item.category,
            expiry_date,
            days_left,
            urgency,
            color: urgency.map(Urgency::color),
            label: days_left.map_or_else(
                || format!("Unknown expiry date '{}'", item.expiry_date),
                describe_days_left,
            ),
        }
    }
}

/// Read-through, write-through cache of the item collection.
#[derive(Debug)]
pub struct ItemListView<S> {
    store: Arc<ItemStore<S>>,
    items: Vec<FoodItem>,
}

impl<S: KeyValueStore> ItemListView<S> {
    /// Create the view and load the current collection.
    pub async fn open(store: Arc<ItemStore<S>>) -> Self {
        let items = store.load_all().await;
        Self { store, items }
    }

    /// Reload the cached collection from the store.
    pub async fn refresh(&mut self) {
        self.items = self.store.load_all().await;
    }

    /// Cached collection in stored (newest first) order
    #[must_use]
    pub fn items(&self) -> &[FoodItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate and store a new item.
    ///
    /// Invalid input is rejected before anything is written. The returned
    /// item is what was submitted to the store; whether it was persisted is
    /// reflected by [`Self::items`] afterwards.
    pub async fn add(
        &mut self,
        new_item: NewFoodItem,
        now: DateTime<Utc>,
    ) -> Result<FoodItem, ItemError> {
        new_item.validated_name()?;
        self.refresh().await;
        let id = next_item_id(now.timestamp_millis(), &self.items);
        let item = new_item.into_item(id, now)?;

        let written = self.store.add(item.clone()).await;
        self.refresh().await;

        let persisted = self.items.iter().any(|i| i.id == item.id);
        info!(id = item.id, name = %item.name, persisted, "Item added");
        debug!(attempted = written.len(), cached = self.items.len(), "View refreshed");
        Ok(item)
    }

    /// Ask for confirmation, then delete the item with `id`.
    ///
    /// Returns whether the user confirmed. Nothing is written otherwise.
    pub async fn delete(&mut self, id: i64, prompt: &dyn Prompt) -> bool {
        if !prompt.confirm(DELETE_TITLE, DELETE_MESSAGE).is_yes() {
            debug!(id, "Delete cancelled");
            return false;
        }
        let remaining = self.store.remove(id).await;
        self.refresh().await;
        info!(id, remaining = remaining.len(), "Item deleted");
        true
    }

    /// Rows ordered by urgency relative to `today`.
    #[must_use]
    pub fn rows(&self, today: NaiveDate) -> Vec<ItemRow> {
        sort_by_urgency(self.items.clone(), today)
            .into_iter()
            .map(|item| ItemRow::from_item(item, today))
            .collect()
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
