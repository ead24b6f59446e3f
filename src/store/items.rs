use tokio::sync::Mutex;
use tracing::{debug, error, warn};

use super::{KeyValueStore, StoreError};
use crate::item::FoodItem;

/// Key the collection is stored under
pub const DEFAULT_STORAGE_KEY: &str = "@food_items";

/// Durable CRUD over the food item collection.
///
/// Read failures degrade to an empty collection and write failures are
/// logged; neither is fatal. `add` and `remove` hold a per-store lock for
/// their whole read-modify-write cycle, so overlapping calls on the same
/// store cannot drop each other's writes. Separate processes writing the
/// same blob are still last-write-wins.
#[derive(Debug)]
pub struct ItemStore<S> {
    backend: S,
    key: String,
    write_lock: Mutex<()>,
}

impl<S: KeyValueStore> ItemStore<S> {
    #[must_use]
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    #[must_use]
    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Load the stored collection.
    ///
    /// Nothing stored, an unreadable backend and a corrupt blob all give an
    /// empty collection; the failure is only logged.
    pub async fn load_all(&self) -> Vec<FoodItem> {
        match self.try_load_all().await {
            Ok(items) => items,
            Err(StoreError::JsonError(e)) => {
                warn!(key = %self.key, "Stored items are corrupt, starting empty: {e}");
                Vec::new()
            }
            Err(e) => {
                error!(key = %self.key, "Error loading items: {e}");
                Vec::new()
            }
        }
    }

    /// Load the stored collection, surfacing read and parse failures.
    pub async fn try_load_all(&self) -> Result<Vec<FoodItem>, StoreError> {
        let Some(blob) = self.backend.get(&self.key).await? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&blob)?)
    }

    /// Replace the whole stored collection with a single write.
    pub async fn save_all(&self, items: &[FoodItem]) -> Result<(), StoreError> {
        let result = self.write_blob(items).await;
        if let Err(e) = &result {
            error!(key = %self.key, count = items.len(), "Error saving items: {e}");
        }
        result
    }

    async fn write_blob(&self, items: &[FoodItem]) -> Result<(), StoreError> {
        let blob = serde_json::to_string(items)?;
        self.backend.set(&self.key, &blob).await
    }

    /// Prepend `item` (newest first) and persist.
    ///
    /// Returns the collection that was written. Id collisions are not
    /// checked. If the write fails the returned collection is not what is
    /// stored; callers that need the truth reload with [`Self::load_all`].
    pub async fn add(&self, item: FoodItem) -> Vec<FoodItem> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load_all().await;
        let id = item.id;
        items.insert(0, item);
        let saved = self.save_all(&items).await.is_ok();
        debug!(id, count = items.len(), saved, "Added food item");
        items
    }

    /// Drop every item with `id` and persist.
    ///
    /// Unknown ids leave the collection unchanged, so calling this twice is
    /// the same as calling it once.
    pub async fn remove(&self, id: i64) -> Vec<FoodItem> {
        let _guard = self.write_lock.lock().await;
        let mut items = self.load_all().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        let removed = before.saturating_sub(items.len());
        let saved = self.save_all(&items).await.is_ok();
        debug!(id, removed, count = items.len(), saved, "Removed food item");
        items
    }
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod tests;
