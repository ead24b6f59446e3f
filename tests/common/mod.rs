//! Common test utilities

use chrono::NaiveDate;
use expiry_tracker::item::{Category, FoodItem};
use expiry_tracker::store::{open_file_store, FileKeyValueStore, ItemStore, DEFAULT_STORAGE_KEY};
use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory for testing
pub fn create_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

/// Open the file-backed item store under the default key
pub fn open_store(data_dir: &Path) -> ItemStore<FileKeyValueStore> {
    open_file_store(data_dir, DEFAULT_STORAGE_KEY)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

/// Build a stored item directly, bypassing the add-item form
#[allow(dead_code)] // Test utility for integration tests
pub fn food_item(id: i64, name: &str, category: Category, expiry_date: &str) -> FoodItem {
    FoodItem {
        id,
        name: name.to_string(),
        category,
        expiry_date: expiry_date.to_string(),
        added_date: "2025-01-01T08:00:00.000Z".to_string(),
    }
}

/// Names in collection order
#[allow(dead_code)] // Test utility for integration tests
pub fn names(items: &[FoodItem]) -> Vec<&str> {
    items.iter().map(|i| i.name.as_str()).collect()
}
