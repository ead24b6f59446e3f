//! Item store.
//!
//! The whole food item collection lives as one JSON blob under one key of a
//! key-value facility. Every operation is a whole-collection
//! read-modify-write; there is no per-item addressing.

mod file;
mod items;
mod kv;

pub use file::FileKeyValueStore;
pub use items::{ItemStore, DEFAULT_STORAGE_KEY};
pub use kv::{KeyValueStore, MemoryKeyValueStore};

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to determine home directory")]
    HomeDirNotFound,

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Open the file-backed item store rooted at `data_dir`.
#[must_use]
pub fn open_file_store(data_dir: impl Into<PathBuf>, key: &str) -> ItemStore<FileKeyValueStore> {
    ItemStore::with_key(FileKeyValueStore::new(data_dir), key)
}
