use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use super::{KeyValueStore, StoreError};
use crate::utils::atomic_write;

/// Key-value store keeping one JSON file per key in a data directory.
///
/// Keys are slugified into file names, so `@food_items` is stored in
/// `<data_dir>/food-items.json`.
#[derive(Debug, Clone)]
pub struct FileKeyValueStore {
    data_dir: PathBuf,
}

impl FileKeyValueStore {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// File that backs `key`
    #[must_use]
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key_file_stem(key)))
    }
}

fn key_file_stem(key: &str) -> String {
    let stem = slug::slugify(key);
    if stem.is_empty() {
        "default".to_string()
    } else {
        stem
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).await?;
        let path = self.path_for(key);
        atomic_write(&path, value).await?;
        debug!(path = %path.display(), bytes = value.len(), "Wrote value");
        Ok(())
    }
}
