//! User-level configuration loaded from `~/.expiry-tracker/config.toml`.
//!
//! The file is optional; missing sections and fields fall back to their
//! defaults.

mod loader;

pub use loader::{load_user_config, load_user_config_from};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

use crate::detector::{DetectorKind, STUB_DETECTED_DATE};
use crate::store::DEFAULT_STORAGE_KEY;
use crate::utils::app_home_dir;

/// Config file name inside the application home directory
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum UserConfigError {
    #[error("Failed to read user config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse user config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_stub_date() -> NaiveDate {
    let (y, m, d) = STUB_DETECTED_DATE;
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

/// Storage settings (`[storage]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Directory holding the item blob; defaults to the application home
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// Key the item collection is stored under
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            key: default_storage_key(),
        }
    }
}

/// Date detector settings (`[detector]` table).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DetectorConfig {
    /// `"fixed"`, `"text"` or `"manual"`
    #[serde(default)]
    pub kind: DetectorKind,
    /// Date the placeholder detector proposes, as `"YYYY-MM-DD"`
    #[serde(default = "default_stub_date")]
    pub stub_date: NaiveDate,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            kind: DetectorKind::default(),
            stub_date: default_stub_date(),
        }
    }
}

/// Top-level user configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub detector: DetectorConfig,
}

/// Resolve the canonical path for the user config file.
#[must_use]
pub fn user_config_path() -> Option<PathBuf> {
    app_home_dir().ok().map(|h| h.join(CONFIG_FILENAME))
}

#[cfg(test)]
#[path = "../user_config_tests.rs"]
mod user_config_tests;
