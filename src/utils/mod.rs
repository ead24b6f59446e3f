mod atomic;

pub use atomic::atomic_write;

use chrono::{DateTime, SecondsFormat, Utc};
use std::path::{Path, PathBuf};

use crate::store::StoreError;

/// Environment variable that overrides the application home directory.
pub const HOME_ENV_VAR: &str = "EXPIRY_TRACKER_HOME";

/// Name of the application folder under the user's home directory
pub const APP_FOLDER: &str = ".expiry-tracker";

/// Name of the logs folder inside the data directory
pub const LOGS_FOLDER: &str = "logs";

/// Get the application home directory (`~/.expiry-tracker`).
///
/// If `EXPIRY_TRACKER_HOME` is set, that directory is used instead, so tests
/// and CI can run against an isolated data directory.
pub fn app_home_dir() -> Result<PathBuf, StoreError> {
    resolve_home(std::env::var_os(HOME_ENV_VAR).map(PathBuf::from), dirs::home_dir())
}

/// Resolve the data directory: an explicitly configured path wins over the
/// application home directory.
pub fn resolve_data_dir(configured: Option<&Path>) -> Result<PathBuf, StoreError> {
    match configured {
        Some(dir) => Ok(dir.to_path_buf()),
        None => app_home_dir(),
    }
}

fn resolve_home(
    override_dir: Option<PathBuf>,
    home: Option<PathBuf>,
) -> Result<PathBuf, StoreError> {
    if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
        return Ok(dir);
    }
    home.map(|h| h.join(APP_FOLDER))
        .ok_or(StoreError::HomeDirNotFound)
}

/// Format a timestamp the way the stored `addedDate` field expects it
/// (`2025-01-01T08:30:00.000Z`).
#[must_use]
pub fn to_iso(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
#[path = "utils_tests.rs"]
mod tests;
