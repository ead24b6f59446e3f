//! Atomic file write operations.
//!
//! The item blob is always replaced as a whole: readers see either the old
//! collection or the new one, never a truncated file.

use std::io;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write content to a file atomically using a temporary file.
///
/// The temp file is created next to the target (required for an atomic
/// rename), flushed and synced, then renamed over the target. It is removed
/// automatically if any step fails.
///
/// # Errors
///
/// Returns an `io::Error` if the path has no parent directory, the temp file
/// cannot be created or written, or the rename fails.
pub async fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let parent = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory"))?
        .to_path_buf();
    let target_path = path.to_path_buf();
    let content_owned = content.to_string();

    tokio::task::spawn_blocking(move || -> io::Result<()> {
        use std::io::Write;

        let mut temp_file = NamedTempFile::new_in(&parent)?;
        temp_file.write_all(content_owned.as_bytes())?;
        temp_file.flush()?;
        temp_file.as_file().sync_all()?;

        // Consumes the NamedTempFile, so it is not deleted on drop
        temp_file.persist(&target_path)?;
        Ok(())
    })
    .await
    .map_err(io::Error::other)?
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_atomic_write_creates_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("food-items.json");

        atomic_write(&file_path, "[]").await.unwrap();

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "[]");
    }

    #[tokio::test]
    async fn test_atomic_write_replaces_whole_blob() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("food-items.json");
        std::fs::write(&file_path, r#"[{"id":1},{"id":2},{"id":3}]"#).unwrap();

        atomic_write(&file_path, "[]").await.unwrap();

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert_eq!(content, "[]");
    }

    #[tokio::test]
    async fn test_atomic_write_leaves_no_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("food-items.json");

        atomic_write(&file_path, "[]").await.unwrap();

        let count = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(count, 1, "Should only have the target file, no temp files");
    }

    #[tokio::test]
    async fn test_atomic_write_fails_with_missing_parent() {
        let result = atomic_write(Path::new("/nonexistent/deeply/nested/items.json"), "[]").await;
        assert!(result.is_err());
    }
}
