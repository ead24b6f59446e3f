use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{debug, warn};

use super::{parse_candidate, DateCandidate, DateDetector, ImageRef};

/// Extension of the label text file stored next to a photo
pub const SIDECAR_EXTENSION: &str = "txt";

/// Detector that reads text already extracted from the label.
///
/// For `label.jpg` it reads `label.txt` from the same directory and proposes
/// the first date found in it. A missing or dateless text file means no
/// detection.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextDateDetector;

impl TextDateDetector {
    /// Text file read for `image`
    #[must_use]
    pub fn sidecar_path(image: &ImageRef) -> PathBuf {
        PathBuf::from(image.as_str()).with_extension(SIDECAR_EXTENSION)
    }
}

#[async_trait]
impl DateDetector for TextDateDetector {
    async fn detect(&self, image: &ImageRef) -> Option<DateCandidate> {
        let path = Self::sidecar_path(image);
        let text = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "No label text next to image");
                return None;
            }
            Err(e) => {
                warn!(path = %path.display(), "Failed to read label text: {e}");
                return None;
            }
        };

        let found = parse_candidate(&text);
        debug!(
            image = %image,
            raw = found.as_ref().map(|c| c.raw.as_str()),
            "Parsed label text"
        );
        found
    }
}
