//! Expiry date detection from a label photo.
//!
//! Text recognition is not part of this crate. A [`DateDetector`] turns an
//! opaque image reference into an optional date candidate, and the user
//! confirms it before anything is stored. [`FixedDateDetector`] is the
//! placeholder shipped with the app; [`TextDateDetector`] reads label text
//! extracted by some other tool.

mod candidate;
mod text;

pub use candidate::parse_candidate;
pub use text::{TextDateDetector, SIDECAR_EXTENSION};

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Date proposed by the placeholder detector
pub const STUB_DETECTED_DATE: (i32, u32, u32) = (2025, 12, 1);

/// Opaque reference to a captured or picked image (file path or URI).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    #[must_use]
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&Path> for ImageRef {
    fn from(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A detected date and the text it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateCandidate {
    pub raw: String,
    pub date: NaiveDate,
}

impl DateCandidate {
    /// Month and year as shown in the confirmation prompt (`12/2025`)
    #[must_use]
    pub fn display_month(&self) -> String {
        self.date.format("%m/%Y").to_string()
    }
}

#[async_trait]
pub trait DateDetector: Send + Sync {
    /// Propose an expiry date for the image, if one can be found.
    async fn detect(&self, image: &ImageRef) -> Option<DateCandidate>;
}

/// Placeholder detector: proposes the same date for every image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDateDetector {
    date: NaiveDate,
}

impl FixedDateDetector {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Default for FixedDateDetector {
    fn default() -> Self {
        let (y, m, d) = STUB_DETECTED_DATE;
        Self {
            date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        }
    }
}

#[async_trait]
impl DateDetector for FixedDateDetector {
    async fn detect(&self, image: &ImageRef) -> Option<DateCandidate> {
        debug!(image = %image, date = %self.date, "Placeholder detector proposing fixed date");
        Some(DateCandidate {
            raw: self.date.format("%m/%Y").to_string(),
            date: self.date,
        })
    }
}

/// Which detector the scan flow uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetectorKind {
    /// [`FixedDateDetector`]
    #[default]
    Fixed,
    /// [`TextDateDetector`]
    Text,
    /// [`NoDetection`]
    Manual,
}

/// Build the detector selected by `kind`.
///
/// `stub_date` is only used by [`DetectorKind::Fixed`].
#[must_use]
pub fn build_detector(kind: DetectorKind, stub_date: NaiveDate) -> Box<dyn DateDetector> {
    match kind {
        DetectorKind::Fixed => Box::new(FixedDateDetector::new(stub_date)),
        DetectorKind::Text => Box::new(TextDateDetector),
        DetectorKind::Manual => Box::new(NoDetection),
    }
}

/// Detector that never finds a date; the user always enters it by hand.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDetection;

#[async_trait]
impl DateDetector for NoDetection {
    async fn detect(&self, image: &ImageRef) -> Option<DateCandidate> {
        debug!(image = %image, "No date detection available");
        None
    }
}
