use chrono::NaiveDate;
use tracing::info;

use crate::detector::{DateDetector, ImageRef};
use crate::prompt::Prompt;

pub const DETECTED_TITLE: &str = "Date Detected";

/// Result of the scan step of the add-item flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The user accepted a detected date
    Detected(NaiveDate),
    /// No date was detected or the user chose to enter it by hand
    Manual,
}

impl ScanOutcome {
    /// Expiry to pre-fill the add-item form with
    #[must_use]
    pub fn expiry_or(self, fallback: NaiveDate) -> NaiveDate {
        match self {
            ScanOutcome::Detected(date) => date,
            ScanOutcome::Manual => fallback,
        }
    }
}

/// Run the detector on `image` and ask the user to confirm what it found.
pub async fn scan_expiry(
    detector: &dyn DateDetector,
    prompt: &dyn Prompt,
    image: &ImageRef,
) -> ScanOutcome {
    let Some(candidate) = detector.detect(image).await else {
        info!(image = %image, "No date detected");
        return ScanOutcome::Manual;
    };

    let message = format!("Would you like to use this date: {}?", candidate.display_month());
    if prompt.confirm(DETECTED_TITLE, &message).is_yes() {
        info!(image = %image, date = %candidate.date, "Detected date accepted");
        ScanOutcome::Detected(candidate.date)
    } else {
        info!(image = %image, "Detected date declined, entering manually");
        ScanOutcome::Manual
    }
}
