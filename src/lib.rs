// Allow panic/unwrap/expect in tests (denied globally via Cargo.toml lints)
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::indexing_slicing
    )
)]

pub mod detector;
pub mod item;
pub mod logging;
pub mod prompt;
pub mod store;
pub mod urgency;
pub mod user_config;
pub mod utils;
pub mod view;

// Re-export commonly used types
pub use detector::{
    build_detector, DateCandidate, DateDetector, DetectorKind, FixedDateDetector, ImageRef,
    NoDetection, TextDateDetector,
};
pub use item::{Category, FoodItem, ItemError, NewFoodItem};
pub use prompt::{AutoConfirm, Decision, Prompt, ScriptedPrompt};
pub use store::{
    open_file_store, FileKeyValueStore, ItemStore, KeyValueStore, MemoryKeyValueStore,
    StoreError,
};
pub use urgency::{days_until_expiry, sort_by_urgency, status_color, Urgency};
pub use user_config::{load_user_config, UserConfig, UserConfigError};
pub use view::{scan_expiry, ItemListView, ItemRow, ScanOutcome};
