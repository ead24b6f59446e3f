use thiserror::Error;

/// Validation errors raised before an item reaches the store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ItemError {
    #[error("Please enter a food item name")]
    EmptyName,

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Unknown category '{value}'. Allowed: {allowed:?}")]
    UnknownCategory {
        value: String,
        allowed: Vec<&'static str>,
    },
}

impl ItemError {
    /// Create an unknown category error listing every accepted value
    pub fn unknown_category(value: impl Into<String>) -> Self {
        ItemError::UnknownCategory {
            value: value.into(),
            allowed: crate::item::Category::ALL
                .iter()
                .map(|c| c.as_str())
                .collect(),
        }
    }
}
