use serde::{Deserialize, Serialize};

use super::ItemError;

/// Fixed set of food categories shown on the add-item form.
///
/// Stored by its capitalized name (`"Dairy"`). Unrecognized names in an
/// existing blob load as [`Category::Other`] instead of failing the whole
/// collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    Dairy,
    Meat,
    Vegetables,
    Fruits,
    Bakery,
    #[serde(other)]
    Other,
}

impl Category {
    /// Every category, in form display order
    pub const ALL: [Category; 6] = [
        Category::Dairy,
        Category::Meat,
        Category::Vegetables,
        Category::Fruits,
        Category::Bakery,
        Category::Other,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Dairy => "Dairy",
            Category::Meat => "Meat",
            Category::Vegetables => "Vegetables",
            Category::Fruits => "Fruits",
            Category::Bakery => "Bakery",
            Category::Other => "Other",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = ItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ItemError::unknown_category(s))
    }
}
