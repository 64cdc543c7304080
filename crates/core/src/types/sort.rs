//! Listing sort order.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Price sort direction for the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Cheapest first.
    #[default]
    Ascending,
    /// Most expensive first.
    Descending,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    #[must_use]
    pub const fn is_descending(self) -> bool {
        matches!(self, Self::Descending)
    }

    /// Shopper-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ascending => "Low to High",
            Self::Descending => "High to Low",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when parsing an unknown sort direction.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort direction: {0} (expected asc or desc)")]
pub struct ParseSortDirectionError(String);

impl FromStr for SortDirection {
    type Err = ParseSortDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" | "low-to-high" => Ok(Self::Ascending),
            "desc" | "descending" | "high-to-low" => Ok(Self::Descending),
            _ => Err(ParseSortDirectionError(s.to_owned())),
        }
    }
}
