//! Ordering options for presenting results.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Field to order results by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderBy {
    /// Order by language name (lexicographical)
    Name,
    /// Order by file count
    Files,
    /// Order by code line count
    #[default]
    Code,
    /// Order by comment line count
    Comment,
    /// Order by blank line count
    Blank,
    /// Order by total line count
    Total,
}

impl FromStr for OrderBy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" | "language" | "label" => Ok(OrderBy::Name),
            "files" | "file" => Ok(OrderBy::Files),
            "code" => Ok(OrderBy::Code),
            "comment" | "comments" => Ok(OrderBy::Comment),
            "blank" | "blanks" => Ok(OrderBy::Blank),
            "total" => Ok(OrderBy::Total),
            _ => Err(format!("Unknown order field: {}", s)),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OrderDirection {
    /// Ascending (A-Z, smallest first)
    Ascending,
    /// Descending (Z-A, largest first)
    #[default]
    Descending,
}

/// Ordering configuration for results.
///
/// Rows that compare equal on the chosen field fall back to language name,
/// descending, so output is stable whatever order files were scanned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Ordering {
    /// Field to order by
    pub by: OrderBy,
    /// Sort direction
    pub direction: OrderDirection,
}

impl Ordering {
    /// Create ordering by code count, largest first (default)
    pub fn by_code() -> Self {
        Self::default()
    }

    /// Create ordering by language name, A-Z
    pub fn by_name() -> Self {
        Self {
            by: OrderBy::Name,
            direction: OrderDirection::Ascending,
        }
    }

    /// Create ordering by total count, largest first
    pub fn by_total() -> Self {
        Self {
            by: OrderBy::Total,
            direction: OrderDirection::Descending,
        }
    }

    /// Create ordering by any field, with its natural direction
    /// (names A-Z, counts largest first)
    pub fn by(field: OrderBy) -> Self {
        match field {
            OrderBy::Name => Self::by_name(),
            by => Self {
                by,
                direction: OrderDirection::Descending,
            },
        }
    }

    /// Set sort direction to ascending
    pub fn ascending(mut self) -> Self {
        self.direction = OrderDirection::Ascending;
        self
    }

    /// Set sort direction to descending
    pub fn descending(mut self) -> Self {
        self.direction = OrderDirection::Descending;
        self
    }
}
