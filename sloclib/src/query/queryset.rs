//! Query set: processed data ready for table rendering.
//!
//! A QuerySet sits between the raw counting result and the final table
//! output. It holds one row per language plus a synthesized `Total` row,
//! all sorted together under the requested ordering. With the default
//! ordering the Total row comes first unless a single language holds all
//! the code and its name sorts after "Total".
//!
//! The data pipeline is:
//! 1. Raw Data (CountResult)
//! 2. QuerySet (sorted rows + total)
//! 3. LOCTable (formatted strings for display)

use std::cmp;

use serde::{Deserialize, Serialize};

use crate::data::counter::CountResult;
use crate::data::stats::LineStats;

use super::options::{OrderBy, OrderDirection, Ordering};

/// Label of the grand total row.
pub const TOTAL_LABEL: &str = "Total";

/// A single item in a query set (one row of data before string formatting).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryItem {
    /// Row label (language name)
    pub label: String,
    /// Statistics for this item
    pub stats: LineStats,
    /// Whether this is the grand total row
    pub is_total: bool,
}

/// Query set for count results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CountQuerySet {
    /// Ordering used
    pub ordering: Ordering,
    /// Language rows and the Total row, sorted together
    pub items: Vec<QueryItem>,
    /// Total across all items
    pub total: LineStats,
}

impl CountQuerySet {
    /// Create a QuerySet from a CountResult.
    pub fn from_result(result: &CountResult, ordering: Ordering) -> Self {
        let total = result.total();
        let mut items: Vec<QueryItem> = result
            .languages
            .iter()
            .map(|(name, stats)| QueryItem {
                label: name.clone(),
                stats: *stats,
                is_total: false,
            })
            .collect();
        items.push(QueryItem {
            label: TOTAL_LABEL.to_string(),
            stats: total,
            is_total: true,
        });

        items.sort_by(|a, b| compare_items(a, b, &ordering));

        CountQuerySet {
            ordering,
            items,
            total,
        }
    }
}

/// Get sort key for LineStats based on OrderBy.
fn sort_key(stats: &LineStats, order_by: &OrderBy) -> u64 {
    match order_by {
        OrderBy::Name => 0, // Name sorting handled separately
        OrderBy::Files => stats.file_count,
        OrderBy::Code => stats.code_lines,
        OrderBy::Comment => stats.comment_lines,
        OrderBy::Blank => stats.blank_lines,
        OrderBy::Total => stats.total_lines,
    }
}

/// Compare two rows; ties fall back to name, descending.
fn compare_items(a: &QueryItem, b: &QueryItem, ordering: &Ordering) -> cmp::Ordering {
    let primary = match ordering.by {
        OrderBy::Name => a.label.cmp(&b.label),
        by => sort_key(&a.stats, &by).cmp(&sort_key(&b.stats, &by)),
    };

    let primary = match ordering.direction {
        OrderDirection::Ascending => primary,
        OrderDirection::Descending => primary.reverse(),
    };

    primary.then_with(|| b.label.cmp(&a.label))
}
