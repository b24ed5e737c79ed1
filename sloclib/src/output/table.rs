//! Table-ready data structures for line count output.
//!
//! The data flow is:
//! 1. Raw Data (CountResult)
//! 2. QuerySet (sorted rows + total)
//! 3. LOCTable (formatted strings for display)

use serde::{Deserialize, Serialize};

use crate::data::stats::LineStats;
use crate::query::queryset::CountQuerySet;

/// Column headers, label column first.
pub const HEADERS: [&str; 6] = ["Language", "Files", "Code", "Comment", "Blank", "Total"];

/// A single row in the table (a language or the grand total).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (language name or "Total")
    pub label: String,
    /// Values for each count column, ready for display
    pub values: Vec<String>,
}

impl TableRow {
    fn from_stats(label: impl Into<String>, stats: &LineStats) -> Self {
        TableRow {
            label: label.into(),
            values: format_stats(stats),
        }
    }
}

/// Table-ready line count data.
///
/// Renderers iterate over headers and rows; no computation is left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LOCTable {
    /// Column headers: [Language, Files, Code, Comment, Blank, Total]
    pub headers: Vec<String>,
    /// One row per language plus the Total row, already ordered
    pub rows: Vec<TableRow>,
}

impl LOCTable {
    /// Create a LOCTable from a CountQuerySet.
    pub fn from_count_queryset(qs: &CountQuerySet) -> Self {
        let rows = qs
            .items
            .iter()
            .map(|item| TableRow::from_stats(item.label.as_str(), &item.stats))
            .collect();

        LOCTable {
            headers: HEADERS.iter().map(|h| h.to_string()).collect(),
            rows,
        }
    }
}

/// Format LineStats values in header order.
fn format_stats(stats: &LineStats) -> Vec<String> {
    [
        stats.file_count,
        stats.code_lines,
        stats.comment_lines,
        stats.blank_lines,
        stats.total_lines,
    ]
    .iter()
    .map(|n| n.to_string())
    .collect()
}
