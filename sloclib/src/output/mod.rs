//! Output formatting: present data as tables.
//!
//! This module handles the final stage of the pipeline, formatting query
//! results for display:
//!
//! - **LOCTable**: table-ready data with headers and rows (Total included)
//! - **TableRow**: a single row with its label and formatted values
//!
//! LOCTable only formats data into strings. Sorting and totals are computed
//! in the query stage.
//!
//! ## Example
//!
//! ```rust
//! use sloclib::{CountQuerySet, CountResult, LineStats, LOCTable, Ordering};
//!
//! let mut result = CountResult::new();
//! let go = LineStats {
//!     file_count: 1,
//!     total_lines: 4,
//!     code_lines: 3,
//!     blank_lines: 1,
//!     comment_lines: 0,
//! };
//! result.add("Go", go);
//!
//! let queryset = CountQuerySet::from_result(&result, Ordering::default());
//! let table = LOCTable::from_count_queryset(&queryset);
//! // Go ties with Total on code; names descending put Total first
//! assert_eq!(table.rows[0].label, "Total");
//! assert_eq!(table.rows[1].label, "Go");
//! ```

pub mod table;

pub use table::{LOCTable, TableRow};
