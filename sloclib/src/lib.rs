//! # sloclib
//!
//! A source line counter library: splits every line of a polyglot source tree
//! into code, comment and blank, and aggregates the counts per language.
//!
//! ## Overview
//!
//! The work happens in four stages, one module each:
//!
//! - **source**: walk the given roots (skipping hidden entries and ignored
//!   directories) and detect each file's language from its name
//! - **data**: scan each file in a single streaming pass and merge the counts
//!   per language
//! - **query**: order the per-language rows
//! - **output**: turn the rows into a table-ready structure
//!
//! ## Line classification
//!
//! - **Comment**: any line touched by a line comment or a block comment
//! - **Blank**: whitespace-only lines outside comments
//! - **Code**: everything else
//!
//! A line holding code and a trailing comment counts once, as a comment.
//! Only newline-terminated lines are counted.
//!
//! ## Example
//!
//! ```rust
//! use sloclib::{count_paths, CountOptions, FilterConfig};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("main.go"), "package main\n\nfunc main() {\n}\n").unwrap();
//! fs::write(dir.path().join("README.md"), "# A\nb\nc\nd\ne\n").unwrap();
//!
//! let result = count_paths(&[dir.path()], &CountOptions::new());
//! assert_eq!(result.languages["Go"].code_lines, 3);
//! assert_eq!(result.languages["Markdown"].code_lines, 5);
//!
//! let total = result.total();
//! assert_eq!(total.file_count, 2);
//! assert_eq!(total.total_lines, 9);
//!
//! // Skip directories by name
//! let filter = FilterConfig::new().ignore_dirs(["node_modules", "vendor"]);
//! let result = count_paths(&[dir.path()], &CountOptions::new().filter(filter));
//! ```

pub mod data;
pub mod error;
pub mod output;
pub mod query;
pub mod source;

pub use data::{
    count_directory, count_file, count_paths, gather_stats, gather_stats_for_path, CommentSpec,
    CountOptions, CountResult, LanguageMap, LineScanner, LineStats,
};
pub use error::SlocError;
pub use output::{LOCTable, TableRow};
pub use query::{CountQuerySet, OrderBy, OrderDirection, Ordering, QueryItem};
pub use source::{FilterConfig, Language, LanguageCatalog, Matcher};

/// Result type for sloclib operations
pub type Result<T> = std::result::Result<T, SlocError>;
