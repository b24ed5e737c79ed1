//! Data collection: scan files and collect statistics.
//!
//! This module handles the second stage of the pipeline - classifying the
//! lines of each file and aggregating the counts. It provides:
//!
//! - **Comment syntax**: `CommentSpec` and the built-in comment styles
//! - **Scanning**: the streaming line classifier (`LineScanner`, `gather_stats`)
//! - **Statistics**: the `LineStats` accumulator
//! - **Counting**: High-level API (`count_paths`, `count_file`)
//!
//! ## Example
//!
//! ```rust,ignore
//! use sloclib::data::{count_paths, CountOptions};
//!
//! let result = count_paths(&["."], &CountOptions::new());
//! println!("Total code lines: {}", result.total().code_lines);
//! ```

pub mod comment;
pub mod counter;
pub mod scanner;
pub mod stats;

pub use comment::{CommentSpec, NO_TOKEN};
pub use counter::{count_directory, count_file, count_paths, CountOptions, CountResult, LanguageMap};
pub use scanner::{
    gather_stats, gather_stats_for_path, gather_stats_from_reader, update, LineScanner,
};
pub use stats::LineStats;
