//! Source discovery: find files to analyze and tell what language they are.
//!
//! This module handles the first stage of the pipeline. It provides:
//!
//! - **File discovery**: Walk roots, skipping hidden entries and ignored directories
//! - **File filtering**: Include/exclude files with glob patterns
//! - **Language detection**: Map file names to a language and its comment syntax
//!
//! ## Example
//!
//! ```rust,ignore
//! use sloclib::source::{discover_files_in_roots, FilterConfig, LanguageCatalog};
//!
//! let filter = FilterConfig::new().ignore_dirs(["node_modules", "vendor"]);
//! let files = discover_files_in_roots(&["."], &filter);
//! let catalog = LanguageCatalog::default();
//! let go_files = files.iter().filter(|f| catalog.detect(f).is_some_and(|l| l.name == "Go"));
//! ```

pub mod filter;
pub mod language;

pub use filter::{discover_files, discover_files_in_roots, FilterConfig};
pub use language::{Language, LanguageCatalog, Matcher, LANGUAGES};
