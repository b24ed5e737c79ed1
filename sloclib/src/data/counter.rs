//! High-level counting API.
//!
//! Ties the pipeline together: discover files under the given roots, detect
//! each file's language, scan it, and merge the per-file statistics into one
//! bucket per language. The result map is owned by the returned
//! [`CountResult`]; nothing is shared between runs.

use std::collections::BTreeMap;
use std::path::Path;

use rayon::prelude::*;
use serde::Serialize;

use crate::error::SlocError;
use crate::source::filter::{discover_files_in_roots, FilterConfig};
use crate::source::language::LanguageCatalog;
use crate::Result;

use super::scanner::gather_stats_for_path;
use super::stats::LineStats;

/// Statistics keyed by language name.
pub type LanguageMap = BTreeMap<String, LineStats>;

/// Options for counting lines.
#[derive(Debug, Clone)]
pub struct CountOptions {
    /// File filter configuration
    pub file_filter: FilterConfig,
    /// Languages to recognize
    pub catalog: LanguageCatalog,
    /// Scan files on the rayon thread pool
    pub parallel: bool,
}

impl Default for CountOptions {
    fn default() -> Self {
        Self {
            file_filter: FilterConfig::new(),
            catalog: LanguageCatalog::default(),
            parallel: true,
        }
    }
}

impl CountOptions {
    /// Create new default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set file filter.
    pub fn filter(mut self, filter: FilterConfig) -> Self {
        self.file_filter = filter;
        self
    }

    /// Set the language catalog.
    pub fn catalog(mut self, catalog: LanguageCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Enable or disable parallel scanning.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// Result of counting lines under one or more roots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CountResult {
    /// Per-language statistics
    pub languages: LanguageMap,
}

impl CountResult {
    /// Create a new empty result.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one file's statistics into its language bucket.
    pub fn add(&mut self, language: &str, stats: LineStats) {
        match self.languages.get_mut(language) {
            Some(bucket) => *bucket += stats,
            None => {
                self.languages.insert(language.to_string(), stats);
            }
        }
    }

    /// Merge another result into this one.
    pub fn merge(mut self, other: CountResult) -> Self {
        for (language, stats) in other.languages {
            *self.languages.entry(language).or_default() += stats;
        }
        self
    }

    /// Grand total across all languages.
    pub fn total(&self) -> LineStats {
        self.languages.values().sum()
    }

    /// Number of files counted.
    pub fn file_count(&self) -> u64 {
        self.total().file_count
    }

    /// Whether no file was recognized.
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// Count one file.
///
/// Returns `Ok(None)` when the file name matches no language in the catalog.
///
/// # Example
///
/// ```rust
/// use sloclib::{count_file, LanguageCatalog};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let file_path = dir.path().join("main.go");
/// fs::write(&file_path, "package main\n\n// entry\nfunc main() {}\n").unwrap();
///
/// let (language, stats) = count_file(&file_path, &LanguageCatalog::default())
///     .unwrap()
///     .unwrap();
/// assert_eq!(language, "Go");
/// assert_eq!(stats.code_lines, 2);
/// assert_eq!(stats.comment_lines, 1);
/// assert_eq!(stats.blank_lines, 1);
/// ```
pub fn count_file(
    path: impl AsRef<Path>,
    catalog: &LanguageCatalog,
) -> Result<Option<(&'static str, LineStats)>> {
    let path = path.as_ref();
    let Some(language) = catalog.detect(path) else {
        return Ok(None);
    };
    let stats = gather_stats_for_path(path, &language.comments)?;
    Ok(Some((language.name, stats)))
}

/// Count a file, turning failures into log lines.
fn scan_file(path: &Path, catalog: &LanguageCatalog) -> Option<(&'static str, LineStats)> {
    match count_file(path, catalog) {
        Ok(Some(counted)) => Some(counted),
        Ok(None) => {
            log::debug!("no language for '{}'", path.display());
            None
        }
        Err(err) => {
            log::warn!("{}", err);
            None
        }
    }
}

/// Count lines in every recognized file under the given roots.
///
/// Missing roots, unreadable files and non-regular files are logged and
/// skipped. Files are scanned in parallel unless disabled in the options;
/// each worker folds into its own map and the maps are merged at the end, so
/// the result does not depend on scan order.
///
/// # Example
///
/// ```rust
/// use sloclib::{count_paths, CountOptions, FilterConfig};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// fs::write(dir.path().join("a.c"), "int a;\n/* b */\n").unwrap();
/// fs::create_dir(dir.path().join("vendor")).unwrap();
/// fs::write(dir.path().join("vendor/b.c"), "int b;\n").unwrap();
///
/// let filter = FilterConfig::new().ignore_dir("vendor");
/// let result = count_paths(&[dir.path()], &CountOptions::new().filter(filter));
///
/// let c = &result.languages["C"];
/// assert_eq!(c.file_count, 1);
/// assert_eq!(c.code_lines, 1);
/// assert_eq!(c.comment_lines, 1);
/// ```
pub fn count_paths<P: AsRef<Path>>(roots: &[P], options: &CountOptions) -> CountResult {
    let files = discover_files_in_roots(roots, &options.file_filter);
    let catalog = &options.catalog;

    let fold = |mut acc: CountResult, (language, stats): (&str, LineStats)| {
        acc.add(language, stats);
        acc
    };

    if options.parallel {
        files
            .par_iter()
            .filter_map(|path| scan_file(path, catalog))
            .fold(CountResult::new, fold)
            .reduce(CountResult::new, CountResult::merge)
    } else {
        files
            .iter()
            .filter_map(|path| scan_file(path, catalog))
            .fold(CountResult::new(), fold)
    }
}

/// Count lines under a single directory or file.
///
/// Unlike [`count_paths`], a missing root is an error.
pub fn count_directory(path: impl AsRef<Path>, options: &CountOptions) -> Result<CountResult> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(SlocError::PathNotFound(path.to_path_buf()));
    }

    Ok(count_paths(&[path], options))
}
