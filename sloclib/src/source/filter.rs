//! File filtering and discovery.
//!
//! Walks one or more roots and returns the regular files worth handing to the
//! language catalog. Hidden entries and ignored directory names are pruned
//! during the walk; include/exclude glob patterns are applied to each file.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::{DirEntry, WalkDir};

use crate::error::SlocError;
use crate::Result;

/// Configuration for file filtering.
#[derive(Debug, Clone, Default)]
pub struct FilterConfig {
    /// Glob patterns to include (if empty, include all files)
    pub include: Vec<Pattern>,
    /// Glob patterns to exclude
    pub exclude: Vec<Pattern>,
    /// Directory names to skip wherever they appear
    pub ignore_dirs: Vec<String>,
}

impl FilterConfig {
    /// Create a new empty filter config (includes every file).
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an include pattern.
    pub fn include(mut self, pattern: &str) -> Result<Self> {
        self.include.push(compile(pattern)?);
        Ok(self)
    }

    /// Add an exclude pattern.
    pub fn exclude(mut self, pattern: &str) -> Result<Self> {
        self.exclude.push(compile(pattern)?);
        Ok(self)
    }

    /// Add multiple include patterns.
    pub fn include_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.include(pattern)?;
        }
        Ok(self)
    }

    /// Add multiple exclude patterns.
    pub fn exclude_many(mut self, patterns: &[&str]) -> Result<Self> {
        for pattern in patterns {
            self = self.exclude(pattern)?;
        }
        Ok(self)
    }

    /// Skip every directory with this exact name.
    pub fn ignore_dir(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.ignore_dirs.push(name);
        }
        self
    }

    /// Skip every directory whose name is in `names`.
    pub fn ignore_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            self = self.ignore_dir(name);
        }
        self
    }

    /// Check if a directory name is on the ignore list.
    pub fn is_ignored_dir(&self, name: &str) -> bool {
        self.ignore_dirs.iter().any(|d| d == name)
    }

    /// Check if a file path passes the glob patterns.
    ///
    /// Excludes win over includes; with no include patterns every
    /// non-excluded path matches.
    pub fn matches(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();

        if self.exclude.iter().any(|p| p.matches(&path_str)) {
            return false;
        }

        self.include.is_empty() || self.include.iter().any(|p| p.matches(&path_str))
    }
}

fn compile(pattern: &str) -> Result<Pattern> {
    Pattern::new(pattern).map_err(|e| SlocError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Decide during the walk whether to descend into / yield an entry.
fn keep_entry(entry: &DirEntry, filter: &FilterConfig) -> bool {
    let name = entry.file_name().to_string_lossy();

    // The root is always taken as given, even if its name starts with a dot
    if entry.depth() > 0 && is_hidden(&name) {
        return false;
    }

    !(entry.file_type().is_dir() && filter.is_ignored_dir(&name))
}

/// Discover files under a single root.
///
/// A root that is a regular file is returned as-is (if it passes the globs).
/// Unreadable subtrees and non-regular files are logged and skipped.
pub fn discover_files(root: impl AsRef<Path>, filter: &FilterConfig) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(SlocError::PathNotFound(root.to_path_buf()));
    }

    let mut files = Vec::new();

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    for entry in walker.filter_entry(|e| keep_entry(e, filter)) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                let path = err.path().unwrap_or(root).display().to_string();
                log::warn!("skipping '{}': {}", path, err);
                continue;
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            continue;
        }

        let path = entry.path();
        if !file_type.is_file() {
            log::warn!("skipping '{}': not a regular file", path.display());
            continue;
        }

        if filter.matches(path) {
            files.push(path.to_path_buf());
        }
    }

    // Sort for deterministic output
    files.sort();

    Ok(files)
}

/// Discover files under several roots.
///
/// A root that cannot be walked is reported and skipped; the others are
/// still scanned.
pub fn discover_files_in_roots<P: AsRef<Path>>(
    roots: &[P],
    filter: &FilterConfig,
) -> Vec<PathBuf> {
    let mut all_files = Vec::new();

    for root in roots {
        let root = root.as_ref();
        match discover_files(root, filter) {
            Ok(files) => {
                log::debug!("found {} files under '{}'", files.len(), root.display());
                all_files.extend(files);
            }
            Err(err) => log::warn!("skipping root '{}': {}", root.display(), err),
        }
    }

    // Overlapping roots name the same file differently; keep the first spelling
    all_files.sort();
    let mut seen = HashSet::new();
    all_files.retain(|path| {
        let key = fs::canonicalize(path).unwrap_or_else(|_| path.clone());
        seen.insert(key)
    });

    all_files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_test_files(dir: &Path) {
        fs::create_dir_all(dir.join("src/util")).unwrap();
        fs::create_dir_all(dir.join("docs")).unwrap();
        fs::create_dir_all(dir.join("node_modules/pkg")).unwrap();
        fs::create_dir_all(dir.join("vendor")).unwrap();
        fs::create_dir_all(dir.join(".git")).unwrap();

        fs::write(dir.join("src/main.go"), "package main\n").unwrap();
        fs::write(dir.join("src/util/strings.go"), "package util\n").unwrap();
        fs::write(dir.join("docs/guide.md"), "# Guide\n").unwrap();
        fs::write(dir.join("node_modules/pkg/index.js"), "x();\n").unwrap();
        fs::write(dir.join("vendor/lib.c"), "int x;\n").unwrap();
        fs::write(dir.join(".git/config"), "[core]\n").unwrap();
        fs::write(dir.join(".env"), "KEY=1\n").unwrap();
        fs::write(dir.join("Makefile"), "all:\n").unwrap();
    }

    #[test]
    fn test_filter_matches_everything_by_default() {
        let filter = FilterConfig::new();

        assert!(filter.matches(Path::new("src/main.go")));
        assert!(filter.matches(Path::new("README.md")));
        assert!(filter.matches(Path::new("Makefile")));
    }

    #[test]
    fn test_filter_with_include_pattern() {
        let filter = FilterConfig::new().include("**/util/*.go").unwrap();

        assert!(filter.matches(Path::new("src/util/strings.go")));
        assert!(!filter.matches(Path::new("src/main.go")));
    }

    #[test]
    fn test_filter_with_exclude_pattern() {
        let filter = FilterConfig::new().exclude("**/*_test.go").unwrap();

        assert!(filter.matches(Path::new("src/main.go")));
        assert!(!filter.matches(Path::new("src/main_test.go")));
    }

    #[test]
    fn test_filter_exclude_wins_over_include() {
        let filter = FilterConfig::new()
            .include_many(&["**/src/**", "**/docs/**"])
            .unwrap()
            .exclude("**/util/**")
            .unwrap();

        assert!(filter.matches(Path::new("project/src/main.go")));
        assert!(filter.matches(Path::new("project/docs/guide.md")));
        assert!(!filter.matches(Path::new("project/src/util/strings.go")));
        assert!(!filter.matches(Path::new("project/vendor/lib.c")));
    }

    #[test]
    fn test_ignore_dirs() {
        let filter = FilterConfig::new().ignore_dirs("node_modules,,vendor".split(','));

        assert_eq!(filter.ignore_dirs, vec!["node_modules", "vendor"]);
        assert!(filter.is_ignored_dir("vendor"));
        assert!(!filter.is_ignored_dir("src"));
        assert!(!filter.is_ignored_dir(""));
    }

    #[test]
    fn test_discover_files_skips_hidden_entries() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let files = discover_files(temp.path(), &FilterConfig::new()).unwrap();

        assert!(files.iter().any(|p| p.ends_with("src/main.go")));
        assert!(files.iter().any(|p| p.ends_with("src/util/strings.go")));
        assert!(files.iter().any(|p| p.ends_with("Makefile")));
        assert!(files.iter().any(|p| p.ends_with("node_modules/pkg/index.js")));
        assert!(!files.iter().any(|p| p.ends_with(".git/config")));
        assert!(!files.iter().any(|p| p.ends_with(".env")));
    }

    #[test]
    fn test_discover_files_skips_ignored_dirs() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new().ignore_dirs(["node_modules", "vendor"]);
        let files = discover_files(temp.path(), &filter).unwrap();

        assert!(files.iter().any(|p| p.ends_with("src/main.go")));
        assert!(!files
            .iter()
            .any(|p| p.to_string_lossy().contains("node_modules")));
        assert!(!files.iter().any(|p| p.ends_with("vendor/lib.c")));
    }

    #[test]
    fn test_ignored_root_yields_nothing() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new().ignore_dir("vendor");
        let files = discover_files(temp.path().join("vendor"), &filter).unwrap();

        assert!(files.is_empty());
    }

    #[test]
    fn test_discover_files_with_globs() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let filter = FilterConfig::new().include("**/*.go").unwrap();
        let files = discover_files(temp.path(), &filter).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files.iter().all(|p| p.extension().unwrap() == "go"));
    }

    #[test]
    fn test_discover_single_file() {
        let temp = tempdir().unwrap();
        let file_path = temp.path().join(".hidden.go");
        fs::write(&file_path, "package x\n").unwrap();

        let files = discover_files(&file_path, &FilterConfig::new()).unwrap();

        assert_eq!(files, vec![file_path]);
    }

    #[test]
    fn test_discover_files_nonexistent() {
        let result = discover_files("/nonexistent/path", &FilterConfig::new());

        assert!(matches!(result, Err(SlocError::PathNotFound(_))));
    }

    #[test]
    fn test_discover_roots_skips_missing_root() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        let roots = [
            temp.path().join("missing"),
            temp.path().join("src"),
            temp.path().join("src/main.go"),
        ];
        let files = discover_files_in_roots(&roots, &FilterConfig::new());

        // main.go is reachable from two roots but listed once
        assert_eq!(files.len(), 2);
        assert!(files.iter().any(|p| p.ends_with("src/main.go")));
        assert!(files.iter().any(|p| p.ends_with("src/util/strings.go")));
    }

    #[test]
    fn test_overlapping_roots_listed_once() {
        let temp = tempdir().unwrap();
        create_test_files(temp.path());

        // Same directory under two spellings, plus its parent
        let roots = [
            temp.path().to_path_buf(),
            temp.path().join("src"),
            temp.path().join("src/../src"),
        ];
        let filter = FilterConfig::new().ignore_dirs(["node_modules", "vendor"]);
        let files = discover_files_in_roots(&roots, &filter);

        let go_files: Vec<_> = files
            .iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == "go"))
            .collect();
        assert_eq!(go_files.len(), 2);

        let canonical: HashSet<PathBuf> = files
            .iter()
            .map(|p| fs::canonicalize(p).unwrap())
            .collect();
        assert_eq!(canonical.len(), files.len());
    }

    #[cfg(unix)]
    #[test]
    fn test_fifo_is_skipped() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("real.c"), "int x;\n").unwrap();
        let status = std::process::Command::new("mkfifo")
            .arg(temp.path().join("pipe.c"))
            .status()
            .unwrap();
        assert!(status.success());

        let files = discover_files(temp.path(), &FilterConfig::new()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.c"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_is_skipped() {
        let temp = tempdir().unwrap();
        fs::write(temp.path().join("real.c"), "int x;\n").unwrap();
        std::os::unix::fs::symlink(temp.path().join("gone.c"), temp.path().join("link.c"))
            .unwrap();

        let files = discover_files(temp.path(), &FilterConfig::new()).unwrap();

        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("real.c"));
    }

    #[test]
    fn test_invalid_glob_pattern() {
        let result = FilterConfig::new().include("[invalid");

        if let Err(SlocError::InvalidGlob { pattern, .. }) = result {
            assert_eq!(pattern, "[invalid");
        } else {
            panic!("Expected InvalidGlob error");
        }
    }
}
