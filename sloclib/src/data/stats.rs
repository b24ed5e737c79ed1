//! Line statistics accumulator.
//!
//! [`LineStats`] is the unit every count is reported in: the scanner fills one
//! per file, and callers merge them per language and into a grand total with
//! plain field-wise addition.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// File and line counters for one file, one language, or a whole run.
///
/// After every scan `total_lines == code_lines + blank_lines + comment_lines`.
/// Counters only ever grow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineStats {
    /// Number of files scanned
    pub file_count: u64,
    /// Newline-terminated lines seen
    pub total_lines: u64,
    /// Lines with something other than whitespace and no comment
    pub code_lines: u64,
    /// Whitespace-only lines outside comments
    pub blank_lines: u64,
    /// Lines touched by a line comment or inside a block comment
    pub comment_lines: u64,
}

impl LineStats {
    /// Create a new LineStats with all zeros.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the line-total invariant.
    pub fn is_consistent(&self) -> bool {
        self.total_lines == self.code_lines + self.blank_lines + self.comment_lines
    }
}

impl Add for LineStats {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            file_count: self.file_count + other.file_count,
            total_lines: self.total_lines + other.total_lines,
            code_lines: self.code_lines + other.code_lines,
            blank_lines: self.blank_lines + other.blank_lines,
            comment_lines: self.comment_lines + other.comment_lines,
        }
    }
}

impl AddAssign for LineStats {
    fn add_assign(&mut self, other: Self) {
        self.file_count += other.file_count;
        self.total_lines += other.total_lines;
        self.code_lines += other.code_lines;
        self.blank_lines += other.blank_lines;
        self.comment_lines += other.comment_lines;
    }
}

impl Sum for LineStats {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::new(), Add::add)
    }
}

impl<'a> Sum<&'a LineStats> for LineStats {
    fn sum<I: Iterator<Item = &'a LineStats>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(files: u64, code: u64, comment: u64, blank: u64) -> LineStats {
        LineStats {
            file_count: files,
            total_lines: code + comment + blank,
            code_lines: code,
            blank_lines: blank,
            comment_lines: comment,
        }
    }

    #[test]
    fn test_stats_default() {
        let stats = LineStats::new();
        assert_eq!(stats.file_count, 0);
        assert_eq!(stats.total_lines, 0);
        assert_eq!(stats.code_lines, 0);
        assert_eq!(stats.blank_lines, 0);
        assert_eq!(stats.comment_lines, 0);
        assert!(stats.is_consistent());
    }

    #[test]
    fn test_stats_add() {
        let a = sample(1, 100, 20, 10);
        let b = sample(2, 50, 5, 3);
        let sum = a + b;
        assert_eq!(sum.file_count, 3);
        assert_eq!(sum.code_lines, 150);
        assert_eq!(sum.comment_lines, 25);
        assert_eq!(sum.blank_lines, 13);
        assert_eq!(sum.total_lines, 188);
        assert!(sum.is_consistent());
    }

    #[test]
    fn test_merge_is_order_independent() {
        let a = sample(1, 3, 0, 1);
        let b = sample(1, 5, 2, 0);
        let c = sample(4, 7, 7, 7);

        let mut forward = LineStats::new();
        forward += a;
        forward += b;
        forward += c;

        let mut backward = LineStats::new();
        backward += c;
        backward += b;
        backward += a;

        assert_eq!(forward, backward);
        assert_eq!((a + b) + c, a + (b + c));
    }

    #[test]
    fn test_sum() {
        let all = [sample(1, 1, 1, 1), sample(1, 2, 2, 2)];
        let total: LineStats = all.iter().sum();
        assert_eq!(total, sample(2, 3, 3, 3));
    }

    #[test]
    fn test_serialized_field_names() {
        let value = serde_json::to_value(sample(1, 3, 0, 1)).unwrap();
        assert_eq!(value["FileCount"], 1);
        assert_eq!(value["TotalLines"], 4);
        assert_eq!(value["CodeLines"], 3);
        assert_eq!(value["BlankLines"], 1);
        assert_eq!(value["CommentLines"], 0);
    }
}
