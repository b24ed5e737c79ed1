//! Streaming line classifier.
//!
//! This module contains the per-byte state machine that decides, for every
//! newline-terminated line, whether it is blank, comment or code. It makes a
//! single left-to-right pass over the input and keeps O(1) state per file:
//! one progress cursor per comment token, the block comment depth, and a
//! handful of per-line flags.
//!
//! Classification rules:
//!
//! - A line is **comment** if a line comment started on it, or if any part of
//!   it was inside a block comment when the newline was reached.
//! - Otherwise it is **blank** if it only held spaces, tabs and carriage returns.
//! - Otherwise it is **code**.
//!
//! A line holding both code and a trailing comment counts once, as comment.
//! A final line without a terminating `\n` is not counted at all.
//!
//! The scanner works on raw bytes. Comment markers inside string literals are
//! not recognized as such, and multi-byte encodings are not decoded.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use crate::error::SlocError;
use crate::Result;

use super::comment::CommentSpec;
use super::stats::LineStats;

/// Progress of a partial match against a single comment token.
#[derive(Debug, Clone, Copy)]
struct TokenCursor {
    token: &'static [u8],
    pos: usize,
}

impl TokenCursor {
    fn new(token: &'static [u8]) -> Self {
        debug_assert!(!token.is_empty(), "comment tokens must not be empty");
        Self { token, pos: 0 }
    }

    /// Feed one byte. Returns true when the whole token has just matched.
    ///
    /// On a mismatch the match restarts at this byte rather than skipping it,
    /// so `**/` still closes a `*/` comment.
    fn advance(&mut self, byte: u8) -> bool {
        if self.token[self.pos] != byte {
            self.pos = 0;
        }
        if self.token[self.pos] == byte {
            self.pos += 1;
            if self.pos == self.token.len() {
                self.pos = 0;
                return true;
            }
        }
        false
    }

    fn reset(&mut self) {
        self.pos = 0;
    }
}

/// Incremental line classifier for one file.
///
/// Bytes can be fed in arbitrarily sized chunks; the result only depends on
/// the concatenated input. Nothing carries over between files: build a new
/// scanner for each one.
///
/// A line that touches a block comment counts as a comment line even when it
/// also holds code, so `int x; /* c */` is a comment line.
///
/// # Example
///
/// ```rust
/// use sloclib::data::{comment::C_COMMENTS, LineScanner};
///
/// let mut scanner = LineScanner::new(&C_COMMENTS);
/// scanner.feed(b"int x;\n/* a\n");
/// scanner.feed(b"b */\n\n");
/// let stats = scanner.finish();
///
/// assert_eq!(stats.code_lines, 1);
/// assert_eq!(stats.comment_lines, 2);
/// assert_eq!(stats.blank_lines, 1);
/// ```
#[derive(Debug, Clone)]
pub struct LineScanner {
    nesting: bool,
    line: TokenCursor,
    block_start: TokenCursor,
    block_end: TokenCursor,
    block_depth: usize,
    in_line_comment: bool,
    in_block_comment: bool,
    has_non_whitespace: bool,
    stats: LineStats,
}

impl LineScanner {
    /// Create a scanner for a file written with the given comment syntax.
    pub fn new(spec: &CommentSpec) -> Self {
        Self {
            nesting: spec.nesting,
            line: TokenCursor::new(spec.line),
            block_start: TokenCursor::new(spec.block_start),
            block_end: TokenCursor::new(spec.block_end),
            block_depth: 0,
            in_line_comment: false,
            in_block_comment: false,
            has_non_whitespace: false,
            stats: LineStats::new(),
        }
    }

    /// Scan the next chunk of the file.
    pub fn feed(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.step(byte);
        }
    }

    /// Finish the file and return its statistics, counting it as one file.
    ///
    /// An unterminated trailing line is dropped, and a block comment still
    /// open at this point is simply abandoned.
    pub fn finish(mut self) -> LineStats {
        self.stats.file_count += 1;
        self.stats
    }

    fn step(&mut self, byte: u8) {
        if self.block_depth == 0 && !self.in_line_comment {
            if self.line.advance(byte) {
                self.in_line_comment = true;
            }
        } else {
            self.line.reset();
        }

        if !self.in_line_comment {
            if self.block_start.advance(byte) {
                self.block_depth += 1;
                if !self.nesting {
                    self.block_depth = 1;
                }
            }
        } else {
            self.block_start.reset();
        }

        if !self.in_line_comment && self.block_depth > 0 {
            if self.block_end.advance(byte) {
                self.block_depth -= 1;
            }
        } else {
            self.block_end.reset();
        }

        if self.block_depth > 0 {
            self.in_block_comment = true;
        }

        if !matches!(byte, b' ' | b'\t' | b'\r' | b'\n') {
            self.has_non_whitespace = true;
        }

        if byte == b'\n' {
            self.finish_line();
        }
    }

    fn finish_line(&mut self) {
        self.stats.total_lines += 1;
        if self.in_block_comment || self.in_line_comment {
            self.stats.comment_lines += 1;
        } else if self.has_non_whitespace {
            self.stats.code_lines += 1;
        } else {
            self.stats.blank_lines += 1;
        }
        self.in_line_comment = false;
        self.in_block_comment = self.block_depth > 0;
        self.has_non_whitespace = false;
    }
}

/// Scan one file's bytes and merge the result into `stats`.
pub fn update(bytes: &[u8], spec: &CommentSpec, stats: &mut LineStats) {
    *stats += gather_stats(bytes, spec);
}

/// Classify the lines of an in-memory file.
///
/// # Example
///
/// ```rust
/// use sloclib::data::{comment::C_COMMENTS, gather_stats};
///
/// let stats = gather_stats(b"int x = 1; // comment\n", &C_COMMENTS);
/// assert_eq!(stats.comment_lines, 1);
/// assert_eq!(stats.code_lines, 0);
/// ```
pub fn gather_stats(bytes: &[u8], spec: &CommentSpec) -> LineStats {
    let mut scanner = LineScanner::new(spec);
    scanner.feed(bytes);
    scanner.finish()
}

/// Classify the lines of anything readable, streaming through a buffer.
pub fn gather_stats_from_reader<R: Read>(
    reader: R,
    spec: &CommentSpec,
) -> std::io::Result<LineStats> {
    let mut reader = BufReader::new(reader);
    let mut scanner = LineScanner::new(spec);
    loop {
        let chunk = reader.fill_buf()?;
        if chunk.is_empty() {
            break;
        }
        let len = chunk.len();
        scanner.feed(chunk);
        reader.consume(len);
    }
    Ok(scanner.finish())
}

/// Classify the lines of a file on disk.
///
/// # Example
///
/// ```rust
/// use sloclib::data::{comment::SHELL_COMMENTS, gather_stats_for_path};
/// use std::fs;
/// use tempfile::tempdir;
///
/// let dir = tempdir().unwrap();
/// let file_path = dir.path().join("build.sh");
/// fs::write(&file_path, "#!/bin/sh\n\nmake all\n").unwrap();
///
/// let stats = gather_stats_for_path(&file_path, &SHELL_COMMENTS).unwrap();
/// assert_eq!(stats.comment_lines, 1);
/// assert_eq!(stats.blank_lines, 1);
/// assert_eq!(stats.code_lines, 1);
/// ```
pub fn gather_stats_for_path(path: impl AsRef<Path>, spec: &CommentSpec) -> Result<LineStats> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SlocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    gather_stats_from_reader(file, spec).map_err(|e| SlocError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })
}
