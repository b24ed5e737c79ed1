//! Comment syntax descriptions.
//!
//! A [`CommentSpec`] tells the line scanner which byte sequences open a line
//! comment, open a block comment and close a block comment, and whether block
//! comments nest. Languages without one of these markers use [`NO_TOKEN`], a
//! single zero byte that never occurs in real source text.

/// Placeholder token for a comment marker a language does not have.
pub const NO_TOKEN: &[u8] = b"\0";

/// Immutable description of a language's comment syntax.
///
/// Tokens are compared byte for byte. None of them may be empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentSpec {
    /// Starts a comment running to the end of the line
    pub line: &'static [u8],
    /// Opens a block comment
    pub block_start: &'static [u8],
    /// Closes a block comment
    pub block_end: &'static [u8],
    /// Whether a block start inside a block comment increases the depth
    pub nesting: bool,
}

impl CommentSpec {
    /// Create a new comment spec.
    pub const fn new(
        line: &'static [u8],
        block_start: &'static [u8],
        block_end: &'static [u8],
        nesting: bool,
    ) -> Self {
        Self {
            line,
            block_start,
            block_end,
            nesting,
        }
    }

    /// Whether every token is non-empty and so safe to hand to the scanner.
    pub fn is_well_formed(&self) -> bool {
        !self.line.is_empty() && !self.block_start.is_empty() && !self.block_end.is_empty()
    }
}

/// No comment syntax (Markdown, JSON, ...).
pub const NO_COMMENTS: CommentSpec = CommentSpec::new(NO_TOKEN, NO_TOKEN, NO_TOKEN, false);
/// `<!-- -->`
pub const XML_COMMENTS: CommentSpec = CommentSpec::new(NO_TOKEN, b"<!--", b"-->", false);
/// `//` and `/* */`
pub const C_COMMENTS: CommentSpec = CommentSpec::new(b"//", b"/*", b"*/", false);
/// `/* */` only
pub const CSS_COMMENTS: CommentSpec = CommentSpec::new(NO_TOKEN, b"/*", b"*/", false);
/// `#`
pub const SHELL_COMMENTS: CommentSpec = CommentSpec::new(b"#", NO_TOKEN, NO_TOKEN, false);
/// `;`
pub const SEMICOLON_COMMENTS: CommentSpec = CommentSpec::new(b";", NO_TOKEN, NO_TOKEN, false);
/// `--` and nesting `{- -}`
pub const HASKELL_COMMENTS: CommentSpec = CommentSpec::new(b"--", b"{-", b"-}", true);
/// `--`
pub const SQL_COMMENTS: CommentSpec = CommentSpec::new(b"--", NO_TOKEN, NO_TOKEN, false);
/// `#` and `""" """`
pub const PYTHON_COMMENTS: CommentSpec = CommentSpec::new(b"#", b"\"\"\"", b"\"\"\"", false);
/// `//` and `{ }`
pub const PASCAL_COMMENTS: CommentSpec = CommentSpec::new(b"//", b"{", b"}", false);
