//! Language catalog: map file names to languages and their comment syntax.
//!
//! Detection only looks at the file name. The catalog is an ordered list and
//! the first matching entry wins; files that match nothing are not counted.

use std::path::Path;

use crate::data::comment::{
    CommentSpec, CSS_COMMENTS, C_COMMENTS, HASKELL_COMMENTS, NO_COMMENTS, PASCAL_COMMENTS,
    PYTHON_COMMENTS, SEMICOLON_COMMENTS, SHELL_COMMENTS, SQL_COMMENTS, XML_COMMENTS,
};

/// How a language recognizes its files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    /// Any of these extensions (without the dot, case-sensitive)
    Extensions(&'static [&'static str]),
    /// Any of these exact file names
    FileNames(&'static [&'static str]),
}

impl Matcher {
    /// Check whether a path belongs to this matcher.
    pub fn matches(&self, path: &Path) -> bool {
        match self {
            Matcher::Extensions(exts) => path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| exts.contains(&ext)),
            Matcher::FileNames(names) => path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| names.contains(&name)),
        }
    }
}

/// A supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// Display name, also the key results are grouped by
    pub name: &'static str,
    /// File name matcher
    pub matcher: Matcher,
    /// Comment syntax
    pub comments: CommentSpec,
}

impl Language {
    /// Create a language matched by extension.
    pub const fn by_extension(
        name: &'static str,
        exts: &'static [&'static str],
        comments: CommentSpec,
    ) -> Self {
        Self {
            name,
            matcher: Matcher::Extensions(exts),
            comments,
        }
    }

    /// Create a language matched by exact file name.
    pub const fn by_file_name(
        name: &'static str,
        names: &'static [&'static str],
        comments: CommentSpec,
    ) -> Self {
        Self {
            name,
            matcher: Matcher::FileNames(names),
            comments,
        }
    }

    /// Check whether a path is written in this language.
    pub fn matches(&self, path: &Path) -> bool {
        self.matcher.matches(path)
    }
}

/// Built-in languages, in detection order.
pub const LANGUAGES: &[Language] = &[
    Language::by_extension("Thrift", &["thrift"], C_COMMENTS),
    Language::by_extension("C", &["c", "h"], C_COMMENTS),
    Language::by_extension("C++", &["cc", "cpp", "cxx", "hh", "hpp", "hxx"], C_COMMENTS),
    Language::by_extension("Go", &["go"], C_COMMENTS),
    Language::by_extension("Rust", &["rs"], C_COMMENTS),
    Language::by_extension("Scala", &["scala"], C_COMMENTS),
    Language::by_extension("Java", &["java"], C_COMMENTS),
    Language::by_extension("Dart", &["dart"], NO_COMMENTS),
    Language::by_extension("YACC", &["y"], C_COMMENTS),
    Language::by_extension("Lex", &["l"], C_COMMENTS),
    Language::by_extension("SQL", &["sql"], SQL_COMMENTS),
    Language::by_extension("Haskell", &["hs", "lhs"], HASKELL_COMMENTS),
    Language::by_extension("Perl", &["pl", "pm"], SHELL_COMMENTS),
    Language::by_extension("PHP", &["php"], C_COMMENTS),
    Language::by_extension("Pascal", &["pas", "dpr", "inc"], PASCAL_COMMENTS),
    Language::by_extension("Shell", &["sh"], SHELL_COMMENTS),
    Language::by_extension("Bash", &["bash"], SHELL_COMMENTS),
    Language::by_extension("Ruby", &["rb"], SHELL_COMMENTS),
    Language::by_extension("Python", &["py"], PYTHON_COMMENTS),
    Language::by_extension("Assembly", &["asm", "s"], SEMICOLON_COMMENTS),
    Language::by_extension("Lisp", &["lsp", "lisp"], SEMICOLON_COMMENTS),
    Language::by_extension("Scheme", &["scm", "scheme"], SEMICOLON_COMMENTS),
    Language::by_file_name("Make", &["makefile", "Makefile", "MAKEFILE"], SHELL_COMMENTS),
    Language::by_file_name("CMake", &["CMakeLists.txt"], SHELL_COMMENTS),
    Language::by_file_name("Jam", &["Jamfile", "Jamrules"], SHELL_COMMENTS),
    Language::by_extension("Markdown", &["md"], NO_COMMENTS),
    Language::by_extension("HAML", &["haml"], NO_COMMENTS),
    Language::by_extension("SASS", &["sass"], CSS_COMMENTS),
    Language::by_extension("SCSS", &["scss"], CSS_COMMENTS),
    Language::by_extension("HTML", &["htm", "html", "xhtml"], XML_COMMENTS),
    Language::by_extension("XML", &["xml"], XML_COMMENTS),
    Language::by_extension("CSS", &["css"], CSS_COMMENTS),
    Language::by_extension("JavaScript", &["js"], C_COMMENTS),
    Language::by_extension("TypeScript", &["ts", "tsx"], C_COMMENTS),
    Language::by_extension("JSON", &["json"], NO_COMMENTS),
];

/// An ordered set of languages used for detection.
#[derive(Debug, Clone)]
pub struct LanguageCatalog {
    languages: Vec<Language>,
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::new(LANGUAGES.to_vec())
    }
}

impl LanguageCatalog {
    /// Create a catalog from languages in detection order.
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// Find the language of a file. The first matching entry wins.
    pub fn detect(&self, path: impl AsRef<Path>) -> Option<&Language> {
        let path = path.as_ref();
        self.languages.iter().find(|lang| lang.matches(path))
    }
}
