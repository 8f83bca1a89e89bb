//! Line tokenization
//!
//! Intra-line highlighting compares lines token by token rather than rune
//! by rune, so that a changed identifier is marked as a whole.
//!
//! - `regex_tokenizer`: Pattern-driven tokenizer with gap filling
//! - `registry`: Frozen extension/language to tokenizer table

pub mod regex_tokenizer;
pub mod registry;

use derive_new::new;
use std::fmt::Debug;

/// Whitespace runs, identifiers, hex and decimal literals, two-character
/// operators, then single punctuation characters, in priority order.
pub const DEFAULT_TOKEN_PATTERN: &str = r"\s+|[A-Za-z_][A-Za-z0-9_]*|0x[0-9A-Fa-f]+|\d+|==|!=|<=|>=|:=|&&|\|\||[{}()\[\].,;:+\-*/&|<>!=]";

/// Extensions that get a registered tokenizer out of the box.
pub const BUILTIN_TOKEN_PATTERNS: phf::Map<&'static str, &'static str> = phf::phf_map! {
    ".go" => DEFAULT_TOKEN_PATTERN,
    ".js" => DEFAULT_TOKEN_PATTERN,
    ".ts" => DEFAULT_TOKEN_PATTERN,
    ".jsx" => DEFAULT_TOKEN_PATTERN,
    ".tsx" => DEFAULT_TOKEN_PATTERN,
    ".py" => DEFAULT_TOKEN_PATTERN,
    ".rb" => DEFAULT_TOKEN_PATTERN,
    ".rs" => DEFAULT_TOKEN_PATTERN,
    ".java" => DEFAULT_TOKEN_PATTERN,
    ".c" => DEFAULT_TOKEN_PATTERN,
    ".h" => DEFAULT_TOKEN_PATTERN,
    ".cpp" => DEFAULT_TOKEN_PATTERN,
    ".css" => DEFAULT_TOKEN_PATTERN,
    ".html" => DEFAULT_TOKEN_PATTERN,
    ".md" => DEFAULT_TOKEN_PATTERN,
};

/// Language names accepted as a hint, mapped to their registry key.
pub const LANGUAGE_ALIASES: phf::Map<&'static str, &'static str> = phf::phf_map! {
    "go" => ".go",
    "golang" => ".go",
    "javascript" => ".js",
    "js" => ".js",
    "jsx" => ".jsx",
    "typescript" => ".ts",
    "ts" => ".ts",
    "tsx" => ".tsx",
    "python" => ".py",
    "py" => ".py",
    "ruby" => ".rb",
    "rust" => ".rs",
    "java" => ".java",
    "c" => ".c",
    "cpp" => ".cpp",
    "c++" => ".cpp",
    "css" => ".css",
    "html" => ".html",
    "markdown" => ".md",
    "md" => ".md",
};

/// A fragment of a line with its half-open rune span `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Token<'l> {
    pub value: &'l str,
    pub start: usize,
    pub end: usize,
}

pub trait Tokenizer: Debug + Send + Sync {
    /// Splits `line` into tokens that cover every rune exactly once.
    ///
    /// An empty line yields a single `[0, 0)` token.
    fn tokenize<'l>(&self, line: &'l str) -> Vec<Token<'l>>;

    fn name(&self) -> &str;
}
