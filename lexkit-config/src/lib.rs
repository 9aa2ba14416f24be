//! Lexkit Config - Pure configuration data structures
//!
//! This crate contains only data structures, no logic or global state.
//! It is the shared configuration vocabulary between the engine, the builder
//! and the command line front end. Every type deserializes from JSON with all
//! fields optional.

use serde::{Deserialize, Serialize};

/// Whitespace scanner flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhitespaceConfig {
    /// Consume newlines without making them visible
    pub ignore_newlines: bool,
    /// Consume spaces without making them visible
    pub ignore_spaces: bool,
    /// Fold newlines into the surrounding whitespace run
    pub newlines_are_spaces: bool,
}

impl WhitespaceConfig {
    /// Every kind of whitespace is emitted as a visible token
    pub fn keep_all() -> Self {
        Self {
            ignore_newlines: false,
            ignore_spaces: false,
            newlines_are_spaces: false,
        }
    }
}

impl Default for WhitespaceConfig {
    fn default() -> Self {
        Self {
            ignore_newlines: true,
            ignore_spaces: true,
            newlines_are_spaces: true,
        }
    }
}

/// Identifier scanner configuration.
///
/// `filter` and `starts_with` are character pictures: `X` letters,
/// `l` letters folded to lower case, `a` lower case letters only,
/// `U` letters folded to upper case, `A` upper case letters only,
/// `9` digits. Any other character matches itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentifierConfig {
    /// Token code name to emit, `Identifier` when absent
    pub code: Option<String>,
    /// Picture for every character after the first
    pub filter: String,
    /// Picture for the first character
    pub starts_with: String,
}

impl Default for IdentifierConfig {
    fn default() -> Self {
        Self {
            code: None,
            filter: "X9_".to_string(),
            starts_with: "X_".to_string(),
        }
    }
}

/// Number scanner grammar switches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberConfig {
    pub scientific: bool,
    pub sign: bool,
    pub hex: bool,
    pub dollar_hex: bool,
    pub fractions: bool,
}

impl Default for NumberConfig {
    fn default() -> Self {
        Self {
            scientific: true,
            sign: true,
            hex: true,
            dollar_hex: false,
            fractions: true,
        }
    }
}

/// Quoted string scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuotedStringConfig {
    /// Accepted quote characters
    pub quotes: String,
    /// Keep delimiters and backslashes as written
    pub verbatim: bool,
}

impl Default for QuotedStringConfig {
    fn default() -> Self {
        Self {
            quotes: "\"'`".to_string(),
            verbatim: false,
        }
    }
}

/// One comment delimiter pair
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentMarker {
    /// Only recognized at the very first character of the input
    pub hashpling: bool,
    pub start: String,
    /// Closing delimiter; the comment runs to end of line without one
    pub end: Option<String>,
}

impl CommentMarker {
    pub fn block(start: &str, end: &str) -> Self {
        Self {
            hashpling: false,
            start: start.to_string(),
            end: Some(end.to_string()),
        }
    }

    pub fn line(start: &str) -> Self {
        Self {
            hashpling: false,
            start: start.to_string(),
            end: None,
        }
    }

    pub fn hashpling(start: &str) -> Self {
        Self {
            hashpling: true,
            start: start.to_string(),
            end: None,
        }
    }
}

/// Comment scanner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentConfig {
    pub markers: Vec<CommentMarker>,
    /// Emit one comment token per physical line of a block comment
    pub split_by_lines: bool,
}

impl Default for CommentConfig {
    fn default() -> Self {
        Self {
            markers: vec![
                CommentMarker::block("/*", "*/"),
                CommentMarker::line("//"),
            ],
            split_by_lines: false,
        }
    }
}

/// A grammar specific keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Keyword slot, or the name of a fixed token code such as `GreaterEqualThan`
    pub code: KeywordCode,
    /// Keyword text; defaults to the spelling of the code
    #[serde(default)]
    pub text: Option<String>,
}

/// Either a numbered keyword slot or a named fixed code
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeywordCode {
    Slot(u16),
    Named(String),
}

/// Complete description of a lexer: which scanners are installed and how
/// they are configured. Scanners left as `None` are not installed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexerProfile {
    pub whitespace: Option<WhitespaceConfig>,
    pub identifier: Option<IdentifierConfig>,
    pub number: Option<NumberConfig>,
    pub strings: Option<QuotedStringConfig>,
    pub comments: Option<CommentConfig>,
    pub keywords: Vec<KeywordConfig>,
    pub case_sensitive_keywords: bool,
    /// Token code names to keep out of the visible stream
    pub filter: Vec<String>,
}

impl Default for LexerProfile {
    fn default() -> Self {
        Self {
            whitespace: Some(WhitespaceConfig::keep_all()),
            identifier: Some(IdentifierConfig::default()),
            number: Some(NumberConfig::default()),
            strings: Some(QuotedStringConfig::default()),
            comments: None,
            keywords: Vec::new(),
            case_sensitive_keywords: true,
            filter: Vec::new(),
        }
    }
}

/// Processing phase, used to scope log levels
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Tokenizer,
    Scanner,
    Lexer,
    Parser,
}

impl Phase {
    pub const ALL: [Phase; 4] = [Phase::Tokenizer, Phase::Scanner, Phase::Lexer, Phase::Parser];

    /// Phase named `name`, e.g. `"scanner"`
    pub fn from_name(name: &str) -> Option<Phase> {
        Self::ALL.into_iter().find(|phase| phase.as_str() == name)
    }

    /// Get the string name of the phase
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Tokenizer => "tokenizer",
            Phase::Scanner => "scanner",
            Phase::Lexer => "lexer",
            Phase::Parser => "parser",
        }
    }

    /// Get the log target name for this phase
    pub fn target(&self) -> String {
        format!("lexkit::{}", self.as_str())
    }
}
