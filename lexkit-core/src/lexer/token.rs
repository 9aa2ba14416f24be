//! Token codes and tokens

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use super::core::Span;
use super::error::SyntaxError;

/// Classification of a token.
///
/// The fixed codes cover structure, punctuation, literals and lexical
/// errors. `Keyword(n)` is the open range a grammar fills with its own
/// keywords; its ordinal is [`TokenCode::KEYWORD_BASE`] + `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum TokenCode {
    #[default]
    Unknown,
    EndOfFile,
    Error,
    Comment,
    Whitespace,
    NewLine,

    Plus,
    Minus,
    Slash,
    Backslash,
    Asterisk,
    OpenParen,
    CloseParen,
    OpenBrace,
    CloseBrace,
    OpenBracket,
    CloseBracket,
    ExclamationPoint,
    QuestionMark,
    AtSign,
    Pound,
    Dollar,
    Percent,
    Ampersand,
    Hat,
    UnderScore,
    Equals,
    Pipe,
    Colon,
    LessThan,
    GreaterThan,
    Comma,
    Period,
    SemiColon,
    Tilde,

    LessEqualThan,
    GreaterEqualThan,
    EqualsTo,
    NotEqualTo,
    LogicalAnd,
    LogicalOr,
    ShiftLeft,
    ShiftRight,
    BinaryIncrement,
    BinaryDecrement,
    UnaryIncrement,
    UnaryDecrement,

    Integer,
    HexNumber,
    BinaryNumber,
    Float,
    Identifier,
    Text,

    DoubleQuotedString,
    SingleQuotedString,
    BackQuotedString,

    UnclosedDoubleQuotedString,
    UnclosedSingleQuotedString,
    UnclosedBackQuotedString,
    UnterminatedComment,

    Keyword(u16),
}

/// Every fixed code with its name and, for punctuation and operators, its
/// spelling. Ordered by ordinal.
const FIXED_CODES: &[(TokenCode, &str, Option<&str>)] = &[
    (TokenCode::Unknown, "Unknown", None),
    (TokenCode::EndOfFile, "EndOfFile", None),
    (TokenCode::Error, "Error", None),
    (TokenCode::Comment, "Comment", None),
    (TokenCode::Whitespace, "Whitespace", None),
    (TokenCode::NewLine, "NewLine", None),
    (TokenCode::Plus, "Plus", Some("+")),
    (TokenCode::Minus, "Minus", Some("-")),
    (TokenCode::Slash, "Slash", Some("/")),
    (TokenCode::Backslash, "Backslash", Some("\\")),
    (TokenCode::Asterisk, "Asterisk", Some("*")),
    (TokenCode::OpenParen, "OpenParen", Some("(")),
    (TokenCode::CloseParen, "CloseParen", Some(")")),
    (TokenCode::OpenBrace, "OpenBrace", Some("{")),
    (TokenCode::CloseBrace, "CloseBrace", Some("}")),
    (TokenCode::OpenBracket, "OpenBracket", Some("[")),
    (TokenCode::CloseBracket, "CloseBracket", Some("]")),
    (TokenCode::ExclamationPoint, "ExclamationPoint", Some("!")),
    (TokenCode::QuestionMark, "QuestionMark", Some("?")),
    (TokenCode::AtSign, "AtSign", Some("@")),
    (TokenCode::Pound, "Pound", Some("#")),
    (TokenCode::Dollar, "Dollar", Some("$")),
    (TokenCode::Percent, "Percent", Some("%")),
    (TokenCode::Ampersand, "Ampersand", Some("&")),
    (TokenCode::Hat, "Hat", Some("^")),
    (TokenCode::UnderScore, "UnderScore", Some("_")),
    (TokenCode::Equals, "Equals", Some("=")),
    (TokenCode::Pipe, "Pipe", Some("|")),
    (TokenCode::Colon, "Colon", Some(":")),
    (TokenCode::LessThan, "LessThan", Some("<")),
    (TokenCode::GreaterThan, "GreaterThan", Some(">")),
    (TokenCode::Comma, "Comma", Some(",")),
    (TokenCode::Period, "Period", Some(".")),
    (TokenCode::SemiColon, "SemiColon", Some(";")),
    (TokenCode::Tilde, "Tilde", Some("~")),
    (TokenCode::LessEqualThan, "LessEqualThan", Some("<=")),
    (TokenCode::GreaterEqualThan, "GreaterEqualThan", Some(">=")),
    (TokenCode::EqualsTo, "EqualsTo", Some("==")),
    (TokenCode::NotEqualTo, "NotEqualTo", Some("!=")),
    (TokenCode::LogicalAnd, "LogicalAnd", Some("&&")),
    (TokenCode::LogicalOr, "LogicalOr", Some("||")),
    (TokenCode::ShiftLeft, "ShiftLeft", Some("<<")),
    (TokenCode::ShiftRight, "ShiftRight", Some(">>")),
    (TokenCode::BinaryIncrement, "BinaryIncrement", Some("+=")),
    (TokenCode::BinaryDecrement, "BinaryDecrement", Some("-=")),
    (TokenCode::UnaryIncrement, "UnaryIncrement", Some("++")),
    (TokenCode::UnaryDecrement, "UnaryDecrement", Some("--")),
    (TokenCode::Integer, "Integer", None),
    (TokenCode::HexNumber, "HexNumber", None),
    (TokenCode::BinaryNumber, "BinaryNumber", None),
    (TokenCode::Float, "Float", None),
    (TokenCode::Identifier, "Identifier", None),
    (TokenCode::Text, "Text", None),
    (TokenCode::DoubleQuotedString, "DoubleQuotedString", Some("\"")),
    (TokenCode::SingleQuotedString, "SingleQuotedString", Some("'")),
    (TokenCode::BackQuotedString, "BackQuotedString", Some("`")),
    (TokenCode::UnclosedDoubleQuotedString, "UnclosedDoubleQuotedString", None),
    (TokenCode::UnclosedSingleQuotedString, "UnclosedSingleQuotedString", None),
    (TokenCode::UnclosedBackQuotedString, "UnclosedBackQuotedString", None),
    (TokenCode::UnterminatedComment, "UnterminatedComment", None),
];

impl TokenCode {
    /// Ordinal of `Keyword(0)`
    pub const KEYWORD_BASE: u32 = 200;

    /// Keyword slot `n`
    pub fn keyword(n: u16) -> Self {
        TokenCode::Keyword(n)
    }

    /// Numeric value of the code
    pub fn ordinal(&self) -> u32 {
        match self {
            TokenCode::Keyword(n) => Self::KEYWORD_BASE + u32::from(*n),
            fixed => FIXED_CODES
                .iter()
                .position(|(code, _, _)| code == fixed)
                .map_or(0, |index| index as u32),
        }
    }

    /// Code name, e.g. `Identifier` or `Keyword3`
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            TokenCode::Keyword(n) => Cow::Owned(format!("Keyword{}", n)),
            fixed => Cow::Borrowed(
                FIXED_CODES
                    .iter()
                    .find(|(code, _, _)| code == fixed)
                    .map_or("Unknown", |(_, name, _)| *name),
            ),
        }
    }

    /// How the code is written in source, for punctuation and operators
    pub fn spelling(&self) -> Option<&'static str> {
        FIXED_CODES
            .iter()
            .find(|(code, _, _)| code == self)
            .and_then(|(_, _, spelling)| *spelling)
    }

    /// Resolves a code name (`GreaterEqualThan`, `Keyword4`) or a spelling (`>=`)
    pub fn from_name(name: &str) -> Option<Self> {
        if let Some((code, _, _)) = FIXED_CODES
            .iter()
            .find(|(_, fixed_name, spelling)| *fixed_name == name || *spelling == Some(name))
        {
            return Some(*code);
        }
        name.strip_prefix("Keyword")
            .and_then(|n| n.parse::<u16>().ok())
            .map(TokenCode::Keyword)
    }

    /// Code the catch-all assigns to a lone character
    pub fn by_char(c: char) -> Self {
        match c {
            ' ' => TokenCode::Whitespace,
            '+' => TokenCode::Plus,
            '-' => TokenCode::Minus,
            '/' => TokenCode::Slash,
            '\\' => TokenCode::Backslash,
            '*' => TokenCode::Asterisk,
            '(' => TokenCode::OpenParen,
            ')' => TokenCode::CloseParen,
            '{' => TokenCode::OpenBrace,
            '}' => TokenCode::CloseBrace,
            '[' => TokenCode::OpenBracket,
            ']' => TokenCode::CloseBracket,
            '!' => TokenCode::ExclamationPoint,
            '?' => TokenCode::QuestionMark,
            '@' => TokenCode::AtSign,
            '#' => TokenCode::Pound,
            '$' => TokenCode::Dollar,
            '%' => TokenCode::Percent,
            '&' => TokenCode::Ampersand,
            '^' => TokenCode::Hat,
            '_' => TokenCode::UnderScore,
            '=' => TokenCode::Equals,
            '|' => TokenCode::Pipe,
            ':' => TokenCode::Colon,
            '<' => TokenCode::LessThan,
            '>' => TokenCode::GreaterThan,
            ',' => TokenCode::Comma,
            '.' => TokenCode::Period,
            ';' => TokenCode::SemiColon,
            '~' => TokenCode::Tilde,
            '"' => TokenCode::DoubleQuotedString,
            '\'' => TokenCode::SingleQuotedString,
            '`' => TokenCode::BackQuotedString,
            _ => TokenCode::Unknown,
        }
    }

    /// Unclosed-string code for a quote character
    pub fn unclosed_string(quote: char) -> Self {
        match quote {
            '\'' => TokenCode::UnclosedSingleQuotedString,
            '`' => TokenCode::UnclosedBackQuotedString,
            _ => TokenCode::UnclosedDoubleQuotedString,
        }
    }

    /// Codes that mark malformed input
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            TokenCode::Error
                | TokenCode::UnclosedDoubleQuotedString
                | TokenCode::UnclosedSingleQuotedString
                | TokenCode::UnclosedBackQuotedString
                | TokenCode::UnterminatedComment
        )
    }

    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenCode::Keyword(_))
    }
}

impl fmt::Display for TokenCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

/// An accepted lexeme. Equality and ordering look at `(code, text)` only.
#[derive(Debug, Clone, Default)]
pub struct Token {
    pub span: Span,
    pub code: TokenCode,
    pub text: String,
}

impl Token {
    pub fn new(span: Span, code: TokenCode, text: impl Into<String>) -> Self {
        Self {
            span,
            code,
            text: text.into(),
        }
    }

    pub fn code_name(&self) -> Cow<'static, str> {
        self.code.name()
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self.code, TokenCode::Whitespace | TokenCode::NewLine)
    }

    pub fn is_error(&self) -> bool {
        self.code.is_error()
    }

    fn value_error(&self, kind: &str) -> SyntaxError {
        SyntaxError::new(
            self.span.clone(),
            format!("Cannot convert {} '{}' to {}", self.code, self.text, kind),
        )
    }

    /// Integer value of an `Integer`, `HexNumber` or `BinaryNumber` token
    pub fn to_integer(&self) -> Result<i64, SyntaxError> {
        let (negative, digits) = match self.text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, self.text.strip_prefix('+').unwrap_or(&self.text)),
        };
        let magnitude = match self.code {
            TokenCode::Integer => digits.parse::<u64>().ok(),
            TokenCode::HexNumber => digits
                .strip_prefix("0x")
                .or_else(|| digits.strip_prefix("0X"))
                .or_else(|| digits.strip_prefix('$'))
                .and_then(|hex| u64::from_str_radix(hex, 16).ok()),
            TokenCode::BinaryNumber => digits
                .strip_prefix("0b")
                .or_else(|| digits.strip_prefix("0B"))
                .and_then(|bin| u64::from_str_radix(bin, 2).ok()),
            _ => None,
        };
        magnitude
            .map(i128::from)
            .and_then(|m| i64::try_from(if negative { -m } else { m }).ok())
            .ok_or_else(|| self.value_error("integer"))
    }

    /// Floating point value of a `Float` or any integer token
    pub fn to_float(&self) -> Result<f64, SyntaxError> {
        match self.code {
            TokenCode::Float => self
                .text
                .parse::<f64>()
                .map_err(|_| self.value_error("float")),
            TokenCode::Integer | TokenCode::HexNumber | TokenCode::BinaryNumber => {
                self.to_integer().map(|value| value as f64)
            }
            _ => Err(self.value_error("float")),
        }
    }

    /// `true`/`false` in any case, or a non-zero integer
    pub fn to_bool(&self) -> Result<bool, SyntaxError> {
        if self.text.eq_ignore_ascii_case("true") {
            return Ok(true);
        }
        if self.text.eq_ignore_ascii_case("false") {
            return Ok(false);
        }
        self.to_integer()
            .map(|value| value != 0)
            .map_err(|_| self.value_error("boolean"))
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code && self.text == other.text
    }
}

impl Eq for Token {}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.code
            .cmp(&other.code)
            .then_with(|| self.text.cmp(&other.text))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.code, self.text)
    }
}
