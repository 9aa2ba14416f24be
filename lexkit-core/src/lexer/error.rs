//! Lexer error types
//!
//! The engine itself never fails on bad input: malformed text becomes
//! error-classified tokens. These types are what consumers turn those
//! tokens (and their own complaints) into.

use thiserror::Error;

use super::core::Span;
use super::token::{Token, TokenCode};

/// A syntax error anchored at a span of source text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{span}: {message}")]
pub struct SyntaxError {
    pub span: Span,
    pub message: String,
}

impl SyntaxError {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// Describes an error-classified token
    pub fn from_token(token: &Token) -> Self {
        let message = match token.code {
            TokenCode::UnclosedDoubleQuotedString => "Unclosed double-quoted string".to_string(),
            TokenCode::UnclosedSingleQuotedString => "Unclosed single-quoted string".to_string(),
            TokenCode::UnclosedBackQuotedString => "Unclosed back-quoted string".to_string(),
            TokenCode::UnterminatedComment => "Unterminated comment".to_string(),
            _ => format!("Unexpected {} '{}'", token.code, token.text),
        };
        Self::new(token.span.clone(), message)
    }
}

/// Invalid lexer profile
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown token code '{0}'")]
    UnknownTokenCode(String),

    #[error("Invalid identifier picture '{picture}': {reason}")]
    InvalidPicture { picture: String, reason: String },

    #[error("Keyword for code {0} has no text")]
    EmptyKeyword(String),

    #[error("Comment marker #{0} has an empty start delimiter")]
    EmptyCommentMarker(usize),

    #[error("Quoted string scanner needs at least one quote character")]
    NoQuotes,
}
