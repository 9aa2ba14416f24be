//! Test helpers
//!
//! Shared lexer setups and token-stream inspection for the integration tests

#![allow(dead_code)]

use lexkit_core::lexer::scanners::{
    IdentifierScanner, NumberScanner, QuotedStringScanner, WhitespaceScanner,
};
use lexkit_core::lexer::{Lexer, ScannerSet, Token, TokenCode, Tokenizer};
use lexkit_config::WhitespaceConfig;

/// Quoted strings, numbers, identifiers and visible whitespace
pub fn standard_lexer() -> Lexer {
    let mut lexer = Lexer::new();
    lexer.add_scanner(QuotedStringScanner::default());
    lexer.add_scanner(NumberScanner::default());
    lexer.add_scanner(IdentifierScanner::new());
    lexer.add_scanner(WhitespaceScanner::new(WhitespaceConfig::keep_all()));
    lexer
}

/// Tokenizes `text` and returns a copy of the visible stream
pub fn lex_all(lexer: &mut Lexer, text: &str) -> Vec<Token> {
    lexer.assign(text, "");
    lexer.tokens().to_vec()
}

pub fn codes(tokens: &[Token]) -> Vec<TokenCode> {
    tokens.iter().map(|t| t.code).collect()
}

pub fn texts(tokens: &[Token]) -> Vec<&str> {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

pub fn count(tokens: &[Token], code: TokenCode) -> usize {
    tokens.iter().filter(|t| t.code == code).count()
}

/// Runs a tokenizer over `text`, returning the visible stream and the full
/// acceptance trail
pub fn tokenize_with_trail(scanners: &mut ScannerSet, text: &str) -> (Vec<Token>, Vec<Token>) {
    let mut tokenizer = Tokenizer::new(text, "trail");
    tokenizer.record_trail();
    tokenizer.tokenize(scanners);
    let trail = tokenizer.trail().map(<[Token]>::to_vec).unwrap_or_default();
    (tokenizer.into_tokens(), trail)
}
