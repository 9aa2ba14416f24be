//! Test helpers
//!
//! End-to-end helpers: profile JSON in, token stream out

#![allow(dead_code)]

use lexkit_workspace::{build_lexer, BasicParser, Lexer, LexerProfile, Token, TokenCode};

/// Builds a lexer from profile JSON
pub fn lexer_from_json(json: &str) -> Lexer {
    let profile: LexerProfile = serde_json::from_str(json).expect("profile should parse");
    build_lexer(&profile).expect("profile should be valid")
}

/// Tokenizes `source` with the lexer described by `json`
pub fn tokenize(json: &str, source: &str) -> Vec<Token> {
    let mut lexer = lexer_from_json(json);
    lexer.assign(source, "e2e");
    lexer.tokens().to_vec()
}

pub fn codes(tokens: &[Token]) -> Vec<TokenCode> {
    tokens.iter().map(|t| t.code).collect()
}

/// A parser over `source` using the profile `json`
pub fn parser(json: &str, source: &str) -> BasicParser {
    let mut lexer = lexer_from_json(json);
    lexer.assign(source, "e2e");
    BasicParser::new(lexer)
}
