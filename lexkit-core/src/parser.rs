//! Token-level helper for hand written parsers
//!
//! [`BasicParser`] wraps a [`Lexer`] and collects [`SyntaxError`]s instead
//! of stopping at the first one.

use tracing::debug;

use crate::lexer::core::EOF_CHAR;
use crate::lexer::{Lexer, SyntaxError, Token, TokenCode};

#[derive(Debug)]
pub struct BasicParser {
    lexer: Lexer,
    errors: Vec<SyntaxError>,
}

impl BasicParser {
    pub fn new(lexer: Lexer) -> Self {
        Self {
            lexer,
            errors: Vec::new(),
        }
    }

    /// Parser over `text` split into `Text` lines and `NewLine` tokens
    pub fn plain_text(text: &str, source_name: &str) -> Self {
        let mut lexer = Lexer::new();
        lexer.add_custom("plaintext", 10, |t| match t.peek() {
            '\n' => {
                t.push();
                t.accept(TokenCode::NewLine);
            }
            EOF_CHAR => {}
            _ => {
                t.push();
                while !matches!(t.peek(), '\n' | EOF_CHAR) {
                    t.push();
                }
                t.accept(TokenCode::Text);
            }
        });
        lexer.assign(text, source_name);
        Self::new(lexer)
    }

    pub fn lexer(&mut self) -> &mut Lexer {
        &mut self.lexer
    }

    pub fn into_lexer(self) -> Lexer {
        self.lexer
    }

    pub fn peek(&mut self) -> &Token {
        self.lexer.peek(0)
    }

    pub fn lex(&mut self) -> Token {
        self.lexer.lex()
    }

    pub fn current_code(&mut self) -> TokenCode {
        self.lexer.current_code()
    }

    pub fn at_end(&mut self) -> bool {
        self.current_code() == TokenCode::EndOfFile
    }

    /// The current token has one of `codes`
    pub fn matches(&mut self, codes: &[TokenCode]) -> bool {
        codes.contains(&self.current_code())
    }

    /// Consumes the current token if it has code `code`
    pub fn skip(&mut self, code: TokenCode) -> bool {
        self.lexer.expect(code)
    }

    /// Consumes tokens while they have one of `codes`; returns the first
    /// token that does not
    pub fn skip_all(&mut self, codes: &[TokenCode]) -> &Token {
        while self.matches(codes) && !self.at_end() {
            self.lexer.lex();
        }
        self.lexer.peek(0)
    }

    pub fn mark(&mut self) {
        self.lexer.mark();
    }

    pub fn discard_mark(&mut self) {
        self.lexer.discard_mark();
    }

    pub fn rewind_to_mark(&mut self) {
        self.lexer.rewind_to_mark();
    }

    /// Consumes a token with code `code`, recording an error when the
    /// current token is something else. The mismatching token stays put.
    pub fn expect(&mut self, code: TokenCode, context: &str) -> Option<Token> {
        if let Some(token) = self.lexer.match_code(code) {
            return Some(token);
        }
        let found = self.lexer.peek(0).clone();
        let wanted = code
            .spelling()
            .map_or_else(|| code.name().into_owned(), str::to_string);
        let message = if context.is_empty() {
            format!("Expected '{}', got '{}'", wanted, found.text)
        } else {
            format!("Expected '{}' {}, got '{}'", wanted, context, found.text)
        };
        self.add_error(&found, message);
        None
    }

    pub fn add_error(&mut self, token: &Token, message: impl Into<String>) {
        let error = SyntaxError::new(token.span.clone(), message);
        debug!(target: "lexkit::parser", error = %error, "Syntax error");
        self.errors.push(error);
    }

    /// Records a syntax error for every error-classified token in the
    /// stream and returns how many were found
    pub fn collect_lexical_errors(&mut self) -> usize {
        let found: Vec<SyntaxError> = self
            .lexer
            .tokens()
            .iter()
            .filter(|t| t.is_error())
            .map(SyntaxError::from_token)
            .collect();
        let count = found.len();
        self.errors.extend(found);
        count
    }

    pub fn errors(&self) -> &[SyntaxError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn take_errors(&mut self) -> Vec<SyntaxError> {
        std::mem::take(&mut self.errors)
    }
}
