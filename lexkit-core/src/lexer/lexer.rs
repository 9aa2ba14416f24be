//! Lexer: a token cursor over one source text
//!
//! The lexer owns the source, the scanner set and the token list. Tokens are
//! produced lazily by the first call that needs them, then served by index,
//! which makes backtracking (`mark` / `rewind_to_mark`) cheap.
//!
//! # Example
//!
//! ```rust
//! use lexkit_core::lexer::{Lexer, TokenCode};
//! use lexkit_core::lexer::scanners::{IdentifierScanner, WhitespaceScanner};
//!
//! let mut lexer = Lexer::new();
//! lexer.add_scanner(IdentifierScanner::new());
//! lexer.add_scanner(WhitespaceScanner::ignoring_all());
//! lexer.assign("hello world", "greeting");
//! assert_eq!(lexer.lex().text, "hello");
//! assert_eq!(lexer.lex().text, "world");
//! assert_eq!(lexer.current_code(), TokenCode::EndOfFile);
//! ```

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, trace};

use super::scanner::{CustomScanner, Scanner, ScannerSet};
use super::token::{Token, TokenCode};
use super::tokenizer::Tokenizer;

#[derive(Default)]
pub struct Lexer {
    source: String,
    source_name: String,
    scanners: ScannerSet,
    filter: HashSet<TokenCode>,
    tokens: Vec<Token>,
    current: usize,
    bookmarks: Vec<usize>,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lexer over `text` with no scanners yet
    pub fn with_source(text: &str, source_name: &str) -> Self {
        let mut lexer = Self::new();
        lexer.assign(text, source_name);
        lexer
    }

    /// Replaces the source text. Previously returned token indices and
    /// bookmarks become meaningless.
    pub fn assign(&mut self, text: &str, source_name: &str) {
        debug!(
            target: "lexkit::lexer",
            source = source_name,
            bytes = text.len(),
            "Assigning source"
        );
        self.source = text.to_string();
        self.source_name = source_name.to_string();
        self.invalidate();
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn add_scanner<S: Scanner + 'static>(&mut self, scanner: S) {
        self.scanners.add(Box::new(scanner));
        self.invalidate();
    }

    pub fn add_boxed_scanner(&mut self, scanner: Box<dyn Scanner>) {
        self.scanners.add(scanner);
        self.invalidate();
    }

    /// Registers a closure as a scanner
    pub fn add_custom<F>(&mut self, name: &str, priority: i32, matcher: F)
    where
        F: for<'a, 'b> FnMut(&'a mut Tokenizer<'b>) + 'static,
    {
        self.add_scanner(CustomScanner::new(name, priority, matcher));
    }

    pub fn scanners(&self) -> &ScannerSet {
        &self.scanners
    }

    /// Keeps tokens with these codes out of the token list
    pub fn filter_codes(&mut self, codes: impl IntoIterator<Item = TokenCode>) {
        self.filter.extend(codes);
        self.invalidate();
    }

    /// Drops the token list; the next access tokenizes again
    pub fn invalidate(&mut self) {
        self.tokens.clear();
        self.current = 0;
        self.bookmarks.clear();
    }

    /// Tokenizes the whole source unless already done
    pub fn tokenize(&mut self) -> &[Token] {
        if self.tokens.is_empty() {
            let mut tokenizer = Tokenizer::new(&self.source, &self.source_name);
            tokenizer.filter_codes(self.filter.iter().copied());
            tokenizer.tokenize(&mut self.scanners);
            self.tokens = tokenizer.into_tokens();
            assert!(
                self.tokens.last().map(|t| t.code) == Some(TokenCode::EndOfFile),
                "token stream of '{}' does not end with EndOfFile",
                self.source_name
            );
            debug!(
                target: "lexkit::lexer",
                source = %self.source_name,
                tokens = self.tokens.len(),
                "Tokenized source"
            );
        }
        &self.tokens
    }

    pub fn tokens(&mut self) -> &[Token] {
        self.tokenize()
    }

    /// Token `how_many` places after the current one; past the end this is
    /// the `EndOfFile` token
    pub fn peek(&mut self, how_many: usize) -> &Token {
        self.tokenize();
        let index = self
            .current
            .saturating_add(how_many)
            .min(self.tokens.len().saturating_sub(1));
        &self.tokens[index]
    }

    /// The current token
    pub fn current(&mut self) -> &Token {
        self.peek(0)
    }

    pub fn current_code(&mut self) -> TokenCode {
        self.peek(0).code
    }

    /// Returns the current token and moves past it. The cursor never moves
    /// beyond `EndOfFile`.
    pub fn lex(&mut self) -> Token {
        self.tokenize();
        let token = self.tokens[self.current].clone();
        if self.current + 1 < self.tokens.len() {
            self.current += 1;
        }
        trace!(target: "lexkit::lexer", token = %token, "Lexed");
        token
    }

    /// Consumes the current token if it has code `code`
    pub fn match_code(&mut self, code: TokenCode) -> Option<Token> {
        if self.current_code() == code {
            Some(self.lex())
        } else {
            None
        }
    }

    /// Like [`Lexer::match_code`], reporting only whether it matched
    pub fn expect(&mut self, code: TokenCode) -> bool {
        self.match_code(code).is_some()
    }

    /// Swaps the current token for `token`, returning the old one
    pub fn replace(&mut self, token: Token) -> Token {
        self.tokenize();
        std::mem::replace(&mut self.tokens[self.current], token)
    }

    /// Remembers the cursor position
    pub fn mark(&mut self) {
        self.bookmarks.push(self.current);
    }

    /// Forgets the latest bookmark
    pub fn discard_mark(&mut self) {
        self.bookmarks.pop();
    }

    /// Moves the cursor back to the latest bookmark and forgets it
    pub fn rewind_to_mark(&mut self) {
        if let Some(position) = self.bookmarks.pop() {
            trace!(target: "lexkit::lexer", from = self.current, to = position, "Rewinding");
            self.current = position;
        }
    }

    /// Moves the cursor back to the first token
    pub fn rewind(&mut self) {
        self.current = 0;
        self.bookmarks.clear();
    }

    /// Index of the current token
    pub fn position(&self) -> usize {
        self.current
    }
}

impl fmt::Debug for Lexer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lexer")
            .field("source_name", &self.source_name)
            .field("scanners", &self.scanners)
            .field("tokens", &self.tokens.len())
            .field("current", &self.current)
            .finish()
    }
}
