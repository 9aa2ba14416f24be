//! Tokenizer: drives the scanners over a buffer
//!
//! One match attempt produces at least one token:
//!
//! 1. a locked scanner, if any, runs alone and must accept;
//! 2. otherwise scanners run in registry order from the mark until one accepts;
//! 3. if none accepts, the catch-all consumes one character and classifies
//!    it with [`TokenCode::by_char`];
//! 4. once the buffer is exhausted an `EndOfFile` token is appended, once.
//!
//! The tokenizer also exposes the cursor protocol scanners build on:
//! `peek`, `push`, `push_as`, `discard`, `accept`, `chop`, and scanner
//! locking.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{debug, trace};

use super::core::{intern, Buffer, LineCursor, Span, EOF_CHAR};
use super::scanner::{ScannerId, ScannerSet};
use super::token::{Token, TokenCode};

/// Outcome of the running match attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Init,
    Success,
}

pub struct Tokenizer<'a> {
    buffer: Buffer<'a>,
    source_name: Arc<str>,
    /// Location of the buffer mark
    cursor: LineCursor,
    /// Token text once it diverges from the scanned source text
    pending: Option<String>,
    /// Token text length after each character consumed since the mark
    text_ends: Vec<usize>,
    state: MatchState,
    current: Option<ScannerId>,
    locked: Option<ScannerId>,
    filter: HashSet<TokenCode>,
    tokens: Vec<Token>,
    trail: Option<Vec<Token>>,
    eof: bool,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str, source_name: &str) -> Self {
        Self {
            buffer: Buffer::new(text),
            source_name: intern(source_name),
            cursor: LineCursor::new(),
            pending: None,
            text_ends: Vec::new(),
            state: MatchState::Init,
            current: None,
            locked: None,
            filter: HashSet::new(),
            tokens: Vec::new(),
            trail: None,
            eof: false,
        }
    }

    /// Keeps tokens with these codes out of the visible stream
    pub fn filter_codes(&mut self, codes: impl IntoIterator<Item = TokenCode>) {
        self.filter.extend(codes);
    }

    /// Records every accepted token, visible or not, in acceptance order
    pub fn record_trail(&mut self) {
        self.trail.get_or_insert_with(Vec::new);
    }

    pub fn source_name(&self) -> &Arc<str> {
        &self.source_name
    }

    /// Visible tokens accepted so far
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Every accepted token when the trail is recorded
    pub fn trail(&self) -> Option<&[Token]> {
        self.trail.as_deref()
    }

    pub fn is_finished(&self) -> bool {
        self.eof
    }

    /// Runs match attempts until `EndOfFile` has been accepted
    pub fn tokenize(&mut self, scanners: &mut ScannerSet) -> &[Token] {
        debug!(
            target: "lexkit::tokenizer",
            source = %self.source_name,
            bytes = self.buffer.len(),
            scanners = scanners.len(),
            "Tokenizing"
        );
        while !self.eof {
            let before = self.buffer.mark();
            self.match_token(scanners);
            assert!(
                self.eof || self.buffer.mark() > before,
                "tokenizer made no progress at {} in '{}'",
                self.cursor.location(),
                self.source_name
            );
        }
        debug!(
            target: "lexkit::tokenizer",
            source = %self.source_name,
            tokens = self.tokens.len(),
            "Tokenized"
        );
        &self.tokens
    }

    /// One match attempt
    pub fn match_token(&mut self, scanners: &mut ScannerSet) {
        self.state = MatchState::Init;
        if let Some(id) = self.locked {
            self.rewind();
            self.current = Some(id);
            if let Some(scanner) = scanners.get_mut(id) {
                scanner.scan(self);
            }
            assert!(
                self.state == MatchState::Success,
                "locked scanner '{}' did not accept at {}",
                scanners.name(id).unwrap_or("?"),
                self.cursor.location()
            );
        } else {
            for id in scanners.ids() {
                self.rewind();
                self.current = Some(id);
                if let Some(scanner) = scanners.get_mut(id) {
                    scanner.scan(self);
                }
                if self.state == MatchState::Success {
                    break;
                }
            }
        }
        self.current = None;

        if self.state != MatchState::Success {
            self.rewind();
            if !self.buffer.at_end() {
                let c = self.buffer.peek(0);
                self.push();
                self.accept(TokenCode::by_char(c));
            }
        }

        if self.buffer.at_end() && !self.eof {
            self.commit(TokenCode::EndOfFile, String::new(), false);
            self.eof = true;
        }
    }

    // Scanner protocol

    /// Next character, `'\0'` at the end
    pub fn peek(&self) -> char {
        self.buffer.peek(0)
    }

    /// Character `offset` places ahead, `'\0'` past the end
    pub fn peek_at(&self, offset: usize) -> char {
        self.buffer.peek(offset)
    }

    /// Adds the next character to the token
    pub fn push(&mut self) {
        if self.buffer.at_end() {
            return;
        }
        if let Some(pending) = self.pending.as_mut() {
            pending.push(self.buffer.peek(0));
        }
        self.buffer.skip(1);
        self.text_ends.push(self.current_text().len());
    }

    /// Consumes the next character but records `c` in the token text
    /// instead. `'\0'` records nothing.
    pub fn push_as(&mut self, c: char) {
        if self.buffer.at_end() {
            return;
        }
        let next = self.buffer.peek(0);
        if c == next {
            self.push();
            return;
        }
        let pending = self
            .pending
            .get_or_insert_with(|| self.buffer.scanned_text().to_string());
        if c != EOF_CHAR {
            pending.push(c);
        }
        self.buffer.skip(1);
        self.text_ends.push(self.current_text().len());
    }

    /// Consumes the next character without recording it
    pub fn discard(&mut self) {
        self.push_as(EOF_CHAR);
    }

    /// Text of the token being built
    pub fn current_text(&self) -> &str {
        match &self.pending {
            Some(pending) => pending,
            None => self.buffer.scanned_text(),
        }
    }

    /// Source text consumed since the mark, before substitutions
    pub fn scanned_text(&self) -> &'a str {
        self.buffer.scanned_text()
    }

    /// Trims `count` characters off the end of the token text
    pub fn chop(&mut self, count: usize) {
        let text = self.current_text();
        let keep = text.chars().count().saturating_sub(count);
        let chopped: String = text.chars().take(keep).collect();
        self.pending = Some(chopped);
    }

    /// Un-consumes up to `count` characters and drops whatever they
    /// recorded from the token
    pub fn partial_rewind(&mut self, count: usize) {
        self.buffer.partial_rewind(count);
        let kept = self.buffer.scanned_text().chars().count();
        self.text_ends.truncate(kept);
        if let Some(pending) = self.pending.as_mut() {
            let end = self.text_ends.last().copied().unwrap_or(0);
            pending.truncate(end.min(pending.len()));
        }
    }

    /// Drops everything scanned since the mark
    pub fn rewind(&mut self) {
        self.buffer.rewind();
        self.pending = None;
        self.text_ends.clear();
    }

    /// Emits the current token with code `code`
    pub fn accept(&mut self, code: TokenCode) {
        let text = self.take_text();
        self.commit(code, text, false);
    }

    /// Emits the current token with explicit text
    pub fn accept_with_text(&mut self, code: TokenCode, text: impl Into<String>) {
        self.commit(code, text.into(), false);
    }

    /// Consumes the current token without ever making it visible
    pub fn accept_hidden(&mut self, code: TokenCode) {
        let text = self.take_text();
        self.commit(code, text, true);
    }

    /// Gives the running scanner exclusive control of the next attempts
    pub fn lock_scanner(&mut self) {
        self.locked = self.current;
        trace!(target: "lexkit::tokenizer", scanner = ?self.locked, "Scanner locked");
    }

    pub fn unlock_scanner(&mut self) {
        if self.locked.take().is_some() {
            trace!(target: "lexkit::tokenizer", "Scanner unlocked");
        }
    }

    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }

    /// Nothing has been consumed from the input yet
    pub fn at_top(&self) -> bool {
        self.buffer.at_top()
    }

    pub fn at_end(&self) -> bool {
        self.buffer.at_end()
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn matched(&self) -> bool {
        self.state == MatchState::Success
    }

    fn take_text(&mut self) -> String {
        self.pending
            .take()
            .unwrap_or_else(|| self.buffer.scanned_text().to_string())
    }

    fn commit(&mut self, code: TokenCode, text: String, hidden: bool) {
        let start = self.cursor.location();
        self.cursor.advance_str(self.buffer.scanned_text());
        let span = Span::new(Arc::clone(&self.source_name), start, self.cursor.location());
        self.buffer.reset();
        self.pending = None;
        self.text_ends.clear();
        self.state = MatchState::Success;

        let token = Token::new(span, code, text);
        let visible =
            code == TokenCode::EndOfFile || (!hidden && !self.filter.contains(&code));
        trace!(
            target: "lexkit::tokenizer",
            code = %code,
            text = ?token.text,
            span = %token.span,
            visible,
            "Accepted token"
        );
        if let Some(trail) = self.trail.as_mut() {
            trail.push(token.clone());
        }
        if visible {
            self.tokens.push(token);
        }
    }
}
