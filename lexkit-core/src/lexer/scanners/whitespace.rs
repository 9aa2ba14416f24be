//! Whitespace scanner
//!
//! A run of spaces becomes one `Whitespace` token. Unless newlines count as
//! spaces, each line break is a separate `NewLine` token whose text is
//! always `"\n"`: `\r\n` and a lone `\r` are normalized. The ignore flags
//! hide tokens instead of leaving the characters unmatched, so the spans of
//! the surrounding tokens stay contiguous.

use lexkit_config::WhitespaceConfig;

use crate::lexer::core::EOF_CHAR;
use crate::lexer::scanner::Scanner;
use crate::lexer::token::TokenCode;
use crate::lexer::tokenizer::Tokenizer;

pub const WHITESPACE_PRIORITY: i32 = 20;

/// ASCII space characters, vertical tab and form feed included
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C')
}

#[derive(Debug, Clone, Default)]
pub struct WhitespaceScanner {
    config: WhitespaceConfig,
}

impl WhitespaceScanner {
    pub fn new(config: WhitespaceConfig) -> Self {
        Self { config }
    }

    /// Scanner that hides all whitespace, newlines included
    pub fn ignoring_all() -> Self {
        Self::new(WhitespaceConfig::default())
    }

    pub fn config(&self) -> &WhitespaceConfig {
        &self.config
    }

    fn emit_spaces(&self, tokenizer: &mut Tokenizer<'_>) {
        if self.config.ignore_spaces {
            tokenizer.accept_hidden(TokenCode::Whitespace);
        } else {
            tokenizer.accept(TokenCode::Whitespace);
        }
    }

    fn emit_newline(&self, tokenizer: &mut Tokenizer<'_>) {
        if tokenizer.peek() == '\r' {
            if tokenizer.peek_at(1) == '\n' {
                tokenizer.discard();
                tokenizer.push();
            } else {
                tokenizer.push_as('\n');
            }
        } else {
            tokenizer.push();
        }
        if self.config.ignore_newlines {
            tokenizer.accept_hidden(TokenCode::NewLine);
        } else {
            tokenizer.accept(TokenCode::NewLine);
        }
    }
}

impl Scanner for WhitespaceScanner {
    fn name(&self) -> &str {
        "whitespace"
    }

    fn priority(&self) -> i32 {
        WHITESPACE_PRIORITY
    }

    fn scan(&mut self, tokenizer: &mut Tokenizer<'_>) {
        let mut in_run = false;
        loop {
            let c = tokenizer.peek();
            if c == EOF_CHAR || !is_space(c) {
                break;
            }
            if !self.config.newlines_are_spaces && (c == '\n' || c == '\r') {
                if in_run {
                    self.emit_spaces(tokenizer);
                }
                self.emit_newline(tokenizer);
                return;
            }
            tokenizer.push();
            in_run = true;
        }
        if in_run {
            self.emit_spaces(tokenizer);
        }
    }
}
