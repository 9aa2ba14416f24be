//! Quoted string scanner
//!
//! Outside verbatim mode the delimiters are dropped from the token text,
//! `\n`, `\r` and `\t` are decoded and any other escaped character is kept
//! as is. Verbatim mode keeps the text exactly as written. A string still
//! open at end of input becomes the quote's `Unclosed*` code.

use lexkit_config::QuotedStringConfig;
use tracing::trace;

use crate::lexer::scanner::Scanner;
use crate::lexer::token::TokenCode;
use crate::lexer::tokenizer::Tokenizer;

#[derive(Debug, Clone, Default)]
pub struct QuotedStringScanner {
    config: QuotedStringConfig,
}

impl QuotedStringScanner {
    pub fn new(config: QuotedStringConfig) -> Self {
        Self { config }
    }

    pub fn with_quotes(quotes: &str, verbatim: bool) -> Self {
        Self::new(QuotedStringConfig {
            quotes: quotes.to_string(),
            verbatim,
        })
    }

    pub fn config(&self) -> &QuotedStringConfig {
        &self.config
    }

    fn delimiter(&self, tokenizer: &mut Tokenizer<'_>) {
        if self.config.verbatim {
            tokenizer.push();
        } else {
            tokenizer.discard();
        }
    }
}

impl Scanner for QuotedStringScanner {
    fn name(&self) -> &str {
        "qstring"
    }

    fn scan(&mut self, tokenizer: &mut Tokenizer<'_>) {
        let quote = tokenizer.peek();
        if tokenizer.at_end() || !self.config.quotes.contains(quote) {
            return;
        }
        self.delimiter(tokenizer);

        let mut escaped = false;
        while !tokenizer.at_end() {
            let c = tokenizer.peek();
            if escaped {
                match c {
                    'n' => tokenizer.push_as('\n'),
                    'r' => tokenizer.push_as('\r'),
                    't' => tokenizer.push_as('\t'),
                    _ => tokenizer.push(),
                }
                escaped = false;
            } else if c == quote {
                self.delimiter(tokenizer);
                tokenizer.accept(TokenCode::by_char(quote));
                return;
            } else if c == '\\' && !self.config.verbatim {
                tokenizer.discard();
                escaped = true;
            } else {
                tokenizer.push();
            }
        }
        trace!(target: "lexkit::scanner", %quote, "Unclosed string");
        tokenizer.accept(TokenCode::unclosed_string(quote));
    }
}
