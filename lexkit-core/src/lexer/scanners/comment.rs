//! Comment scanner
//!
//! Start markers are matched one character at a time against the set of
//! markers still compatible with the text read so far. A marker without an
//! end delimiter runs to the end of the line (the line break is left for the
//! next token). A marker with an end delimiter runs until the delimiter.
//!
//! With `split_by_lines`, a block comment is emitted as one `Comment` token
//! per physical line, each followed by a `NewLine` token. Between lines the
//! scanner locks itself so the next match attempt resumes inside the
//! comment instead of looking for a start marker.

use lexkit_config::{CommentConfig, CommentMarker};
use tracing::{debug, trace};

use crate::lexer::scanner::Scanner;
use crate::lexer::token::TokenCode;
use crate::lexer::tokenizer::Tokenizer;

#[derive(Debug, Clone, Default)]
pub struct CommentScanner {
    markers: Vec<CommentMarker>,
    split_by_lines: bool,
    /// Marker of a split comment continued on the next line
    continuing: Option<usize>,
}

impl CommentScanner {
    /// An empty end delimiter is treated as none
    pub fn new(mut markers: Vec<CommentMarker>) -> Self {
        for marker in &mut markers {
            if marker.end.as_deref() == Some("") {
                marker.end = None;
            }
        }
        Self {
            markers,
            split_by_lines: false,
            continuing: None,
        }
    }

    pub fn with_config(config: &CommentConfig) -> Self {
        Self::new(config.markers.clone()).split_by_lines(config.split_by_lines)
    }

    pub fn split_by_lines(mut self, split: bool) -> Self {
        self.split_by_lines = split;
        self
    }

    pub fn markers(&self) -> &[CommentMarker] {
        &self.markers
    }

    /// Reads the start marker; `None` when no marker matches
    fn match_start(&self, tokenizer: &mut Tokenizer<'_>) -> Option<usize> {
        let top = tokenizer.at_top();
        let mut candidates: Vec<usize> = self
            .markers
            .iter()
            .enumerate()
            .filter(|(_, m)| !m.start.is_empty() && (!m.hashpling || top))
            .map(|(i, _)| i)
            .collect();

        while !tokenizer.at_end() && !candidates.is_empty() {
            tokenizer.push();
            let prefix = tokenizer.current_text();
            candidates.retain(|&i| self.markers[i].start.starts_with(prefix));

            let exact = candidates
                .iter()
                .copied()
                .find(|&i| self.markers[i].start == prefix);
            if let Some(found) = exact {
                let next = tokenizer.peek();
                let longer = candidates.iter().any(|&i| {
                    i != found && self.markers[i].start[prefix.len()..].starts_with(next)
                });
                if !longer {
                    return Some(found);
                }
            }
        }
        None
    }

    fn find_eol(&self, tokenizer: &mut Tokenizer<'_>) {
        while !tokenizer.at_end() && !matches!(tokenizer.peek(), '\r' | '\n') {
            tokenizer.push();
        }
        tokenizer.accept(TokenCode::Comment);
    }

    fn end_ahead(tokenizer: &Tokenizer<'_>, end: &str) -> bool {
        end.chars()
            .enumerate()
            .all(|(offset, c)| tokenizer.peek_at(offset) == c)
    }

    fn finish(&mut self, tokenizer: &mut Tokenizer<'_>, code: TokenCode) {
        tokenizer.accept(code);
        self.continuing = None;
        tokenizer.unlock_scanner();
    }

    fn find_end_marker(&mut self, tokenizer: &mut Tokenizer<'_>, marker: usize) {
        let end = match self.markers.get(marker).and_then(|m| m.end.clone()) {
            Some(end) => end,
            None => return self.find_eol(tokenizer),
        };
        loop {
            if tokenizer.at_end() {
                debug!(target: "lexkit::scanner", "Unterminated comment");
                return self.finish(tokenizer, TokenCode::UnterminatedComment);
            }
            if Self::end_ahead(tokenizer, &end) {
                for _ in end.chars() {
                    tokenizer.push();
                }
                return self.finish(tokenizer, TokenCode::Comment);
            }
            let c = tokenizer.peek();
            if self.split_by_lines && (c == '\r' || c == '\n') {
                tokenizer.accept(TokenCode::Comment);
                if c == '\r' && tokenizer.peek_at(1) == '\n' {
                    tokenizer.discard();
                    tokenizer.push();
                } else {
                    tokenizer.push_as('\n');
                }
                tokenizer.accept(TokenCode::NewLine);
                if tokenizer.at_end() {
                    debug!(target: "lexkit::scanner", "Unterminated comment");
                    return self.finish(tokenizer, TokenCode::UnterminatedComment);
                }
                self.continuing = Some(marker);
                tokenizer.lock_scanner();
                return;
            }
            tokenizer.push();
        }
    }
}

impl Scanner for CommentScanner {
    fn name(&self) -> &str {
        "comment"
    }

    fn scan(&mut self, tokenizer: &mut Tokenizer<'_>) {
        if let Some(marker) = self.continuing {
            return self.find_end_marker(tokenizer, marker);
        }
        let Some(marker) = self.match_start(tokenizer) else {
            return;
        };
        trace!(
            target: "lexkit::scanner",
            start = %self.markers[marker].start,
            "Comment start"
        );
        self.find_end_marker(tokenizer, marker);
    }
}
