//! Source location tracking
//!
//! Locations are 1-based line/column pairs counted in characters. Spans
//! carry an interned source name so that every token of a file shares one
//! allocation for it.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex};

/// A point in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    /// Line number, 1-based
    pub line: usize,
    /// Column number, 1-based, counted in characters
    pub column: usize,
}

impl Location {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// First character of a file
    pub fn start() -> Self {
        Self { line: 1, column: 1 }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::start()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Advances a [`Location`] one consumed character at a time.
///
/// `\r\n` is a single line break even when the two characters are consumed
/// by different calls, so the cursor remembers whether the last character
/// was a carriage return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineCursor {
    location: Location,
    after_cr: bool,
}

impl LineCursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn location(&self) -> Location {
        self.location
    }

    pub fn advance(&mut self, c: char) {
        match c {
            '\n' if self.after_cr => {}
            '\n' | '\r' => {
                self.location.line += 1;
                self.location.column = 1;
            }
            _ => self.location.column += 1,
        }
        self.after_cr = c == '\r';
    }

    pub fn advance_str(&mut self, text: &str) {
        for c in text.chars() {
            self.advance(c);
        }
    }
}

/// Process wide table of source names
static SOURCE_NAMES: Lazy<Mutex<HashSet<Arc<str>>>> = Lazy::new(|| Mutex::new(HashSet::new()));

/// Returns the shared copy of `name`, creating it on first use
pub fn intern(name: &str) -> Arc<str> {
    let mut names = match SOURCE_NAMES.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    };
    if let Some(existing) = names.get(name) {
        return Arc::clone(existing);
    }
    let shared: Arc<str> = Arc::from(name);
    names.insert(Arc::clone(&shared));
    shared
}

/// A half-open range of source text: `end` points just past the last
/// character.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Span {
    pub source_name: Arc<str>,
    pub start: Location,
    pub end: Location,
}

impl Span {
    pub fn new(source_name: Arc<str>, start: Location, end: Location) -> Self {
        Self {
            source_name,
            start,
            end,
        }
    }

    /// Zero-width span at `location`
    pub fn at(source_name: Arc<str>, location: Location) -> Self {
        Self::new(source_name, location, location)
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Smallest span covering both `self` and `other`
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            source_name: Arc::clone(&self.source_name),
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::at(intern(""), Location::start())
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.source_name.is_empty() {
            write!(f, "{}-{}", self.start, self.end)
        } else {
            write!(f, "{}:{}-{}", self.source_name, self.start, self.end)
        }
    }
}
