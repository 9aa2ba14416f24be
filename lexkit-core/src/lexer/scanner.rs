//! Scanner trait and the priority-ordered scanner registry
//!
//! A scanner tries to recognize one lexical unit at the tokenizer's mark.
//! It accepts by calling one of the tokenizer's `accept*` methods and
//! rejects by returning without accepting; the tokenizer then rewinds and
//! tries the next scanner.

use std::fmt;

use tracing::debug;

use super::tokenizer::Tokenizer;

/// Priority of scanners that do not ask for anything else
pub const DEFAULT_PRIORITY: i32 = 10;

/// Pluggable matching strategy
pub trait Scanner {
    /// Registry name; breaks ties between equal priorities
    fn name(&self) -> &str;

    /// Lower numbers are tried first
    fn priority(&self) -> i32 {
        DEFAULT_PRIORITY
    }

    /// Runs one match attempt from the tokenizer's mark
    fn scan(&mut self, tokenizer: &mut Tokenizer<'_>);
}

/// Index of a scanner in a [`ScannerSet`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScannerId(usize);

impl ScannerId {
    pub fn index(&self) -> usize {
        self.0
    }
}

/// Scanners sorted by `(priority, name)`
#[derive(Default)]
pub struct ScannerSet {
    scanners: Vec<Box<dyn Scanner>>,
}

impl ScannerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `scanner` after every scanner that sorts before or equal to it
    pub fn add(&mut self, scanner: Box<dyn Scanner>) {
        let key = (scanner.priority(), scanner.name().to_string());
        let at = self
            .scanners
            .partition_point(|s| (s.priority(), s.name()) <= (key.0, key.1.as_str()));
        debug!(
            target: "lexkit::scanner",
            name = %key.1,
            priority = key.0,
            slot = at,
            "Registering scanner"
        );
        self.scanners.insert(at, scanner);
    }

    pub fn len(&self) -> usize {
        self.scanners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scanners.is_empty()
    }

    /// Scanner ids in trial order
    pub fn ids(&self) -> impl Iterator<Item = ScannerId> {
        (0..self.scanners.len()).map(ScannerId)
    }

    pub fn get_mut(&mut self, id: ScannerId) -> Option<&mut (dyn Scanner + 'static)> {
        self.scanners.get_mut(id.0).map(|s| s.as_mut())
    }

    pub fn name(&self, id: ScannerId) -> Option<&str> {
        self.scanners.get(id.0).map(|s| s.name())
    }

    /// Scanner names in trial order
    pub fn names(&self) -> Vec<&str> {
        self.scanners.iter().map(|s| s.name()).collect()
    }

    pub fn clear(&mut self) {
        self.scanners.clear();
    }
}

impl fmt::Debug for ScannerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.scanners.iter().map(|s| (s.priority(), s.name())))
            .finish()
    }
}

type ScanFn = Box<dyn for<'a, 'b> FnMut(&'a mut Tokenizer<'b>)>;

/// Scanner backed by a closure, for ad hoc lexical rules
pub struct CustomScanner {
    name: String,
    priority: i32,
    matcher: ScanFn,
}

impl CustomScanner {
    pub fn new<F>(name: impl Into<String>, priority: i32, matcher: F) -> Self
    where
        F: for<'a, 'b> FnMut(&'a mut Tokenizer<'b>) + 'static,
    {
        Self {
            name: name.into(),
            priority,
            matcher: Box::new(matcher),
        }
    }
}

impl Scanner for CustomScanner {
    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn scan(&mut self, tokenizer: &mut Tokenizer<'_>) {
        (self.matcher)(tokenizer)
    }
}
