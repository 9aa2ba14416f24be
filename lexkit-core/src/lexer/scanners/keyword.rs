//! Keyword scanner
//!
//! Keywords live in a table sorted by text. Matching narrows the index
//! range `[match_min, match_max)` of keywords that start with the text read
//! so far; each step is a pair of binary searches inside the previous range.
//!
//! When the range empties right after a full match, the keyword is kept only
//! if it is an operator (its last character is not a word character) or the
//! next character cannot continue a word. This keeps `for` from matching at
//! the start of `format` while `>=` still matches in `>=x`.

use tracing::trace;

use crate::lexer::scanner::Scanner;
use crate::lexer::token::TokenCode;
use crate::lexer::tokenizer::Tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MatchState {
    Init,
    PrefixMatched,
    PrefixesMatched,
    FullMatch,
    FullMatchAndPrefixes,
    FullMatchLost,
    PrefixMatchLost,
    NoMatch,
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub code: TokenCode,
    /// Text as matched; upper case for case-insensitive tables
    pub text: String,
    pub operator: bool,
}

#[derive(Debug, Clone)]
pub struct KeywordScanner {
    keywords: Vec<Keyword>,
    case_sensitive: bool,
}

impl KeywordScanner {
    pub fn new() -> Self {
        Self {
            keywords: Vec::new(),
            case_sensitive: true,
        }
    }

    /// Empty case-insensitive table
    pub fn case_insensitive() -> Self {
        Self {
            keywords: Vec::new(),
            case_sensitive: false,
        }
    }

    /// Builds a table from `(code, text)` pairs
    pub fn with_keywords<'k>(keywords: impl IntoIterator<Item = (TokenCode, &'k str)>) -> Self {
        let mut scanner = Self::new();
        for (code, text) in keywords {
            scanner.add_keyword(code, text);
        }
        scanner
    }

    /// Adds a keyword spelled like its code, e.g. `>=` for `GreaterEqualThan`
    pub fn add_code(&mut self, code: TokenCode) {
        let text = code
            .spelling()
            .map_or_else(|| code.name().into_owned(), str::to_string);
        self.add_keyword(code, &text);
    }

    pub fn add_keyword(&mut self, code: TokenCode, text: &str) {
        let text = if self.case_sensitive {
            text.to_string()
        } else {
            text.to_ascii_uppercase()
        };
        let operator = text.chars().last().is_some_and(|c| !is_word_char(c));
        self.keywords.push(Keyword {
            code,
            text,
            operator,
        });
        self.keywords.sort_by(|a, b| a.text.cmp(&b.text));
    }

    pub fn keywords(&self) -> &[Keyword] {
        &self.keywords
    }

    pub fn is_case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Range of keywords inside `[min, max)` that start with `scanned`
    fn narrow(&self, min: usize, max: usize, scanned: &str) -> (usize, usize) {
        let lo = min + self.keywords[min..max].partition_point(|k| k.text.as_str() < scanned);
        let hi = lo + self.keywords[lo..max].partition_point(|k| k.text.starts_with(scanned));
        (lo, hi)
    }
}

impl Default for KeywordScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for KeywordScanner {
    fn name(&self) -> &str {
        "keyword"
    }

    fn scan(&mut self, tokenizer: &mut Tokenizer<'_>) {
        let mut match_min = 0;
        let mut match_max = self.keywords.len();
        let mut full_match: Option<usize> = None;
        let mut state = MatchState::Init;
        let mut scanned = String::new();

        while !tokenizer.at_end() {
            let c = tokenizer.peek();
            scanned.push(if self.case_sensitive {
                c
            } else {
                c.to_ascii_uppercase()
            });
            let (lo, hi) = self.narrow(match_min, match_max, &scanned);
            let exact = (hi > lo && self.keywords[lo].text == scanned).then_some(lo);

            state = match (hi - lo, exact) {
                (0, _) => match state {
                    MatchState::FullMatch | MatchState::FullMatchAndPrefixes => {
                        MatchState::FullMatchLost
                    }
                    _ => MatchState::PrefixMatchLost,
                },
                (1, Some(_)) => MatchState::FullMatch,
                (1, None) => MatchState::PrefixMatched,
                (_, Some(_)) => MatchState::FullMatchAndPrefixes,
                (_, None) => MatchState::PrefixesMatched,
            };

            match state {
                MatchState::FullMatchLost => {
                    let operator = full_match.is_some_and(|i| self.keywords[i].operator);
                    if !operator && is_word_char(c) {
                        state = MatchState::NoMatch;
                    }
                    break;
                }
                MatchState::PrefixMatchLost => {
                    state = MatchState::NoMatch;
                    break;
                }
                _ => {
                    match_min = lo;
                    match_max = hi;
                    full_match = exact;
                    tokenizer.push();
                }
            }
        }

        let accepted = match state {
            MatchState::FullMatch | MatchState::FullMatchLost => full_match,
            // the input ended on a keyword that is also a prefix of others
            MatchState::FullMatchAndPrefixes if tokenizer.at_end() => full_match,
            _ => None,
        };
        if let Some(index) = accepted {
            let keyword = &self.keywords[index];
            trace!(target: "lexkit::scanner", keyword = %keyword.text, "Matched keyword");
            tokenizer.accept(keyword.code);
        }
    }
}
