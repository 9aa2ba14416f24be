//! Lexkit - composable lexical analysis
//!
//! A lexer is a set of scanners ordered by priority. Each match attempt
//! offers the input to the scanners in turn; the first one that accepts
//! produces the token, and a single-character catch-all guarantees progress.
//!
//! # Architecture
//!
//! ```text
//! lexkit-config/  - Serializable scanner and profile configuration
//! lexkit-core/    - Buffer, tokenizer, lexer, built-in scanners (no IO)
//! lexkit-cli/     - `lexkit` binary: profile file in, token listing out
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use lexkit_workspace::{build_lexer, LexerProfile, TokenCode};
//!
//! let mut lexer = build_lexer(&LexerProfile::default()).unwrap();
//! lexer.filter_codes([TokenCode::Whitespace]);
//! lexer.assign("answer 42", "quick-start");
//! assert_eq!(lexer.lex().code, TokenCode::Identifier);
//! assert_eq!(lexer.lex().to_integer().unwrap(), 42);
//! ```

pub use lexkit_config;
pub use lexkit_core;

pub use lexkit_config::{
    CommentConfig, CommentMarker, IdentifierConfig, KeywordCode, KeywordConfig, LexerProfile,
    NumberConfig, Phase, QuotedStringConfig, WhitespaceConfig,
};
pub use lexkit_core::lexer::scanners;
pub use lexkit_core::lexer::{CustomScanner, Scanner, Tokenizer, DEFAULT_PRIORITY};
pub use lexkit_core::{
    build_lexer, default_lexer, BasicParser, ConfigError, Lexer, Location, Span, SyntaxError,
    Token, TokenCode,
};
