//! Lexkit Core - composable lexical analysis (pure logic, no IO)
//!
//! A [`Lexer`] owns a source text and a set of scanners ordered by
//! priority. Tokenizing runs one match attempt per token: the first scanner
//! that accepts wins, and a single-character catch-all guarantees progress.
//!
//! Configuration is passed explicitly through [`lexkit_config`] types.

pub mod builder;
pub mod lexer;
pub mod parser;

pub use builder::{build_lexer, default_lexer};
pub use lexer::{ConfigError, Lexer, Location, Scanner, Span, SyntaxError, Token, TokenCode};
pub use parser::BasicParser;

// Re-export config types from lexkit-config
pub use lexkit_config::{LexerProfile, Phase};
