//! Lexical analysis engine
//!
//! - `core`: cursor buffer and source positions
//! - `token`: token codes and tokens
//! - `scanner`: the `Scanner` trait and the priority-ordered registry
//! - `tokenizer`: drives scanners over a buffer, one match attempt per token
//! - `lexer`: token cursor with lookahead and backtracking
//! - `scanners`: the built-in scanners

pub mod core;
pub mod error;
#[allow(clippy::module_inception)]
pub mod lexer;
pub mod scanner;
pub mod scanners;
pub mod token;
pub mod tokenizer;

pub use self::core::{intern, Buffer, LineCursor, Location, Span, EOF_CHAR};
pub use error::{ConfigError, SyntaxError};
pub use lexer::Lexer;
pub use scanner::{CustomScanner, Scanner, ScannerId, ScannerSet, DEFAULT_PRIORITY};
pub use token::{Token, TokenCode};
pub use tokenizer::{MatchState, Tokenizer};
