//! Built-in scanners

pub mod comment;
pub mod identifier;
pub mod keyword;
pub mod number;
pub mod qstring;
pub mod whitespace;

pub use comment::CommentScanner;
pub use identifier::{AlphaMode, CharacterClass, IdentifierScanner};
pub use keyword::{Keyword, KeywordScanner};
pub use number::NumberScanner;
pub use qstring::QuotedStringScanner;
pub use whitespace::WhitespaceScanner;
