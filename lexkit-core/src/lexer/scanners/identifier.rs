//! Identifier scanner
//!
//! Two character pictures decide what may start an identifier and what may
//! follow. Picture letters:
//!
//! | char | meaning                              |
//! |------|--------------------------------------|
//! | `X`  | letters, case preserved              |
//! | `l`  | letters, folded to lower case        |
//! | `a`  | lower case letters only              |
//! | `U`  | letters, folded to upper case        |
//! | `A`  | upper case letters only              |
//! | `9`  | digits                               |
//!
//! Any other picture character stands for itself.

use lexkit_config::IdentifierConfig;
use tracing::trace;

use crate::lexer::core::EOF_CHAR;
use crate::lexer::error::ConfigError;
use crate::lexer::scanner::Scanner;
use crate::lexer::token::TokenCode;
use crate::lexer::tokenizer::Tokenizer;

pub const IDENTIFIER_PRIORITY: i32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaMode {
    CaseSensitive,
    FoldToLower,
    OnlyLower,
    FoldToUpper,
    OnlyUpper,
}

/// Parsed character picture
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClass {
    alpha: Option<AlphaMode>,
    digits: bool,
    literals: String,
}

impl CharacterClass {
    pub fn parse(picture: &str) -> Result<Self, ConfigError> {
        let mut class = CharacterClass {
            alpha: None,
            digits: false,
            literals: String::new(),
        };
        for c in picture.chars() {
            let mode = match c {
                'X' => AlphaMode::CaseSensitive,
                'l' => AlphaMode::FoldToLower,
                'a' => AlphaMode::OnlyLower,
                'U' => AlphaMode::FoldToUpper,
                'A' => AlphaMode::OnlyUpper,
                '9' => {
                    class.digits = true;
                    continue;
                }
                other => {
                    class.literals.push(other);
                    continue;
                }
            };
            if class.alpha.is_some_and(|existing| existing != mode) {
                return Err(ConfigError::InvalidPicture {
                    picture: picture.to_string(),
                    reason: "more than one letter mode".to_string(),
                });
            }
            class.alpha = Some(mode);
        }
        if class.alpha.is_none() && !class.digits && class.literals.is_empty() {
            return Err(ConfigError::InvalidPicture {
                picture: picture.to_string(),
                reason: "matches nothing".to_string(),
            });
        }
        Ok(class)
    }

    pub fn alpha(&self) -> Option<AlphaMode> {
        self.alpha
    }

    pub fn digits(&self) -> bool {
        self.digits
    }

    /// The character to record for `c`, or `None` if `c` is not in the class
    pub fn admit(&self, c: char) -> Option<char> {
        if c == EOF_CHAR {
            return None;
        }
        if self.literals.contains(c) {
            return Some(c);
        }
        if c.is_ascii_digit() {
            return self.digits.then_some(c);
        }
        if !c.is_ascii_alphabetic() {
            return None;
        }
        match self.alpha? {
            AlphaMode::CaseSensitive => Some(c),
            AlphaMode::FoldToLower => Some(c.to_ascii_lowercase()),
            AlphaMode::FoldToUpper => Some(c.to_ascii_uppercase()),
            AlphaMode::OnlyLower => c.is_ascii_lowercase().then_some(c),
            AlphaMode::OnlyUpper => c.is_ascii_uppercase().then_some(c),
        }
    }
}

#[derive(Debug, Clone)]
pub struct IdentifierScanner {
    code: TokenCode,
    starts_with: CharacterClass,
    filter: CharacterClass,
}

impl IdentifierScanner {
    /// Letters, digits and underscores, not starting with a digit
    pub fn new() -> Self {
        Self {
            code: TokenCode::Identifier,
            starts_with: CharacterClass {
                alpha: Some(AlphaMode::CaseSensitive),
                digits: false,
                literals: "_".to_string(),
            },
            filter: CharacterClass {
                alpha: Some(AlphaMode::CaseSensitive),
                digits: true,
                literals: "_".to_string(),
            },
        }
    }

    pub fn with_config(config: &IdentifierConfig) -> Result<Self, ConfigError> {
        let code = match &config.code {
            Some(name) => TokenCode::from_name(name)
                .ok_or_else(|| ConfigError::UnknownTokenCode(name.clone()))?,
            None => TokenCode::Identifier,
        };
        Ok(Self {
            code,
            starts_with: CharacterClass::parse(&config.starts_with)?,
            filter: CharacterClass::parse(&config.filter)?,
        })
    }

    pub fn with_code(mut self, code: TokenCode) -> Self {
        self.code = code;
        self
    }

    pub fn code(&self) -> TokenCode {
        self.code
    }
}

impl Default for IdentifierScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Scanner for IdentifierScanner {
    fn name(&self) -> &str {
        "identifier"
    }

    fn priority(&self) -> i32 {
        IDENTIFIER_PRIORITY
    }

    fn scan(&mut self, tokenizer: &mut Tokenizer<'_>) {
        let Some(first) = self.starts_with.admit(tokenizer.peek()) else {
            return;
        };
        tokenizer.push_as(first);
        while let Some(c) = self.filter.admit(tokenizer.peek()) {
            tokenizer.push_as(c);
        }
        trace!(target: "lexkit::scanner", text = tokenizer.current_text(), "Identifier");
        tokenizer.accept(self.code);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::scanner::ScannerSet;
    use crate::lexer::token::Token;

    fn run(scanner: IdentifierScanner, text: &str) -> Vec<Token> {
        let mut scanners = ScannerSet::new();
        scanners.add(Box::new(scanner));
        let mut tokenizer = Tokenizer::new(text, "");
        tokenizer.tokenize(&mut scanners);
        tokenizer.into_tokens()
    }

    #[test]
    fn test_default_identifier() {
        let tokens = run(IdentifierScanner::new(), "_foo42 9x");
        assert_eq!(tokens[0].code, TokenCode::Identifier);
        assert_eq!(tokens[0].text, "_foo42");
        // digits cannot start an identifier
        assert_eq!(tokens[2].code, TokenCode::Unknown);
        assert_eq!(tokens[3].text, "x");
    }

    #[test]
    fn test_fold_to_lower() {
        let config = IdentifierConfig {
            code: Some("Text".to_string()),
            filter: "l9".to_string(),
            starts_with: "l".to_string(),
        };
        let tokens = run(IdentifierScanner::with_config(&config).unwrap(), "HeLLo1");
        assert_eq!(tokens[0].code, TokenCode::Text);
        assert_eq!(tokens[0].text, "hello1");
    }

    #[test]
    fn test_only_upper() {
        let config = IdentifierConfig {
            code: None,
            filter: "A_".to_string(),
            starts_with: "A".to_string(),
        };
        let tokens = run(IdentifierScanner::with_config(&config).unwrap(), "AB_c");
        assert_eq!(tokens[0].text, "AB_");
        assert_eq!(tokens[1].text, "c");
    }

    #[test]
    fn test_literal_characters() {
        let config = IdentifierConfig {
            code: None,
            filter: "X9-".to_string(),
            starts_with: "X".to_string(),
        };
        let tokens = run(IdentifierScanner::with_config(&config).unwrap(), "kebab-case-1");
        assert_eq!(tokens[0].text, "kebab-case-1");
    }

    #[test]
    fn test_invalid_pictures() {
        assert!(CharacterClass::parse("Xl").is_err());
        assert!(CharacterClass::parse("").is_err());
        let config = IdentifierConfig {
            code: Some("Bogus".to_string()),
            ..IdentifierConfig::default()
        };
        assert_eq!(
            IdentifierScanner::with_config(&config).unwrap_err(),
            ConfigError::UnknownTokenCode("Bogus".to_string())
        );
    }
}
