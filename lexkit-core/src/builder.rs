//! Lexer construction from a [`LexerProfile`]

use lexkit_config::{KeywordCode, KeywordConfig, LexerProfile, WhitespaceConfig};
use tracing::debug;

use crate::lexer::scanners::{
    CommentScanner, IdentifierScanner, KeywordScanner, NumberScanner, QuotedStringScanner,
    WhitespaceScanner,
};
use crate::lexer::{ConfigError, Lexer, TokenCode};

/// Builds a lexer with the scanners and filter described by `profile`
pub fn build_lexer(profile: &LexerProfile) -> Result<Lexer, ConfigError> {
    let mut lexer = Lexer::new();

    if let Some(strings) = &profile.strings {
        if strings.quotes.is_empty() {
            return Err(ConfigError::NoQuotes);
        }
        lexer.add_scanner(QuotedStringScanner::new(strings.clone()));
    }
    if let Some(number) = profile.number {
        lexer.add_scanner(NumberScanner::new(number));
    }
    if let Some(identifier) = &profile.identifier {
        lexer.add_scanner(IdentifierScanner::with_config(identifier)?);
    }
    if let Some(whitespace) = profile.whitespace {
        lexer.add_scanner(WhitespaceScanner::new(whitespace));
    }
    if let Some(comments) = &profile.comments {
        let mut config = comments.clone();
        for (index, marker) in config.markers.iter_mut().enumerate() {
            if marker.start.is_empty() {
                return Err(ConfigError::EmptyCommentMarker(index));
            }
            if marker.end.as_deref() == Some("") {
                marker.end = None;
            }
        }
        lexer.add_scanner(CommentScanner::with_config(&config));
    }
    if !profile.keywords.is_empty() {
        let mut scanner = if profile.case_sensitive_keywords {
            KeywordScanner::new()
        } else {
            KeywordScanner::case_insensitive()
        };
        for keyword in &profile.keywords {
            let (code, text) = resolve_keyword(keyword)?;
            scanner.add_keyword(code, &text);
        }
        lexer.add_scanner(scanner);
    }

    let filter = profile
        .filter
        .iter()
        .map(|name| {
            TokenCode::from_name(name).ok_or_else(|| ConfigError::UnknownTokenCode(name.clone()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    lexer.filter_codes(filter);

    debug!(
        target: "lexkit::lexer",
        scanners = ?lexer.scanners(),
        "Built lexer from profile"
    );
    Ok(lexer)
}

fn resolve_keyword(keyword: &KeywordConfig) -> Result<(TokenCode, String), ConfigError> {
    let code = match &keyword.code {
        KeywordCode::Slot(n) => TokenCode::Keyword(*n),
        KeywordCode::Named(name) => {
            TokenCode::from_name(name).ok_or_else(|| ConfigError::UnknownTokenCode(name.clone()))?
        }
    };
    let text = match (&keyword.text, &keyword.code) {
        (Some(text), _) => text.clone(),
        (None, KeywordCode::Named(_)) => code
            .spelling()
            .map_or_else(|| code.name().into_owned(), str::to_string),
        (None, KeywordCode::Slot(_)) => String::new(),
    };
    if text.is_empty() {
        return Err(ConfigError::EmptyKeyword(code.name().into_owned()));
    }
    Ok((code, text))
}

/// Quoted strings, numbers, identifiers, and whitespace kept visible
pub fn default_lexer() -> Lexer {
    let mut lexer = Lexer::new();
    lexer.add_scanner(QuotedStringScanner::default());
    lexer.add_scanner(NumberScanner::default());
    lexer.add_scanner(IdentifierScanner::new());
    lexer.add_scanner(WhitespaceScanner::new(WhitespaceConfig::keep_all()));
    lexer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::Token;
    use lexkit_config::{CommentConfig, CommentMarker, QuotedStringConfig};

    fn lex_all(lexer: &mut Lexer, input: &str) -> Vec<Token> {
        lexer.assign(input, "builder");
        lexer.tokens().to_vec()
    }

    #[test]
    fn test_default_lexer_matches_default_profile() {
        let mut built = build_lexer(&LexerProfile::default()).unwrap();
        let mut fixed = default_lexer();
        assert_eq!(built.scanners().names(), fixed.scanners().names());
        let input = "x = \"s\" + 1.5";
        assert_eq!(lex_all(&mut built, input), lex_all(&mut fixed, input));
    }

    #[test]
    fn test_keywords_and_filter() {
        let profile = LexerProfile {
            keywords: vec![
                KeywordConfig {
                    code: KeywordCode::Slot(1),
                    text: Some("let".to_string()),
                },
                KeywordConfig {
                    code: KeywordCode::Named("EqualsTo".to_string()),
                    text: None,
                },
            ],
            filter: vec!["Whitespace".to_string()],
            ..LexerProfile::default()
        };
        let mut lexer = build_lexer(&profile).unwrap();
        let codes: Vec<_> = lex_all(&mut lexer, "let a == b")
            .iter()
            .map(|t| t.code)
            .collect();
        assert_eq!(
            codes,
            vec![
                TokenCode::Keyword(1),
                TokenCode::Identifier,
                TokenCode::EqualsTo,
                TokenCode::Identifier,
                TokenCode::EndOfFile
            ]
        );
    }

    #[test]
    fn test_comments_installed() {
        let profile = LexerProfile {
            comments: Some(CommentConfig::default()),
            ..LexerProfile::default()
        };
        let mut lexer = build_lexer(&profile).unwrap();
        let tokens = lex_all(&mut lexer, "// hi");
        assert_eq!(tokens[0].code, TokenCode::Comment);
    }

    #[test]
    fn test_rejects_bad_profiles() {
        let profile = LexerProfile {
            filter: vec!["Nonsense".to_string()],
            ..LexerProfile::default()
        };
        assert_eq!(
            build_lexer(&profile).unwrap_err(),
            ConfigError::UnknownTokenCode("Nonsense".to_string())
        );

        let profile = LexerProfile {
            keywords: vec![KeywordConfig {
                code: KeywordCode::Slot(2),
                text: None,
            }],
            ..LexerProfile::default()
        };
        assert!(matches!(
            build_lexer(&profile),
            Err(ConfigError::EmptyKeyword(_))
        ));

        let profile = LexerProfile {
            comments: Some(CommentConfig {
                markers: vec![CommentMarker::line("")],
                split_by_lines: false,
            }),
            ..LexerProfile::default()
        };
        assert_eq!(
            build_lexer(&profile).unwrap_err(),
            ConfigError::EmptyCommentMarker(0)
        );

        let profile = LexerProfile {
            strings: Some(QuotedStringConfig {
                quotes: String::new(),
                verbatim: false,
            }),
            ..LexerProfile::default()
        };
        assert_eq!(build_lexer(&profile).unwrap_err(), ConfigError::NoQuotes);
    }

    #[test]
    fn test_profile_from_json() {
        let json = r#"{
            "whitespace": { "ignore_spaces": true, "ignore_newlines": true },
            "keywords": [ { "code": 0, "text": "fn" } ]
        }"#;
        let profile: LexerProfile = serde_json::from_str(json).unwrap();
        let mut lexer = build_lexer(&profile).unwrap();
        let tokens = lex_all(&mut lexer, "fn main");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].code, TokenCode::Keyword(0));
    }
}
