//! Integration tests - profile driven lexing end to end

mod common;
use common::{codes, parser, tokenize};

use lexkit_workspace::{BasicParser, Location, TokenCode};

const SCRIPT_PROFILE: &str = r##"{
    "whitespace": { "ignore_spaces": true, "ignore_newlines": true },
    "comments": { "markers": [ { "start": "#" } ] },
    "keywords": [
        { "code": 0, "text": "let" },
        { "code": "EqualsTo" },
        { "code": "GreaterEqualThan" }
    ]
}"##;

const LET: TokenCode = TokenCode::Keyword(0);

/// Parses `let <name> = <integer>;` statements into pairs
fn parse_lets(p: &mut BasicParser) -> Vec<(String, i64)> {
    let mut bindings = Vec::new();
    while !p.at_end() {
        if p.skip(TokenCode::Comment) {
            continue;
        }
        if p.expect(LET, "at statement start").is_none() {
            p.lex();
            continue;
        }
        let Some(name) = p.expect(TokenCode::Identifier, "after 'let'") else {
            continue;
        };
        if p.expect(TokenCode::Equals, "after variable name").is_none() {
            continue;
        }
        let value = p.lex();
        match value.to_integer() {
            Ok(n) => bindings.push((name.text, n)),
            Err(e) => {
                let message = e.message.clone();
                p.add_error(&value, message);
            }
        }
        p.expect(TokenCode::SemiColon, "after value");
    }
    bindings
}

#[test]
fn test_script_profile_tokens() {
    let tokens = tokenize(SCRIPT_PROFILE, "let a == b # compare\nlet c >= 0x10");
    let comments: Vec<_> = tokens
        .iter()
        .filter(|t| t.code == TokenCode::Comment)
        .collect();
    assert_eq!(comments.len(), 1);
    assert_eq!(comments[0].text, "# compare");
    assert_eq!(
        codes(&tokens),
        vec![
            LET,
            TokenCode::Identifier,
            TokenCode::EqualsTo,
            TokenCode::Identifier,
            TokenCode::Comment,
            LET,
            TokenCode::Identifier,
            TokenCode::GreaterEqualThan,
            TokenCode::HexNumber,
            TokenCode::EndOfFile,
        ]
    );
    assert_eq!(tokens[8].to_integer().unwrap(), 16);
}

#[test]
fn test_parse_let_statements() {
    let mut p = parser(SCRIPT_PROFILE, "let x = 1;\nlet y = -20; # done\n");
    let bindings = parse_lets(&mut p);
    assert_eq!(
        bindings,
        vec![("x".to_string(), 1), ("y".to_string(), -20)]
    );
    assert!(!p.has_errors(), "{:?}", p.errors());
}

#[test]
fn test_parse_errors_are_collected() {
    let mut p = parser(SCRIPT_PROFILE, "let x 1;\nlet = 2;");
    parse_lets(&mut p);
    let errors = p.take_errors();
    assert!(errors.len() >= 2);
    assert_eq!(errors[0].message, "Expected '=' after variable name, got '1'");
    assert_eq!(errors[0].span.start, Location::new(1, 7));
    assert!(errors
        .iter()
        .any(|e| e.message == "Expected 'Identifier' after 'let', got '='"));
}

#[test]
fn test_lexical_errors_surface_through_parser() {
    let mut p = parser(r#"{ "filter": ["Whitespace"] }"#, "ok 'unterminated");
    assert_eq!(p.collect_lexical_errors(), 1);
    let error = &p.errors()[0];
    assert_eq!(error.message, "Unclosed single-quoted string");
    assert_eq!(error.to_string(), "e2e:1:4-1:17: Unclosed single-quoted string");
}

#[test]
fn test_case_insensitive_keyword_profile() {
    let profile = r#"{
        "whitespace": {},
        "case_sensitive_keywords": false,
        "keywords": [ { "code": 7, "text": "select" } ]
    }"#;
    let tokens = tokenize(profile, "SELECT name");
    assert_eq!(tokens[0].code, TokenCode::Keyword(7));
    assert_eq!(tokens[1].text, "name");
}

#[test]
fn test_identifier_picture_profile() {
    let profile = r#"{
        "whitespace": {},
        "identifier": { "starts_with": "l", "filter": "l9-", "code": "Text" }
    }"#;
    let tokens = tokenize(profile, "Kebab-Case-1 x");
    assert_eq!(tokens[0].code, TokenCode::Text);
    assert_eq!(tokens[0].text, "kebab-case-1");
    assert_eq!(tokens[1].text, "x");
}
