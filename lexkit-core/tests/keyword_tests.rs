//! Keyword matching alongside identifiers and whitespace

mod common;
use common::{count, lex_all, standard_lexer};

use lexkit_core::lexer::scanners::KeywordScanner;
use lexkit_core::lexer::{Lexer, TokenCode};

const BIG: TokenCode = TokenCode::Keyword(0);
const BAD: TokenCode = TokenCode::Keyword(1);

fn with_keywords(keywords: KeywordScanner) -> Lexer {
    let mut lexer = standard_lexer();
    lexer.add_scanner(keywords);
    lexer
}

fn big() -> Lexer {
    with_keywords(KeywordScanner::with_keywords([(BIG, "Big")]))
}

fn big_bad() -> Lexer {
    with_keywords(KeywordScanner::with_keywords([(BIG, "Big"), (BAD, "Bad")]))
}

#[test]
fn test_keyword_alone() {
    let tokens = lex_all(&mut big(), "Big");
    assert_eq!(tokens.len(), 2);
    assert_eq!(count(&tokens, BIG), 1);
    assert_eq!(tokens[0].code.ordinal(), 200);
}

#[test]
fn test_keyword_then_space() {
    let tokens = lex_all(&mut big(), "Big ");
    assert_eq!(tokens.len(), 3);
    assert_eq!(count(&tokens, BIG), 1);
    assert_eq!(count(&tokens, TokenCode::Whitespace), 1);
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = lex_all(&mut big(), "Bigger");
    assert_eq!(tokens.len(), 2);
    assert_eq!(count(&tokens, BIG), 0);
    assert_eq!(count(&tokens, TokenCode::Identifier), 1);
    assert_eq!(tokens[0].text, "Bigger");
}

#[test]
fn test_keyword_between_identifiers() {
    let tokens = lex_all(&mut big(), "Hello Big World");
    assert_eq!(tokens.len(), 6);
    assert_eq!(count(&tokens, BIG), 1);
    assert_eq!(count(&tokens, TokenCode::Identifier), 2);
    assert_eq!(count(&tokens, TokenCode::Whitespace), 2);
}

#[test]
fn test_repeated_keywords() {
    for input in ["Hello Big Big Beautiful World", "Hello Big Beautiful Big World"] {
        let tokens = lex_all(&mut big(), input);
        assert_eq!(tokens.len(), 10, "{input}");
        assert_eq!(count(&tokens, BIG), 2);
        assert_eq!(count(&tokens, TokenCode::Identifier), 3);
        assert_eq!(count(&tokens, TokenCode::Whitespace), 4);
    }
}

#[test]
fn test_two_keyword_table() {
    let cases = [
        ("Hello Big World", 6, 1, 0),
        ("Hello Bad World", 6, 0, 1),
        ("Hello Big Bad World", 8, 1, 1),
        ("Hello Bad Big World", 8, 1, 1),
    ];
    for (input, total, bigs, bads) in cases {
        let tokens = lex_all(&mut big_bad(), input);
        assert_eq!(tokens.len(), total, "{input}");
        assert_eq!(count(&tokens, BIG), bigs, "{input}");
        assert_eq!(count(&tokens, BAD), bads, "{input}");
        assert_eq!(count(&tokens, TokenCode::Identifier), 2, "{input}");
    }
}

#[test]
fn test_shared_prefixes() {
    let table = [
        (TokenCode::Keyword(0), "abb"),
        (TokenCode::Keyword(1), "aca"),
        (TokenCode::Keyword(2), "aba"),
        (TokenCode::Keyword(3), "aaa"),
        (TokenCode::Keyword(4), "aab"),
        (TokenCode::Keyword(5), "abc"),
        (TokenCode::Keyword(6), "aac"),
        (TokenCode::Keyword(7), "acc"),
        (TokenCode::Keyword(8), "acb"),
    ];
    let tokens = lex_all(&mut with_keywords(KeywordScanner::with_keywords(table)), "yyz abc ams");
    assert_eq!(tokens.len(), 6);
    assert_eq!(count(&tokens, TokenCode::Keyword(5)), 1);
    assert_eq!(count(&tokens, TokenCode::Identifier), 2);
    assert_eq!(count(&tokens, TokenCode::Whitespace), 2);
}

fn for_format_font() -> KeywordScanner {
    let mut scanner = KeywordScanner::with_keywords([
        (TokenCode::Keyword(0), "for"),
        (TokenCode::Keyword(1), "format"),
        (TokenCode::Keyword(2), "font"),
    ]);
    scanner.add_code(TokenCode::GreaterEqualThan);
    scanner
}

#[test]
fn test_keyword_prefix_of_keyword() {
    let tokens = lex_all(&mut with_keywords(for_format_font()), "for form format fon font");
    assert_eq!(tokens.len(), 10);
    assert_eq!(count(&tokens, TokenCode::Identifier), 2);
    assert_eq!(count(&tokens, TokenCode::Keyword(0)), 1);
    assert_eq!(count(&tokens, TokenCode::Keyword(1)), 1);
    assert_eq!(count(&tokens, TokenCode::Keyword(2)), 1);
}

#[test]
fn test_operator_keyword_glued_to_identifier() {
    let mut scanner = for_format_font();
    for (n, text) in [(4, "aab"), (5, "abc"), (6, "aac"), (7, "acc"), (8, "acb")] {
        scanner.add_keyword(TokenCode::Keyword(n), text);
    }
    let tokens = lex_all(
        &mut with_keywords(scanner),
        "xxx for format font fo formatting >=xxx form",
    );
    assert_eq!(tokens.len(), 17);
    assert_eq!(count(&tokens, TokenCode::Keyword(0)), 1);
    assert_eq!(count(&tokens, TokenCode::Keyword(1)), 1);
    assert_eq!(count(&tokens, TokenCode::Keyword(2)), 1);
    assert_eq!(count(&tokens, TokenCode::GreaterEqualThan), 1);
    assert_eq!(count(&tokens, TokenCode::Identifier), 5);
    assert_eq!(count(&tokens, TokenCode::Whitespace), 7);
}

#[test]
fn test_case_insensitive_keywords() {
    let mut scanner = KeywordScanner::case_insensitive();
    scanner.add_keyword(TokenCode::Keyword(3), "select");
    let tokens = lex_all(&mut with_keywords(scanner), "SeLeCt x");
    assert_eq!(tokens[0].code, TokenCode::Keyword(3));
    assert_eq!(tokens[0].text, "SeLeCt");
}
