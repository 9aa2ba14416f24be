//! Closure scanners registered through `Lexer::add_custom`

mod common;
use common::{codes, texts};

use lexkit_core::lexer::scanners::IdentifierScanner;
use lexkit_core::lexer::{Lexer, TokenCode, Tokenizer, DEFAULT_PRIORITY};

fn plain_text(tokenizer: &mut Tokenizer<'_>) {
    match tokenizer.peek() {
        '\n' => {
            tokenizer.push();
            tokenizer.accept(TokenCode::NewLine);
        }
        '\0' => {}
        _ => {
            while !matches!(tokenizer.peek(), '\n' | '\0') {
                tokenizer.push();
            }
            tokenizer.accept(TokenCode::Text);
        }
    }
}

#[test]
fn test_plain_text_lines() {
    let mut lexer = Lexer::with_source("Line 1\n\nLine 3\nLine 4", "plain");
    lexer.add_custom("plaintext", DEFAULT_PRIORITY, plain_text);
    let tokens = lexer.tokens().to_vec();
    assert_eq!(
        codes(&tokens),
        vec![
            TokenCode::Text,
            TokenCode::NewLine,
            TokenCode::NewLine,
            TokenCode::Text,
            TokenCode::NewLine,
            TokenCode::Text,
            TokenCode::EndOfFile,
        ]
    );
    assert_eq!(tokens[3].text, "Line 3");
}

fn bracket_block(tokenizer: &mut Tokenizer<'_>) {
    if !tokenizer.is_locked() {
        if tokenizer.peek() != '[' {
            return;
        }
        tokenizer.lock_scanner();
    }
    while !matches!(tokenizer.peek(), '\n' | ']' | '\0') {
        tokenizer.push();
    }
    if tokenizer.peek() == ']' {
        tokenizer.push();
        tokenizer.unlock_scanner();
    } else {
        tokenizer.push();
    }
    tokenizer.accept(TokenCode::Text);
}

#[test]
fn test_locked_scanner_resumes_on_next_line() {
    let mut lexer = Lexer::with_source("a[x\ny]b", "block");
    lexer.add_scanner(IdentifierScanner::new());
    lexer.add_custom("block", DEFAULT_PRIORITY, bracket_block);
    let tokens = lexer.tokens().to_vec();
    assert_eq!(texts(&tokens), vec!["a", "[x\n", "y]", "b", ""]);
    assert_eq!(
        codes(&tokens),
        vec![
            TokenCode::Identifier,
            TokenCode::Text,
            TokenCode::Text,
            TokenCode::Identifier,
            TokenCode::EndOfFile,
        ]
    );
}

#[test]
fn test_lower_priority_value_runs_first() {
    let mut lexer = Lexer::with_source("abc", "priority");
    lexer.add_scanner(IdentifierScanner::new());
    lexer.add_custom("grab", 1, |t: &mut Tokenizer<'_>| {
        t.push();
        t.accept(TokenCode::Text);
    });
    let tokens = lexer.tokens().to_vec();
    assert_eq!(texts(&tokens), vec!["a", "b", "c", ""]);
    assert!(tokens[..3].iter().all(|t| t.code == TokenCode::Text));
}

#[test]
fn test_substituted_text_keeps_source_span() {
    let mut lexer = Lexer::with_source("<tab>x", "subst");
    lexer.add_scanner(IdentifierScanner::new());
    lexer.add_custom("tab", DEFAULT_PRIORITY, |t: &mut Tokenizer<'_>| {
        if t.peek() == '<' {
            t.push_as('\t');
            for _ in 0..4 {
                t.discard();
            }
            t.accept(TokenCode::Whitespace);
        }
    });
    let tokens = lexer.tokens().to_vec();
    assert_eq!(tokens[0].text, "\t");
    assert_eq!(tokens[0].span.end.column, 6);
    assert_eq!(tokens[1].text, "x");
}
