//! CLI formatted output
//!
//! Token listings and error reports with source context.

use lexkit_core::{SyntaxError, Token};
use serde_json::{json, Value};

/// Lines shown before and after the error line
const CONTEXT_LINES: usize = 2;

/// Prints an error followed by the offending source lines
pub fn print_error_with_source(e: &SyntaxError, source: &str) {
    eprintln!("error: {}", e);
    let start = e.span.start;
    if let Some(context) = render_source_context(source, start.line, start.column) {
        eprint!("{}", context);
    }
}

/// Physical lines of `source`, broken at CRLF, lone CR or LF
pub fn source_lines(source: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = source;
    while !rest.is_empty() {
        match rest.find(['\r', '\n']) {
            Some(at) => {
                lines.push(&rest[..at]);
                let width = if rest[at..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[at + width..];
            }
            None => {
                lines.push(rest);
                rest = "";
            }
        }
    }
    lines
}

/// Source lines around `error_line` with a caret under `error_col`;
/// `None` when the line is outside the source
pub fn render_source_context(source: &str, error_line: usize, error_col: usize) -> Option<String> {
    let lines = source_lines(source);
    let total_lines = lines.len();
    if error_line == 0 || error_line > total_lines {
        return None;
    }

    let start_line = error_line.saturating_sub(CONTEXT_LINES).max(1);
    let end_line = (error_line + CONTEXT_LINES).min(total_lines);
    let width = end_line.to_string().len();
    let separator = "-".repeat(width + 1);

    let mut out = format!("{}|--\n", separator);
    for line_idx in start_line..=end_line {
        out.push_str(&format!(
            "{:>width$} | {}\n",
            line_idx,
            lines[line_idx - 1],
            width = width
        ));
        if line_idx == error_line {
            out.push_str(&format!(
                "{} | {}^\n",
                " ".repeat(width),
                " ".repeat(error_col.saturating_sub(1))
            ));
        }
    }
    out.push_str(&format!("{}|--\n", separator));
    Some(out)
}

/// One listing line: `Code [text]`, prefixed by the span when asked
pub fn render_token(token: &Token, show_spans: bool) -> String {
    let text = token.text.escape_debug();
    if show_spans {
        format!("{} {} [{}]", token.span, token.code, text)
    } else {
        format!("{} [{}]", token.code, text)
    }
}

pub fn tokens_to_json(tokens: &[Token]) -> Value {
    let tokens: Vec<Value> = tokens
        .iter()
        .map(|token| {
            json!({
                "code": token.code_name(),
                "ordinal": token.code.ordinal(),
                "text": token.text,
                "start": { "line": token.span.start.line, "column": token.span.start.column },
                "end": { "line": token.span.end.line, "column": token.span.end.column },
            })
        })
        .collect();
    Value::Array(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexkit_core::default_lexer;

    fn tokens(source: &str) -> Vec<Token> {
        let mut lexer = default_lexer();
        lexer.assign(source, "cli.src");
        lexer.tokens().to_vec()
    }

    #[test]
    fn test_source_context_caret() {
        let source = "one\ntwo\nthree\nfour";
        let context = render_source_context(source, 3, 2).unwrap();
        let lines: Vec<&str> = context.lines().collect();
        assert_eq!(lines[0], "--|--");
        assert_eq!(lines[1], "1 | one");
        assert_eq!(lines[3], "3 | three");
        assert_eq!(lines[4], "  |  ^");
        assert_eq!(lines[5], "4 | four");
        assert!(render_source_context(source, 9, 1).is_none());
    }

    #[test]
    fn test_source_lines_break_like_spans() {
        assert_eq!(source_lines("a\rb\r\nc\nd\n"), vec!["a", "b", "c", "d"]);
        assert_eq!(source_lines("\r\r"), vec!["", ""]);
        assert!(source_lines("").is_empty());
    }

    #[test]
    fn test_source_context_with_carriage_returns() {
        let source = "one\rtwo\rthree";
        let context = render_source_context(source, 2, 3).unwrap();
        let lines: Vec<&str> = context.lines().collect();
        assert_eq!(lines[1], "1 | one");
        assert_eq!(lines[2], "2 | two");
        assert_eq!(lines[3], "  |   ^");
        assert_eq!(lines[4], "3 | three");
    }

    #[test]
    fn test_render_token() {
        let tokens = tokens("x\n");
        assert_eq!(render_token(&tokens[0], false), "Identifier [x]");
        assert_eq!(render_token(&tokens[1], true), "cli.src:1:2-2:1 NewLine [\\n]");
    }

    #[test]
    fn test_tokens_to_json() {
        let value = tokens_to_json(&tokens("42"));
        assert_eq!(value[0]["code"], "Integer");
        assert_eq!(value[0]["text"], "42");
        assert_eq!(value[0]["end"]["column"], 3);
        assert_eq!(value[1]["code"], "EndOfFile");
    }
}
