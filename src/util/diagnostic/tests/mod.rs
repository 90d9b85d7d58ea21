//! Diagnostic rendering unit tests

use crate::frontend::lexer::tokens::{Token, TokenKind};
use crate::util::diagnostic::{render_all, Diagnostic, Severity};
use crate::util::span::Span;

fn token_at(kind: TokenKind, span: Span, line: usize, column: usize) -> Token {
    Token::new(kind, span, line, column)
}

#[test]
fn renders_message_line_and_caret() {
    let token = token_at(TokenKind::Semicolon, Span::new(18, 19), 1, 19);
    let diagnostic = Diagnostic::error(
        "Expected closing parenthesis ')'",
        token,
        "let x = 1 + (2 + 3;",
    );

    assert_eq!(
        diagnostic.render(),
        "Expected closing parenthesis ')' at line 1 column 19:\n\
         let x = 1 + (2 + 3;\n\
         ~~~~~~~~~~~~~~~~~~^"
    );
}

#[test]
fn caret_covers_whole_token_span() {
    let token = token_at(TokenKind::Invalid, Span::new(8, 12), 1, 9);
    let diagnostic = Diagnostic::error("Invalid token in expression", token, "let a = wxyz + 1;");

    let underline = diagnostic.render().lines().last().unwrap().to_string();
    assert_eq!(underline, "~~~~~~~~^^^^~~~~~");
}

#[test]
fn underline_matches_line_length() {
    let token = token_at(TokenKind::Int64(7), Span::new(4, 5), 1, 5);
    let diagnostic = Diagnostic::error("some error", token, "1 + 7 * 2");

    let rendered = diagnostic.render();
    let mut lines = rendered.lines();
    lines.next();
    let text = lines.next().unwrap();
    let underline = lines.next().unwrap();
    assert_eq!(text.chars().count(), underline.chars().count());
    assert!(underline.chars().all(|c| c == '^' || c == '~'));
}

#[test]
fn token_past_line_end_renders_all_tildes() {
    let token = token_at(TokenKind::Eof, Span::new(9, 9), 1, 10);
    let diagnostic = Diagnostic::error("Expected ';' after statement", token, "let x = 1");

    let underline = diagnostic.render().lines().last().unwrap().to_string();
    assert_eq!(underline, "~~~~~~~~~");
}

#[test]
fn render_all_separates_entries() {
    let token = token_at(TokenKind::Invalid, Span::new(0, 1), 1, 1);
    let first = Diagnostic::error("Invalid character '@'", token.clone(), "@ $");
    let second = Diagnostic::error("Invalid character '$'", token, "@ $");

    let rendered = render_all(&[first, second]);
    assert_eq!(rendered.matches("Invalid character").count(), 2);
    assert!(rendered.contains("\n\n"));
}

#[test]
fn severity_is_always_error() {
    let token = token_at(TokenKind::Invalid, Span::new(0, 1), 1, 1);
    let diagnostic = Diagnostic::error("oops", token, "@");
    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.severity.to_string(), "error");
}

#[test]
fn serializes_to_json() {
    let token = token_at(TokenKind::Semicolon, Span::new(18, 19), 1, 19);
    let diagnostic = Diagnostic::error(
        "Expected closing parenthesis ')'",
        token,
        "let x = 1 + (2 + 3;",
    );

    let value = serde_json::to_value(&diagnostic).unwrap();
    assert_eq!(value["severity"], "error");
    assert_eq!(value["message"], "Expected closing parenthesis ')'");
    assert_eq!(value["token"]["line"], 1);
    assert_eq!(value["token"]["column"], 19);
    assert_eq!(value["line_text"], "let x = 1 + (2 + 3;");
}
