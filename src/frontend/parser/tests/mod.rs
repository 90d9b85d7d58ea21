//! Parser unit tests


use crate::frontend::parser::ast::Stmt;
use crate::frontend::{lexer, parser, types::TypeRegistry};
use crate::util::diagnostic::Diagnostic;
use crate::util::span::SourceFile;

/// Lex and parse, asserting the input is lexically clean
fn parse_text(text: &str) -> (Vec<Stmt>, Vec<Diagnostic>) {
    let source = SourceFile::new("<test>", text);
    let (tokens, lex_diagnostics) = lexer::lex(&source);
    assert!(
        lex_diagnostics.is_empty(),
        "unexpected lex diagnostics: {:?}",
        lex_diagnostics
    );
    let types = TypeRegistry::new();
    parser::parse(&tokens, &source, &types)
}

/// Parse and assert there were no diagnostics at all
fn parse_clean(text: &str) -> Vec<Stmt> {
    let (statements, diagnostics) = parse_text(text);
    assert!(
        diagnostics.is_empty(),
        "unexpected diagnostics: {:?}",
        diagnostics
    );
    statements
}
