//! Parser module
//!
//! Recursive descent for statements, precedence climbing for expressions,
//! panic-mode recovery at statement granularity. The parser never unwinds
//! past its own boundary: every internal error becomes a diagnostic and
//! the result is always a statement list plus a diagnostic list.

pub mod ast;
mod expr;
mod state;
mod stmt;

pub use state::ParserState;

use tracing::debug;

use super::lexer::tokens::Token;
use super::types::TypeRegistry;
use ast::Stmt;
use crate::util::diagnostic::Diagnostic;
use crate::util::span::SourceFile;

/// Parse error, anchored at the offending token
///
/// Raised inside statement parsing and caught at the statement level,
/// where it is converted to a [`Diagnostic`] and recovery resumes.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseError {
    /// A required structural token was missing
    #[error("Expected {expected}")]
    Expected {
        expected: &'static str,
        token: Token,
    },

    /// A parenthesized group or call was never closed
    #[error("Expected closing parenthesis ')'")]
    MissingCloseParen { token: Token },

    /// The token cannot begin or continue an expression
    #[error("Invalid token in expression")]
    InvalidExpressionToken { token: Token },

    /// A parameter type name did not resolve
    #[error("Type '{name}' does not exist")]
    UnknownType { name: String, token: Token },
}

impl ParseError {
    /// The token the error is anchored at
    pub fn token(&self) -> &Token {
        match self {
            ParseError::Expected { token, .. }
            | ParseError::MissingCloseParen { token }
            | ParseError::InvalidExpressionToken { token }
            | ParseError::UnknownType { token, .. } => token,
        }
    }
}

/// Parse a token stream into top-level statements
///
/// Malformed statements contribute no AST node: the error becomes one
/// diagnostic and the cursor resynchronizes to the next statement. The
/// returned statements are always fully constructed trees.
pub fn parse(
    tokens: &[Token],
    source: &SourceFile,
    types: &TypeRegistry,
) -> (Vec<Stmt>, Vec<Diagnostic>) {
    if tokens.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let mut state = ParserState::new(tokens, source, types);
    let mut statements = Vec::new();

    while !state.at_end() {
        match state.parse_statement() {
            Ok(stmt) => statements.push(stmt),
            Err(error) => {
                state.diagnose(error);
                state.synchronize();
            }
        }
    }

    let diagnostics = state.into_diagnostics();
    debug!(
        statements = statements.len(),
        diagnostics = diagnostics.len(),
        "parsed {} tokens",
        tokens.len()
    );
    (statements, diagnostics)
}

#[cfg(test)]
mod tests;
