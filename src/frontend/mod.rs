//! Front-end compilation pipeline
//!
//! Text goes in, a statement forest plus diagnostics come out:
//! source -> lexer -> (tokens, lex diagnostics) -> parser ->
//! (statements, parse diagnostics). Each run owns its own buffer, token
//! list, and diagnostic list; nothing is shared across compilation units.

use tracing::debug;

use crate::util::diagnostic::Diagnostic;
use crate::util::span::SourceFile;

pub mod lexer;
pub mod parser;
pub mod types;

use lexer::tokens::Token;
use parser::ast::Stmt;
use types::TypeRegistry;

/// Everything one front-end run produces
///
/// Diagnostics are in source order (lexical first, then syntactic) and
/// self-contained, so they can be reported after the buffer is gone.
#[derive(Debug)]
pub struct ParseOutput {
    /// Top-level statements, fully constructed
    pub statements: Vec<Stmt>,
    /// All diagnostics for the unit, lex and parse combined
    pub diagnostics: Vec<Diagnostic>,
    /// The complete token list, `Eof`-terminated
    pub tokens: Vec<Token>,
}

impl ParseOutput {
    /// Check if the run produced no errors
    #[inline]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Compiler context for one or more compilation units
///
/// Owns the type registry the parser consults; passed by reference through
/// the pipeline, never global.
#[derive(Debug, Default)]
pub struct Compiler {
    types: TypeRegistry,
}

impl Compiler {
    /// Create a new compiler context
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The type registry backing `resolve_type`
    #[inline]
    pub fn types(&self) -> &TypeRegistry {
        &self.types
    }

    /// Run the front end over one in-memory compilation unit
    pub fn parse_source(&self, name: &str, text: &str) -> ParseOutput {
        debug!("compiling {} ({} bytes)", name, text.len());
        let source = SourceFile::new(name, text);

        let (tokens, mut diagnostics) = lexer::lex(&source);
        debug!("lexed into {} tokens", tokens.len());

        let (statements, parse_diagnostics) = parser::parse(&tokens, &source, &self.types);
        diagnostics.extend(parse_diagnostics);
        debug!(
            "parsed {} statements, {} diagnostics",
            statements.len(),
            diagnostics.len()
        );

        ParseOutput {
            statements,
            diagnostics,
            tokens,
        }
    }
}
