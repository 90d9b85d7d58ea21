//! Parser state and token cursor management

use super::super::lexer::tokens::{Token, TokenKind};
use super::super::types::TypeRegistry;
use super::ParseError;
use crate::util::diagnostic::Diagnostic;
use crate::util::span::SourceFile;

/// Parser state: one forward cursor over the token list
///
/// All accessors are clamped to the valid range, so querying past the end
/// always yields the trailing `Eof` token and never panics.
#[derive(Debug)]
pub struct ParserState<'a> {
    /// Token stream, `Eof`-terminated by the lexer
    tokens: &'a [Token],
    /// Source buffer, for diagnostic line text
    source: &'a SourceFile,
    /// Type name lookup consumed while parsing parameter types
    types: &'a TypeRegistry,
    /// Current position in the token stream
    pos: usize,
    /// Diagnostics collected so far
    diagnostics: Vec<Diagnostic>,
    /// Number of times `synchronize` has run
    sync_runs: usize,
}

impl<'a> ParserState<'a> {
    /// Create a new parser state
    ///
    /// `tokens` must be non-empty; the lexer guarantees a trailing `Eof`.
    pub fn new(tokens: &'a [Token], source: &'a SourceFile, types: &'a TypeRegistry) -> Self {
        debug_assert!(!tokens.is_empty(), "token list must be Eof-terminated");
        Self {
            tokens,
            source,
            types,
            pos: 0,
            diagnostics: Vec::new(),
            sync_runs: 0,
        }
    }

    #[inline]
    fn clamp(&self, index: usize) -> usize {
        index.min(self.tokens.len() - 1)
    }

    /// Current token (the `Eof` token once past the end)
    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.clamp(self.pos)]
    }

    /// Token before the cursor (clamped at the first token)
    #[inline]
    pub fn previous(&self) -> &Token {
        &self.tokens[self.clamp(self.pos.saturating_sub(1))]
    }

    /// Token after the cursor (clamped at the `Eof` token)
    #[inline]
    pub fn next(&self) -> &Token {
        &self.tokens[self.clamp(self.pos + 1)]
    }

    /// Check if the cursor reached the end marker
    #[inline]
    pub fn at_end(&self) -> bool {
        matches!(self.current().kind, TokenKind::Eof)
    }

    /// Check if the current token matches a kind
    #[inline]
    pub fn at(&self, kind: &TokenKind) -> bool {
        &self.current().kind == kind
    }

    /// Consume and return the current token
    ///
    /// The cursor never moves past the end marker, so eating at the end
    /// keeps returning `Eof`.
    pub fn eat(&mut self) -> Token {
        let token = self.current().clone();
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Consume the current token if it matches, else fail with an
    /// `Expected ...` error anchored at the current token
    pub fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        if self.at(kind) {
            Ok(self.eat())
        } else {
            Err(ParseError::Expected {
                expected,
                token: self.current().clone(),
            })
        }
    }

    /// Consume an identifier token and return its name
    pub fn expect_identifier(&mut self, expected: &'static str) -> Result<(String, Token), ParseError> {
        match &self.current().kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                let token = self.eat();
                Ok((name, token))
            }
            _ => Err(ParseError::Expected {
                expected,
                token: self.current().clone(),
            }),
        }
    }

    /// Type lookup capability
    #[inline]
    pub fn resolve_type(&self, name: &str) -> bool {
        self.types.resolve(name).is_some()
    }

    /// Convert a parse error into a diagnostic
    pub fn diagnose(&mut self, error: ParseError) {
        let token = error.token().clone();
        let line_text = self.source.line_text(token.line).to_string();
        self.diagnostics
            .push(Diagnostic::error(error.to_string(), token, line_text));
    }

    /// Panic-mode resynchronization
    ///
    /// Advance until the token just consumed was a `;` or the upcoming
    /// token begins a new `let` declaration, whichever comes first.
    pub fn synchronize(&mut self) {
        self.sync_runs += 1;
        while !self.at_end() {
            if self.at(&TokenKind::KwLet) {
                break;
            }
            if matches!(self.eat().kind, TokenKind::Semicolon) {
                break;
            }
        }
    }

    /// How many times `synchronize` has run
    #[inline]
    pub fn sync_runs(&self) -> usize {
        self.sync_runs
    }

    /// Take the collected diagnostics
    #[inline]
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }
}
