//! Token types

use serde::Serialize;
use std::fmt;

use crate::util::span::Span;

/// Token kind
///
/// One closed enum for the whole vocabulary. Literal payloads live inside
/// their variant, so exactly one payload is ever active for a token.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum TokenKind {
    // Keywords
    KwDef,
    KwLet,
    KwOmg,

    // Identifiers
    Identifier(String),

    // Literals
    Int64(i64),
    UInt64(u64),
    Float64(f64),
    Str(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    StarStar,
    Amp,
    Pipe,
    Tilde,
    Eq,

    // Symbols
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Arrow,
    Dot,
    Comma,
    Colon,
    Semicolon,

    // Special
    Eof,
    Invalid,
}

impl TokenKind {
    /// Short display name used in dumps and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::KwDef => "def",
            TokenKind::KwLet => "let",
            TokenKind::KwOmg => "omg",
            TokenKind::Identifier(_) => "identifier",
            TokenKind::Int64(_) => "int64",
            TokenKind::UInt64(_) => "uint64",
            TokenKind::Float64(_) => "float64",
            TokenKind::Str(_) => "string",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Percent => "%",
            TokenKind::StarStar => "**",
            TokenKind::Amp => "&",
            TokenKind::Pipe => "|",
            TokenKind::Tilde => "~",
            TokenKind::Eq => "=",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Arrow => "->",
            TokenKind::Dot => ".",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Eof => "end of file",
            TokenKind::Invalid => "invalid",
        }
    }

    /// Check if the kind is a binary/unary operator
    #[inline]
    pub fn is_operator(&self) -> bool {
        matches!(
            self,
            TokenKind::Plus
                | TokenKind::Minus
                | TokenKind::Star
                | TokenKind::Slash
                | TokenKind::Percent
                | TokenKind::StarStar
                | TokenKind::Amp
                | TokenKind::Pipe
                | TokenKind::Tilde
                | TokenKind::Eq
        )
    }

    /// Check if the kind is a bracket or punctuation symbol
    #[inline]
    pub fn is_symbol(&self) -> bool {
        matches!(
            self,
            TokenKind::LParen
                | TokenKind::RParen
                | TokenKind::LBracket
                | TokenKind::RBracket
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::Arrow
                | TokenKind::Dot
                | TokenKind::Comma
                | TokenKind::Colon
                | TokenKind::Semicolon
        )
    }

    /// Check if the kind is a keyword
    #[inline]
    pub fn is_keyword(&self) -> bool {
        matches!(self, TokenKind::KwDef | TokenKind::KwLet | TokenKind::KwOmg)
    }

    /// Check if the kind is a literal
    #[inline]
    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::Int64(_) | TokenKind::UInt64(_) | TokenKind::Float64(_) | TokenKind::Str(_)
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Identifier(name) => write!(f, "identifier `{}`", name),
            TokenKind::Int64(v) => write!(f, "int64 {}", v),
            TokenKind::UInt64(v) => write!(f, "uint64 {}", v),
            TokenKind::Float64(v) => write!(f, "float64 {}", v),
            TokenKind::Str(v) => write!(f, "string {:?}", v),
            kind => write!(f, "{}", kind.name()),
        }
    }
}

/// Look up the keyword kind for an identifier, if it is one
pub fn keyword(identifier: &str) -> Option<TokenKind> {
    match identifier {
        "def" => Some(TokenKind::KwDef),
        "let" => Some(TokenKind::KwLet),
        "omg" => Some(TokenKind::KwOmg),
        _ => None,
    }
}

/// Token
///
/// Immutable once produced: kind, half-open byte span into the source, and
/// the 1-based line/column of its first byte.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    pub line: usize,
    pub column: usize,
}

impl Token {
    /// Create a new token
    #[inline]
    pub fn new(kind: TokenKind, span: Span, line: usize, column: usize) -> Self {
        Self {
            kind,
            span,
            line,
            column,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)
    }
}
