//! Lexer module
//!
//! Single left-to-right pass over the source buffer, producing the full
//! token list plus any lexical diagnostics. Lexing never fails: malformed
//! input becomes `Invalid` tokens and the pass always terminates with one
//! trailing `Eof` token.

pub mod tokens;

pub use scanner::lex;

mod scanner {
    use std::iter::Peekable;
    use std::str::Chars;

    use tracing::debug;

    use super::tokens::{keyword, Token, TokenKind};
    use crate::util::diagnostic::Diagnostic;
    use crate::util::span::{SourceFile, Span};

    /// Tokenize a source buffer
    ///
    /// Always returns the complete token list (terminated by exactly one
    /// `Eof`) together with the diagnostics raised along the way. Position
    /// info is attributed after the pass from the line-start table, so even
    /// errors raised mid-token carry accurate line/column data.
    pub fn lex(source: &SourceFile) -> (Vec<Token>, Vec<Diagnostic>) {
        let mut lexer = Lexer::new(source);

        loop {
            lexer.skip_whitespace();
            if lexer.peek().is_none() {
                break;
            }
            lexer.start = lexer.offset;
            lexer.scan_token();
        }
        lexer.raw.push((TokenKind::Eof, Span::new(lexer.offset, lexer.offset)));

        let (tokens, diagnostics) = lexer.finish();
        debug!(
            tokens = tokens.len(),
            diagnostics = diagnostics.len(),
            "lexed {} bytes",
            source.content.len()
        );
        (tokens, diagnostics)
    }

    struct Lexer<'a> {
        source: &'a SourceFile,
        chars: Peekable<Chars<'a>>,
        offset: usize,
        start: usize,
        raw: Vec<(TokenKind, Span)>,
        /// Diagnostics collected as (message, raw token index); resolved to
        /// full positions once the pass is over
        pending: Vec<(String, usize)>,
    }

    impl<'a> Lexer<'a> {
        fn new(source: &'a SourceFile) -> Self {
            Self {
                source,
                chars: source.content.chars().peekable(),
                offset: 0,
                start: 0,
                raw: Vec::new(),
                pending: Vec::new(),
            }
        }

        fn advance(&mut self) -> Option<char> {
            let c = self.chars.next()?;
            self.offset += c.len_utf8();
            Some(c)
        }

        fn peek(&mut self) -> Option<char> {
            self.chars.peek().copied()
        }

        fn peek_next(&mut self) -> Option<char> {
            self.chars.clone().nth(1)
        }

        fn skip_whitespace(&mut self) {
            while let Some(c) = self.peek() {
                if c.is_whitespace() {
                    self.advance();
                } else {
                    break;
                }
            }
        }

        fn span(&self) -> Span {
            Span::new(self.start, self.offset)
        }

        fn push(&mut self, kind: TokenKind) {
            let span = self.span();
            self.raw.push((kind, span));
        }

        /// Record a diagnostic anchored at the most recently pushed token
        fn error(&mut self, message: impl Into<String>) {
            self.pending.push((message.into(), self.raw.len() - 1));
        }

        fn scan_token(&mut self) {
            let c = self.advance().expect("scan_token called at end of input");

            match c {
                c if is_identifier_start(c) => self.scan_identifier(c),
                c if c.is_ascii_digit() => self.scan_number(c),
                '"' => self.scan_string(),
                '+' => self.push(TokenKind::Plus),
                '-' => {
                    if self.peek() == Some('>') {
                        self.advance();
                        self.push(TokenKind::Arrow);
                    } else {
                        self.push(TokenKind::Minus);
                    }
                }
                '*' => {
                    if self.peek() == Some('*') {
                        self.advance();
                        self.push(TokenKind::StarStar);
                    } else {
                        self.push(TokenKind::Star);
                    }
                }
                '/' => {
                    if self.peek() == Some('/') {
                        // Line comment, skipped entirely
                        while let Some(c) = self.peek() {
                            if c == '\n' {
                                break;
                            }
                            self.advance();
                        }
                    } else {
                        self.push(TokenKind::Slash);
                    }
                }
                '%' => self.push(TokenKind::Percent),
                '&' => self.push(TokenKind::Amp),
                '|' => self.push(TokenKind::Pipe),
                '~' => self.push(TokenKind::Tilde),
                '=' => self.push(TokenKind::Eq),
                '(' => self.push(TokenKind::LParen),
                ')' => self.push(TokenKind::RParen),
                '[' => self.push(TokenKind::LBracket),
                ']' => self.push(TokenKind::RBracket),
                '{' => self.push(TokenKind::LBrace),
                '}' => self.push(TokenKind::RBrace),
                '.' => self.push(TokenKind::Dot),
                ',' => self.push(TokenKind::Comma),
                ':' => self.push(TokenKind::Colon),
                ';' => self.push(TokenKind::Semicolon),
                c => {
                    self.push(TokenKind::Invalid);
                    self.error(format!("Invalid character '{}'", c));
                }
            }
        }

        fn scan_identifier(&mut self, first_char: char) {
            let mut value = String::new();
            value.push(first_char);

            while let Some(c) = self.peek() {
                if is_identifier_char(c) {
                    value.push(c);
                    self.advance();
                } else {
                    break;
                }
            }

            match keyword(&value) {
                Some(kind) => self.push(kind),
                None => self.push(TokenKind::Identifier(value)),
            }
        }

        fn scan_number(&mut self, first_char: char) {
            let mut digits = String::new();
            digits.push(first_char);

            while let Some(c) = self.peek() {
                if c.is_ascii_digit() {
                    digits.push(c);
                    self.advance();
                } else {
                    break;
                }
            }

            if matches!(self.peek(), Some('u') | Some('U')) {
                self.advance();
                match digits.parse::<u64>() {
                    Ok(value) => self.push(TokenKind::UInt64(value)),
                    Err(_) => {
                        self.push(TokenKind::Invalid);
                        self.error("Value too large to store in a uint64");
                    }
                }
            } else if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
                digits.push(self.advance().expect("peeked '.'"));
                while let Some(c) = self.peek() {
                    if c.is_ascii_digit() {
                        digits.push(c);
                        self.advance();
                    } else {
                        break;
                    }
                }
                match digits.parse::<f64>() {
                    Ok(value) => self.push(TokenKind::Float64(value)),
                    Err(_) => {
                        self.push(TokenKind::Invalid);
                        self.error("Value too large to store in a float64");
                    }
                }
            } else {
                match digits.parse::<i64>() {
                    Ok(value) => self.push(TokenKind::Int64(value)),
                    Err(_) => {
                        self.push(TokenKind::Invalid);
                        self.error("Value too large to store in an int64");
                    }
                }
            }
        }

        fn scan_string(&mut self) {
            let mut value = String::new();

            loop {
                match self.advance() {
                    Some('"') => {
                        self.push(TokenKind::Str(value));
                        return;
                    }
                    Some('\\') => match self.advance() {
                        Some('n') => value.push('\n'),
                        Some('t') => value.push('\t'),
                        Some('r') => value.push('\r'),
                        Some('"') => value.push('"'),
                        Some('\'') => value.push('\''),
                        Some('\\') => value.push('\\'),
                        Some('a') => value.push('\x07'),
                        Some('b') => value.push('\x08'),
                        Some('e') => value.push('\x1b'),
                        Some('f') => value.push('\x0c'),
                        // Unknown escapes keep the character verbatim
                        Some(c) => value.push(c),
                        None => {
                            self.push(TokenKind::Invalid);
                            self.error("Unterminated string");
                            return;
                        }
                    },
                    Some(c) => value.push(c),
                    None => {
                        self.push(TokenKind::Invalid);
                        self.error("Unterminated string");
                        return;
                    }
                }
            }
        }

        /// Attribute line/column to every token and resolve the pending
        /// diagnostics against the line table
        fn finish(self) -> (Vec<Token>, Vec<Diagnostic>) {
            let Lexer {
                source,
                raw,
                pending,
                ..
            } = self;

            let tokens: Vec<Token> = raw
                .into_iter()
                .map(|(kind, span)| {
                    let (line, column) = source.line_col(span.beg);
                    Token::new(kind, span, line, column)
                })
                .collect();

            let diagnostics = pending
                .into_iter()
                .map(|(message, index)| {
                    let token = tokens[index].clone();
                    let line_text = source.line_text(token.line).to_string();
                    Diagnostic::error(message, token, line_text)
                })
                .collect();

            (tokens, diagnostics)
        }
    }

    fn is_identifier_start(c: char) -> bool {
        unicode_ident::is_xid_start(c) || c == '_'
    }

    fn is_identifier_char(c: char) -> bool {
        unicode_ident::is_xid_continue(c)
    }
}

#[cfg(test)]
mod tests;
