//! Expression parsing via precedence climbing

use super::ast::{BinOp, Expr, ExprKind, Primitive};
use super::state::ParserState;
use super::ParseError;
use crate::frontend::lexer::tokens::TokenKind;

/// Per-operator associativity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Assoc {
    Left,
    Right,
}

/// Precedence table entry for a token kind, if the operator folds into
/// binary nodes. Higher precedence binds tighter.
fn op_info(kind: &TokenKind) -> Option<(u8, Assoc)> {
    match kind {
        TokenKind::Plus | TokenKind::Minus => Some((1, Assoc::Left)),
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Some((2, Assoc::Left)),
        TokenKind::StarStar => Some((3, Assoc::Right)),
        _ => None,
    }
}

impl ParserState<'_> {
    /// Parse a full expression
    pub fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        let lhs = self.parse_primary()?;
        self.parse_bin_op(0, lhs)
    }

    /// Fold binary operators into a tree respecting the precedence table
    ///
    /// Loop while the current token is an operator at or above
    /// `min_precedence`; consume it, parse the right-hand primary, and
    /// re-enter recursively when the upcoming operator binds tighter (or
    /// equally for a right-associative operator) before combining.
    pub fn parse_bin_op(&mut self, min_precedence: u8, mut lhs: Expr) -> Result<Expr, ParseError> {
        loop {
            let op_kind = self.current().kind.clone();
            let (precedence, assoc) = match op_info(&op_kind) {
                Some(info) if info.0 >= min_precedence => info,
                _ => return Ok(lhs),
            };
            let op = BinOp::from_token(&op_kind).expect("precedence entry implies operator");
            self.eat();

            let mut rhs = self.parse_primary()?;

            if let Some((next_precedence, _)) = op_info(&self.current().kind) {
                if next_precedence > precedence {
                    rhs = self.parse_bin_op(min_precedence + 1, rhs)?;
                } else if next_precedence == precedence && assoc == Assoc::Right {
                    rhs = self.parse_bin_op(precedence, rhs)?;
                }
            }

            let span = lhs.span.to(rhs.span);
            lhs = Expr::new(
                ExprKind::Binary {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
                span,
            );
        }
    }

    /// Parse a primary expression: variable, call, parenthesized group,
    /// or literal
    pub fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        match self.current().kind {
            TokenKind::Identifier(_) => self.parse_identifier(),
            TokenKind::LParen => self.parse_parentheses(),
            _ => self.parse_literal(),
        }
    }

    /// Variable reference, or call when the identifier is followed by `(`
    fn parse_identifier(&mut self) -> Result<Expr, ParseError> {
        let token = self.eat();
        let name = match token.kind {
            TokenKind::Identifier(ref name) => name.clone(),
            _ => unreachable!("parse_identifier dispatched on a non-identifier"),
        };

        if !self.at(&TokenKind::LParen) {
            return Ok(Expr::new(ExprKind::Variable(name), token.span));
        }

        // Call: comma-separated argument list terminated by ')'
        self.eat();
        let mut args = Vec::new();
        if !self.at(&TokenKind::RParen) {
            loop {
                args.push(self.parse_expression()?);
                match self.current().kind {
                    TokenKind::Comma => {
                        self.eat();
                    }
                    TokenKind::RParen => break,
                    _ => {
                        return Err(ParseError::Expected {
                            expected: "',' or ')' in argument list",
                            token: self.current().clone(),
                        })
                    }
                }
            }
        }
        let close = self.eat();

        Ok(Expr::new(
            ExprKind::Call { callee: name, args },
            token.span.to(close.span),
        ))
    }

    /// Parenthesized sub-expression
    fn parse_parentheses(&mut self) -> Result<Expr, ParseError> {
        let open = self.eat();
        let mut expr = self.parse_expression()?;

        if !self.at(&TokenKind::RParen) {
            return Err(ParseError::MissingCloseParen {
                token: self.current().clone(),
            });
        }
        let close = self.eat();

        // The group spans its delimiters, keeping parent spans covering
        expr.span = open.span.to(close.span);
        Ok(expr)
    }

    /// Literal dispatch; rejects everything that cannot start an expression
    fn parse_literal(&mut self) -> Result<Expr, ParseError> {
        let token = self.eat();
        let primitive = match token.kind {
            TokenKind::Int64(value) => Primitive::Int64(value),
            TokenKind::UInt64(value) => Primitive::UInt64(value),
            TokenKind::Float64(value) => Primitive::Float64(value),
            TokenKind::Str(ref value) => Primitive::Str(value.clone()),
            _ => return Err(ParseError::InvalidExpressionToken { token }),
        };
        Ok(Expr::new(ExprKind::Primitive(primitive), token.span))
    }
}
