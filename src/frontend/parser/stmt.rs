//! Statement parsing

use super::ast::{Expr, Param, Stmt, StmtKind};
use super::state::ParserState;
use super::ParseError;
use crate::frontend::lexer::tokens::TokenKind;

impl ParserState<'_> {
    /// Parse one statement
    ///
    /// Dispatch keys off whether the current token is a keyword;
    /// non-keyword tokens fall through to expression-statement.
    pub fn parse_statement(&mut self) -> Result<Stmt, ParseError> {
        match self.current().kind {
            TokenKind::KwLet => self.parse_var_declare(),
            TokenKind::KwDef => self.parse_function_decl(),
            TokenKind::KwOmg => self.parse_omg(),
            _ => self.parse_expr_statement(),
        }
    }

    /// `let name[: type] [= expr];`
    fn parse_var_declare(&mut self) -> Result<Stmt, ParseError> {
        let let_token = self.eat();
        let (name, name_token) = self.expect_identifier("variable name after 'let'")?;

        // The annotation is recorded by name; resolution happens downstream
        let type_name = if self.at(&TokenKind::Colon) {
            self.eat();
            let (type_name, _) = self.expect_identifier("type name after ':'")?;
            Some(type_name)
        } else {
            None
        };

        let init = if self.at(&TokenKind::Eq) {
            self.eat();
            self.parse_expression()?
        } else {
            Expr::none(name_token.span)
        };

        let semicolon = self.expect(&TokenKind::Semicolon, "';' after statement")?;

        Ok(Stmt::new(
            StmtKind::VarDeclare {
                name,
                type_name,
                init,
            },
            let_token.span.to(semicolon.span),
        ))
    }

    /// `def name(param: type, ...) { body }`
    fn parse_function_decl(&mut self) -> Result<Stmt, ParseError> {
        let def_token = self.eat();
        let (name, _) = self.expect_identifier("function name after 'def'")?;
        self.expect(&TokenKind::LParen, "'(' after function name")?;

        let mut params = Vec::new();
        if !self.at(&TokenKind::RParen) {
            loop {
                let (param_name, _) = self.expect_identifier("parameter name")?;
                self.expect(&TokenKind::Colon, "':' after parameter name")?;
                let (type_name, type_token) = self.expect_identifier("parameter type name")?;

                if !self.resolve_type(&type_name) {
                    return Err(ParseError::UnknownType {
                        name: type_name,
                        token: type_token,
                    });
                }
                params.push(Param {
                    name: param_name,
                    type_name,
                });

                match self.current().kind {
                    TokenKind::Comma => {
                        self.eat();
                    }
                    TokenKind::RParen => break,
                    _ => {
                        return Err(ParseError::Expected {
                            expected: "',' between parameters",
                            token: self.current().clone(),
                        })
                    }
                }
            }
        }
        self.eat();

        let body = self.parse_block()?;
        let close = self.previous().clone();

        Ok(Stmt::new(
            StmtKind::FunctionDecl { name, params, body },
            def_token.span.to(close.span),
        ))
    }

    /// `{ stmt* }` — recovery inside the block is per statement, so one
    /// malformed body statement does not drop the whole declaration
    fn parse_block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        self.expect(&TokenKind::LBrace, "'{' to begin block")?;

        let mut statements = Vec::new();
        while !self.at(&TokenKind::RBrace) && !self.at_end() {
            match self.parse_statement() {
                Ok(stmt) => statements.push(stmt),
                Err(error) => {
                    self.diagnose(error);
                    self.synchronize();
                }
            }
        }
        self.expect(&TokenKind::RBrace, "'}' to end block")?;

        Ok(statements)
    }

    /// `omg expr;` — debug/trace print statement
    fn parse_omg(&mut self) -> Result<Stmt, ParseError> {
        let omg_token = self.eat();
        let expr = self.parse_expression()?;
        let semicolon = self.expect(&TokenKind::Semicolon, "';' after statement")?;

        Ok(Stmt::new(
            StmtKind::Omg(expr),
            omg_token.span.to(semicolon.span),
        ))
    }

    /// Fallback: `expr;`
    fn parse_expr_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.parse_expression()?;
        let span = if self.at(&TokenKind::Semicolon) {
            let semicolon = self.eat();
            expr.span.to(semicolon.span)
        } else if self.at_end() {
            // A trailing expression at end of input is accepted as-is
            expr.span
        } else {
            return Err(ParseError::Expected {
                expected: "';' after statement",
                token: self.current().clone(),
            });
        };

        Ok(Stmt::new(StmtKind::Expression(expr), span))
    }
}
