//! Abstract Syntax Tree types
//!
//! Closed variant sets with single ownership: every node exclusively owns
//! its children, so the tree is destroyed with its compilation unit and
//! nothing is ever shared or back-referenced.

use std::fmt;

use super::super::lexer::tokens::TokenKind;
use crate::util::span::Span;

/// Binary operator tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,
    BitAnd,
    BitOr,
    Assign,
}

impl BinOp {
    /// Operator tag for a token kind, if it folds into a binary node
    pub fn from_token(kind: &TokenKind) -> Option<BinOp> {
        match kind {
            TokenKind::Plus => Some(BinOp::Add),
            TokenKind::Minus => Some(BinOp::Sub),
            TokenKind::Star => Some(BinOp::Mul),
            TokenKind::Slash => Some(BinOp::Div),
            TokenKind::Percent => Some(BinOp::Mod),
            TokenKind::StarStar => Some(BinOp::Pow),
            TokenKind::Amp => Some(BinOp::BitAnd),
            TokenKind::Pipe => Some(BinOp::BitOr),
            TokenKind::Eq => Some(BinOp::Assign),
            _ => None,
        }
    }

    /// Display name used in AST dumps
    pub fn name(&self) -> &'static str {
        match self {
            BinOp::Add => "Add",
            BinOp::Sub => "Subtract",
            BinOp::Mul => "Multiply",
            BinOp::Div => "Divide",
            BinOp::Mod => "Modulo",
            BinOp::Pow => "Power",
            BinOp::BitAnd => "BitwiseAnd",
            BinOp::BitOr => "BitwiseOr",
            BinOp::Assign => "Assign",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Literal value carried by a `Primitive` expression
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Int64(i64),
    UInt64(u64),
    Float64(f64),
    Str(String),
    None,
}

/// Expression node
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

/// Expression variants
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    /// Literal value
    Primitive(Primitive),
    /// Variable reference
    Variable(String),
    /// Binary operation over two owned children
    Binary {
        op: BinOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// Call with an ordered argument list
    Call { callee: String, args: Vec<Expr> },
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// A `none` primitive covering the given span
    #[inline]
    pub fn none(span: Span) -> Self {
        Self::new(ExprKind::Primitive(Primitive::None), span)
    }

    /// Indented tree dump
    pub fn stringify(&self, level: usize) -> String {
        let pad = indent(level);
        match &self.kind {
            ExprKind::Primitive(Primitive::Int64(v)) => format!("{pad}Int64: {v}"),
            ExprKind::Primitive(Primitive::UInt64(v)) => format!("{pad}UInt64: {v}"),
            ExprKind::Primitive(Primitive::Float64(v)) => format!("{pad}Float64: {v}"),
            ExprKind::Primitive(Primitive::Str(v)) => format!("{pad}String: {v:?}"),
            ExprKind::Primitive(Primitive::None) => format!("{pad}None"),
            ExprKind::Variable(name) => format!("{pad}Variable: {name}"),
            ExprKind::Binary { op, lhs, rhs } => {
                let mut out = format!("{pad}Binary Operation: {op}\n");
                out.push_str(&format!("{pad}  Left:\n{}\n", lhs.stringify(level + 2)));
                out.push_str(&format!("{pad}  Right:\n{}", rhs.stringify(level + 2)));
                out
            }
            ExprKind::Call { callee, args } => {
                let mut out = format!("{pad}Call: {callee}");
                for arg in args {
                    out.push('\n');
                    out.push_str(&arg.stringify(level + 1));
                }
                out
            }
        }
    }
}

/// Function parameter: name plus resolved type name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub type_name: String,
}

/// Statement node
#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

/// Statement variants
#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    /// `let name[: type] [= init];` — a missing initializer defaults to a
    /// `none` primitive
    VarDeclare {
        name: String,
        type_name: Option<String>,
        init: Expr,
    },
    /// `def name(params) { body }`
    FunctionDecl {
        name: String,
        params: Vec<Param>,
        body: Vec<Stmt>,
    },
    /// `omg expr;` — debug/trace print
    Omg(Expr),
    /// Bare expression statement
    Expression(Expr),
}

impl Stmt {
    #[inline]
    pub fn new(kind: StmtKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Indented tree dump
    pub fn stringify(&self, level: usize) -> String {
        let pad = indent(level);
        match &self.kind {
            StmtKind::VarDeclare {
                name,
                type_name,
                init,
            } => {
                let mut out = format!("{pad}Variable Declaration: {name}");
                if let Some(type_name) = type_name {
                    out.push_str(&format!(": {type_name}"));
                }
                out.push('\n');
                out.push_str(&init.stringify(level + 1));
                out
            }
            StmtKind::FunctionDecl { name, params, body } => {
                let params: Vec<String> = params
                    .iter()
                    .map(|p| format!("{}: {}", p.name, p.type_name))
                    .collect();
                let mut out = format!("{pad}Function Declaration: {name}({})", params.join(", "));
                for stmt in body {
                    out.push('\n');
                    out.push_str(&stmt.stringify(level + 1));
                }
                out
            }
            StmtKind::Omg(expr) => {
                format!("{pad}Omg:\n{}", expr.stringify(level + 1))
            }
            StmtKind::Expression(expr) => {
                format!("{pad}Expression Statement:\n{}", expr.stringify(level + 1))
            }
        }
    }
}

fn indent(level: usize) -> String {
    "  ".repeat(level)
}
