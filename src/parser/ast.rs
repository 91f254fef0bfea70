//! Abstract Syntax Tree definitions.

use crate::lexer::Span;

/// Literal values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Int(i64),
    Bool(bool),
}

/// Expressions of the lambda calculus.
///
/// Expressions carry no source locations; the inference engine only looks
/// at their structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exp {
    /// Variable reference: `x`
    Var(String),
    /// Literal: `42`, `true`
    Lit(Literal),
    /// Application: `f x`
    App(Box<Exp>, Box<Exp>),
    /// Abstraction: `\x -> body`
    Abs(String, Box<Exp>),
    /// Non-recursive let: `let x = bound in body`
    Let(String, Box<Exp>, Box<Exp>),
}

impl Exp {
    pub fn var(name: impl Into<String>) -> Self {
        Exp::Var(name.into())
    }

    pub fn int(value: i64) -> Self {
        Exp::Lit(Literal::Int(value))
    }

    pub fn bool(value: bool) -> Self {
        Exp::Lit(Literal::Bool(value))
    }

    pub fn app(func: Exp, arg: Exp) -> Self {
        Exp::App(Box::new(func), Box::new(arg))
    }

    /// Apply `func` to each argument in turn: `func a b c`.
    pub fn apps(func: Exp, args: impl IntoIterator<Item = Exp>) -> Self {
        args.into_iter().fold(func, Exp::app)
    }

    pub fn abs(param: impl Into<String>, body: Exp) -> Self {
        Exp::Abs(param.into(), Box::new(body))
    }

    pub fn let_in(name: impl Into<String>, bound: Exp, body: Exp) -> Self {
        Exp::Let(name.into(), Box::new(bound), Box::new(body))
    }
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Definition visible to the following statements: `let x = e;`
    Let { name: String, value: Exp, span: Span },
    /// Expression whose type is reported: `e;`
    Expr { expression: Exp, span: Span },
}

impl Stmt {
    pub fn span(&self) -> Span {
        match self {
            Stmt::Let { span, .. } | Stmt::Expr { span, .. } => *span,
        }
    }
}

/// A program is a sequence of statements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub statements: Vec<Stmt>,
    pub span: Span,
}
