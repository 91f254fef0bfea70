//! Error types for the hmw type checker.

use crate::lexer::Span;
use crate::types::{PrettyContext, TVarName, Type};
use thiserror::Error;

/// Result type for hmw operations.
pub type Result<T> = std::result::Result<T, HmwError>;

/// Main error type for hmw.
#[derive(Debug, Error)]
pub enum HmwError {
    #[error("Lexer error: {0}")]
    Lex(#[from] LexError),

    #[error("Parser error: {0}")]
    Parse(#[from] ParseError),

    /// A type error, located at the top-level statement that raised it.
    #[error("Type error: {error}")]
    Type {
        #[source]
        error: TypeError,
        span: Span,
    },
}

impl HmwError {
    pub fn span(&self) -> Span {
        match self {
            HmwError::Lex(e) => e.span(),
            HmwError::Parse(e) => e.span(),
            HmwError::Type { span, .. } => *span,
        }
    }
}

/// Lexer errors.
#[derive(Debug, Error)]
pub enum LexError {
    #[error("Unexpected character '{ch}'")]
    UnexpectedCharacter { ch: char, span: Span },

    #[error("Invalid integer literal '{text}'")]
    InvalidNumber { text: String, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            LexError::UnexpectedCharacter { span, .. } => *span,
            LexError::InvalidNumber { span, .. } => *span,
        }
    }
}

/// Parser errors.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Unexpected token '{found}', expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: String,
        span: Span,
    },

    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEof { expected: String, span: Span },
}

impl ParseError {
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnexpectedToken { span, .. } => *span,
            ParseError::UnexpectedEof { span, .. } => *span,
        }
    }
}

/// Type inference errors.
///
/// Carries the offending types themselves. A mismatch prints both sides
/// through one `PrettyContext` so their variable names agree; an occurs
/// check prints raw names so the variable can be found in the type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    #[error("Unbound variable '{name}'")]
    UnboundVariable { name: String },

    #[error("Infinite type: {var} occurs in {}", PrettyContext::raw().format_type(.ty))]
    OccursCheck { var: TVarName, ty: Type },

    #[error("Cannot unify {}", format_pair(.t1, .t2))]
    UnificationMismatch { t1: Type, t2: Type },
}

fn format_pair(t1: &Type, t2: &Type) -> String {
    let mut ctx = PrettyContext::new();
    let left = ctx.format_type(t1);
    let right = ctx.format_type(t2);
    format!("{} with {}", left, right)
}

impl TypeError {
    /// Attach the span of the statement being checked.
    pub fn at(self, span: Span) -> HmwError {
        HmwError::Type { error: self, span }
    }
}
