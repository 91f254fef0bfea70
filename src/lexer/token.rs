//! Token definitions for the hmw lexer.

use std::fmt;

/// Source location information
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A token with its span
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub value: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }
}

/// Token types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Keywords
    Let,
    In,
    Fun,
    True,
    False,

    // Literals
    Int(i64),
    Ident(String),

    // Punctuation
    Backslash,
    Arrow,
    Equals,
    LParen,
    RParen,
    Semicolon,

    Eof,
}

impl Token {
    /// Map an identifier to its keyword token, if it is one.
    pub fn keyword(ident: &str) -> Option<Token> {
        match ident {
            "let" => Some(Token::Let),
            "in" => Some(Token::In),
            "fun" => Some(Token::Fun),
            "true" => Some(Token::True),
            "false" => Some(Token::False),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Let => write!(f, "let"),
            Token::In => write!(f, "in"),
            Token::Fun => write!(f, "fun"),
            Token::True => write!(f, "true"),
            Token::False => write!(f, "false"),
            Token::Int(n) => write!(f, "{}", n),
            Token::Ident(name) => write!(f, "{}", name),
            Token::Backslash => write!(f, "\\"),
            Token::Arrow => write!(f, "->"),
            Token::Equals => write!(f, "="),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::Semicolon => write!(f, ";"),
            Token::Eof => write!(f, "end of input"),
        }
    }
}
