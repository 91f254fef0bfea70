//! Lexer module for tokenizing lambda-calculus source text.

mod scanner;
mod token;

pub use scanner::Scanner;
pub use token::{Span, Spanned, Token};
