//! Parser module for lambda-calculus source text.
//!
//! ```text
//! program := (stmt (';' stmt)* ';'?)?
//! stmt    := 'let' IDENT '=' expr          -- top-level definition
//!          | expr
//! expr    := 'let' IDENT '=' expr 'in' expr
//!          | ('\' | 'fun') IDENT+ '->' expr
//!          | atom atom*
//! atom    := INT | 'true' | 'false' | IDENT | '(' expr ')'
//! ```

pub mod ast;
pub mod pretty;

#[cfg(test)]
mod proptests;

use crate::error::{ParseError, Result};
use crate::lexer::{Scanner, Span, Spanned, Token};
use ast::*;

/// Lex and parse a single expression.
pub fn parse_expr(source: &str) -> Result<Exp> {
    let tokens = Scanner::new(source).tokenize()?;
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expression()?;
    parser.expect(&Token::Eof)?;
    Ok(expr)
}

/// Lex and parse a whole program.
pub fn parse_program(source: &str) -> Result<Program> {
    let tokens = Scanner::new(source).tokenize()?;
    Parser::new(tokens).parse_program()
}

/// The parser for hmw source code.
pub struct Parser {
    tokens: Vec<Spanned<Token>>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Spanned<Token>>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parse the entire program
    pub fn parse_program(&mut self) -> Result<Program> {
        let start = self.current_span().start;
        let mut statements = Vec::new();

        while !self.is_at_end() {
            statements.push(self.parse_statement()?);
            if !self.consume_if(&Token::Semicolon) {
                break;
            }
        }
        self.expect(&Token::Eof)?;

        let end = statements.last().map(|s| s.span().end).unwrap_or(start);

        Ok(Program {
            statements,
            span: Span::new(start, end),
        })
    }

    // ========== Statement Parsing ==========

    fn parse_statement(&mut self) -> Result<Stmt> {
        let start = self.current_span().start;

        if !self.check(&Token::Let) {
            let expression = self.parse_expression()?;
            return Ok(Stmt::Expr {
                expression,
                span: Span::new(start, self.prev_span().end),
            });
        }

        let (name, value) = self.parse_let_binding()?;

        // `let x = e in body` at the top level is an ordinary expression
        if self.consume_if(&Token::In) {
            let body = self.parse_expression()?;
            return Ok(Stmt::Expr {
                expression: Exp::let_in(name, value, body),
                span: Span::new(start, self.prev_span().end),
            });
        }

        Ok(Stmt::Let {
            name,
            value,
            span: Span::new(start, self.prev_span().end),
        })
    }

    // ========== Expression Parsing ==========

    /// Parse an expression
    pub fn parse_expression(&mut self) -> Result<Exp> {
        match self.current() {
            Token::Let => {
                let (name, bound) = self.parse_let_binding()?;
                self.expect(&Token::In)?;
                let body = self.parse_expression()?;
                Ok(Exp::let_in(name, bound, body))
            }
            Token::Backslash | Token::Fun => self.parse_abstraction(),
            _ => self.parse_application(),
        }
    }

    /// `let IDENT = expr`, without the `in` part
    fn parse_let_binding(&mut self) -> Result<(String, Exp)> {
        self.expect(&Token::Let)?;
        let name = self.expect_ident()?;
        self.expect(&Token::Equals)?;
        let bound = self.parse_expression()?;
        Ok((name, bound))
    }

    fn parse_abstraction(&mut self) -> Result<Exp> {
        // Consume either '\' or 'fun'
        self.advance();

        let mut params = vec![self.expect_ident()?];
        while let Token::Ident(name) = self.current().clone() {
            self.advance();
            params.push(name);
        }

        self.expect(&Token::Arrow)?;
        let body = self.parse_expression()?;

        Ok(params
            .into_iter()
            .rev()
            .fold(body, |body, param| Exp::abs(param, body)))
    }

    fn parse_application(&mut self) -> Result<Exp> {
        let mut expr = self.parse_atom()?;
        while self.starts_atom() {
            let arg = self.parse_atom()?;
            expr = Exp::app(expr, arg);
        }
        Ok(expr)
    }

    fn starts_atom(&self) -> bool {
        matches!(
            self.current(),
            Token::Int(_) | Token::True | Token::False | Token::Ident(_) | Token::LParen
        )
    }

    fn parse_atom(&mut self) -> Result<Exp> {
        match self.current().clone() {
            Token::Int(n) => {
                self.advance();
                Ok(Exp::int(n))
            }
            Token::True => {
                self.advance();
                Ok(Exp::bool(true))
            }
            Token::False => {
                self.advance();
                Ok(Exp::bool(false))
            }
            Token::Ident(name) => {
                self.advance();
                Ok(Exp::Var(name))
            }
            Token::LParen => {
                self.advance();
                let expr = self.parse_expression()?;
                self.expect(&Token::RParen)?;
                Ok(expr)
            }
            _ => Err(self.unexpected("expression")),
        }
    }

    // ========== Helpers ==========

    fn current(&self) -> &Token {
        self.tokens
            .get(self.pos)
            .map(|s| &s.value)
            .unwrap_or(&Token::Eof)
    }

    fn current_span(&self) -> Span {
        self.tokens
            .get(self.pos)
            .map(|s| s.span)
            .unwrap_or_default()
    }

    fn prev_span(&self) -> Span {
        if self.pos > 0 {
            self.tokens
                .get(self.pos - 1)
                .map(|s| s.span)
                .unwrap_or_default()
        } else {
            Span::default()
        }
    }

    fn advance(&mut self) {
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
    }

    fn is_at_end(&self) -> bool {
        self.current() == &Token::Eof
    }

    fn check(&self, token: &Token) -> bool {
        std::mem::discriminant(self.current()) == std::mem::discriminant(token)
    }

    fn consume_if(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, token: &Token) -> Result<()> {
        if self.check(token) {
            self.advance();
            Ok(())
        } else {
            Err(self.unexpected(&format!("'{}'", token)))
        }
    }

    fn expect_ident(&mut self) -> Result<String> {
        if let Token::Ident(name) = self.current().clone() {
            self.advance();
            Ok(name)
        } else {
            Err(self.unexpected("identifier"))
        }
    }

    fn unexpected(&self, expected: &str) -> crate::error::HmwError {
        if self.is_at_end() {
            ParseError::UnexpectedEof {
                expected: expected.to_string(),
                span: self.current_span(),
            }
            .into()
        } else {
            ParseError::UnexpectedToken {
                found: format!("{}", self.current()),
                expected: expected.to_string(),
                span: self.current_span(),
            }
            .into()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HmwError;

    #[test]
    fn test_literals() {
        assert_eq!(parse_expr("42").unwrap(), Exp::int(42));
        assert_eq!(parse_expr("true").unwrap(), Exp::bool(true));
        assert_eq!(parse_expr("false").unwrap(), Exp::bool(false));
    }

    #[test]
    fn test_application_is_left_associative() {
        assert_eq!(
            parse_expr("add 1 2").unwrap(),
            Exp::app(Exp::app(Exp::var("add"), Exp::int(1)), Exp::int(2))
        );
        assert_eq!(
            parse_expr("f (g x)").unwrap(),
            Exp::app(Exp::var("f"), Exp::app(Exp::var("g"), Exp::var("x")))
        );
    }

    #[test]
    fn test_abstraction() {
        assert_eq!(
            parse_expr("\\x -> x").unwrap(),
            Exp::abs("x", Exp::var("x"))
        );
        assert_eq!(
            parse_expr("fun x y -> x").unwrap(),
            Exp::abs("x", Exp::abs("y", Exp::var("x")))
        );
    }

    #[test]
    fn test_abstraction_body_extends_right() {
        assert_eq!(
            parse_expr("\\f -> f 1").unwrap(),
            Exp::abs("f", Exp::app(Exp::var("f"), Exp::int(1)))
        );
    }

    #[test]
    fn test_let() {
        assert_eq!(
            parse_expr("let id = \\x -> x in id true").unwrap(),
            Exp::let_in(
                "id",
                Exp::abs("x", Exp::var("x")),
                Exp::app(Exp::var("id"), Exp::bool(true))
            )
        );
    }

    #[test]
    fn test_program() {
        let program = parse_program("let one = 1;\n add one one;").unwrap();
        assert_eq!(program.statements.len(), 2);
        assert!(matches!(&program.statements[0], Stmt::Let { name, .. } if name == "one"));
        assert!(matches!(&program.statements[1], Stmt::Expr { .. }));
        assert_eq!(program.statements[0].span(), Span::new(0, 11));
    }

    #[test]
    fn test_top_level_let_in_is_expression() {
        let program = parse_program("let x = 1 in x").unwrap();
        assert!(matches!(
            &program.statements[0],
            Stmt::Expr { expression: Exp::Let(..), .. }
        ));
    }

    #[test]
    fn test_empty_program() {
        let program = parse_program("  -- nothing here\n").unwrap();
        assert!(program.statements.is_empty());
    }

    #[test]
    fn test_missing_in() {
        let err = parse_expr("let x = 1").unwrap_err();
        assert!(matches!(
            err,
            HmwError::Parse(ParseError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_unexpected_token() {
        let err = parse_expr("(\\x -> x").unwrap_err();
        assert!(matches!(err, HmwError::Parse(ParseError::UnexpectedEof { .. })));

        let err = parse_expr("\\ -> x").unwrap_err();
        match err {
            HmwError::Parse(ParseError::UnexpectedToken { found, expected, span }) => {
                assert_eq!(found, "->");
                assert_eq!(expected, "identifier");
                assert_eq!(span, Span::new(2, 4));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_missing_semicolon() {
        let err = parse_program("1 2 let x = 3").unwrap_err();
        assert!(matches!(err, HmwError::Parse(ParseError::UnexpectedToken { .. })));
    }
}
