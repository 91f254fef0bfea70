//! Character-level scanner for tokenizing source text.

use super::token::{Span, Spanned, Token};
use crate::error::{LexError, Result};

/// The lexer/scanner for hmw source code.
pub struct Scanner<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
        }
    }

    /// Tokenize the entire source. The last token is always `Eof`.
    pub fn tokenize(mut self) -> Result<Vec<Spanned<Token>>> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token()?;
            let is_eof = token.value == Token::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        Ok(tokens)
    }

    /// Get the next token from the source.
    pub fn next_token(&mut self) -> Result<Spanned<Token>> {
        self.skip_whitespace_and_comments();

        let start = self.current_pos;

        let Some((pos, ch)) = self.peek() else {
            return Ok(Spanned::new(Token::Eof, Span::new(start, start)));
        };

        let token = match ch {
            '(' => {
                self.advance();
                Token::LParen
            }
            ')' => {
                self.advance();
                Token::RParen
            }
            ';' => {
                self.advance();
                Token::Semicolon
            }
            '=' => {
                self.advance();
                Token::Equals
            }
            '\\' | 'λ' => {
                self.advance();
                Token::Backslash
            }
            '-' if self.peek_next() == Some('>') => {
                self.advance();
                self.advance();
                Token::Arrow
            }

            '0'..='9' => self.scan_number(start)?,

            'a'..='z' | 'A'..='Z' | '_' => self.scan_identifier(start),

            _ => {
                self.advance();
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    span: Span::new(pos, self.current_pos),
                }
                .into());
            }
        };

        Ok(Spanned::new(token, Span::new(start, self.current_pos)))
    }

    fn peek(&mut self) -> Option<(usize, char)> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let result = self.chars.next();
        if let Some((pos, ch)) = result {
            self.current_pos = pos + ch.len_utf8();
        }
        result
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.chars.clone();
        iter.next();
        iter.next().map(|(_, c)| c)
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            match self.peek() {
                Some((_, ' ' | '\t' | '\n' | '\r')) => {
                    self.advance();
                }
                Some((_, '-')) if self.peek_next() == Some('-') => {
                    // Line comment
                    while let Some((_, ch)) = self.peek() {
                        if ch == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    fn scan_number(&mut self, start: usize) -> Result<Token> {
        while let Some((_, ch)) = self.peek() {
            if !ch.is_ascii_digit() {
                break;
            }
            self.advance();
        }

        let text = &self.source[start..self.current_pos];
        text.parse::<i64>().map(Token::Int).map_err(|_| {
            LexError::InvalidNumber {
                text: text.to_string(),
                span: Span::new(start, self.current_pos),
            }
            .into()
        })
    }

    fn scan_identifier(&mut self, start: usize) -> Token {
        while let Some((_, ch)) = self.peek() {
            if !(ch.is_ascii_alphanumeric() || ch == '_' || ch == '\'') {
                break;
            }
            self.advance();
        }

        let text = &self.source[start..self.current_pos];
        Token::keyword(text).unwrap_or_else(|| Token::Ident(text.to_string()))
    }
}
