//! Recursive-descent evaluator.
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := unary (('*' | '/' | '%') unary)*
//! unary := ('+' | '-') unary | power
//! power := atom ('^' unary)?
//! atom  := number | '(' expr ')'
//! ```
//!
//! `^` binds tighter than unary minus and is right associative, so
//! `-2^2 == -4` and `2^3^2 == 512`. Parentheses and unary signs nest at
//! most `MAX_DEPTH` levels deep.

use crate::calc::lexer::{Token, TokenKind};
use crate::error::{Error, Result};

/// Deepest nesting of parentheses and unary signs accepted.
const MAX_DEPTH: usize = 256;

pub(crate) struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    /// Character length of the source, reported for errors at end of input.
    source_len: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>, source_len: usize) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
            source_len,
        }
    }

    /// Evaluate the whole token stream.
    pub(crate) fn evaluate(mut self) -> Result<f64> {
        if self.tokens.is_empty() {
            return Err(Error::InvalidExpression {
                position: 0,
                message: "empty expression".to_string(),
            });
        }
        let value = self.expr()?;
        if let Some(token) = self.peek() {
            return Err(Error::InvalidExpression {
                position: token.position,
                message: "unexpected token".to_string(),
            });
        }
        Ok(value)
    }

    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    fn peek_kind(&self) -> Option<TokenKind> {
        self.peek().map(|token| token.kind)
    }

    fn advance(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn error_here(&self, message: &str) -> Error {
        Error::InvalidExpression {
            position: self.peek().map_or(self.source_len, |token| token.position),
            message: message.to_string(),
        }
    }

    fn nested<F>(&mut self, parse: F) -> Result<f64>
    where
        F: FnOnce(&mut Self) -> Result<f64>,
    {
        if self.depth >= MAX_DEPTH {
            return Err(self.error_here("expression nested too deeply"));
        }
        self.depth += 1;
        let value = parse(self);
        self.depth -= 1;
        value
    }

    fn expr(&mut self) -> Result<f64> {
        let mut value = self.term()?;
        loop {
            match self.peek_kind() {
                Some(TokenKind::Plus) => {
                    self.advance();
                    value += self.term()?;
                }
                Some(TokenKind::Minus) => {
                    self.advance();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    fn term(&mut self) -> Result<f64> {
        let mut value = self.unary()?;
        loop {
            match self.peek_kind() {
                Some(TokenKind::Star) => {
                    self.advance();
                    value *= self.unary()?;
                }
                Some(TokenKind::Slash) => {
                    self.advance();
                    let divisor = self.unary()?;
                    if divisor == 0.0 {
                        return Err(Error::DivisionByZero);
                    }
                    value /= divisor;
                }
                Some(TokenKind::Percent) => {
                    self.advance();
                    let divisor = self.unary()?;
                    if divisor == 0.0 {
                        return Err(Error::DivisionByZero);
                    }
                    value %= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    fn unary(&mut self) -> Result<f64> {
        match self.peek_kind() {
            Some(TokenKind::Minus) => {
                self.advance();
                Ok(-self.nested(Self::unary)?)
            }
            Some(TokenKind::Plus) => {
                self.advance();
                self.nested(Self::unary)
            }
            _ => self.power(),
        }
    }

    fn power(&mut self) -> Result<f64> {
        let base = self.atom()?;
        if self.peek_kind() == Some(TokenKind::Caret) {
            self.advance();
            let exponent = self.nested(Self::unary)?;
            return Ok(base.powf(exponent));
        }
        Ok(base)
    }

    fn atom(&mut self) -> Result<f64> {
        match self.peek_kind() {
            Some(TokenKind::Number(value)) => {
                self.advance();
                Ok(value)
            }
            Some(TokenKind::LParen) => {
                self.advance();
                let value = self.nested(Self::expr)?;
                if self.peek_kind() != Some(TokenKind::RParen) {
                    return Err(self.error_here("expected ')'"));
                }
                self.advance();
                Ok(value)
            }
            Some(_) => Err(self.error_here("expected a number or '('")),
            None => Err(self.error_here("unexpected end of expression")),
        }
    }
}
