//! Tokenizer for arithmetic expressions.

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum TokenKind {
    Number(f64),
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Caret,
    LParen,
    RParen,
}

/// A token and the character position it starts at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

/// Split `expr` into tokens, skipping whitespace.
///
/// `x`, `X` and `×` multiply; `÷` divides; `−` (U+2212) subtracts.
pub(crate) fn tokenize(expr: &str) -> Result<Vec<Token>> {
    let chars: Vec<char> = expr.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let ch = chars[i];
        if ch.is_whitespace() {
            i += 1;
            continue;
        }

        if ch.is_ascii_digit() || ch == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let literal: String = chars[start..i].iter().collect();
            let value = literal.parse::<f64>().map_err(|_| Error::InvalidExpression {
                position: start,
                message: format!("malformed number {literal:?}"),
            })?;
            tokens.push(Token {
                kind: TokenKind::Number(value),
                position: start,
            });
            continue;
        }

        let kind = match ch {
            '+' => TokenKind::Plus,
            '-' | '\u{2212}' => TokenKind::Minus,
            '*' | 'x' | 'X' | '×' => TokenKind::Star,
            '/' | '÷' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '^' => TokenKind::Caret,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            other => {
                return Err(Error::InvalidExpression {
                    position: i,
                    message: format!("unexpected character {other:?}"),
                });
            }
        };
        tokens.push(Token { kind, position: i });
        i += 1;
    }

    Ok(tokens)
}
