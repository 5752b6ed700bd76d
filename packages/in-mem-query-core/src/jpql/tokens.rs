//! Lexer for member query strings.

use crate::error::QueryError;

/// Comparison operator token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Ne,
    Gt,
    Goe,
    Lt,
    Loe,
}

/// Token kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword, as written
    Ident(String),
    /// `:name`
    Param(String),
    /// `'text'`, with `''` unescaped to `'`
    Str(String),
    Int(i64),
    Op(CompareOp),
    Dot,
    Comma,
    LParen,
    RParen,
}

/// Token with its byte position in the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

impl Token {
    /// Returns true if this token is the keyword `kw` (case-insensitive).
    pub fn is_keyword(&self, kw: &str) -> bool {
        matches!(&self.kind, TokenKind::Ident(s) if s.eq_ignore_ascii_case(kw))
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Splits a query string into tokens.
///
/// # Errors
/// `QueryError::Parse` on an unexpected character, an unterminated string,
/// an empty parameter name or an integer literal that does not fit `i64`.
pub fn tokenize(input: &str) -> Result<Vec<Token>, QueryError> {
    let chars: Vec<(usize, char)> = input.char_indices().collect();
    let mut tokens = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let (position, c) = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let kind = match c {
            '.' => {
                i += 1;
                TokenKind::Dot
            }
            ',' => {
                i += 1;
                TokenKind::Comma
            }
            '(' => {
                i += 1;
                TokenKind::LParen
            }
            ')' => {
                i += 1;
                TokenKind::RParen
            }
            '=' => {
                i += 1;
                TokenKind::Op(CompareOp::Eq)
            }
            '!' => {
                if chars.get(i + 1).map(|&(_, n)| n) != Some('=') {
                    return Err(QueryError::parse(position, "expected '=' after '!'"));
                }
                i += 2;
                TokenKind::Op(CompareOp::Ne)
            }
            '<' => match chars.get(i + 1).map(|&(_, n)| n) {
                Some('>') => {
                    i += 2;
                    TokenKind::Op(CompareOp::Ne)
                }
                Some('=') => {
                    i += 2;
                    TokenKind::Op(CompareOp::Loe)
                }
                _ => {
                    i += 1;
                    TokenKind::Op(CompareOp::Lt)
                }
            },
            '>' => {
                if chars.get(i + 1).map(|&(_, n)| n) == Some('=') {
                    i += 2;
                    TokenKind::Op(CompareOp::Goe)
                } else {
                    i += 1;
                    TokenKind::Op(CompareOp::Gt)
                }
            }
            ':' => {
                let start = i + 1;
                let mut end = start;
                while end < chars.len() && is_ident_char(chars[end].1) {
                    end += 1;
                }
                if end == start {
                    return Err(QueryError::parse(position, "empty parameter name"));
                }
                i = end;
                TokenKind::Param(chars[start..end].iter().map(|&(_, ch)| ch).collect())
            }
            '\'' => {
                let mut text = String::new();
                let mut j = i + 1;
                loop {
                    match chars.get(j) {
                        None => {
                            return Err(QueryError::parse(position, "unterminated string literal"))
                        }
                        Some(&(_, '\'')) => {
                            // '' is an escaped quote
                            if chars.get(j + 1).map(|&(_, n)| n) == Some('\'') {
                                text.push('\'');
                                j += 2;
                            } else {
                                j += 1;
                                break;
                            }
                        }
                        Some(&(_, ch)) => {
                            text.push(ch);
                            j += 1;
                        }
                    }
                }
                i = j;
                TokenKind::Str(text)
            }
            c if c.is_ascii_digit() || c == '-' => {
                let start = i;
                let mut end = i + 1;
                while end < chars.len() && chars[end].1.is_ascii_digit() {
                    end += 1;
                }
                let literal: String = chars[start..end].iter().map(|&(_, ch)| ch).collect();
                let value = literal
                    .parse::<i64>()
                    .map_err(|_| QueryError::parse(position, format!("invalid integer '{}'", literal)))?;
                i = end;
                TokenKind::Int(value)
            }
            c if is_ident_start(c) => {
                let start = i;
                let mut end = i + 1;
                while end < chars.len() && is_ident_char(chars[end].1) {
                    end += 1;
                }
                i = end;
                TokenKind::Ident(chars[start..end].iter().map(|&(_, ch)| ch).collect())
            }
            other => {
                return Err(QueryError::parse(
                    position,
                    format!("unexpected character '{}'", other),
                ))
            }
        };

        tokens.push(Token { kind, position });
    }

    Ok(tokens)
}
