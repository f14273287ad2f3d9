//! Raw token conversion: validation and string unescaping.

use wisp_ir::{Span, Token, TokenKind};

use crate::{op_token, LexError, RawToken};

/// Convert a raw logos token into an IR token.
///
/// Numeric literals are validated here so the scope builder can trust
/// every literal's raw text to re-parse cleanly.
pub(crate) fn convert_token(raw: RawToken, slice: &str, span: Span) -> Result<Token, LexError> {
    match raw {
        RawToken::LParen => op_token("(", span),
        RawToken::RParen => op_token(")", span),
        RawToken::Plus => op_token("+", span),
        RawToken::Minus => op_token("-", span),
        RawToken::Star => op_token("*", span),
        RawToken::Slash => op_token("/", span),
        RawToken::Percent => op_token("%", span),

        RawToken::Int => {
            // Underscore grouping is dropped here; the token raw text is
            // the canonical digit form downstream code re-parses.
            let digits: Box<str> = if slice.contains('_') {
                slice.chars().filter(|c| *c != '_').collect::<String>().into()
            } else {
                slice.into()
            };
            if digits.parse::<i64>().is_err() {
                return Err(LexError::MalformedNumber {
                    text: slice.into(),
                    span,
                });
            }
            Ok(Token::new(TokenKind::Int, digits, span))
        }

        RawToken::Float => {
            if slice.parse::<f64>().is_err() {
                return Err(LexError::MalformedNumber {
                    text: slice.into(),
                    span,
                });
            }
            Ok(Token::new(TokenKind::Float, slice, span))
        }

        RawToken::Str => {
            let content = unescape(slice, span)?;
            Ok(Token::new(TokenKind::Str, content, span))
        }
    }
}

/// Process escapes in a quoted string slice, dropping the quotes.
///
/// Supported escapes: `\"` `\\` `\n` `\t` `\r`.
fn unescape(slice: &str, span: Span) -> Result<Box<str>, LexError> {
    // The regex guarantees surrounding quotes.
    let inner = &slice[1..slice.len() - 1];
    if !inner.contains('\\') {
        return Ok(inner.into());
    }

    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some('n') => out.push('\n'),
            Some('t') => out.push('\t'),
            Some('r') => out.push('\r'),
            Some(other) => return Err(LexError::InvalidEscape { escape: other, span }),
            // A trailing lone backslash cannot match the string regex.
            None => return Err(LexError::InvalidEscape { escape: '\\', span }),
        }
    }
    Ok(out.into())
}
