//! Lexer for Wisp using logos.
//!
//! Scans one expression into a [`TokenList`]: integer, float, and string
//! literals plus the operator symbols registered in the operator table.
//! Anything else is a [`LexError`]. Negative numbers are not lexed as
//! literals; `-` is always an operator.

use std::fmt;

use logos::Logos;
use wisp_ir::{OpIx, Span, Token, TokenKind, TokenList};

mod convert;

use convert::convert_token;

/// Raw token from logos (before table resolution).
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")] // Skip whitespace
enum RawToken {
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,

    // Integer, with optional underscore grouping
    #[regex(r"[0-9][0-9_]*")]
    Int,

    // Float (exponent optional, decimal point required)
    #[regex(r"[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?")]
    Float,

    // String literal (no unescaped newlines allowed)
    #[regex(r#""([^"\\\n\r]|\\.)*""#)]
    Str,
}

/// Lexing error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LexError {
    /// A symbol the operator table does not register.
    UnknownSymbol { text: Box<str>, span: Span },
    /// A numeric literal that does not fit its type.
    MalformedNumber { text: Box<str>, span: Span },
    /// A string literal without a closing quote.
    UnterminatedString { span: Span },
    /// An escape sequence the string syntax does not define.
    InvalidEscape { escape: char, span: Span },
}

impl LexError {
    /// Source location of the error.
    pub fn span(&self) -> Span {
        match self {
            LexError::UnknownSymbol { span, .. }
            | LexError::MalformedNumber { span, .. }
            | LexError::UnterminatedString { span }
            | LexError::InvalidEscape { span, .. } => *span,
        }
    }
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LexError::UnknownSymbol { text, span } => {
                write!(f, "unknown symbol `{text}` at {span}")
            }
            LexError::MalformedNumber { text, span } => {
                write!(f, "malformed number `{text}` at {span}")
            }
            LexError::UnterminatedString { span } => {
                write!(f, "unterminated string starting at {span}")
            }
            LexError::InvalidEscape { escape, span } => {
                write!(f, "invalid escape `\\{escape}` in string at {span}")
            }
        }
    }
}

impl std::error::Error for LexError {}

/// Lex source text into a `TokenList`.
///
/// Stops at the first error; a partial token list is never returned.
///
/// # Panics
/// Panics if the source exceeds `u32::MAX` bytes.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut result = TokenList::with_capacity(source.len() / 2);
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(raw) => result.push(convert_token(raw, slice, span)?),
            Err(()) => return Err(classify_error(slice, span)),
        }
    }

    Ok(result)
}

/// Classify an unmatched slice into the right error kind.
fn classify_error(slice: &str, span: Span) -> LexError {
    if slice.starts_with('"') {
        LexError::UnterminatedString { span }
    } else {
        LexError::UnknownSymbol {
            text: slice.into(),
            span,
        }
    }
}

/// Resolve a symbol through the operator table.
///
/// The table and the lexer register the same symbols; a `None` here
/// means the two have drifted apart, reported as an unknown symbol.
fn op_token(symbol: &'static str, span: Span) -> Result<Token, LexError> {
    match OpIx::resolve(symbol) {
        Some(ix) => Ok(Token::new(TokenKind::Op(ix), symbol, span)),
        None => Err(LexError::UnknownSymbol {
            text: symbol.into(),
            span,
        }),
    }
}
